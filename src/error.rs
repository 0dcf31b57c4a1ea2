use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] Box<ureq::Error>),
    #[error("unexpected status code: {0}")]
    Status(u16),
    #[error("failed to read body: {0}")]
    Body(#[from] std::io::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            other => FetchError::Request(Box::new(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed feed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid utf-8 in feed: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("unexpected end of feed, {0} element(s) still open")]
    Unclosed(usize),
    #[error("feed has no root element")]
    NoRoot,
    #[error("content outside the root element")]
    OutsideRoot,
}

/// Either half of the fetch-then-parse pipeline failing.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
