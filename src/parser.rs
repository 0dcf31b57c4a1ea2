use crate::{error::ParseError, model::NewsItem};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

/// Child elements of `<item>` that get copied into a [`NewsItem`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    PubDate,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"pubDate" => Some(Field::PubDate),
            _ => None,
        }
    }

    fn set(self, item: &mut NewsItem, text: String) {
        match self {
            Field::Title => item.title = Some(text),
            Field::PubDate => item.pub_date = Some(text),
        }
    }
}

/// Scan state. Only `<item>` open/close moves between the two states.
enum ParseState {
    Idle,
    Building(NewsItem),
}

impl ParseState {
    fn start_item(&mut self) {
        *self = ParseState::Building(NewsItem::default());
    }

    fn end_item(&mut self, items: &mut Vec<NewsItem>) {
        if let ParseState::Building(item) = std::mem::replace(self, ParseState::Idle) {
            items.push(item);
        }
    }

    // stray title/pubDate outside an item is a no-op
    fn set_field(&mut self, field: Field, text: String) {
        if let ParseState::Building(item) = self {
            field.set(item, text);
        }
    }
}

// attribute syntax and entities are checked even though no value is used
fn check_attributes(e: &BytesStart) -> Result<(), ParseError> {
    for attr in e.attributes() {
        attr?.unescape_value()?;
    }
    Ok(())
}

fn is_xml_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Parse an RSS document into its items, in document order.
///
/// Only `item`, `title` and `pubDate` are looked at, by local name. Text is
/// taken verbatim apart from entity unescaping. Any well-formedness error
/// fails the whole parse; there is no partial result.
pub fn parse_items(xml: &str) -> Result<Vec<NewsItem>, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut state = ParseState::Idle;
    // set right after <title>/<pubDate>, consumed by the next event
    let mut pending: Option<Field> = None;
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut root_closed = false;

    loop {
        let event = match reader.read_event() {
            Ok(ev) => ev,
            Err(e) => {
                log::error!("xml error at byte {}: {}", reader.buffer_position(), e);
                return Err(ParseError::from(e));
            }
        };
        let field = pending.take();

        match event {
            Event::Start(e) => {
                if root_closed {
                    return Err(ParseError::OutsideRoot);
                }
                check_attributes(&e)?;
                depth += 1;
                seen_root = true;
                let name = e.local_name();
                if name.as_ref() == b"item" {
                    state.start_item();
                } else {
                    pending = Field::from_name(name.as_ref());
                }
            }
            Event::Empty(e) => {
                if root_closed {
                    return Err(ParseError::OutsideRoot);
                }
                check_attributes(&e)?;
                seen_root = true;
                root_closed = depth == 0;
                let name = e.local_name();
                if name.as_ref() == b"item" {
                    state.start_item();
                    state.end_item(&mut items);
                } else if let Some(f) = Field::from_name(name.as_ref()) {
                    state.set_field(f, String::new());
                }
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                if depth == 0 && !is_xml_whitespace(&text) {
                    return Err(ParseError::OutsideRoot);
                }
                if let Some(f) = field {
                    state.set_field(f, text.into_owned());
                }
            }
            Event::CData(c) => {
                if depth == 0 {
                    return Err(ParseError::OutsideRoot);
                }
                if let Some(f) = field {
                    state.set_field(f, String::from_utf8(c.into_inner().into_owned())?);
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
                if let Some(f) = field {
                    // <title></title>
                    state.set_field(f, String::new());
                } else if e.local_name().as_ref() == b"item" {
                    state.end_item(&mut items);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::Unclosed(depth));
    }
    if !seen_root {
        return Err(ParseError::NoRoot);
    }

    log::debug!("parsed {} items", items.len());
    Ok(items)
}
