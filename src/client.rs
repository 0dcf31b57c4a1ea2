use crate::{config::Config, error::FetchError};
use ureq::{Agent, AgentBuilder};

const MAX_REDIRECTS: u32 = 5;

pub trait Fetcher {
    // one GET, no retry
    fn fetch(&self) -> Result<String, FetchError>;
}

/// ureq-backed fetcher. The agent is built once and cloned cheaply, so a
/// single `Client` can serve every invocation of a warm function.
#[derive(Clone)]
pub struct Client {
    agent: Agent,
    feed_url: String,
    user_agent: String,
}

impl Client {
    pub fn new(cfg: &Config) -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(cfg.connect_timeout)
            .redirects(MAX_REDIRECTS)
            .build();
        Client {
            agent,
            feed_url: cfg.feed_url.clone(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Fetcher for Client {
    fn fetch(&self) -> Result<String, FetchError> {
        log::debug!("fetching {}", self.feed_url);
        let body = self
            .agent
            .get(&self.feed_url)
            .set("User-Agent", &self.user_agent)
            .call()?
            .into_string()?;
        log::debug!("fetched {} bytes", body.len());
        Ok(body)
    }
}
