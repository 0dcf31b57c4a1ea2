use simple_error::{SimpleError, SimpleResult};
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/news/rss";
pub const DEFAULT_USER_AGENT: &str = "Daily News Lambda";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_SPEC: &str = "info";

/// Settings for one deployment of the news function, read from env vars.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub feed_url: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub log_spec: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: DEFAULT_FEED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            log_spec: DEFAULT_LOG_SPEC.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> SimpleResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> SimpleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Config::default();
        let connect_timeout = match lookup("NEWS_CONNECT_TIMEOUT_SECS") {
            Some(v) => parse_timeout(&v)?,
            None => default.connect_timeout,
        };
        Ok(Config {
            feed_url: lookup("NEWS_FEED_URL").unwrap_or(default.feed_url),
            user_agent: lookup("NEWS_USER_AGENT").unwrap_or(default.user_agent),
            connect_timeout,
            log_spec: lookup("NEWS_LOG_SPEC").unwrap_or(default.log_spec),
        })
    }
}

fn parse_timeout(v: &str) -> SimpleResult<Duration> {
    match v.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(SimpleError::new(format!(
            "NEWS_CONNECT_TIMEOUT_SECS must be a positive integer, got {:?}",
            v
        ))),
    }
}
