use crate::client::{MiscClient, Payload, Result, Template};
use serde::Deserialize;
use serde_json::Value;

const RATE_LIMIT: Template = Template::new("rate_limit");

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    /// UTC epoch seconds
    pub reset: u64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RateLimits {
    // The rate limit for non-search API v3 requests. Unauthenticated
    // requests are limited to 60 per hour. Authenticated requests are
    // limited to 5,000 per hour.
    //
    // GitHub API docs: https://developer.github.com/v3/#rate-limiting
    pub core: Rate,

    // The rate limit for search API requests. Unauthenticated requests
    // are limited to 10 requests per minute. Authenticated requests are
    // limited to 30 per minute.
    //
    // GitHub API docs: https://developer.github.com/v3/search/#rate-limit
    pub search: Rate,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimits,
}

impl RateLimits {
    /// Pick the limits out of a `rate_limit` response.
    pub fn from_value(value: Value) -> Result<Self> {
        let response: RateLimitResponse = serde_json::from_value(value)?;
        Ok(response.resources)
    }
}

impl MiscClient<'_> {
    /// Get your current rate limit status
    ///
    /// GitHub API docs: https://developer.github.com/v3/rate_limit/
    pub fn get_rate_limit(&self) -> Result<Value> {
        self.inner.get(RATE_LIMIT.as_str(), Payload::new())
    }

    /// `get_rate_limit`, decoded
    pub fn rate_limits(&self) -> Result<RateLimits> {
        RateLimits::from_value(self.get_rate_limit()?)
    }
}
