use crate::client::{Result, ACCESS_TOKEN_PARAM, USER_AGENT};
use log::debug;
use reqwest::{
    blocking::Client as ReqwestClient,
    header::{self, HeaderValue},
    redirect, Method,
};
use serde_json::Value;
use std::{fmt, time::Duration};
use url::form_urlencoded;

const MEDIA_TYPE_JSON: &str = "application/json";
const MEDIA_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_REDIRECTS: usize = 10;

/// A fully built request: the verb, the absolute url (query string included) and, for
/// POST/PATCH, the form encoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl Request {
    pub fn new<S: Into<String>>(method: Method, url: S, body: Option<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body,
        }
    }

    /// The url with the access token masked, for logging.
    pub fn redacted_url(&self) -> String {
        match self.url.split_once('?') {
            Some((base, query)) => format!("{}?{}", base, redact(query)),
            None => self.url.clone(),
        }
    }

    pub fn redacted_body(&self) -> Option<String> {
        self.body.as_deref().map(redact)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.redacted_url())
    }
}

// Re-encode a form/query string with the access token value masked.
fn redact(query: &str) -> String {
    let mut redacted = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == ACCESS_TOKEN_PARAM {
            redacted.append_pair(&key, "***");
        } else {
            redacted.append_pair(&key, &value);
        }
    }

    redacted.finish()
}

/// Executes a `Request` and hands back the parsed JSON.
///
/// HTTP level failures (4xx/5xx) are not errors at this layer: GitHub answers them with a JSON
/// body which is returned like any other.
pub trait Transport: Send + Sync {
    fn send(&self, request: &Request) -> Result<Value>;
}

/// Settings for the default `HttpTransport`.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

/// Blocking `Transport` backed by reqwest.
#[derive(Debug)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Value> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(header::ACCEPT, MEDIA_TYPE_JSON);

        if let Some(body) = &request.body {
            builder = builder
                .header(header::CONTENT_TYPE, MEDIA_TYPE_FORM)
                .body(body.clone());
        }

        let response = builder.send()?;
        debug!("Github Response: {:#?}", response);

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map_or(false, is_json_content_type);
        let payload = response.text()?;

        parse_payload(&payload, is_json)
    }
}

fn is_json_content_type(value: &HeaderValue) -> bool {
    value
        .to_str()
        .map(|content_type| content_type.contains("json"))
        .unwrap_or(false)
}

// Empty bodies (204 No Content) become `null`. Anything not declared as JSON that also fails to
// parse as JSON is passed through as a string, e.g. the HTML produced by the markdown endpoints.
fn parse_payload(payload: &str, is_json: bool) -> Result<Value> {
    if payload.trim().is_empty() {
        return Ok(Value::Null);
    }

    if is_json {
        return Ok(serde_json::from_str(payload)?);
    }

    Ok(serde_json::from_str(payload).unwrap_or_else(|_| Value::String(payload.to_owned())))
}
