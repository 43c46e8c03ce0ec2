use log::{debug, trace};
use reqwest::Method;
use serde_json::Value;
use std::{fmt, time::Duration};
use url::Url;

mod activity;
mod auth;
mod error;
mod gists;
mod git;
mod issues;
mod misc;
mod options;
mod orgs;
mod payload;
mod pulls;
mod repos;
mod search;
mod template;
mod transport;
mod users;

#[cfg(test)]
mod mock;

pub use activity::{ActivityClient, ListNotificationsOptions, StarSort};
pub use auth::{AccessToken, Auth, ACCESS_TOKEN_URL, AUTHORIZE_URL};
pub use error::{Error, Result};
pub use gists::{GistsClient, NewGist};
pub use git::{
    BlobEncoding, GitClient, NewCommit, NewTag, Signature, TagObjectType, TreeEntry,
    TreeEntryMode, TreeEntryType,
};
pub use issues::{
    CommentSort, IssueFilter, IssueRequest, IssueSort, IssuesClient, ListCommentsOptions,
    ListIssuesOptions, ListMilestonesOptions, ListRepoIssuesOptions, MilestoneFilter,
    MilestoneRequest, MilestoneSort,
};
pub use misc::{MarkdownMode, MiscClient, Rate, RateLimits};
pub use options::{IssueState, SortDirection, StateFilter};
pub use orgs::{EditOrganization, NewTeam, OrgsClient, TeamPermission};
pub use payload::Payload;
pub use pulls::{
    ListPullsOptions, NewPullRequest, NewReviewComment, PullRequestSource, PullsClient,
    UpdatePullRequest,
};
pub use repos::{
    ArchiveFormat, CommitOptions, CreateStatusRequest, EditHook, EditRepository, ForkSort,
    Identity, ListCommitsOptions, ListReposOptions, NewHook, NewRepository, ReleaseRequest,
    RepoSort, RepoType, RepositoryClient, StatusState,
};
pub use search::{CodeSort, IssueSearchSort, RepoSearchSort, SearchClient, UserSort};
pub use template::Template;
pub use transport::{HttpTransport, Request, Transport, TransportConfig};
pub use users::{UpdateUser, UsersClient};

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Name of the query/body parameter carrying the OAuth access token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    access_token: Option<String>,
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            access_token: None,
            connect_timeout: None,
            timeout: None,
            accept_invalid_certs: false,
            transport: None,
        }
    }

    /// Base URL to use for API requests, e.g. for GitHub Enterprise. A trailing slash is added
    /// when missing.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn access_token<S: Into<String>>(mut self, access_token: S) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skip TLS certificate verification. Off by default.
    pub fn danger_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    /// Use a custom transport instead of the default `HttpTransport`. Timeouts, user agent and
    /// certificate settings only apply to the default transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub(crate) fn transport_config(&self) -> TransportConfig {
        let defaults = TransportConfig::default();

        TransportConfig {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }

    pub fn build(self) -> Result<Client> {
        let access_token = match self.access_token.as_deref() {
            Some(token) if !token.is_empty() => token.to_owned(),
            _ => return Err(Error::invalid_argument("access_token", "is required")),
        };

        let mut base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        url::Url::parse(&base_url)?;

        let transport_config = self.transport_config();
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(&transport_config)?),
        };

        Ok(Client {
            base_url,
            access_token,
            transport,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// OAuth token appended to every request as `access_token`
    access_token: String,

    /// Executes the built requests
    transport: Box<dyn Transport>,
}

impl Client {
    /// A client for the public GitHub API using the default transport.
    pub fn new<S: Into<String>>(access_token: S) -> Result<Self> {
        ClientBuilder::new().access_token(access_token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn get(&self, path: &str, payload: Payload) -> Result<Value> {
        self.request(Method::GET, path, payload)
    }

    pub(crate) fn post(&self, path: &str, payload: Payload) -> Result<Value> {
        self.request(Method::POST, path, payload)
    }

    pub(crate) fn put(&self, path: &str, payload: Payload) -> Result<Value> {
        self.request(Method::PUT, path, payload)
    }

    pub(crate) fn patch(&self, path: &str, payload: Payload) -> Result<Value> {
        self.request(Method::PATCH, path, payload)
    }

    pub(crate) fn delete(&self, path: &str, payload: Payload) -> Result<Value> {
        self.request(Method::DELETE, path, payload)
    }

    /// Send `payload` to `path` (relative to the base url) and return the parsed JSON response
    /// unmodified, whatever its HTTP status.
    pub fn request(&self, method: Method, path: &str, payload: Payload) -> Result<Value> {
        let request = self.build_request(method, path, payload)?;

        debug!("Github Request: {}", request);
        if let Some(body) = request.redacted_body() {
            trace!("Github Request Body: {}", body);
        }

        self.transport.send(&request)
    }

    /// Shape a request the way GitHub v3 expects it from this client: empty parameters are
    /// dropped, the access token is appended, and the form encoded parameters go into the query
    /// string for GET/PUT/DELETE or into the body for POST/PATCH.
    pub fn build_request(&self, method: Method, path: &str, payload: Payload) -> Result<Request> {
        let mut payload = payload.strip_empty();
        payload.insert(ACCESS_TOKEN_PARAM, self.access_token.as_str());
        let form = payload.to_form();
        let mut url = Url::parse(&self.url(path))?;

        let request = match method {
            Method::GET | Method::PUT | Method::DELETE => {
                // Keep a query already present in `path`, parameters follow it
                let query = match url.query() {
                    Some(existing) if !existing.is_empty() => format!("{}&{}", existing, form),
                    _ => form,
                };
                url.set_query(Some(&query));
                Request::new(method, url.as_str(), None)
            }
            Method::POST | Method::PATCH => Request::new(method, url.as_str(), Some(form)),
            other => return Err(format!("Unsupported method: {}", other).into()),
        };

        Ok(request)
    }

    /// Absolute url for `path`, without query string.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn activity(&self) -> ActivityClient {
        ActivityClient::new(&self)
    }

    pub fn git(&self) -> GitClient {
        GitClient::new(&self)
    }

    pub fn gists(&self) -> GistsClient {
        GistsClient::new(&self)
    }

    pub fn issues(&self) -> IssuesClient {
        IssuesClient::new(&self)
    }

    pub fn misc(&self) -> MiscClient {
        MiscClient::new(&self)
    }

    pub fn orgs(&self) -> OrgsClient {
        OrgsClient::new(&self)
    }

    pub fn pulls(&self) -> PullsClient {
        PullsClient::new(&self)
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(&self)
    }

    pub fn search(&self) -> SearchClient {
        SearchClient::new(&self)
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(&self)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}
