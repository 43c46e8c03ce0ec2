use crate::client::{Client, Error, Payload, Result, SortDirection, Template};
use serde::Serialize;
use serde_json::Value;

const REPOSITORIES: Template = Template::new("search/repositories");
const CODE: Template = Template::new("search/code");
const ISSUES: Template = Template::new("search/issues");
const USERS: Template = Template::new("search/users");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSearchSort {
    Stars,
    Forks,
    Updated,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSort {
    Indexed,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSearchSort {
    Comments,
    Created,
    Updated,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSort {
    Followers,
    Repositories,
    Joined,
}

/// `SearchClient` handles communication with the search related methods of the GitHub API.
/// Results are sorted by best match unless a `sort` is given.
///
/// GitHub API docs: https://developer.github.com/v3/search/
pub struct SearchClient<'a> {
    inner: &'a Client,
}

impl<'a> SearchClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn search<S: Serialize>(
        &self,
        template: Template,
        query: &str,
        sort: Option<S>,
        order: SortDirection,
    ) -> Result<Value> {
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("query", "is empty"));
        }

        let mut payload = Payload::new()
            .with("q", query)
            .with("order", order.to_string());
        if let Some(sort) = sort {
            payload.insert("sort", serde_json::to_value(sort)?);
        }

        self.inner.get(template.as_str(), payload)
    }

    /// Search repositories
    ///
    /// GitHub API docs: https://developer.github.com/v3/search/#search-repositories
    pub fn repositories(
        &self,
        query: &str,
        sort: Option<RepoSearchSort>,
        order: SortDirection,
    ) -> Result<Value> {
        self.search(REPOSITORIES, query, sort, order)
    }

    /// Search code. The query must include at least one search term and a `repo:`, `user:` or
    /// `org:` qualifier.
    ///
    /// GitHub API docs: https://developer.github.com/v3/search/#search-code
    pub fn code(&self, query: &str, sort: Option<CodeSort>, order: SortDirection) -> Result<Value> {
        self.search(CODE, query, sort, order)
    }

    /// Search issues and pull requests
    pub fn issues(
        &self,
        query: &str,
        sort: Option<IssueSearchSort>,
        order: SortDirection,
    ) -> Result<Value> {
        self.search(ISSUES, query, sort, order)
    }

    /// Search users
    pub fn users(&self, query: &str, sort: Option<UserSort>, order: SortDirection) -> Result<Value> {
        self.search(USERS, query, sort, order)
    }
}
