use crate::client::{Client, Payload, Result, SortDirection, Template};
use serde::Serialize;
use serde_json::Value;

mod collaborators;
mod comments;
mod commits;
mod contents;
mod downloads;
mod forks;
mod hooks;
mod keys;
mod merging;
mod releases;
mod statistics;
mod statuses;

pub use commits::ListCommitsOptions;
pub use contents::{ArchiveFormat, CommitOptions, Identity};
pub use forks::ForkSort;
pub use hooks::{EditHook, NewHook};
pub use releases::ReleaseRequest;
pub use statuses::{CreateStatusRequest, StatusState};

const USER_REPOS: Template = Template::new("users/:user/repos");
const REPOS: Template = Template::new("user/repos");
const ORG_REPOS: Template = Template::new("orgs/:org/repos");
const PUBLIC_REPOS: Template = Template::new("repositories");
const REPO: Template = Template::new("repos/:owner/:repo");
const CONTRIBUTORS: Template = Template::new("repos/:owner/:repo/contributors");
const LANGUAGES: Template = Template::new("repos/:owner/:repo/languages");
const TEAMS: Template = Template::new("repos/:owner/:repo/teams");
const TAGS: Template = Template::new("repos/:owner/:repo/tags");
const BRANCHES: Template = Template::new("repos/:owner/:repo/branches");
const BRANCH: Template = Template::new("repos/:owner/:repo/branches/:branch");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoType {
    All,
    Owner,
    Public,
    Private,
    Member,
    Forks,
    Sources,
}

impl Default for RepoType {
    fn default() -> Self {
        RepoType::All
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl Default for RepoSort {
    fn default() -> Self {
        RepoSort::FullName
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ListReposOptions {
    /// Default: all
    #[serde(rename = "type")]
    pub repo_type: RepoType,

    /// Default: full_name
    pub sort: RepoSort,

    /// Default: asc when using full_name, otherwise desc
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Default, Serialize)]
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub private: bool,
    pub has_issues: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_downloads: Option<bool>,
    /// Only valid when creating a repository in an organization
    pub team_id: Option<u64>,
    pub auto_init: bool,
    /// Desired language or platform .gitignore template to apply, e.g. `Haskell`
    pub gitignore_template: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct EditRepository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub private: Option<bool>,
    pub has_issues: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_downloads: Option<bool>,
    pub default_branch: Option<String>,
}

/// `RepositoryClient` handles communication with the Repository related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/repos/
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(in crate::client) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn get_for_repo(&self, template: Template, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(template, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// List the repositories of `user`, or those of the authenticated user when `None`
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-your-repositories
    pub fn list(&self, user: Option<&str>, options: &ListReposOptions) -> Result<Value> {
        let url = match user {
            Some(user) => USER_REPOS.resolve(&[("user", user)])?,
            None => REPOS.as_str().to_owned(),
        };
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// List organization repositories
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-organization-repositories
    pub fn list_for_org(&self, org: &str, repo_type: RepoType) -> Result<Value> {
        let url = ORG_REPOS.resolve(&[("org", org)])?;
        let payload = Payload::new().with("type", serde_json::to_value(repo_type)?);

        self.inner.get(&url, payload)
    }

    /// List all public repositories, in the order they were created
    pub fn list_public(&self) -> Result<Value> {
        self.inner.get(PUBLIC_REPOS.as_str(), Payload::new())
    }

    /// Create a repository for the authenticated user, or in `org` when given
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#create
    pub fn create(&self, org: Option<&str>, repository: &NewRepository) -> Result<Value> {
        let url = match org {
            Some(org) => ORG_REPOS.resolve(&[("org", org)])?,
            None => REPOS.as_str().to_owned(),
        };
        self.inner.post(&url, Payload::from_serialize(repository)?)
    }

    /// Get a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#get
    pub fn get(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(REPO, owner, repo)
    }

    /// Edit a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#edit
    pub fn edit(&self, owner: &str, repo: &str, edit: &EditRepository) -> Result<Value> {
        let url = repo_url(REPO, owner, repo)?;
        self.inner.patch(&url, Payload::from_serialize(edit)?)
    }

    /// Delete a repository. Requires admin access.
    pub fn delete(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(REPO, owner, repo)?;
        self.inner.delete(&url, Payload::new())
    }

    /// List contributors, anonymous ones included with `anon`
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-contributors
    pub fn list_contributors(&self, owner: &str, repo: &str, anon: bool) -> Result<Value> {
        let url = repo_url(CONTRIBUTORS, owner, repo)?;
        self.inner.get(&url, Payload::new().with("anon", anon))
    }

    /// List languages, as bytes of code written in each
    pub fn list_languages(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(LANGUAGES, owner, repo)
    }

    /// List teams
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-teams
    pub fn list_teams(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(TEAMS, owner, repo)
    }

    /// List tags
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-tags
    pub fn list_tags(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(TAGS, owner, repo)
    }

    /// List branches
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-branches
    pub fn list_branches(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(BRANCHES, owner, repo)
    }

    /// Get a branch
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#get-branch
    pub fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Value> {
        let url = BRANCH.resolve(&[("owner", owner), ("repo", repo), ("branch", branch)])?;
        self.inner.get(&url, Payload::new())
    }
}

fn repo_url(template: Template, owner: &str, repo: &str) -> Result<String> {
    template.resolve(&[("owner", owner), ("repo", repo)])
}

fn id_url(template: Template, owner: &str, repo: &str, id: u64) -> Result<String> {
    template.resolve(&[("owner", owner), ("repo", repo), ("id", &id.to_string())])
}
