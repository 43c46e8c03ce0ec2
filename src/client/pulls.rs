use crate::client::{
    Client, IssueState, ListCommentsOptions, Payload, Result, StateFilter, Template,
};
use serde::Serialize;
use serde_json::Value;

const PULLS: Template = Template::new("repos/:owner/:repo/pulls");
const PULL: Template = Template::new("repos/:owner/:repo/pulls/:number");
const PULL_COMMITS: Template = Template::new("repos/:owner/:repo/pulls/:number/commits");
const PULL_FILES: Template = Template::new("repos/:owner/:repo/pulls/:number/files");
const PULL_MERGE: Template = Template::new("repos/:owner/:repo/pulls/:number/merge");
const PULL_COMMENTS: Template = Template::new("repos/:owner/:repo/pulls/:number/comments");
const REPO_COMMENTS: Template = Template::new("repos/:owner/:repo/pulls/comments");
const COMMENT: Template = Template::new("repos/:owner/:repo/pulls/comments/:id");

#[derive(Debug, Default, Serialize)]
pub struct ListPullsOptions {
    /// Either open, closed, or all to filter by state. Default: open
    pub state: StateFilter,

    /// Filter pulls by head user and branch name in the format of user:ref-name.
    /// Example: github:new-script-format.
    pub head: Option<String>,

    /// Filter pulls by base branch name. Example: gh-pages.
    pub base: Option<String>,
}

/// What a new pull request is made of: an existing issue, or a fresh title and body.
#[derive(Clone, Debug, PartialEq)]
pub enum PullRequestSource {
    Issue(u64),
    Description { title: String, body: Option<String> },
}

#[derive(Clone, Debug)]
pub struct NewPullRequest {
    /// The name of the branch you want the changes pulled into.
    pub base: String,
    /// The name of the branch where your changes are implemented. For cross-repository pull
    /// requests in the same network, namespace head with a user like this: username:branch.
    pub head: String,
    pub source: PullRequestSource,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdatePullRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub state: Option<IssueState>,
}

#[derive(Debug, Default, Serialize)]
pub struct NewReviewComment {
    pub body: String,
    /// The SHA of the commit to comment on
    pub commit_id: String,
    /// The relative path of the file to comment on
    pub path: String,
    /// The line index in the diff to comment on
    pub position: u64,
}

/// `PullsClient` handles communication with the pull request related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/pulls/
pub struct PullsClient<'a> {
    inner: &'a Client,
}

impl<'a> PullsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn pull_url(&self, template: Template, owner: &str, repo: &str, number: u64) -> Result<String> {
        template.resolve(&[
            ("owner", owner),
            ("repo", repo),
            ("number", &number.to_string()),
        ])
    }

    fn comment_url(&self, owner: &str, repo: &str, id: u64) -> Result<String> {
        COMMENT.resolve(&[("owner", owner), ("repo", repo), ("id", &id.to_string())])
    }

    /// List pull requests
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/#list-pull-requests
    pub fn list(&self, owner: &str, repo: &str, options: &ListPullsOptions) -> Result<Value> {
        let url = PULLS.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// Get a single pull request
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/#get-a-single-pull-request
    pub fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.pull_url(PULL, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a pull request, either from scratch or by turning an issue into one
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/#create-a-pull-request
    pub fn create(&self, owner: &str, repo: &str, pull: &NewPullRequest) -> Result<Value> {
        let url = PULLS.resolve(&[("owner", owner), ("repo", repo)])?;
        let mut payload = Payload::new()
            .with("base", pull.base.as_str())
            .with("head", pull.head.as_str());

        match &pull.source {
            PullRequestSource::Issue(issue) => {
                payload.insert("issue", *issue);
            }
            PullRequestSource::Description { title, body } => {
                payload.insert("title", title.as_str());
                if let Some(body) = body {
                    payload.insert("body", body.as_str());
                }
            }
        }

        self.inner.post(&url, payload)
    }

    /// Update a pull request
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/#update-a-pull-request
    pub fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &UpdatePullRequest,
    ) -> Result<Value> {
        let url = self.pull_url(PULL, owner, repo, number)?;
        self.inner.patch(&url, Payload::from_serialize(update)?)
    }

    /// List commits on a pull request
    pub fn list_commits(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.pull_url(PULL_COMMITS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// List pull requests files
    pub fn list_files(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.pull_url(PULL_FILES, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Get if a pull request has been merged. Answers 204 (`null`) when merged, 404 otherwise.
    pub fn is_merged(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.pull_url(PULL_MERGE, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Merge a pull request (Merge Button)
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/#merge-a-pull-request-merge-button
    pub fn merge(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        commit_message: Option<&str>,
    ) -> Result<Value> {
        let url = self.pull_url(PULL_MERGE, owner, repo, number)?;
        let mut payload = Payload::new();
        if let Some(message) = commit_message {
            payload.insert("commit_message", message);
        }

        self.inner.put(&url, payload)
    }

    // Review Comments

    /// List comments on a pull request
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/comments/#list-comments-on-a-pull-request
    pub fn list_review_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.pull_url(PULL_COMMENTS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// List comments in a repository
    pub fn list_review_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: &ListCommentsOptions,
    ) -> Result<Value> {
        let url = REPO_COMMENTS.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    pub fn get_review_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = self.comment_url(owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a comment on a line of the diff
    ///
    /// GitHub API docs: https://developer.github.com/v3/pulls/comments/#create-a-comment
    pub fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        comment: &NewReviewComment,
    ) -> Result<Value> {
        let url = self.pull_url(PULL_COMMENTS, owner, repo, number)?;
        self.inner.post(&url, Payload::from_serialize(comment)?)
    }

    /// Reply to an existing review comment
    pub fn reply_to_review_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
        in_reply_to: u64,
    ) -> Result<Value> {
        let url = self.pull_url(PULL_COMMENTS, owner, repo, number)?;
        let payload = Payload::new()
            .with("body", body)
            .with("in_reply_to", in_reply_to);

        self.inner.post(&url, payload)
    }

    pub fn edit_review_comment(&self, owner: &str, repo: &str, id: u64, body: &str) -> Result<Value> {
        let url = self.comment_url(owner, repo, id)?;
        self.inner.patch(&url, Payload::new().with("body", body))
    }

    pub fn delete_review_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = self.comment_url(owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}
