use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const MERGES: Template = Template::new("repos/:owner/:repo/merges");

impl RepositoryClient<'_> {
    /// Merge `head` into the `base` branch
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/merging/#perform-a-merge
    pub fn merge(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        commit_message: Option<&str>,
    ) -> Result<Value> {
        let url = repo_url(MERGES, owner, repo)?;
        let mut payload = Payload::new().with("base", base).with("head", head);
        if let Some(message) = commit_message {
            payload.insert("commit_message", message);
        }

        self.inner.post(&url, payload)
    }
}
