use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

const COMMITS: Template = Template::new("repos/:owner/:repo/commits");
const COMMIT: Template = Template::new("repos/:owner/:repo/commits/:sha");
const COMPARE: Template = Template::new("repos/:owner/:repo/compare/:base...:head");

#[derive(Debug, Default, Serialize)]
pub struct ListCommitsOptions {
    /// SHA or branch to start listing commits from
    pub sha: Option<String>,
    /// Only commits containing this file path will be returned
    pub path: Option<String>,
    /// GitHub login or email address by which to filter by commit author
    pub author: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

// Implementation for the commits endpoint
// https://developer.github.com/v3/repos/commits/
impl RepositoryClient<'_> {
    /// List commits on a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/commits/#list-commits-on-a-repository
    pub fn list_commits(&self, owner: &str, repo: &str, options: &ListCommitsOptions) -> Result<Value> {
        let url = repo_url(COMMITS, owner, repo)?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// Get a single commit
    pub fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        let url = COMMIT.resolve(&[("owner", owner), ("repo", repo), ("sha", sha)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Compare two commits. `head` may be given as `user:branch` for cross repository
    /// comparisons.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/commits/#compare-two-commits
    pub fn compare_commits(&self, owner: &str, repo: &str, base: &str, head: &str) -> Result<Value> {
        let url = COMPARE.resolve(&[
            ("owner", owner),
            ("repo", repo),
            ("base", base),
            ("head", head),
        ])?;
        self.inner.get(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use super::ListCommitsOptions;
    use crate::client::mock;

    #[test]
    fn compare() {
        let (client, transport) = mock::client();

        client
            .repos()
            .compare_commits("octocat", "Hello-World", "master", "topic")
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/compare/master...topic?access_token=t0ken"
        );
    }

    #[test]
    fn list_by_path() {
        let (client, transport) = mock::client();
        let options = ListCommitsOptions {
            path: Some("src/lib.rs".to_owned()),
            ..Default::default()
        };

        client
            .repos()
            .list_commits("octocat", "Hello-World", &options)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/commits?path=src%2Flib.rs&access_token=t0ken"
        );
    }
}
