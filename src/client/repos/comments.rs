use super::{id_url, repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const COMMENTS: Template = Template::new("repos/:owner/:repo/comments");
const COMMENT: Template = Template::new("repos/:owner/:repo/comments/:id");
const COMMIT_COMMENTS: Template = Template::new("repos/:owner/:repo/commits/:sha/comments");

// Implementation for the commit comments endpoint
// https://developer.github.com/v3/repos/comments/
impl RepositoryClient<'_> {
    /// List the commit comments of a repository, or of a single commit when `sha` is given
    pub fn list_commit_comments(&self, owner: &str, repo: &str, sha: Option<&str>) -> Result<Value> {
        let url = match sha {
            Some(sha) => COMMIT_COMMENTS.resolve(&[("owner", owner), ("repo", repo), ("sha", sha)])?,
            None => repo_url(COMMENTS, owner, repo)?,
        };
        self.inner.get(&url, Payload::new())
    }

    /// Create a commit comment. Without `path` and `position` the comment is made on the
    /// commit as a whole.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/comments/#create-a-commit-comment
    pub fn create_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        body: &str,
        path: Option<&str>,
        position: Option<u64>,
    ) -> Result<Value> {
        let url = COMMIT_COMMENTS.resolve(&[("owner", owner), ("repo", repo), ("sha", sha)])?;
        let mut payload = Payload::new().with("body", body);
        if let Some(path) = path {
            payload.insert("path", path);
        }
        if let Some(position) = position {
            payload.insert("position", position);
        }

        self.inner.post(&url, payload)
    }

    pub fn get_commit_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(COMMENT, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn update_commit_comment(&self, owner: &str, repo: &str, id: u64, body: &str) -> Result<Value> {
        let url = id_url(COMMENT, owner, repo, id)?;
        self.inner.patch(&url, Payload::new().with("body", body))
    }

    pub fn delete_commit_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(COMMENT, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use crate::client::mock;

    #[test]
    fn comments_of_a_commit() {
        let (client, transport) = mock::client();

        client
            .repos()
            .list_commit_comments("octocat", "Hello-World", Some("6dcb09b5"))
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/commits/6dcb09b5/comments?access_token=t0ken"
        );

        client
            .repos()
            .create_commit_comment("octocat", "Hello-World", "6dcb09b5", "Great stuff", Some("file1.txt"), Some(4))
            .unwrap();
        assert_eq!(
            transport.last().body.as_deref(),
            Some("body=Great+stuff&path=file1.txt&position=4&access_token=t0ken")
        );
    }
}
