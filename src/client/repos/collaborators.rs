use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const COLLABORATORS: Template = Template::new("repos/:owner/:repo/collaborators");
const COLLABORATOR: Template = Template::new("repos/:owner/:repo/collaborators/:user");

// Implementation for the collaborators endpoint
// https://developer.github.com/v3/repos/collaborators/
impl RepositoryClient<'_> {
    fn collaborator_url(&self, owner: &str, repo: &str, user: &str) -> Result<String> {
        COLLABORATOR.resolve(&[("owner", owner), ("repo", repo), ("user", user)])
    }

    /// List collaborators
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#list-collaborators
    pub fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(COLLABORATORS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// Check if a user is a collaborator. Answers 204 (`null`) when they are, 404 otherwise.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#check-if-a-user-is-a-collaborator
    pub fn is_collaborator(&self, owner: &str, repo: &str, user: &str) -> Result<Value> {
        let url = self.collaborator_url(owner, repo, user)?;
        self.inner.get(&url, Payload::new())
    }

    /// Add user as a collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#add-user-as-a-collaborator
    pub fn add_collaborator(&self, owner: &str, repo: &str, user: &str) -> Result<Value> {
        let url = self.collaborator_url(owner, repo, user)?;
        self.inner.put(&url, Payload::new())
    }

    /// Remove collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#remove-collaborator
    pub fn remove_collaborator(&self, owner: &str, repo: &str, user: &str) -> Result<Value> {
        let url = self.collaborator_url(owner, repo, user)?;
        self.inner.delete(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn add_and_remove() {
        let (client, transport) = mock::client();

        client
            .repos()
            .add_collaborator("octocat", "Hello-World", "hubot")
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/collaborators/hubot?access_token=t0ken"
        );

        client
            .repos()
            .remove_collaborator("octocat", "Hello-World", "hubot")
            .unwrap();
        assert_eq!(transport.last().method, Method::DELETE);
    }
}
