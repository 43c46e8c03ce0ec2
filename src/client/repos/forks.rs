use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

const FORKS: Template = Template::new("repos/:owner/:repo/forks");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForkSort {
    Newest,
    Oldest,
    Stargazers,
}

impl Default for ForkSort {
    fn default() -> Self {
        ForkSort::Newest
    }
}

// Implementation for the forks endpoint
// https://developer.github.com/v3/repos/forks/
impl RepositoryClient<'_> {
    /// List forks
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/forks/#list-forks
    pub fn list_forks(&self, owner: &str, repo: &str, sort: ForkSort) -> Result<Value> {
        let url = repo_url(FORKS, owner, repo)?;
        let payload = Payload::new().with("sort", serde_json::to_value(sort)?);

        self.inner.get(&url, payload)
    }

    /// Create a fork for the authenticated user, or in `organization` when given. Forking
    /// happens asynchronously on GitHub's side.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/forks/#create-a-fork
    pub fn create_fork(&self, owner: &str, repo: &str, organization: Option<&str>) -> Result<Value> {
        let url = repo_url(FORKS, owner, repo)?;
        let mut payload = Payload::new();
        if let Some(organization) = organization {
            payload.insert("organization", organization);
        }

        self.inner.post(&url, payload)
    }
}

#[cfg(test)]
mod test {
    use super::ForkSort;
    use crate::client::mock;

    #[test]
    fn forks() {
        let (client, transport) = mock::client();

        client
            .repos()
            .list_forks("octocat", "Hello-World", ForkSort::Stargazers)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/forks?sort=stargazers&access_token=t0ken"
        );

        client
            .repos()
            .create_fork("octocat", "Hello-World", Some("github"))
            .unwrap();
        assert_eq!(
            transport.last().body.as_deref(),
            Some("organization=github&access_token=t0ken")
        );
    }
}
