use super::RepositoryClient;
use crate::client::{Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

const STATUSES: Template = Template::new("repos/:owner/:repo/statuses/:ref");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Pending,
    Success,
    Error,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct CreateStatusRequest<'a> {
    pub state: StatusState,
    pub target_url: Option<&'a str>,
    pub description: Option<&'a str>,
    pub context: Option<&'a str>,
}

// Implementation for the status endpoint
// https://developer.github.com/v3/repos/statuses/
impl RepositoryClient<'_> {
    /// List Statuses for a SHA, branch or tag
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/statuses/#list-statuses-for-a-specific-ref
    pub fn list_statuses(&self, owner: &str, repo: &str, reference: &str) -> Result<Value> {
        let url = STATUSES.resolve(&[("owner", owner), ("repo", repo), ("ref", reference)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a Status
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/statuses/#create-a-status
    pub fn create_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        request: &CreateStatusRequest,
    ) -> Result<Value> {
        let url = STATUSES.resolve(&[("owner", owner), ("repo", repo), ("ref", sha)])?;
        self.inner.post(&url, Payload::from_serialize(request)?)
    }
}

#[cfg(test)]
mod test {
    use super::{CreateStatusRequest, StatusState};
    use crate::client::mock;

    #[test]
    fn create_status() {
        let (client, transport) = mock::client();
        let request = CreateStatusRequest {
            state: StatusState::Success,
            target_url: Some("https://example.com/build/status"),
            description: None,
            context: Some("continuous-integration/jenkins"),
        };

        client
            .repos()
            .create_status("octocat", "Hello-World", "6dcb09b5", &request)
            .unwrap();

        let request = transport.last();
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/statuses/6dcb09b5"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(
                "state=success&target_url=https%3A%2F%2Fexample.com%2Fbuild%2Fstatus\
                 &context=continuous-integration%2Fjenkins&access_token=t0ken"
            )
        );
    }

    #[test]
    fn statuses_have_no_ref_parameter() {
        let (client, transport) = mock::client();

        client
            .repos()
            .list_statuses("octocat", "Hello-World", "master")
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/statuses/master?access_token=t0ken"
        );
    }
}
