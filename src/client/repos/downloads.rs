use super::{id_url, repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const DOWNLOADS: Template = Template::new("repos/:owner/:repo/downloads");
const DOWNLOAD: Template = Template::new("repos/:owner/:repo/downloads/:id");

// Implementation for the downloads endpoint
// https://developer.github.com/v3/repos/downloads/
impl RepositoryClient<'_> {
    /// List downloads for a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/downloads/#list-downloads-for-a-repository
    pub fn list_downloads(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(DOWNLOADS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// Get a single download
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/downloads/#get-a-single-download
    pub fn get_download(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(DOWNLOAD, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Delete a download
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/downloads/#delete-a-download
    pub fn delete_download(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(DOWNLOAD, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn downloads() {
        let (client, transport) = mock::client();

        client
            .repos()
            .list_downloads("github", "linguist")
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/github/linguist/downloads?access_token=t0ken"
        );

        client
            .repos()
            .delete_download("github", "linguist", 1)
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/github/linguist/downloads/1?access_token=t0ken"
        );
    }
}
