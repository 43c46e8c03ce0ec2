use super::{id_url, repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

const RELEASES: Template = Template::new("repos/:owner/:repo/releases");
const RELEASE: Template = Template::new("repos/:owner/:repo/releases/:id");
const RELEASE_ASSETS: Template = Template::new("repos/:owner/:repo/releases/:id/assets");
const ASSET: Template = Template::new("repos/:owner/:repo/releases/assets/:id");

#[derive(Debug, Default, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    /// Branch or commit SHA the tag is created from. Unused if the tag already exists.
    pub target_commitish: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

// Implementation for the releases endpoint
// https://developer.github.com/v3/repos/releases/
impl RepositoryClient<'_> {
    pub fn list_releases(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(RELEASES, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_release(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(RELEASE, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a release
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/releases/#create-a-release
    pub fn create_release(&self, owner: &str, repo: &str, release: &ReleaseRequest) -> Result<Value> {
        let url = repo_url(RELEASES, owner, repo)?;
        self.inner.post(&url, Payload::from_serialize(release)?)
    }

    /// Edit a release
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/releases/#edit-a-release
    pub fn edit_release(
        &self,
        owner: &str,
        repo: &str,
        id: u64,
        release: &ReleaseRequest,
    ) -> Result<Value> {
        let url = id_url(RELEASE, owner, repo, id)?;
        self.inner.patch(&url, Payload::from_serialize(release)?)
    }

    pub fn delete_release(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(RELEASE, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }

    /// List assets for a release
    pub fn list_release_assets(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(RELEASE_ASSETS, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_release_asset(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(ASSET, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Edit the file name and the label of a release asset
    pub fn edit_release_asset(
        &self,
        owner: &str,
        repo: &str,
        id: u64,
        name: &str,
        label: Option<&str>,
    ) -> Result<Value> {
        let url = id_url(ASSET, owner, repo, id)?;
        let mut payload = Payload::new().with("name", name);
        if let Some(label) = label {
            payload.insert("label", label);
        }

        self.inner.patch(&url, payload)
    }

    pub fn delete_release_asset(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(ASSET, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use super::ReleaseRequest;
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn create_release() {
        let (client, transport) = mock::client();
        let release = ReleaseRequest {
            tag_name: "v1.0.0".to_owned(),
            target_commitish: Some("master".to_owned()),
            prerelease: true,
            ..Default::default()
        };

        client
            .repos()
            .create_release("octocat", "Hello-World", &release)
            .unwrap();
        assert_eq!(
            transport.last().body.as_deref(),
            Some("tag_name=v1.0.0&target_commitish=master&prerelease=1&access_token=t0ken")
        );
    }

    #[test]
    fn assets() {
        let (client, transport) = mock::client();

        client
            .repos()
            .edit_release_asset("octocat", "Hello-World", 1, "foo-1.0.0-osx.zip", Some("Mac binary"))
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/releases/assets/1"
        );
    }
}
