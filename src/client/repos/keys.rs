use super::{id_url, repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const KEYS: Template = Template::new("repos/:owner/:repo/keys");
const KEY: Template = Template::new("repos/:owner/:repo/keys/:id");

// Implementation for the deploy keys endpoint
// https://developer.github.com/v3/repos/keys/
impl RepositoryClient<'_> {
    pub fn list_keys(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(KEYS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_key(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(KEY, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Add a new deploy key
    pub fn create_key(&self, owner: &str, repo: &str, title: &str, key: &str) -> Result<Value> {
        let url = repo_url(KEYS, owner, repo)?;
        let payload = Payload::new().with("title", title).with("key", key);

        self.inner.post(&url, payload)
    }

    pub fn edit_key(&self, owner: &str, repo: &str, id: u64, title: &str, key: &str) -> Result<Value> {
        let url = id_url(KEY, owner, repo, id)?;
        let payload = Payload::new().with("title", title).with("key", key);

        self.inner.patch(&url, payload)
    }

    pub fn delete_key(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(KEY, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}

#[cfg(test)]
mod test {
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn edit_key_is_a_patch() {
        let (client, transport) = mock::client();

        client
            .repos()
            .edit_key("octocat", "Hello-World", 1, "octocat@octomac", "ssh-rsa AAA")
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/keys/1"
        );
        assert_eq!(
            request.body.as_deref(),
            Some("title=octocat%40octomac&key=ssh-rsa+AAA&access_token=t0ken")
        );
    }
}
