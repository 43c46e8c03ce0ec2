use super::{id_url, repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde::Serialize;
use serde_json::{Map, Value};

const HOOKS: Template = Template::new("repos/:owner/:repo/hooks");
const HOOK: Template = Template::new("repos/:owner/:repo/hooks/:id");
const HOOK_TESTS: Template = Template::new("repos/:owner/:repo/hooks/:id/tests");

#[derive(Debug, Serialize)]
pub struct NewHook {
    /// The name of the service that is being called, `web` for a webhook
    pub name: String,
    /// Key/value settings of the hook, e.g. `url` and `content_type`
    pub config: Map<String, Value>,
    /// Events the hook is triggered for. Default: `["push"]`
    pub events: Vec<String>,
    pub active: Option<bool>,
}

impl Default for NewHook {
    fn default() -> Self {
        Self {
            name: String::new(),
            config: Map::new(),
            events: vec!["push".to_owned()],
            active: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct EditHook {
    pub config: Map<String, Value>,
    /// Replaces the entire list of events
    pub events: Vec<String>,
    pub add_events: Vec<String>,
    pub remove_events: Vec<String>,
    pub active: Option<bool>,
}

// Implementation for the hooks endpoint
// https://developer.github.com/v3/repos/hooks/
impl RepositoryClient<'_> {
    pub fn list_hooks(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(HOOKS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_hook(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(HOOK, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a hook
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/hooks/#create-a-hook
    pub fn create_hook(&self, owner: &str, repo: &str, hook: &NewHook) -> Result<Value> {
        let url = repo_url(HOOKS, owner, repo)?;
        self.inner.post(&url, Payload::from_serialize(hook)?)
    }

    /// Edit a hook
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/hooks/#edit-a-hook
    pub fn edit_hook(&self, owner: &str, repo: &str, id: u64, hook: &EditHook) -> Result<Value> {
        let url = id_url(HOOK, owner, repo, id)?;
        self.inner.patch(&url, Payload::from_serialize(hook)?)
    }

    /// Trigger the hook with the latest push to the repository, if it is subscribed to push
    /// events
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/hooks/#test-a-push-hook
    pub fn test_hook(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(HOOK_TESTS, owner, repo, id)?;
        self.inner.post(&url, Payload::new())
    }

    pub fn delete_hook(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = id_url(HOOK, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }
}
