use crate::client::{Client, Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

// Users
const USER: Template = Template::new("users/:user");
const AUTHENTICATED_USER: Template = Template::new("user");
const USERS: Template = Template::new("users");

// Emails
const EMAILS: Template = Template::new("user/emails");

// Followers
const USER_FOLLOWERS: Template = Template::new("users/:user/followers");
const FOLLOWERS: Template = Template::new("user/followers");
const USER_FOLLOWING: Template = Template::new("users/:user/following");
const FOLLOWING: Template = Template::new("user/following");
const USER_FOLLOWS: Template = Template::new("users/:user/following/:target_user");
const FOLLOWS: Template = Template::new("user/following/:user");

// Keys
const USER_KEYS: Template = Template::new("users/:user/keys");
const KEYS: Template = Template::new("user/keys");
const KEY: Template = Template::new("user/keys/:id");

#[derive(Debug, Default, Serialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
}

/// `UsersClient` handles communication with the user related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/users/
pub struct UsersClient<'a> {
    inner: &'a Client,
}

impl<'a> UsersClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn get_for_user(&self, template: Template, default: Template, user: Option<&str>) -> Result<Value> {
        let url = match user {
            Some(user) => template.resolve(&[("user", user)])?,
            None => default.as_str().to_owned(),
        };
        self.inner.get(&url, Payload::new())
    }

    /// Get a single user, or the authenticated user when `None`
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/#get-a-single-user
    pub fn get(&self, user: Option<&str>) -> Result<Value> {
        self.get_for_user(USER, AUTHENTICATED_USER, user)
    }

    /// List all users, in the order they signed up, starting after the user id `since`
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/#get-all-users
    pub fn list(&self, since: Option<u64>) -> Result<Value> {
        let mut payload = Payload::new();
        if let Some(since) = since {
            payload.insert("since", since);
        }
        self.inner.get(USERS.as_str(), payload)
    }

    /// Update the authenticated user
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/#update-the-authenticated-user
    pub fn update(&self, user: &UpdateUser) -> Result<Value> {
        self.inner
            .patch(AUTHENTICATED_USER.as_str(), Payload::from_serialize(user)?)
    }

    // Emails

    /// List email addresses for the authenticated user
    pub fn list_emails(&self) -> Result<Value> {
        self.inner.get(EMAILS.as_str(), Payload::new())
    }

    /// Add email addresses
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/emails/#add-email-addresses
    pub fn add_emails(&self, emails: &[&str]) -> Result<Value> {
        self.inner
            .post(EMAILS.as_str(), Payload::list(emails.iter().copied()))
    }

    /// Delete email addresses
    pub fn delete_emails(&self, emails: &[&str]) -> Result<Value> {
        self.inner
            .delete(EMAILS.as_str(), Payload::list(emails.iter().copied()))
    }

    // Followers

    /// List the followers of `user`, or of the authenticated user when `None`
    pub fn list_followers(&self, user: Option<&str>) -> Result<Value> {
        self.get_for_user(USER_FOLLOWERS, FOLLOWERS, user)
    }

    /// List who `user` (or the authenticated user) is following
    pub fn list_following(&self, user: Option<&str>) -> Result<Value> {
        self.get_for_user(USER_FOLLOWING, FOLLOWING, user)
    }

    /// Check if `user` (or the authenticated user) follows `target`. Answers 204 (`null`) when
    /// they do and 404 otherwise.
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/followers/#check-if-one-user-follows-another
    pub fn is_following(&self, target: &str, user: Option<&str>) -> Result<Value> {
        let url = match user {
            Some(user) => USER_FOLLOWS.resolve(&[("user", user), ("target_user", target)])?,
            None => FOLLOWS.resolve(&[("user", target)])?,
        };
        self.inner.get(&url, Payload::new())
    }

    /// Follow a user
    pub fn follow(&self, user: &str) -> Result<Value> {
        let url = FOLLOWS.resolve(&[("user", user)])?;
        self.inner.put(&url, Payload::new())
    }

    /// Unfollow a user
    pub fn unfollow(&self, user: &str) -> Result<Value> {
        let url = FOLLOWS.resolve(&[("user", user)])?;
        self.inner.delete(&url, Payload::new())
    }

    // Keys

    /// List the public keys of `user`, or the keys of the authenticated user when `None`
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/keys/
    pub fn list_keys(&self, user: Option<&str>) -> Result<Value> {
        self.get_for_user(USER_KEYS, KEYS, user)
    }

    pub fn get_key(&self, id: u64) -> Result<Value> {
        let url = KEY.resolve(&[("id", &id.to_string())])?;
        self.inner.get(&url, Payload::new())
    }

    pub fn create_key(&self, title: &str, key: &str) -> Result<Value> {
        let payload = Payload::new().with("title", title).with("key", key);
        self.inner.post(KEYS.as_str(), payload)
    }

    pub fn update_key(&self, id: u64, title: &str, key: &str) -> Result<Value> {
        let url = KEY.resolve(&[("id", &id.to_string())])?;
        let payload = Payload::new().with("title", title).with("key", key);

        self.inner.patch(&url, payload)
    }

    pub fn delete_key(&self, id: u64) -> Result<Value> {
        let url = KEY.resolve(&[("id", &id.to_string())])?;
        self.inner.delete(&url, Payload::new())
    }
}
