use crate::client::{Client, Payload, Result, SortDirection, Template};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// Events
const PUBLIC_EVENTS: Template = Template::new("events");
const REPO_EVENTS: Template = Template::new("repos/:owner/:repo/events");
const REPO_ISSUE_EVENTS: Template = Template::new("repos/:owner/:repo/issues/events");
const NETWORK_EVENTS: Template = Template::new("networks/:owner/:repo/events");
const ORG_EVENTS: Template = Template::new("orgs/:org/events");
const RECEIVED_EVENTS: Template = Template::new("users/:user/received_events");
const RECEIVED_PUBLIC_EVENTS: Template = Template::new("users/:user/received_events/public");
const USER_EVENTS: Template = Template::new("users/:user/events");
const USER_PUBLIC_EVENTS: Template = Template::new("users/:user/events/public");
const USER_ORG_EVENTS: Template = Template::new("users/:user/events/orgs/:org");

// Feeds
const FEEDS: Template = Template::new("feeds");

// Notifications
const NOTIFICATIONS: Template = Template::new("notifications");
const REPO_NOTIFICATIONS: Template = Template::new("repos/:owner/:repo/notifications");
const THREAD: Template = Template::new("notifications/threads/:id");
const THREAD_SUBSCRIPTION: Template = Template::new("notifications/threads/:id/subscription");

// Starring
const STARGAZERS: Template = Template::new("repos/:owner/:repo/stargazers");
const USER_STARRED: Template = Template::new("users/:user/starred");
const STARRED: Template = Template::new("user/starred");
const STARRED_REPO: Template = Template::new("user/starred/:owner/:repo");

// Watching
const WATCHERS: Template = Template::new("repos/:owner/:repo/subscribers");
const USER_SUBSCRIPTIONS: Template = Template::new("users/:user/subscriptions");
const SUBSCRIPTIONS: Template = Template::new("user/subscriptions");
const REPO_SUBSCRIPTION: Template = Template::new("repos/:owner/:repo/subscription");
const SUBSCRIBED_REPO: Template = Template::new("user/subscriptions/:owner/:repo");

#[derive(Debug, Serialize)]
pub struct ListNotificationsOptions {
    /// If true, show notifications marked as read. Default: true
    pub all: bool,

    /// If true, only shows notifications in which the user is directly participating or
    /// mentioned. Default: true
    pub participating: bool,

    /// Only show notifications updated after the given time.
    pub since: Option<DateTime<Utc>>,
}

impl Default for ListNotificationsOptions {
    fn default() -> Self {
        Self {
            all: true,
            participating: true,
            since: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StarSort {
    Created,
    Updated,
}

impl Default for StarSort {
    fn default() -> Self {
        StarSort::Created
    }
}

/// `ActivityClient` handles communication with the activity related methods of the GitHub API:
/// events, feeds, notifications, starring and watching.
///
/// GitHub API docs: https://developer.github.com/v3/activity/
pub struct ActivityClient<'a> {
    inner: &'a Client,
}

impl<'a> ActivityClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn get_for_repo(&self, template: Template, owner: &str, repo: &str) -> Result<Value> {
        let url = template.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.get(&url, Payload::new())
    }

    // Events
    // https://developer.github.com/v3/activity/events/

    /// List public events
    pub fn list_public_events(&self) -> Result<Value> {
        self.inner.get(PUBLIC_EVENTS.as_str(), Payload::new())
    }

    /// List repository events
    pub fn list_repo_events(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(REPO_EVENTS, owner, repo)
    }

    /// List issue events for a repository
    pub fn list_repo_issue_events(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(REPO_ISSUE_EVENTS, owner, repo)
    }

    /// List public events for a network of repositories
    pub fn list_network_events(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(NETWORK_EVENTS, owner, repo)
    }

    /// List events that a user has received by watching repos and following users. Private
    /// events are only included when authenticated as `user` and `public_only` is false.
    pub fn list_received_events(&self, user: &str, public_only: bool) -> Result<Value> {
        let template = if public_only {
            RECEIVED_PUBLIC_EVENTS
        } else {
            RECEIVED_EVENTS
        };
        let url = template.resolve(&[("user", user)])?;
        self.inner.get(&url, Payload::new())
    }

    /// List events performed by a user
    pub fn list_user_events(&self, user: &str, public_only: bool) -> Result<Value> {
        let template = if public_only {
            USER_PUBLIC_EVENTS
        } else {
            USER_EVENTS
        };
        let url = template.resolve(&[("user", user)])?;
        self.inner.get(&url, Payload::new())
    }

    /// List public events for an organization, or with `user` set, the organization dashboard
    /// of that user (requires being authenticated as `user`).
    pub fn list_org_events(&self, org: &str, user: Option<&str>) -> Result<Value> {
        let url = match user {
            Some(user) => USER_ORG_EVENTS.resolve(&[("user", user), ("org", org)])?,
            None => ORG_EVENTS.resolve(&[("org", org)])?,
        };
        self.inner.get(&url, Payload::new())
    }

    // Feeds
    // https://developer.github.com/v3/activity/feeds/

    /// List the Atom feeds available to the authenticated user
    pub fn list_feeds(&self) -> Result<Value> {
        self.inner.get(FEEDS.as_str(), Payload::new())
    }

    // Notifications
    // https://developer.github.com/v3/activity/notifications/

    /// List notifications for the authenticated user, optionally limited to one repository
    /// given as `(owner, repo)`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/activity/notifications/#list-your-notifications
    pub fn list_notifications(
        &self,
        repo: Option<(&str, &str)>,
        options: &ListNotificationsOptions,
    ) -> Result<Value> {
        let url = notifications_url(repo)?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// Mark notifications as read, all of them or those of one repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/activity/notifications/#mark-as-read
    pub fn mark_notifications_read(
        &self,
        repo: Option<(&str, &str)>,
        last_read_at: Option<DateTime<Utc>>,
    ) -> Result<Value> {
        let url = notifications_url(repo)?;
        let mut payload = Payload::new();
        if let Some(last_read_at) = last_read_at {
            payload.insert("last_read_at", last_read_at.to_rfc3339());
        }

        self.inner.put(&url, payload)
    }

    /// Mark a notification thread as read
    pub fn mark_thread_read(&self, id: u64) -> Result<Value> {
        let url = THREAD.resolve(&[("id", &id.to_string())])?;
        self.inner.patch(&url, Payload::new())
    }

    /// Check whether the authenticated user is subscribed to a thread
    pub fn get_thread_subscription(&self, id: u64) -> Result<Value> {
        let url = THREAD_SUBSCRIPTION.resolve(&[("id", &id.to_string())])?;
        self.inner.get(&url, Payload::new())
    }

    /// Subscribe to, or ignore, a thread
    pub fn set_thread_subscription(&self, id: u64, subscribed: bool, ignored: bool) -> Result<Value> {
        let url = THREAD_SUBSCRIPTION.resolve(&[("id", &id.to_string())])?;
        let payload = Payload::new()
            .with("subscribed", subscribed)
            .with("ignored", ignored);

        self.inner.put(&url, payload)
    }

    pub fn delete_thread_subscription(&self, id: u64) -> Result<Value> {
        let url = THREAD_SUBSCRIPTION.resolve(&[("id", &id.to_string())])?;
        self.inner.delete(&url, Payload::new())
    }

    // Starring
    // https://developer.github.com/v3/activity/starring/

    /// List the users that starred a repository
    pub fn list_stargazers(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(STARGAZERS, owner, repo)
    }

    /// List repositories starred by `user`, or by the authenticated user when `None`
    pub fn list_starred(
        &self,
        user: Option<&str>,
        sort: StarSort,
        direction: SortDirection,
    ) -> Result<Value> {
        let url = match user {
            Some(user) => USER_STARRED.resolve(&[("user", user)])?,
            None => STARRED.as_str().to_owned(),
        };
        let payload = Payload::new()
            .with("sort", serde_json::to_value(sort)?)
            .with("direction", serde_json::to_value(direction)?);

        self.inner.get(&url, payload)
    }

    /// Check if the authenticated user starred a repository. GitHub answers 204 (empty body)
    /// when it did and 404 otherwise.
    pub fn is_starred(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(STARRED_REPO, owner, repo)
    }

    pub fn star(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = STARRED_REPO.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.put(&url, Payload::new())
    }

    pub fn unstar(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = STARRED_REPO.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.delete(&url, Payload::new())
    }

    // Watching
    // https://developer.github.com/v3/activity/watching/

    /// List the users watching a repository
    pub fn list_watchers(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(WATCHERS, owner, repo)
    }

    /// List repositories watched by `user`, or by the authenticated user when `None`
    pub fn list_watched(&self, user: Option<&str>) -> Result<Value> {
        let url = match user {
            Some(user) => USER_SUBSCRIPTIONS.resolve(&[("user", user)])?,
            None => SUBSCRIPTIONS.as_str().to_owned(),
        };
        self.inner.get(&url, Payload::new())
    }

    pub fn get_repo_subscription(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(REPO_SUBSCRIPTION, owner, repo)
    }

    /// Watch a repository (`subscribed`) or ignore its notifications (`ignored`)
    pub fn set_repo_subscription(
        &self,
        owner: &str,
        repo: &str,
        subscribed: bool,
        ignored: bool,
    ) -> Result<Value> {
        let url = REPO_SUBSCRIPTION.resolve(&[("owner", owner), ("repo", repo)])?;
        let payload = Payload::new()
            .with("subscribed", subscribed)
            .with("ignored", ignored);

        self.inner.put(&url, payload)
    }

    pub fn delete_repo_subscription(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = REPO_SUBSCRIPTION.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.delete(&url, Payload::new())
    }

    /// Legacy check for whether the authenticated user watches a repository
    pub fn is_watching(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_for_repo(SUBSCRIBED_REPO, owner, repo)
    }

    pub fn watch(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = SUBSCRIBED_REPO.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.put(&url, Payload::new())
    }

    pub fn unwatch(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = SUBSCRIBED_REPO.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.delete(&url, Payload::new())
    }
}

fn notifications_url(repo: Option<(&str, &str)>) -> Result<String> {
    match repo {
        Some((owner, repo)) => REPO_NOTIFICATIONS.resolve(&[("owner", owner), ("repo", repo)]),
        None => Ok(NOTIFICATIONS.as_str().to_owned()),
    }
}

#[cfg(test)]
mod test {
    use super::{ListNotificationsOptions, StarSort};
    use crate::client::{mock, SortDirection};
    use reqwest::Method;

    #[test]
    fn org_events() {
        let (client, transport) = mock::client();

        client.activity().list_org_events("github", None).unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/orgs/github/events?access_token=t0ken"
        );

        client
            .activity()
            .list_org_events("github", Some("octocat"))
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/users/octocat/events/orgs/github?access_token=t0ken"
        );
    }

    #[test]
    fn public_received_events() {
        let (client, transport) = mock::client();

        client
            .activity()
            .list_received_events("octocat", true)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/users/octocat/received_events/public?access_token=t0ken"
        );
    }

    #[test]
    fn notifications() {
        let (client, transport) = mock::client();

        client
            .activity()
            .list_notifications(None, &ListNotificationsOptions::default())
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/notifications?all=1&participating=1&access_token=t0ken"
        );

        let options = ListNotificationsOptions {
            all: false,
            ..Default::default()
        };
        client
            .activity()
            .list_notifications(Some(("octocat", "Hello-World")), &options)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/notifications?participating=1&access_token=t0ken"
        );

        client.activity().mark_thread_read(1).unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url, "https://api.github.com/notifications/threads/1");
    }

    #[test]
    fn starred_by_authenticated_user() {
        let (client, transport) = mock::client();

        client
            .activity()
            .list_starred(None, StarSort::Updated, SortDirection::Ascending)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/user/starred?sort=updated&direction=asc&access_token=t0ken"
        );
    }

    #[test]
    fn repo_subscription() {
        let (client, transport) = mock::client();

        client
            .activity()
            .set_repo_subscription("octocat", "Hello-World", true, false)
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/subscription?subscribed=1&access_token=t0ken"
        );

        client
            .activity()
            .delete_repo_subscription("octocat", "Hello-World")
            .unwrap();
        assert_eq!(transport.last().method, Method::DELETE);
    }

    #[test]
    fn every_endpoint_resolves() {
        let (client, transport) = mock::client();
        let activity = client.activity();

        mock::assert_all_sent(
            &transport,
            vec![
                activity.list_public_events(),
                activity.list_repo_events("o", "r"),
                activity.list_repo_issue_events("o", "r"),
                activity.list_network_events("o", "r"),
                activity.list_received_events("u", false),
                activity.list_received_events("u", true),
                activity.list_user_events("u", false),
                activity.list_user_events("u", true),
                activity.list_org_events("org", None),
                activity.list_org_events("org", Some("u")),
                activity.list_feeds(),
                activity.list_notifications(None, &ListNotificationsOptions::default()),
                activity.list_notifications(Some(("o", "r")), &ListNotificationsOptions::default()),
                activity.mark_notifications_read(None, None),
                activity.mark_notifications_read(Some(("o", "r")), None),
                activity.mark_thread_read(1),
                activity.get_thread_subscription(1),
                activity.set_thread_subscription(1, true, false),
                activity.delete_thread_subscription(1),
                activity.list_stargazers("o", "r"),
                activity.list_starred(None, StarSort::Created, SortDirection::Descending),
                activity.list_starred(Some("u"), StarSort::Updated, SortDirection::Ascending),
                activity.is_starred("o", "r"),
                activity.star("o", "r"),
                activity.unstar("o", "r"),
                activity.list_watchers("o", "r"),
                activity.list_watched(None),
                activity.list_watched(Some("u")),
                activity.get_repo_subscription("o", "r"),
                activity.set_repo_subscription("o", "r", true, false),
                activity.delete_repo_subscription("o", "r"),
                activity.is_watching("o", "r"),
                activity.watch("o", "r"),
                activity.unwatch("o", "r"),
            ],
        );
    }
}
