use crate::client::{Client, Payload, Result, Template};
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

const GISTS: Template = Template::new("gists");
const USER_GISTS: Template = Template::new("users/:user/gists");
const PUBLIC_GISTS: Template = Template::new("gists/public");
const STARRED_GISTS: Template = Template::new("gists/starred");
const GIST: Template = Template::new("gists/:id");
const GIST_STAR: Template = Template::new("gists/:id/star");
const GIST_FORKS: Template = Template::new("gists/:id/forks");
const GIST_COMMENTS: Template = Template::new("gists/:gist_id/comments");

#[derive(Debug, Default)]
pub struct NewGist {
    pub description: String,
    pub public: bool,
    /// File name to file content
    pub files: BTreeMap<String, String>,
}

/// `GistsClient` handles communication with the gist related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/gists/
pub struct GistsClient<'a> {
    inner: &'a Client,
}

impl<'a> GistsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List the gists of `user`, or those of the authenticated user when `None`
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/#list-gists
    pub fn list(&self, user: Option<&str>, since: Option<DateTime<Utc>>) -> Result<Value> {
        let url = match user {
            Some(user) => USER_GISTS.resolve(&[("user", user)])?,
            None => GISTS.as_str().to_owned(),
        };
        self.inner.get(&url, since_payload(since))
    }

    /// List all public gists
    pub fn list_public(&self, since: Option<DateTime<Utc>>) -> Result<Value> {
        self.inner.get(PUBLIC_GISTS.as_str(), since_payload(since))
    }

    /// List the gists starred by the authenticated user
    pub fn list_starred(&self, since: Option<DateTime<Utc>>) -> Result<Value> {
        self.inner.get(STARRED_GISTS.as_str(), since_payload(since))
    }

    /// Get a single gist
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/#get-a-single-gist
    pub fn get(&self, id: &str) -> Result<Value> {
        let url = GIST.resolve(&[("id", id)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a gist
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/#create-a-gist
    pub fn create(&self, gist: &NewGist) -> Result<Value> {
        let payload = Payload::new()
            .with("description", gist.description.as_str())
            .with("public", gist.public)
            .with("files", files_value(&gist.files));

        self.inner.post(GISTS.as_str(), payload)
    }

    /// Edit a gist. Files not named in `files` are left untouched.
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/#edit-a-gist
    pub fn edit(
        &self,
        id: &str,
        description: Option<&str>,
        files: &BTreeMap<String, String>,
    ) -> Result<Value> {
        let url = GIST.resolve(&[("id", id)])?;
        let payload = Payload::new()
            .with("description", json!(description))
            .with("files", files_value(files));

        self.inner.patch(&url, payload)
    }

    /// Check if a gist is starred. Answers 204 (`null`) when it is, 404 otherwise.
    pub fn is_starred(&self, id: &str) -> Result<Value> {
        let url = GIST_STAR.resolve(&[("id", id)])?;
        self.inner.get(&url, Payload::new())
    }

    pub fn star(&self, id: &str) -> Result<Value> {
        let url = GIST_STAR.resolve(&[("id", id)])?;
        self.inner.put(&url, Payload::new())
    }

    pub fn unstar(&self, id: &str) -> Result<Value> {
        let url = GIST_STAR.resolve(&[("id", id)])?;
        self.inner.delete(&url, Payload::new())
    }

    /// Fork a gist
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/#fork-a-gist
    pub fn fork(&self, id: &str) -> Result<Value> {
        let url = GIST_FORKS.resolve(&[("id", id)])?;
        self.inner.post(&url, Payload::new())
    }

    pub fn delete(&self, id: &str) -> Result<Value> {
        let url = GIST.resolve(&[("id", id)])?;
        self.inner.delete(&url, Payload::new())
    }

    /// List comments on a gist
    ///
    /// GitHub API docs: https://developer.github.com/v3/gists/comments/#list-comments-on-a-gist
    pub fn list_comments(&self, gist_id: &str) -> Result<Value> {
        let url = GIST_COMMENTS.resolve(&[("gist_id", gist_id)])?;
        self.inner.get(&url, Payload::new())
    }
}

fn since_payload(since: Option<DateTime<Utc>>) -> Payload {
    let mut payload = Payload::new();
    if let Some(since) = since {
        payload.insert("since", since.to_rfc3339());
    }
    payload
}

// files[<name>][content]=<content>
fn files_value(files: &BTreeMap<String, String>) -> Value {
    let files: Map<String, Value> = files
        .iter()
        .map(|(name, content)| (name.clone(), json!({ "content": content })))
        .collect();
    Value::Object(files)
}

#[cfg(test)]
mod test {
    use super::NewGist;
    use crate::client::mock;
    use chrono::{TimeZone, Utc};
    use reqwest::Method;
    use std::collections::BTreeMap;

    #[test]
    fn create() {
        let (client, transport) = mock::client();
        let mut files = BTreeMap::new();
        files.insert("file1.txt".to_owned(), "String file contents".to_owned());
        let gist = NewGist {
            description: "the description for this gist".to_owned(),
            public: true,
            files,
        };

        client.gists().create(&gist).unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.github.com/gists");
        assert_eq!(
            request.body.as_deref(),
            Some(
                "description=the+description+for+this+gist&public=1\
                 &files%5Bfile1.txt%5D%5Bcontent%5D=String+file+contents&access_token=t0ken"
            )
        );
    }

    #[test]
    fn list_since() {
        let (client, transport) = mock::client();
        let since = Utc.ymd(2012, 10, 9).and_hms(23, 39, 1);

        client.gists().list(Some("octocat"), Some(since)).unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/users/octocat/gists?since=2012-10-09T23%3A39%3A01%2B00%3A00&access_token=t0ken"
        );

        client.gists().list(None, None).unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/gists?access_token=t0ken"
        );
    }

    #[test]
    fn comments_are_listed_with_get() {
        let (client, transport) = mock::client();

        client.gists().list_comments("aa5a315d61ae9438b18d").unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://api.github.com/gists/aa5a315d61ae9438b18d/comments?access_token=t0ken"
        );
    }

    #[test]
    fn star() {
        let (client, transport) = mock::client();

        client.gists().star("aa5a315d61ae9438b18d").unwrap();
        assert_eq!(transport.last().method, Method::PUT);

        client.gists().unstar("aa5a315d61ae9438b18d").unwrap();
        assert_eq!(transport.last().method, Method::DELETE);

        client.gists().fork("aa5a315d61ae9438b18d").unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "https://api.github.com/gists/aa5a315d61ae9438b18d/forks"
        );
    }

    #[test]
    fn every_endpoint_resolves() {
        let (client, transport) = mock::client();
        let gists = client.gists();
        let files: BTreeMap<String, String> =
            vec![("a.txt".to_owned(), "a".to_owned())].into_iter().collect();

        mock::assert_all_sent(
            &transport,
            vec![
                gists.list(None, None),
                gists.list(Some("u"), None),
                gists.list_public(None),
                gists.list_starred(None),
                gists.get("aa5a315d"),
                gists.create(&NewGist::default()),
                gists.edit("aa5a315d", Some("d"), &files),
                gists.is_starred("aa5a315d"),
                gists.star("aa5a315d"),
                gists.unstar("aa5a315d"),
                gists.fork("aa5a315d"),
                gists.delete("aa5a315d"),
                gists.list_comments("aa5a315d"),
            ],
        );
    }
}
