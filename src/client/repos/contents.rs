use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template, ACCESS_TOKEN_PARAM};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use url::form_urlencoded;

const README: Template = Template::new("repos/:owner/:repo/readme");
const CONTENTS_ROOT: Template = Template::new("repos/:owner/:repo/contents");
const CONTENTS: Template = Template::new("repos/:owner/:repo/contents/:path");
const ARCHIVE: Template = Template::new("repos/:owner/:repo/:archive_format/:ref");

const DEFAULT_ARCHIVE_REF: &str = "master";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArchiveFormat {
    Tarball,
    Zipball,
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Tarball => f.write_str("tarball"),
            ArchiveFormat::Zipball => f.write_str("zipball"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Optional settings of the commit made by a contents write. Both identities default to the
/// authenticated user.
#[derive(Clone, Debug, Default)]
pub struct CommitOptions {
    /// Defaults to the default branch of the repository
    pub branch: Option<String>,
    pub author: Option<Identity>,
    pub committer: Option<Identity>,
}

impl CommitOptions {
    fn payload(&self, message: &str) -> Result<Payload> {
        let payload = Payload::new()
            .with("message", message)
            .with("branch", json!(self.branch))
            .with("author", serde_json::to_value(&self.author)?)
            .with("committer", serde_json::to_value(&self.committer)?);

        Ok(payload)
    }
}

// Implementation for the contents endpoint
// https://developer.github.com/v3/repos/contents/
impl RepositoryClient<'_> {
    /// Get the README, of the default branch unless `reference` names a commit, branch or tag
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#get-the-readme
    pub fn get_readme(&self, owner: &str, repo: &str, reference: Option<&str>) -> Result<Value> {
        let url = repo_url(README, owner, repo)?;
        self.inner.get(&url, ref_payload(reference))
    }

    /// Get the contents of a file or directory. An empty `path` lists the repository root.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#get-contents
    pub fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Value> {
        let url = if path.is_empty() {
            repo_url(CONTENTS_ROOT, owner, repo)?
        } else {
            contents_url(owner, repo, path)?
        };
        self.inner.get(&url, ref_payload(reference))
    }

    /// Create a file. `content` must already be base64 encoded.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#create-a-file
    pub fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        message: &str,
        content: &str,
        options: &CommitOptions,
    ) -> Result<Value> {
        let url = contents_url(owner, repo, path)?;
        let payload = options.payload(message)?.with("content", content);

        self.inner.put(&url, payload)
    }

    /// Update a file. `sha` is the blob SHA of the file being replaced.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#update-a-file
    #[allow(clippy::too_many_arguments)]
    pub fn update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        message: &str,
        content: &str,
        sha: &str,
        options: &CommitOptions,
    ) -> Result<Value> {
        let url = contents_url(owner, repo, path)?;
        let payload = options
            .payload(message)?
            .with("content", content)
            .with("sha", sha);

        self.inner.put(&url, payload)
    }

    /// Delete a file
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#delete-a-file
    pub fn delete_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        message: &str,
        sha: &str,
        options: &CommitOptions,
    ) -> Result<Value> {
        let url = contents_url(owner, repo, path)?;
        let payload = options.payload(message)?.with("sha", sha);

        self.inner.delete(&url, payload)
    }

    /// Build the authenticated download link of a tarball or zipball, `master` unless
    /// `reference` is given. No request is made: GitHub answers this endpoint with a redirect
    /// to the archive itself.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/contents/#get-archive-link
    pub fn get_archive_link(
        &self,
        owner: &str,
        repo: &str,
        format: ArchiveFormat,
        reference: Option<&str>,
    ) -> Result<String> {
        let path = ARCHIVE.resolve(&[
            ("owner", owner),
            ("repo", repo),
            ("archive_format", &format.to_string()),
            ("ref", reference.unwrap_or(DEFAULT_ARCHIVE_REF)),
        ])?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(ACCESS_TOKEN_PARAM, self.inner.access_token())
            .finish();

        Ok(format!("{}?{}", self.inner.url(&path), query))
    }
}

fn contents_url(owner: &str, repo: &str, path: &str) -> Result<String> {
    CONTENTS.resolve(&[("owner", owner), ("repo", repo), ("path", path)])
}

fn ref_payload(reference: Option<&str>) -> Payload {
    let mut payload = Payload::new();
    if let Some(reference) = reference {
        payload.insert("ref", reference);
    }
    payload
}

#[cfg(test)]
mod test {
    use super::{ArchiveFormat, CommitOptions, Identity};
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn contents_root() {
        let (client, transport) = mock::client();

        client
            .repos()
            .get_contents("octocat", "Hello-World", "", Some("v1.0"))
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/contents?ref=v1.0&access_token=t0ken"
        );

        client
            .repos()
            .get_contents("octocat", "Hello-World", "src/main.rs", None)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/contents/src/main.rs?access_token=t0ken"
        );
    }

    #[test]
    fn create_file() {
        let (client, transport) = mock::client();
        let options = CommitOptions {
            committer: Some(Identity {
                name: "Scott Chacon".to_owned(),
                email: "schacon@gmail.com".to_owned(),
            }),
            ..Default::default()
        };

        client
            .repos()
            .create_file(
                "octocat",
                "Hello-World",
                "hello.txt",
                "my commit message",
                "bXkgbmV3IGZpbGUgY29udGVudHM=",
                &options,
            )
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/contents/hello.txt\
             ?message=my+commit+message&committer%5Bname%5D=Scott+Chacon\
             &committer%5Bemail%5D=schacon%40gmail.com&content=bXkgbmV3IGZpbGUgY29udGVudHM%3D\
             &access_token=t0ken"
        );
    }

    #[test]
    fn delete_file() {
        let (client, transport) = mock::client();

        client
            .repos()
            .delete_file(
                "octocat",
                "Hello-World",
                "hello.txt",
                "remove",
                "329688480d39049927147c162b9d2deaf885005f",
                &CommitOptions::default(),
            )
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/contents/hello.txt\
             ?message=remove&sha=329688480d39049927147c162b9d2deaf885005f&access_token=t0ken"
        );
    }

    #[test]
    fn archive_link_sends_nothing() {
        let (client, transport) = mock::client();

        let link = client
            .repos()
            .get_archive_link("octocat", "Hello-World", ArchiveFormat::Zipball, None)
            .unwrap();
        assert_eq!(
            link,
            "https://api.github.com/repos/octocat/Hello-World/zipball/master?access_token=t0ken"
        );
        assert!(transport.requests().is_empty());
    }
}
