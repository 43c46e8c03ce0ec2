use crate::client::{Client, Payload, Result, Template};
use serde::Serialize;
use serde_json::{json, Value};

const BLOBS: Template = Template::new("repos/:owner/:repo/git/blobs");
const BLOB: Template = Template::new("repos/:owner/:repo/git/blobs/:sha");
const COMMITS: Template = Template::new("repos/:owner/:repo/git/commits");
const COMMIT: Template = Template::new("repos/:owner/:repo/git/commits/:sha");
const REFS: Template = Template::new("repos/:owner/:repo/git/refs");
const REF: Template = Template::new("repos/:owner/:repo/git/refs/:ref");
const TAGS: Template = Template::new("repos/:owner/:repo/git/tags");
const TAG: Template = Template::new("repos/:owner/:repo/git/tags/:sha");
const TREES: Template = Template::new("repos/:owner/:repo/git/trees");
const TREE: Template = Template::new("repos/:owner/:repo/git/trees/:sha");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    Base64,
}

impl Default for BlobEncoding {
    fn default() -> Self {
        BlobEncoding::Utf8
    }
}

/// Author, committer or tagger of a git object. `date` is an ISO 8601 timestamp; GitHub uses
/// the current time when it is left out.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct NewCommit {
    pub message: String,
    /// SHA of the tree object this commit points to
    pub tree: String,
    /// SHAs of the parents. Empty for a root commit.
    pub parents: Vec<String>,
    pub author: Option<Signature>,
    pub committer: Option<Signature>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagObjectType {
    Commit,
    Tree,
    Blob,
}

impl Default for TagObjectType {
    fn default() -> Self {
        TagObjectType::Commit
    }
}

#[derive(Debug, Default, Serialize)]
pub struct NewTag {
    pub tag: String,
    pub message: String,
    /// SHA of the tagged object
    pub object: String,
    #[serde(rename = "type")]
    pub object_type: TagObjectType,
    pub tagger: Signature,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TreeEntryMode {
    #[serde(rename = "100644")]
    File,
    #[serde(rename = "100755")]
    Executable,
    #[serde(rename = "040000")]
    Subdirectory,
    #[serde(rename = "160000")]
    Submodule,
    #[serde(rename = "120000")]
    Symlink,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryType {
    Blob,
    Tree,
    Commit,
}

/// One entry of a new tree. Either `sha` points at an existing object or `content` is
/// written into a new blob.
#[derive(Clone, Debug, Serialize)]
pub struct TreeEntry {
    pub path: String,
    pub mode: TreeEntryMode,
    #[serde(rename = "type")]
    pub entry_type: TreeEntryType,
    pub sha: Option<String>,
    pub content: Option<String>,
}

/// `GitClient` handles communication with the git data related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/git/
pub struct GitClient<'a> {
    inner: &'a Client,
}

impl<'a> GitClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn get_object(&self, template: Template, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        let url = template.resolve(&[("owner", owner), ("repo", repo), ("sha", sha)])?;
        self.inner.get(&url, Payload::new())
    }

    // Blobs

    /// Get a blob
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/blobs/#get-a-blob
    pub fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        self.get_object(BLOB, owner, repo, sha)
    }

    /// Create a blob. With `BlobEncoding::Base64` the content is passed through as is and must
    /// already be encoded.
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/blobs/#create-a-blob
    pub fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        content: &str,
        encoding: BlobEncoding,
    ) -> Result<Value> {
        let url = BLOBS.resolve(&[("owner", owner), ("repo", repo)])?;
        let payload = Payload::new()
            .with("content", content)
            .with("encoding", serde_json::to_value(encoding)?);

        self.inner.post(&url, payload)
    }

    // Commits

    /// Get a commit
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/commits/#get-a-commit
    pub fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        self.get_object(COMMIT, owner, repo, sha)
    }

    /// Create a commit
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/commits/#create-a-commit
    pub fn create_commit(&self, owner: &str, repo: &str, commit: &NewCommit) -> Result<Value> {
        let url = COMMITS.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.post(&url, Payload::from_serialize(commit)?)
    }

    // References

    /// List all references, optionally limited to a namespace such as `tags` or `heads`
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/refs/#get-all-references
    pub fn list_references(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = REFS.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Get a reference. `reference` is given without the `refs/` prefix, e.g. `heads/master`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/refs/#get-a-reference
    pub fn get_reference(&self, owner: &str, repo: &str, reference: &str) -> Result<Value> {
        let url = REF.resolve(&[("owner", owner), ("repo", repo), ("ref", reference)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a reference. `reference` is the fully qualified name, e.g. `refs/heads/master`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/refs/#create-a-reference
    pub fn create_reference(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        sha: &str,
    ) -> Result<Value> {
        let url = REFS.resolve(&[("owner", owner), ("repo", repo)])?;
        let payload = Payload::new().with("ref", reference).with("sha", sha);

        self.inner.post(&url, payload)
    }

    /// Update a reference
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/refs/#update-a-reference
    pub fn update_reference(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        sha: &str,
        force: bool,
    ) -> Result<Value> {
        let url = REF.resolve(&[("owner", owner), ("repo", repo), ("ref", reference)])?;
        let payload = Payload::new().with("sha", sha).with("force", force);

        self.inner.patch(&url, payload)
    }

    /// Delete a reference
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/refs/#delete-a-reference
    pub fn delete_reference(&self, owner: &str, repo: &str, reference: &str) -> Result<Value> {
        let url = REF.resolve(&[("owner", owner), ("repo", repo), ("ref", reference)])?;
        self.inner.delete(&url, Payload::new())
    }

    // Tags

    pub fn get_tag(&self, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        self.get_object(TAG, owner, repo, sha)
    }

    /// Create an annotated tag object. The tag reference itself still has to be created with
    /// `create_reference`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/tags/#create-a-tag-object
    pub fn create_tag(&self, owner: &str, repo: &str, tag: &NewTag) -> Result<Value> {
        let url = TAGS.resolve(&[("owner", owner), ("repo", repo)])?;
        self.inner.post(&url, Payload::from_serialize(tag)?)
    }

    // Trees

    /// Get a tree, with `recursive` the whole tree below it
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/trees/#get-a-tree
    pub fn get_tree(&self, owner: &str, repo: &str, sha: &str, recursive: bool) -> Result<Value> {
        let url = TREE.resolve(&[("owner", owner), ("repo", repo), ("sha", sha)])?;
        let payload = Payload::new().with("recursive", recursive);

        self.inner.get(&url, payload)
    }

    /// Create a tree, on top of `base_tree` when given
    ///
    /// GitHub API docs: https://developer.github.com/v3/git/trees/#create-a-tree
    pub fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        entries: &[TreeEntry],
        base_tree: Option<&str>,
    ) -> Result<Value> {
        let url = TREES.resolve(&[("owner", owner), ("repo", repo)])?;
        let payload = Payload::new()
            .with("tree", serde_json::to_value(entries)?)
            .with("base_tree", json!(base_tree));

        self.inner.post(&url, payload)
    }
}

#[cfg(test)]
mod test {
    use super::{NewCommit, Signature, TreeEntry, TreeEntryMode, TreeEntryType};
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn update_reference_is_a_patch() {
        let (client, transport) = mock::client();

        client
            .git()
            .update_reference("octocat", "Hello-World", "heads/master", "aa218f56", true)
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/git/refs/heads/master"
        );
        assert_eq!(
            request.body.as_deref(),
            Some("sha=aa218f56&force=1&access_token=t0ken")
        );
    }

    #[test]
    fn create_commit() {
        let (client, transport) = mock::client();
        let commit = NewCommit {
            message: "my commit message".to_owned(),
            tree: "827efc6d".to_owned(),
            parents: vec!["7d1b31e7".to_owned()],
            author: Some(Signature {
                name: "Scott Chacon".to_owned(),
                email: "schacon@gmail.com".to_owned(),
                date: None,
            }),
            committer: None,
        };

        client
            .git()
            .create_commit("octocat", "Hello-World", &commit)
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "https://api.github.com/repos/octocat/Hello-World/git/commits"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(
                "message=my+commit+message&tree=827efc6d&parents%5B0%5D=7d1b31e7\
                 &author%5Bname%5D=Scott+Chacon&author%5Bemail%5D=schacon%40gmail.com\
                 &access_token=t0ken"
            )
        );
    }

    #[test]
    fn create_tree() {
        let (client, transport) = mock::client();
        let entries = vec![TreeEntry {
            path: "file.rb".to_owned(),
            mode: TreeEntryMode::File,
            entry_type: TreeEntryType::Blob,
            sha: Some("44b4fc6d".to_owned()),
            content: None,
        }];

        client
            .git()
            .create_tree("octocat", "Hello-World", &entries, None)
            .unwrap();

        assert_eq!(
            transport.last().body.as_deref(),
            Some(
                "tree%5B0%5D%5Bpath%5D=file.rb&tree%5B0%5D%5Bmode%5D=100644\
                 &tree%5B0%5D%5Btype%5D=blob&tree%5B0%5D%5Bsha%5D=44b4fc6d\
                 &access_token=t0ken"
            )
        );
    }

    #[test]
    fn recursive_tree() {
        let (client, transport) = mock::client();

        client
            .git()
            .get_tree("octocat", "Hello-World", "9fb037999", true)
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/repos/octocat/Hello-World/git/trees/9fb037999?recursive=1&access_token=t0ken"
        );
    }

    #[test]
    fn every_endpoint_resolves() {
        use super::{BlobEncoding, NewTag};

        let (client, transport) = mock::client();
        let git = client.git();
        let entries = vec![TreeEntry {
            path: "file.rb".to_owned(),
            mode: TreeEntryMode::File,
            entry_type: TreeEntryType::Blob,
            sha: None,
            content: Some("puts 1".to_owned()),
        }];

        mock::assert_all_sent(
            &transport,
            vec![
                git.get_blob("o", "r", "3a0f86fb"),
                git.create_blob("o", "r", "Content", BlobEncoding::Utf8),
                git.get_commit("o", "r", "7638417d"),
                git.create_commit("o", "r", &NewCommit::default()),
                git.list_references("o", "r"),
                git.get_reference("o", "r", "heads/master"),
                git.create_reference("o", "r", "refs/heads/topic", "aa218f56"),
                git.update_reference("o", "r", "heads/topic", "aa218f56", false),
                git.delete_reference("o", "r", "heads/topic"),
                git.get_tag("o", "r", "940bd336"),
                git.create_tag("o", "r", &NewTag::default()),
                git.get_tree("o", "r", "9fb037999", true),
                git.create_tree("o", "r", &entries, Some("9fb037999")),
            ],
        );
    }
}
