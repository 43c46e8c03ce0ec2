use crate::client::{
    options::comma_separated, Client, IssueState, Payload, Result, SortDirection, StateFilter,
    Template,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// Issues
const ISSUES: Template = Template::new("issues");
const USER_ISSUES: Template = Template::new("user/issues");
const ORG_ISSUES: Template = Template::new("orgs/:org/issues");
const REPO_ISSUES: Template = Template::new("repos/:owner/:repo/issues");
const ISSUE: Template = Template::new("repos/:owner/:repo/issues/:number");

// Assignees
const ASSIGNEES: Template = Template::new("repos/:owner/:repo/assignees");
const ASSIGNEE: Template = Template::new("repos/:owner/:repo/assignees/:assignee");

// Comments
const ISSUE_COMMENTS: Template = Template::new("repos/:owner/:repo/issues/:number/comments");
const REPO_COMMENTS: Template = Template::new("repos/:owner/:repo/issues/comments");
const COMMENT: Template = Template::new("repos/:owner/:repo/issues/comments/:id");

// Events
const ISSUE_EVENTS: Template = Template::new("repos/:owner/:repo/issues/:number/events");
const REPO_EVENTS: Template = Template::new("repos/:owner/:repo/issues/events");
const EVENT: Template = Template::new("repos/:owner/:repo/issues/events/:id");

// Labels
const LABELS: Template = Template::new("repos/:owner/:repo/labels");
const LABEL: Template = Template::new("repos/:owner/:repo/labels/:name");
const ISSUE_LABELS: Template = Template::new("repos/:owner/:repo/issues/:number/labels");
const ISSUE_LABEL: Template = Template::new("repos/:owner/:repo/issues/:number/labels/:name");
const MILESTONE_LABELS: Template = Template::new("repos/:owner/:repo/milestones/:number/labels");

// Milestones
const MILESTONES: Template = Template::new("repos/:owner/:repo/milestones");
const MILESTONE: Template = Template::new("repos/:owner/:repo/milestones/:number");

#[derive(Debug, Default, Serialize)]
pub struct ListIssuesOptions {
    /// Indicates which sorts of issues to return. Default: assigned
    pub filter: IssueFilter,

    /// Indicates the state of the issues to return. Default: open
    pub state: StateFilter,

    /// Label names, sent comma separated. Example: bug,ui,@high
    #[serde(serialize_with = "comma_separated")]
    pub labels: Vec<String>,

    /// What to sort results by. Default: created
    pub sort: IssueSort,

    /// The direction of the sort. Default: desc
    pub direction: SortDirection,

    /// Only issues updated at or after this time are returned.
    pub since: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueFilter {
    /// Issues assigned to you
    Assigned,
    /// Issues created by you
    Created,
    /// Issues mentioning you
    Mentioned,
    /// Issues you're subscribed to updates for
    Subscribed,
    /// All issues the authenticated user can see, regardless of participation or creation
    All,
}

impl Default for IssueFilter {
    fn default() -> Self {
        IssueFilter::Assigned
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSort {
    Created,
    Updated,
    Comments,
}

impl Default for IssueSort {
    fn default() -> Self {
        IssueSort::Created
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ListRepoIssuesOptions {
    pub milestone: Option<MilestoneFilter>,

    /// Indicates the state of the issues to return. Default: open
    pub state: StateFilter,

    /// Can be the name of a user. Pass in none for issues with no assigned user, and * for issues
    /// assigned to any user.
    pub assignee: Option<String>,

    /// The user that created the issue.
    pub creator: Option<String>,

    /// A user that's mentioned in the issue.
    pub mentioned: Option<String>,

    #[serde(serialize_with = "comma_separated")]
    pub labels: Vec<String>,

    pub sort: IssueSort,

    pub direction: SortDirection,

    pub since: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MilestoneFilter {
    Number(u64),
    Any,
    None,
}

impl Serialize for MilestoneFilter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            MilestoneFilter::Number(v) => serializer.serialize_u64(*v),
            MilestoneFilter::Any => serializer.serialize_str("*"),
            MilestoneFilter::None => serializer.serialize_str("none"),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct IssueRequest {
    /// The title of the issue
    pub title: String,
    /// The contents of the issue
    pub body: Option<String>,
    /// Login of the user to assign the issue to
    pub assignee: Option<String>,
    /// The number of the milestone to associate this issue with
    pub milestone: Option<u64>,
    /// Labels to associate with this issue
    pub labels: Vec<String>,
    /// Only honored when updating
    pub state: Option<IssueState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSort {
    Created,
    Updated,
}

impl Default for CommentSort {
    fn default() -> Self {
        CommentSort::Created
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ListCommentsOptions {
    /// What to sort results by. Default: created
    pub sort: CommentSort,

    /// The direction of the sort. Ignored without `sort`.
    pub direction: SortDirection,

    /// Only comments updated at or after this time are returned.
    pub since: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneSort {
    DueDate,
    Completeness,
}

impl Default for MilestoneSort {
    fn default() -> Self {
        MilestoneSort::DueDate
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ListMilestonesOptions {
    pub state: StateFilter,
    pub sort: MilestoneSort,
    /// Default: asc
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Default, Serialize)]
pub struct MilestoneRequest {
    pub title: String,
    pub state: Option<IssueState>,
    pub description: Option<String>,
    pub due_on: Option<DateTime<Utc>>,
}

/// `IssuesClient` handles communication with the issue related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/issues/
pub struct IssuesClient<'a> {
    inner: &'a Client,
}

impl<'a> IssuesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn repo_url(&self, template: Template, owner: &str, repo: &str) -> Result<String> {
        template.resolve(&[("owner", owner), ("repo", repo)])
    }

    fn issue_url(&self, template: Template, owner: &str, repo: &str, number: u64) -> Result<String> {
        template.resolve(&[
            ("owner", owner),
            ("repo", repo),
            ("number", &number.to_string()),
        ])
    }

    fn id_url(&self, template: Template, owner: &str, repo: &str, id: u64) -> Result<String> {
        template.resolve(&[("owner", owner), ("repo", repo), ("id", &id.to_string())])
    }

    fn label_url(&self, template: Template, owner: &str, repo: &str, name: &str) -> Result<String> {
        template.resolve(&[("owner", owner), ("repo", repo), ("name", name)])
    }

    /// List all issues assigned to the authenticated user across all visible repositories
    /// including owned repositories, member repositories, and organization repositories.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#list-issues
    pub fn list(&self, options: &ListIssuesOptions) -> Result<Value> {
        self.inner
            .get(ISSUES.as_str(), Payload::from_serialize(options)?)
    }

    /// List issues across owned and member repositories of the authenticated user
    pub fn list_for_user(&self, options: &ListIssuesOptions) -> Result<Value> {
        self.inner
            .get(USER_ISSUES.as_str(), Payload::from_serialize(options)?)
    }

    /// List issues in an organization for the authenticated user
    pub fn list_for_org(&self, org: &str, options: &ListIssuesOptions) -> Result<Value> {
        let url = ORG_ISSUES.resolve(&[("org", org)])?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// List issues for a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#list-issues-for-a-repository
    pub fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: &ListRepoIssuesOptions,
    ) -> Result<Value> {
        let url = self.repo_url(REPO_ISSUES, owner, repo)?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    /// Get a single issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#get-a-single-issue
    pub fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(ISSUE, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create an issue. `issue.state` is not sent.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#create-an-issue
    pub fn create(&self, owner: &str, repo: &str, issue: &IssueRequest) -> Result<Value> {
        let url = self.repo_url(REPO_ISSUES, owner, repo)?;
        let mut payload = Payload::from_serialize(issue)?;
        payload.remove("state");

        self.inner.post(&url, payload)
    }

    /// Edit an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#edit-an-issue
    pub fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        issue: &IssueRequest,
    ) -> Result<Value> {
        let url = self.issue_url(ISSUE, owner, repo, number)?;
        self.inner.patch(&url, Payload::from_serialize(issue)?)
    }

    // Assignee Endpoint

    /// Lists the available assignees for issues in a repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#list-assignees
    pub fn list_assignees(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = self.repo_url(ASSIGNEES, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// Checks if a user has permission to be assigned to an issue in this repository. Answers
    /// 204 (`null`) when they can and 404 otherwise.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#check-assignee
    pub fn check_assignee(&self, owner: &str, repo: &str, assignee: &str) -> Result<Value> {
        let url = ASSIGNEE.resolve(&[("owner", owner), ("repo", repo), ("assignee", assignee)])?;
        self.inner.get(&url, Payload::new())
    }

    // Comment Endpoint

    /// List comments on an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#list-comments-on-an-issue
    pub fn list_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(ISSUE_COMMENTS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// List comments in a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#list-comments-in-a-repository
    pub fn list_repo_comments(
        &self,
        owner: &str,
        repo: &str,
        options: &ListCommentsOptions,
    ) -> Result<Value> {
        let url = self.repo_url(REPO_COMMENTS, owner, repo)?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    pub fn get_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = self.id_url(COMMENT, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#create-a-comment
    pub fn create_comment(&self, owner: &str, repo: &str, number: u64, body: &str) -> Result<Value> {
        let url = self.issue_url(ISSUE_COMMENTS, owner, repo, number)?;
        self.inner.post(&url, Payload::new().with("body", body))
    }

    /// Edit a comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#edit-a-comment
    pub fn edit_comment(&self, owner: &str, repo: &str, id: u64, body: &str) -> Result<Value> {
        let url = self.id_url(COMMENT, owner, repo, id)?;
        self.inner.patch(&url, Payload::new().with("body", body))
    }

    /// Delete a comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#delete-a-comment
    pub fn delete_comment(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = self.id_url(COMMENT, owner, repo, id)?;
        self.inner.delete(&url, Payload::new())
    }

    // Event Endpoint

    /// List events for an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/events/#list-events-for-an-issue
    pub fn list_events(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(ISSUE_EVENTS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// List events for a repository
    pub fn list_repo_events(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = self.repo_url(REPO_EVENTS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// Get a single event
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/events/#get-a-single-event
    pub fn get_event(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
        let url = self.id_url(EVENT, owner, repo, id)?;
        self.inner.get(&url, Payload::new())
    }

    // Label Endpoint

    /// List all labels for this repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#list-all-labels-for-this-repository
    pub fn list_labels(&self, owner: &str, repo: &str) -> Result<Value> {
        let url = self.repo_url(LABELS, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_label(&self, owner: &str, repo: &str, name: &str) -> Result<Value> {
        let url = self.label_url(LABEL, owner, repo, name)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a label. `color` is a 6 character hex code without the leading `#`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#create-a-label
    pub fn create_label(&self, owner: &str, repo: &str, name: &str, color: &str) -> Result<Value> {
        let url = self.repo_url(LABELS, owner, repo)?;
        let payload = Payload::new().with("name", name).with("color", color);

        self.inner.post(&url, payload)
    }

    /// Update a label
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#update-a-label
    pub fn update_label(
        &self,
        owner: &str,
        repo: &str,
        current_name: &str,
        name: &str,
        color: &str,
    ) -> Result<Value> {
        let url = self.label_url(LABEL, owner, repo, current_name)?;
        let payload = Payload::new().with("name", name).with("color", color);

        self.inner.patch(&url, payload)
    }

    /// Delete a label
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#delete-a-label
    pub fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<Value> {
        let url = self.label_url(LABEL, owner, repo, name)?;
        self.inner.delete(&url, Payload::new())
    }

    /// List labels on an issue
    pub fn list_issue_labels(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(ISSUE_LABELS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Add labels to an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#add-labels-to-an-issue
    pub fn add_labels(&self, owner: &str, repo: &str, number: u64, labels: &[&str]) -> Result<Value> {
        let url = self.issue_url(ISSUE_LABELS, owner, repo, number)?;
        self.inner.post(&url, Payload::list(labels.iter().copied()))
    }

    /// Remove a label from an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#remove-a-label-from-an-issue
    pub fn remove_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<Value> {
        let url = ISSUE_LABEL.resolve(&[
            ("owner", owner),
            ("repo", repo),
            ("number", &number.to_string()),
            ("name", label),
        ])?;
        self.inner.delete(&url, Payload::new())
    }

    /// Replace all labels for an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/labels/#replace-all-labels-for-an-issue
    pub fn replace_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[&str],
    ) -> Result<Value> {
        let url = self.issue_url(ISSUE_LABELS, owner, repo, number)?;
        self.inner.put(&url, Payload::list(labels.iter().copied()))
    }

    /// Get labels for every issue in a milestone
    pub fn list_milestone_labels(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(MILESTONE_LABELS, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    // Milestone Endpoint

    /// List milestones for a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/milestones/#list-milestones-for-a-repository
    pub fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        options: &ListMilestonesOptions,
    ) -> Result<Value> {
        let url = self.repo_url(MILESTONES, owner, repo)?;
        self.inner.get(&url, Payload::from_serialize(options)?)
    }

    pub fn get_milestone(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(MILESTONE, owner, repo, number)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create a milestone
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/milestones/#create-a-milestone
    pub fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone: &MilestoneRequest,
    ) -> Result<Value> {
        let url = self.repo_url(MILESTONES, owner, repo)?;
        self.inner.post(&url, Payload::from_serialize(milestone)?)
    }

    /// Update a milestone
    pub fn update_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        milestone: &MilestoneRequest,
    ) -> Result<Value> {
        let url = self.issue_url(MILESTONE, owner, repo, number)?;
        self.inner.patch(&url, Payload::from_serialize(milestone)?)
    }

    pub fn delete_milestone(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let url = self.issue_url(MILESTONE, owner, repo, number)?;
        self.inner.delete(&url, Payload::new())
    }
}
