use crate::client::{Client, Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

// Organizations
const USER_ORGS: Template = Template::new("users/:user/orgs");
const ORGS: Template = Template::new("user/orgs");
const ORG: Template = Template::new("orgs/:org");

// Members
const MEMBERS: Template = Template::new("orgs/:org/members");
const MEMBER: Template = Template::new("orgs/:org/members/:user");
const PUBLIC_MEMBERS: Template = Template::new("orgs/:org/public_members");
const PUBLIC_MEMBER: Template = Template::new("orgs/:org/public_members/:user");

// Teams
const ORG_TEAMS: Template = Template::new("orgs/:org/teams");
const TEAM: Template = Template::new("teams/:id");
const TEAM_MEMBERS: Template = Template::new("teams/:id/members");
const TEAM_MEMBER: Template = Template::new("teams/:id/members/:user");
const TEAM_REPOS: Template = Template::new("teams/:id/repos");
const TEAM_REPO: Template = Template::new("teams/:id/repos/:owner/:repo");
const USER_TEAMS: Template = Template::new("user/teams");

#[derive(Debug, Default, Serialize)]
pub struct EditOrganization {
    pub billing_email: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamPermission {
    Pull,
    Push,
    Admin,
}

impl Default for TeamPermission {
    fn default() -> Self {
        TeamPermission::Pull
    }
}

#[derive(Debug, Default, Serialize)]
pub struct NewTeam {
    pub name: String,
    /// Repositories to add the team to, as `owner/repo`
    pub repo_names: Vec<String>,
    pub permission: TeamPermission,
}

/// `OrgsClient` handles communication with the organization related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/orgs/
pub struct OrgsClient<'a> {
    inner: &'a Client,
}

impl<'a> OrgsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn team_url(&self, template: Template, id: u64) -> Result<String> {
        template.resolve(&[("id", &id.to_string())])
    }

    fn team_member_url(&self, id: u64, user: &str) -> Result<String> {
        TEAM_MEMBER.resolve(&[("id", &id.to_string()), ("user", user)])
    }

    fn team_repo_url(&self, id: u64, owner: &str, repo: &str) -> Result<String> {
        TEAM_REPO.resolve(&[("id", &id.to_string()), ("owner", owner), ("repo", repo)])
    }

    /// List the public organizations of `user`, or the organizations of the authenticated user
    /// when `None`
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/#list-user-organizations
    pub fn list(&self, user: Option<&str>) -> Result<Value> {
        let url = match user {
            Some(user) => USER_ORGS.resolve(&[("user", user)])?,
            None => ORGS.as_str().to_owned(),
        };
        self.inner.get(&url, Payload::new())
    }

    /// Get an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/#get-an-organization
    pub fn get(&self, org: &str) -> Result<Value> {
        let url = ORG.resolve(&[("org", org)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Edit an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/#edit-an-organization
    pub fn edit(&self, org: &str, edit: &EditOrganization) -> Result<Value> {
        let url = ORG.resolve(&[("org", org)])?;
        self.inner.patch(&url, Payload::from_serialize(edit)?)
    }

    // Members

    /// List all users who are members of an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/members/#members-list
    pub fn list_members(&self, org: &str) -> Result<Value> {
        let url = MEMBERS.resolve(&[("org", org)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Check membership. Answers 204 (`null`) for a member.
    pub fn check_member(&self, org: &str, user: &str) -> Result<Value> {
        let url = MEMBER.resolve(&[("org", org), ("user", user)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Remove a member from all teams of the organization
    pub fn remove_member(&self, org: &str, user: &str) -> Result<Value> {
        let url = MEMBER.resolve(&[("org", org), ("user", user)])?;
        self.inner.delete(&url, Payload::new())
    }

    pub fn list_public_members(&self, org: &str) -> Result<Value> {
        let url = PUBLIC_MEMBERS.resolve(&[("org", org)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Publicize (`true`) or conceal (`false`) the membership of `user`
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/members/#publicize-a-users-membership
    pub fn set_membership_visibility(&self, org: &str, user: &str, publicize: bool) -> Result<Value> {
        let url = PUBLIC_MEMBER.resolve(&[("org", org), ("user", user)])?;
        if publicize {
            self.inner.put(&url, Payload::new())
        } else {
            self.inner.delete(&url, Payload::new())
        }
    }

    // Teams

    /// List teams
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/teams/#list-teams
    pub fn list_teams(&self, org: &str) -> Result<Value> {
        let url = ORG_TEAMS.resolve(&[("org", org)])?;
        self.inner.get(&url, Payload::new())
    }

    pub fn get_team(&self, id: u64) -> Result<Value> {
        let url = self.team_url(TEAM, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Create team
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/teams/#create-team
    pub fn create_team(&self, org: &str, team: &NewTeam) -> Result<Value> {
        let url = ORG_TEAMS.resolve(&[("org", org)])?;
        self.inner.post(&url, Payload::from_serialize(team)?)
    }

    /// Edit team
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/teams/#edit-team
    pub fn edit_team(&self, id: u64, name: &str, permission: TeamPermission) -> Result<Value> {
        let url = self.team_url(TEAM, id)?;
        let payload = Payload::new()
            .with("name", name)
            .with("permission", serde_json::to_value(permission)?);

        self.inner.patch(&url, payload)
    }

    pub fn delete_team(&self, id: u64) -> Result<Value> {
        let url = self.team_url(TEAM, id)?;
        self.inner.delete(&url, Payload::new())
    }

    pub fn list_team_members(&self, id: u64) -> Result<Value> {
        let url = self.team_url(TEAM_MEMBERS, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Check whether `user` is a member of the team
    pub fn get_team_member(&self, id: u64, user: &str) -> Result<Value> {
        let url = self.team_member_url(id, user)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn add_team_member(&self, id: u64, user: &str) -> Result<Value> {
        let url = self.team_member_url(id, user)?;
        self.inner.put(&url, Payload::new())
    }

    pub fn remove_team_member(&self, id: u64, user: &str) -> Result<Value> {
        let url = self.team_member_url(id, user)?;
        self.inner.delete(&url, Payload::new())
    }

    pub fn list_team_repos(&self, id: u64) -> Result<Value> {
        let url = self.team_url(TEAM_REPOS, id)?;
        self.inner.get(&url, Payload::new())
    }

    /// Check whether the team manages a repository
    pub fn get_team_repo(&self, id: u64, owner: &str, repo: &str) -> Result<Value> {
        let url = self.team_repo_url(id, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    pub fn add_team_repo(&self, id: u64, owner: &str, repo: &str) -> Result<Value> {
        let url = self.team_repo_url(id, owner, repo)?;
        self.inner.put(&url, Payload::new())
    }

    pub fn remove_team_repo(&self, id: u64, owner: &str, repo: &str) -> Result<Value> {
        let url = self.team_repo_url(id, owner, repo)?;
        self.inner.delete(&url, Payload::new())
    }

    /// List all of the teams across all of the organizations of the authenticated user
    pub fn list_user_teams(&self) -> Result<Value> {
        self.inner.get(USER_TEAMS.as_str(), Payload::new())
    }
}

#[cfg(test)]
mod test {
    use super::{NewTeam, TeamPermission};
    use crate::client::mock;
    use reqwest::Method;

    #[test]
    fn membership_visibility() {
        let (client, transport) = mock::client();

        client
            .orgs()
            .set_membership_visibility("github", "octocat", true)
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "https://api.github.com/orgs/github/public_members/octocat?access_token=t0ken"
        );

        client
            .orgs()
            .set_membership_visibility("github", "octocat", false)
            .unwrap();
        assert_eq!(transport.last().method, Method::DELETE);
    }

    #[test]
    fn teams() {
        let (client, transport) = mock::client();
        let team = NewTeam {
            name: "Justice League".to_owned(),
            repo_names: vec!["github/dotfiles".to_owned()],
            permission: TeamPermission::Push,
        };

        client.orgs().create_team("github", &team).unwrap();
        let request = transport.last();
        assert_eq!(request.url, "https://api.github.com/orgs/github/teams");
        assert_eq!(
            request.body.as_deref(),
            Some(
                "name=Justice+League&repo_names%5B0%5D=github%2Fdotfiles&permission=push\
                 &access_token=t0ken"
            )
        );

        client
            .orgs()
            .edit_team(1, "Justice League", TeamPermission::Admin)
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url, "https://api.github.com/teams/1");

        client
            .orgs()
            .add_team_repo(1, "github", "dotfiles")
            .unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "https://api.github.com/teams/1/repos/github/dotfiles?access_token=t0ken"
        );
    }

    #[test]
    fn organizations() {
        let (client, transport) = mock::client();

        client.orgs().list(None).unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/user/orgs?access_token=t0ken"
        );

        client.orgs().get("github").unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/orgs/github?access_token=t0ken"
        );
    }

    #[test]
    fn every_endpoint_resolves() {
        use super::EditOrganization;

        let (client, transport) = mock::client();
        let orgs = client.orgs();

        mock::assert_all_sent(
            &transport,
            vec![
                orgs.list(None),
                orgs.list(Some("u")),
                orgs.get("org"),
                orgs.edit("org", &EditOrganization::default()),
                orgs.list_members("org"),
                orgs.check_member("org", "u"),
                orgs.remove_member("org", "u"),
                orgs.list_public_members("org"),
                orgs.set_membership_visibility("org", "u", true),
                orgs.set_membership_visibility("org", "u", false),
                orgs.list_teams("org"),
                orgs.get_team(1),
                orgs.create_team("org", &NewTeam::default()),
                orgs.edit_team(1, "t", TeamPermission::Pull),
                orgs.delete_team(1),
                orgs.list_team_members(1),
                orgs.get_team_member(1, "u"),
                orgs.add_team_member(1, "u"),
                orgs.remove_team_member(1, "u"),
                orgs.list_team_repos(1),
                orgs.get_team_repo(1, "o", "r"),
                orgs.add_team_repo(1, "o", "r"),
                orgs.remove_team_repo(1, "o", "r"),
                orgs.list_user_teams(),
            ],
        );
    }
}
