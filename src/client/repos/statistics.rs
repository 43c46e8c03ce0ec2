use super::{repo_url, RepositoryClient};
use crate::client::{Payload, Result, Template};
use serde_json::Value;

const CONTRIBUTORS: Template = Template::new("repos/:owner/:repo/stats/contributors");
const COMMIT_ACTIVITY: Template = Template::new("repos/:owner/:repo/stats/commit_activity");
const CODE_FREQUENCY: Template = Template::new("repos/:owner/:repo/stats/code_frequency");
const PARTICIPATION: Template = Template::new("repos/:owner/:repo/stats/participation");
const PUNCH_CARD: Template = Template::new("repos/:owner/:repo/stats/punch_card");

// Implementation for the statistics endpoint. GitHub computes these in the background and
// answers 202 with an empty object until they are ready.
// https://developer.github.com/v3/repos/statistics/
impl RepositoryClient<'_> {
    fn get_stats(&self, template: Template, owner: &str, repo: &str) -> Result<Value> {
        let url = repo_url(template, owner, repo)?;
        self.inner.get(&url, Payload::new())
    }

    /// Total commit counts and weekly additions, deletions and commits of every contributor
    pub fn get_contributors_stats(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_stats(CONTRIBUTORS, owner, repo)
    }

    /// Commit counts per day of the last year, grouped by week
    pub fn get_commit_activity(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_stats(COMMIT_ACTIVITY, owner, repo)
    }

    /// Weekly aggregate of additions and deletions
    pub fn get_code_frequency(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_stats(CODE_FREQUENCY, owner, repo)
    }

    /// Weekly commit counts of the owner and of everyone else
    pub fn get_participation(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_stats(PARTICIPATION, owner, repo)
    }

    /// Commit counts per hour of each day
    pub fn get_punch_card(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get_stats(PUNCH_CARD, owner, repo)
    }
}
