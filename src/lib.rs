//! A blocking client for the GitHub v3 REST API.
//!
//! Every endpoint call resolves a path template, appends the OAuth `access_token` and hands the
//! request to a [`Transport`](client::Transport). Responses come back as `serde_json::Value`,
//! GitHub's error bodies included.
//!
//! ```no_run
//! # fn main() -> github_v3::Result<()> {
//! let client = github_v3::Client::new("my-token")?;
//! let repo = client.repos().get("octocat", "Hello-World")?;
//! println!("{}", repo["full_name"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
mod config;

pub use client::{Auth, Client, ClientBuilder, Error, Result};
pub use config::{Config, ConfigError, HttpConfig, OAuthConfig};
