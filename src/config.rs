use crate::client::{Auth, ClientBuilder};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("toml parsing error")]
    De(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
    pub oauth: Option<OAuthConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 60,
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(contents.parse()?)
    }

    /// A `ClientBuilder` carrying every setting of this config. The access token may still be
    /// missing, in which case `build` fails unless one is supplied.
    pub fn client_builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(self.http.connect_timeout_secs))
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .danger_accept_invalid_certs(self.http.accept_invalid_certs);

        if let Some(access_token) = &self.access_token {
            builder = builder.access_token(access_token.as_str());
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        builder
    }

    /// The OAuth web flow configured in the `[oauth]` table
    pub fn auth(&self) -> crate::Result<Auth> {
        let oauth = self
            .oauth
            .as_ref()
            .ok_or("missing [oauth] table in config")?;

        Auth::new(
            oauth.client_id.as_str(),
            oauth.client_secret.as_str(),
            &oauth.redirect_uri,
        )
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};
    use crate::Error;

    #[test]
    fn full() {
        let config: Config = r#"
            access_token = "t0ken"
            base_url = "https://github.example.com/api/v3/"

            [http]
            timeout_secs = 5

            [oauth]
            client_id = "0123456789"
            client_secret = "s3cr3t"
            redirect_uri = "https://example.com/callback"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.access_token.as_deref(), Some("t0ken"));
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert!(!config.http.accept_invalid_certs);
        assert_eq!(
            config.oauth.as_ref().map(|oauth| oauth.client_id.as_str()),
            Some("0123456789")
        );
    }

    #[test]
    fn empty() {
        let config: Config = "".parse().unwrap();

        assert!(config.access_token.is_none());
        assert_eq!(config.http.timeout_secs, 60);
        assert!(matches!(config.auth().unwrap_err(), Error::Message(_)));
    }

    #[test]
    fn unknown_key() {
        let err = "acces_token = \"t0ken\"".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::De(_)));
    }

    #[test]
    fn missing_file() {
        let err = Config::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
