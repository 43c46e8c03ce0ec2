//! Error type for Github Client

use crate::config::ConfigError;
use std::borrow::Cow;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("url error")]
    Url(#[from] url::ParseError),

    #[error("config error")]
    Config(#[from] ConfigError),

    /// An argument was rejected before any request was sent
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: &'static str },

    /// A `:placeholder` of an endpoint template was left without a value
    #[error("unresolved placeholder `:{placeholder}` in `{template}`")]
    UnresolvedPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    /// The OAuth token endpoint answered with an error payload
    #[error("oauth error `{error}`: {description}")]
    OAuth { error: String, description: String },

    #[error("`{0}`")]
    Message(Cow<'static, str>),
}

impl Error {
    pub(crate) fn invalid_argument<S: Into<String>>(name: S, reason: &'static str) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            reason,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}
