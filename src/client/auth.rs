use crate::client::{Error, HttpTransport, Payload, Request, Result, Transport, TransportConfig};
use log::debug;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

pub const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const ACCESS_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Token granted by the OAuth web flow.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Comma separated scopes that were granted, which may differ from the requested ones
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}

/// The OAuth2 web application flow of GitHub.
///
/// Send the user to `authorize_url`, then trade the `code` GitHub hands to the redirect uri
/// for an access token with `exchange_code`.
///
/// GitHub API docs: https://developer.github.com/v3/oauth/#web-application-flow
pub struct Auth {
    client_id: String,
    client_secret: String,
    redirect_uri: Url,
    transport: Box<dyn Transport>,
}

impl Auth {
    pub fn new<S: Into<String>>(client_id: S, client_secret: S, redirect_uri: &str) -> Result<Self> {
        let transport = HttpTransport::new(&TransportConfig::default())?;
        Self::with_transport(client_id, client_secret, redirect_uri, transport)
    }

    pub fn with_transport<S, T>(
        client_id: S,
        client_secret: S,
        redirect_uri: &str,
        transport: T,
    ) -> Result<Self>
    where
        S: Into<String>,
        T: Transport + 'static,
    {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(Error::invalid_argument("client_id", "is required"));
        }
        let client_secret = client_secret.into();
        if client_secret.is_empty() {
            return Err(Error::invalid_argument("client_secret", "is required"));
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri: Url::parse(redirect_uri)?,
            transport: Box::new(transport),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    /// The url to send the user to. `state` should be an unguessable random string, it is
    /// handed back to the redirect uri unchanged.
    pub fn authorize_url(&self, scopes: &[&str], state: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(AUTHORIZE_URL)?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", self.redirect_uri.as_str());
            if !scopes.is_empty() {
                query.append_pair("scope", &scopes.join(" "));
            }
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }

        Ok(url)
    }

    /// Exchange the temporary `code` for an access token
    pub fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        if code.is_empty() {
            return Err(Error::invalid_argument("code", "is required"));
        }

        let payload = Payload::new()
            .with("client_id", self.client_id.as_str())
            .with("client_secret", self.client_secret.as_str())
            .with("code", code)
            .with("redirect_uri", self.redirect_uri.as_str());
        let request = Request::new(Method::POST, ACCESS_TOKEN_URL, Some(payload.to_form()));

        debug!("OAuth Request: {}", request);
        let response = self.transport.send(&request)?;

        parse_token(response)
    }
}

fn parse_token(response: Value) -> Result<AccessToken> {
    if response.get("error").is_some() {
        let error: ErrorResponse = serde_json::from_value(response)?;
        return Err(Error::OAuth {
            error: error.error,
            description: error.error_description,
        });
    }

    Ok(serde_json::from_value(response)?)
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{AccessToken, Auth, ACCESS_TOKEN_URL};
    use crate::client::{mock::MockTransport, Error};
    use reqwest::Method;
    use serde_json::json;

    fn auth(transport: &MockTransport) -> Auth {
        Auth::with_transport(
            "0123456789",
            "s3cr3t",
            "https://example.com/callback",
            transport.clone(),
        )
        .unwrap()
    }

    #[test]
    fn authorize_url() {
        let auth = auth(&MockTransport::new());

        let url = auth.authorize_url(&["user", "repo"], Some("xyz")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/login/oauth/authorize?client_id=0123456789\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&scope=user+repo&state=xyz"
        );

        let url = auth.authorize_url(&[], None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/login/oauth/authorize?client_id=0123456789\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"
        );
    }

    #[test]
    fn exchange_code() {
        let transport = MockTransport::with_response(json!({
            "access_token": "e72e16c7e42f292c6912e7710c838347ae178b4a",
            "token_type": "bearer",
            "scope": "repo,gist"
        }));

        let token = auth(&transport).exchange_code("abc").unwrap();
        assert_eq!(
            token,
            AccessToken {
                access_token: "e72e16c7e42f292c6912e7710c838347ae178b4a".to_owned(),
                token_type: "bearer".to_owned(),
                scope: "repo,gist".to_owned(),
            }
        );

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, ACCESS_TOKEN_URL);
        assert_eq!(
            request.body.as_deref(),
            Some(
                "client_id=0123456789&client_secret=s3cr3t&code=abc\
                 &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"
            )
        );
    }

    #[test]
    fn exchange_code_error() {
        let transport = MockTransport::with_response(json!({
            "error": "bad_verification_code",
            "error_description": "The code passed is incorrect or expired."
        }));

        let err = auth(&transport).exchange_code("abc").unwrap_err();
        match err {
            Error::OAuth { error, .. } => assert_eq!(error, "bad_verification_code"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn redirect_uri_must_be_a_url() {
        let err = Auth::with_transport("id", "secret", "not a url", MockTransport::new()).unwrap_err();
        assert!(matches!(err, Error::Url(_)));

        let err = auth(&MockTransport::new()).exchange_code("").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
