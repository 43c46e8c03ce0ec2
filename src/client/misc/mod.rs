use crate::client::{Client, Payload, Result, Template};
use serde_json::Value;

mod markdown;
mod rate_limit;

pub use markdown::MarkdownMode;
pub use rate_limit::{Rate, RateLimits};

const EMOJIS: Template = Template::new("emojis");
const GITIGNORE_TEMPLATES: Template = Template::new("gitignore/templates");
const GITIGNORE_TEMPLATE: Template = Template::new("gitignore/templates/:name");
const META: Template = Template::new("meta");

/// `MiscClient` handles the endpoints of the GitHub API that belong to no resource: emojis,
/// gitignore templates, markdown rendering, meta and rate limits.
///
/// GitHub API docs: https://developer.github.com/v3/misc/
pub struct MiscClient<'a> {
    inner: &'a Client,
}

impl<'a> MiscClient<'a> {
    pub(in crate::client) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Lists all the emojis available to use on GitHub.
    ///
    /// GitHub API docs: https://developer.github.com/v3/emojis/
    pub fn get_emojis(&self) -> Result<Value> {
        self.inner.get(EMOJIS.as_str(), Payload::new())
    }

    /// List all templates available to pass as an option when creating a repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/gitignore/#listing-available-templates
    pub fn list_gitignore_templates(&self) -> Result<Value> {
        self.inner.get(GITIGNORE_TEMPLATES.as_str(), Payload::new())
    }

    /// Get a single template, e.g. `C`
    pub fn get_gitignore_template(&self, name: &str) -> Result<Value> {
        let url = GITIGNORE_TEMPLATE.resolve(&[("name", name)])?;
        self.inner.get(&url, Payload::new())
    }

    /// Information about GitHub.com, e.g. the IP addresses of the service hooks.
    ///
    /// GitHub API docs: https://developer.github.com/v3/meta/
    pub fn get_meta(&self) -> Result<Value> {
        self.inner.get(META.as_str(), Payload::new())
    }
}

#[cfg(test)]
mod test {
    use crate::client::{mock, Error};

    #[test]
    fn gitignore_template() {
        let (client, transport) = mock::client();

        client.misc().get_gitignore_template("C").unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.github.com/gitignore/templates/C?access_token=t0ken"
        );

        let err = client.misc().get_gitignore_template("").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn every_endpoint_resolves() {
        let (client, transport) = mock::client();
        let misc = client.misc();

        mock::assert_all_sent(
            &transport,
            vec![
                misc.get_emojis(),
                misc.list_gitignore_templates(),
                misc.get_gitignore_template("Rust"),
                misc.render_markdown("Hello", None, None),
                misc.render_markdown_raw("Hello"),
                misc.get_meta(),
                misc.get_rate_limit(),
            ],
        );
    }
}
