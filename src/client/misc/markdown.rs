use crate::client::{MiscClient, Payload, Result, Template};
use serde::Serialize;
use serde_json::Value;

const MARKDOWN: Template = Template::new("markdown");
const MARKDOWN_RAW: Template = Template::new("markdown/raw");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkdownMode {
    /// Plain Markdown
    Markdown,
    /// Github Flavored Markdown
    Gfm,
}

impl Default for MarkdownMode {
    fn default() -> Self {
        MarkdownMode::Markdown
    }
}

impl MiscClient<'_> {
    /// Render a Markdown document. The rendered HTML comes back as a `Value::String`.
    /// Optional repository context for `gfm` can be provided: `Some(("owner", "repo"))`
    ///
    /// https://developer.github.com/v3/markdown/#render-an-arbitrary-markdown-document
    pub fn render_markdown(
        &self,
        text: &str,
        mode: Option<MarkdownMode>,
        context: Option<(&str, &str)>,
    ) -> Result<Value> {
        let mut payload = Payload::new().with("text", text);
        if let Some(mode) = mode {
            payload.insert("mode", serde_json::to_value(mode)?);
        }
        if let Some((owner, repo)) = context {
            payload.insert("context", format!("{}/{}", owner, repo));
        }

        self.inner.post(MARKDOWN.as_str(), payload)
    }

    /// Render a Markdown document in raw mode
    ///
    /// https://developer.github.com/v3/markdown/#render-a-markdown-document-in-raw-mode
    pub fn render_markdown_raw(&self, text: &str) -> Result<Value> {
        self.inner
            .post(MARKDOWN_RAW.as_str(), Payload::new().with("text", text))
    }
}
