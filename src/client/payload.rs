use crate::client::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// The parameters of a single request, in insertion order.
///
/// A `Payload` ends up either in the query string or in a form encoded body, depending on the
/// verb. Before it is sent every empty value (`null`, `false`, `0`, `""`, `[]`, `{}`) is
/// dropped, so an optional parameter is expressed by leaving it out. A consequence is that an
/// explicit `false` or `0` can't be transmitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from any options struct that serializes to a map.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Payload(map)),
            Value::Null => Ok(Self::new()),
            other => Err(format!("payload must serialize to a map, got `{}`", other).into()),
        }
    }

    /// A payload made of a bare list, keyed by position (`0=a&1=b`).
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), Value::String(item.into())))
            .collect();
        Payload(map)
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder form of `insert`.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Drop every empty value, looking inside nested maps as well.
    pub fn strip_empty(self) -> Self {
        Payload(strip_map(self.0))
    }

    /// Encode as `application/x-www-form-urlencoded`. Nested maps and lists use bracket
    /// notation: `author[name]=x`, `labels[0]=bug`.
    pub fn to_form(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for (key, value) in &self.0 {
            append(&mut serializer, key, value);
        }

        serializer.finish()
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload(map)
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn strip_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(strip_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_value).collect()),
        other => other,
    }
}

fn strip_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key, strip_value(value)))
        .filter(|(_, value)| !is_empty_value(value))
        .collect()
}

fn append(serializer: &mut form_urlencoded::Serializer<String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            serializer.append_pair(key, &n.to_string());
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                append(serializer, &format!("{}[{}]", key, i), item);
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                append(serializer, &format!("{}[{}]", key, name), item);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Payload;
    use serde::Serialize;
    use serde_json::json;

    #[test]
    fn strip_empty() {
        let payload = Payload::new()
            .with("empty", "")
            .with("no", false)
            .with("zero", 0)
            .with("none", json!(null))
            .with("list", json!([]))
            .with("map", json!({}))
            .with("text", "0")
            .with("yes", true)
            .with("count", 3)
            .strip_empty();

        assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["text", "yes", "count"]);
        assert_eq!(payload.get("text"), Some(&json!("0")));
    }

    #[test]
    fn strip_empty_nested() {
        let payload = Payload::new()
            .with("author", json!({ "name": "Monalisa", "email": "" }))
            .with("committer", json!({ "name": null }))
            .strip_empty();

        assert_eq!(payload.get("author"), Some(&json!({ "name": "Monalisa" })));
        assert!(!payload.contains_key("committer"));
    }

    #[test]
    fn form_keeps_insertion_order() {
        let form = Payload::new()
            .with("title", "Found a bug")
            .with("body", "I'm having a problem")
            .with("access_token", "abc")
            .to_form();

        assert_eq!(
            form,
            "title=Found+a+bug&body=I%27m+having+a+problem&access_token=abc"
        );
    }

    #[test]
    fn form_nested() {
        let form = Payload::new()
            .with("labels", json!(["bug", "ui"]))
            .with("author", json!({ "name": "Monalisa" }))
            .with("public", true)
            .with("milestone", 4)
            .to_form();

        assert_eq!(
            form,
            "labels%5B0%5D=bug&labels%5B1%5D=ui&author%5Bname%5D=Monalisa&public=1&milestone=4"
        );
    }

    #[test]
    fn list() {
        let payload = Payload::list(vec!["octocat@github.com", "support@github.com"]);
        assert_eq!(
            payload.to_form(),
            "0=octocat%40github.com&1=support%40github.com"
        );
    }

    #[test]
    fn from_serialize() {
        #[derive(Serialize)]
        struct Options {
            state: &'static str,
            since: Option<String>,
            per_page: u32,
        }

        let payload = Payload::from_serialize(&Options {
            state: "open",
            since: None,
            per_page: 0,
        })
        .unwrap()
        .strip_empty();

        assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["state"]);
        assert!(Payload::from_serialize(&"not a map").is_err());
    }
}
