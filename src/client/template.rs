use crate::client::{Error, Result};
use std::fmt;

/// Placeholders whose values may span several path segments: file paths, git refs such as
/// `heads/master`, and branch names such as `feature/login`.
const MULTI_SEGMENT: &[&str] = &["path", "ref", "branch", "base", "head"];

/// A path relative to the API root with zero or more `:name` placeholders, e.g.
/// `repos/:owner/:repo/issues/:number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub const fn new(template: &'static str) -> Self {
        Template(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Names of the placeholders in the order they appear.
    #[cfg(test)]
    pub(crate) fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.0;

        while let Some((start, end)) = find_placeholder(rest) {
            names.push(&rest[start + 1..end]);
            rest = &rest[end..];
        }

        names
    }

    /// Substitute `values` into the template, one `(name, value)` pair at a time.
    ///
    /// Every literal occurrence of `:name` is replaced. Text produced by an earlier
    /// substitution is never scanned again, so a value containing `:repo` stays as is.
    /// Values are not percent-encoded; they are rejected when empty or when they contain
    /// characters that would break out of the path (`?`, `#`, whitespace, control
    /// characters). Only `path`, `ref`, `branch`, `base` and `head` may contain `/`, and no
    /// value may contain a `.` or `..` segment. A placeholder left over after all values are
    /// applied is an error.
    pub fn resolve(&self, values: &[(&str, &str)]) -> Result<String> {
        // (text, already substituted)
        let mut segments: Vec<(&str, bool)> = vec![(self.0, false)];

        for (name, value) in values {
            check_segment(name, value)?;
            let token = format!(":{}", name);

            let mut next = Vec::with_capacity(segments.len());
            for (text, substituted) in segments {
                if substituted {
                    next.push((text, true));
                    continue;
                }

                let mut pieces = text.split(token.as_str());
                if let Some(first) = pieces.next() {
                    next.push((first, false));
                }
                for piece in pieces {
                    next.push((*value, true));
                    next.push((piece, false));
                }
            }
            segments = next;
        }

        let mut path = String::with_capacity(self.0.len());
        for (text, substituted) in segments {
            if !substituted {
                if let Some((start, end)) = find_placeholder(text) {
                    return Err(Error::UnresolvedPlaceholder {
                        template: self.0,
                        placeholder: text[start + 1..end].to_owned(),
                    });
                }
            }
            path.push_str(text);
        }

        Ok(path)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Reject values that can't be used verbatim as (part of) a path, or that would make the
/// path point somewhere else once the url is normalized.
pub(crate) fn check_segment(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }

    if value
        .chars()
        .any(|c| c == '?' || c == '#' || c.is_whitespace() || c.is_control())
    {
        return Err(Error::invalid_argument(
            name,
            "must not contain '?', '#', whitespace or control characters",
        ));
    }

    if value.contains('/') && !MULTI_SEGMENT.contains(&name) {
        return Err(Error::invalid_argument(name, "must not contain '/'"));
    }

    if value
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(Error::invalid_argument(
            name,
            "must not contain empty, '.' or '..' path segments",
        ));
    }

    Ok(())
}

// Byte range of the first `:name` token in `text`, colon included.
fn find_placeholder(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b != b':' {
            continue;
        }

        let name_len = bytes[i + 1..]
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == b'_')
            .count();

        let starts_with_letter = bytes
            .get(i + 1)
            .map_or(false, |c| c.is_ascii_alphabetic() || *c == b'_');

        if name_len > 0 && starts_with_letter {
            return Some((i, i + 1 + name_len));
        }
    }

    None
}
