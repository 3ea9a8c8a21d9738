//! YAML front matter at the head of a prompt file
//!
//! A block is recognised only when the very first line is `---`. Everything
//! up to the next `---` line is parsed as a YAML mapping; the remainder is
//! the prompt body. Anything unexpected (no closing line, YAML that does not
//! parse, YAML that is not a mapping) leaves the file untouched as body text.

use serde_yaml::Value;
use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Parsed front matter with whitespace-trimmed keys
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontMatter {
    entries: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// Raw YAML value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of top-level keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the block declared no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top-level keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Value under `key` rendered as display text.
    ///
    /// Strings are trimmed, lists are joined with `, `. Missing keys, nulls
    /// and values that render empty give `None`.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        let text = match self.get(key)? {
            Value::Null => return None,
            Value::String(s) => s.trim().to_string(),
            Value::Sequence(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
            other => display_value(other),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Value under `key` as a list of strings.
    ///
    /// A scalar becomes a one-element list; a sequence keeps one entry per
    /// item.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items.iter().map(display_value).collect(),
            Some(other) => vec![display_value(other)],
        }
    }

    /// Tags declared under `tags`.
    ///
    /// Strings are split on `,`, `;` and newlines; list items are rendered and
    /// split the same way. Results are trimmed, empty entries dropped, and
    /// duplicates removed ignoring case (first spelling wins).
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let raw: Vec<String> = match self.get("tags") {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Sequence(items)) => items.iter().map(display_value).collect(),
            Some(other) => vec![display_value(other)],
        };

        let mut seen = std::collections::HashSet::new();
        raw.iter()
            .flat_map(|value| value.split([',', ';', '\n']))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .filter(|tag| seen.insert(tag.to_lowercase()))
            .map(ToString::to_string)
            .collect()
    }
}

/// Render a YAML value the way a user would write it
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", inner.join(" "))
        }
        Value::Tagged(tagged) => display_value(&tagged.value),
        Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Split `text` into optional front matter and body.
///
/// The body has leading newlines removed when a block was present. Without
/// a usable block the whole input is returned as the body.
#[must_use]
pub fn parse(text: &str) -> (Option<FrontMatter>, String) {
    let raw = || (None, text.to_string());

    let mut lines = text.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim() == DELIMITER => {}
        _ => return raw(),
    }

    let yaml_start = text.split_inclusive('\n').next().map_or(0, str::len);
    let mut offset = yaml_start;
    let mut closing = None;
    for line in lines {
        if line.trim() == DELIMITER {
            closing = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let Some((yaml_end, body_start)) = closing else {
        return raw();
    };

    let yaml = &text[yaml_start..yaml_end];
    let body = text[body_start..].trim_start_matches(['\r', '\n']).to_string();

    if yaml.trim().is_empty() {
        return (None, body);
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => {
            let entries = mapping
                .into_iter()
                .map(|(key, value)| (display_value(&key).trim().to_string(), value))
                .collect();
            (Some(FrontMatter { entries }), body)
        }
        // a block holding only comments
        Ok(Value::Null) => (None, body),
        Ok(_) | Err(_) => raw(),
    }
}
