use std::fmt::Write as _;

use crate::OrderedMap;

/// Attribute name to value, in the order they are written out.
pub type Attributes = OrderedMap<String>;

const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// A tag injected into the `<head>` of every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct HeadTag {
    pub tag: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(name, value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.to_ascii_lowercase().as_str())
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in self.attrs.iter() {
            let _ = write!(html, " {name}=\"{}\"", escape(value));
        }
        html.push('>');
        if !self.is_void() {
            if let Some(content) = &self.content {
                html.push_str(content);
            }
            let _ = write!(html, "</{}>", self.tag);
        }
        html
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
