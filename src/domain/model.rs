use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

pub const DEFAULT_IDS: [u32; 5] = [1, 2, 3, 4, 5];
pub const DEFAULT_DELAY_MS: u64 = 100;
pub const PRIMARY_TARGET: &str = "container";
pub const SECONDARY_TARGET: &str = "container__2";
pub const LABEL_CLASSES: [&str; 2] = ["art-name", "heading-MB-Mon"];

/// Ordered identifiers rendered by the page. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierList(Vec<u32>);

impl IdentifierList {
    pub fn new(ids: impl Into<Vec<u32>>) -> Self {
        Self(ids.into())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Default for IdentifierList {
    fn default() -> Self {
        Self(DEFAULT_IDS.to_vec())
    }
}

impl Deref for IdentifierList {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

pub fn href_for(id: u32) -> String {
    format!("/punk/{}", id)
}

pub fn text_for(id: u32) -> String {
    format!("Punk {}", id)
}

/// Label as a ready-made markup string.
pub fn markup_for(id: u32) -> String {
    AnchorElement::for_punk(id).to_string()
}

/// Label as a structured element, appended child by child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorElement {
    pub href: String,
    pub class_list: Vec<String>,
    pub inner_text: String,
}

impl AnchorElement {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            class_list: Vec::new(),
            inner_text: String::new(),
        }
    }

    pub fn for_punk(id: u32) -> Self {
        let mut element = Self::new(href_for(id));
        element.add_classes(&LABEL_CLASSES);
        element.inner_text = text_for(id);
        element
    }

    /// Adds each class once, keeping insertion order.
    pub fn add_classes(&mut self, classes: &[&str]) {
        for class in classes {
            if !self.class_list.iter().any(|c| c == class) {
                self.class_list.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }
}

impl fmt::Display for AnchorElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\"", escape_html(&self.href))?;
        if !self.class_list.is_empty() {
            write!(f, " class=\"{}\"", escape_html(&self.class_list.join(" ")))?;
        }
        write!(f, ">{}</a>", escape_html(&self.inner_text))
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub id: String,
    pub inner_html: String,
    pub child_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub generated_at: DateTime<Utc>,
    pub targets: Vec<TargetSnapshot>,
}

impl PageSnapshot {
    pub fn target(&self, id: &str) -> Option<&TargetSnapshot> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn to_html(&self) -> String {
        self.targets
            .iter()
            .map(|t| format!("<div id=\"{}\">{}</div>", t.id, t.inner_html))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
