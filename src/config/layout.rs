//! Layout tokens.
//!
//! The layout is an ordered list of strings in the config file. Known
//! keywords become dynamic parts of the status line; anything else is a
//! literal separator printed as-is. Parsing happens once, when the config is
//! deserialized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutItem {
    /// Branch symbol followed by the local branch name
    Branch,
    /// Remote branch name, followed by the divergence when there is one
    Remote,
    /// Remote branch name alone
    RemoteBranch,
    /// Ahead/behind counts against the upstream
    Divergence,
    /// Working-tree flags
    Flags,
    /// Insertions/deletions
    Stats,
    /// Literal text
    Literal(String),
}

impl LayoutItem {
    /// The config spelling of this item.
    pub fn as_str(&self) -> &str {
        match self {
            LayoutItem::Branch => "branch",
            LayoutItem::Remote => "remote",
            LayoutItem::RemoteBranch => "remote-branch",
            LayoutItem::Divergence => "divergence",
            LayoutItem::Flags => "flags",
            LayoutItem::Stats => "stats",
            LayoutItem::Literal(text) => text,
        }
    }
}

impl From<&str> for LayoutItem {
    fn from(s: &str) -> Self {
        match s {
            "branch" => LayoutItem::Branch,
            "remote" => LayoutItem::Remote,
            "remote-branch" => LayoutItem::RemoteBranch,
            "divergence" => LayoutItem::Divergence,
            "flags" => LayoutItem::Flags,
            "stats" => LayoutItem::Stats,
            _ => LayoutItem::Literal(s.to_string()),
        }
    }
}

impl From<String> for LayoutItem {
    fn from(s: String) -> Self {
        match LayoutItem::from(s.as_str()) {
            LayoutItem::Literal(_) => LayoutItem::Literal(s),
            keyword => keyword,
        }
    }
}

impl From<LayoutItem> for String {
    fn from(item: LayoutItem) -> Self {
        match item {
            LayoutItem::Literal(text) => text,
            keyword => keyword.as_str().to_string(),
        }
    }
}

/// Parse a list of raw layout strings.
pub fn parse_layout<S: AsRef<str>>(items: &[S]) -> Vec<LayoutItem> {
    items.iter().map(|s| LayoutItem::from(s.as_ref())).collect()
}
