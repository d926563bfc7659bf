//! Per-field symbols and styles.
//!
//! Each part of the status line is a [`Field`]. A field looks up its style in
//! [`Styles`] and its glyph in [`Symbols`] through an exhaustive match, so
//! adding a field fails to compile until every lookup handles it.

use serde::{Deserialize, Serialize};

/// A styled part of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    /// Style emitted before every segment to drop the previous style
    Clear,
    Clean,
    Branch,
    Remote,
    Divergence,
    Staged,
    Conflict,
    Modified,
    Stashed,
    Untracked,
    Insertions,
    Deletions,
}

/// Working-tree flags in the order they appear in the flags segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Flag {
    Staged,
    Conflict,
    Modified,
    Stashed,
    Untracked,
}

impl Flag {
    pub const ORDER: [Flag; 5] = [
        Flag::Staged,
        Flag::Conflict,
        Flag::Modified,
        Flag::Stashed,
        Flag::Untracked,
    ];

    pub fn field(self) -> Field {
        match self {
            Flag::Staged => Field::Staged,
            Flag::Conflict => Field::Conflict,
            Flag::Modified => Field::Modified,
            Flag::Stashed => Field::Stashed,
            Flag::Untracked => Field::Untracked,
        }
    }
}

/// Opaque style tokens (tmux `#[...]` markup), one per field.
///
/// An empty style emits nothing but does not hide the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub clear: String,
    pub clean: String,
    pub branch: String,
    pub remote: String,
    pub divergence: String,
    pub staged: String,
    pub conflict: String,
    pub modified: String,
    pub stashed: String,
    pub untracked: String,
    pub insertions: String,
    pub deletions: String,
}

impl Styles {
    /// Styles with every token empty (unstyled output).
    pub fn empty() -> Self {
        Self {
            clear: String::new(),
            clean: String::new(),
            branch: String::new(),
            remote: String::new(),
            divergence: String::new(),
            staged: String::new(),
            conflict: String::new(),
            modified: String::new(),
            stashed: String::new(),
            untracked: String::new(),
            insertions: String::new(),
            deletions: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Clear => &self.clear,
            Field::Clean => &self.clean,
            Field::Branch => &self.branch,
            Field::Remote => &self.remote,
            Field::Divergence => &self.divergence,
            Field::Staged => &self.staged,
            Field::Conflict => &self.conflict,
            Field::Modified => &self.modified,
            Field::Stashed => &self.stashed,
            Field::Untracked => &self.untracked,
            Field::Insertions => &self.insertions,
            Field::Deletions => &self.deletions,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            clear: "#[fg=default]".to_string(),
            clean: "#[fg=green,bold]".to_string(),
            branch: "#[fg=white,bold]".to_string(),
            remote: "#[fg=cyan]".to_string(),
            divergence: "#[fg=default]".to_string(),
            staged: "#[fg=green,bold]".to_string(),
            conflict: "#[fg=red,bold]".to_string(),
            modified: "#[fg=red,bold]".to_string(),
            stashed: "#[fg=cyan,bold]".to_string(),
            untracked: "#[fg=magenta,bold]".to_string(),
            insertions: "#[fg=green]".to_string(),
            deletions: "#[fg=red]".to_string(),
        }
    }
}

/// Display glyphs.
///
/// An empty flag symbol hides that flag along with its count. Divergence
/// (`ahead`/`behind`) and stats symbols never hide anything: those parts are
/// shown whenever their count is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub branch: String,
    pub clean: String,
    pub staged: String,
    pub conflict: String,
    pub modified: String,
    pub stashed: String,
    pub untracked: String,
    pub ahead: String,
    pub behind: String,
    pub insertions: String,
    pub deletions: String,
}

impl Symbols {
    /// Symbols with every glyph empty (all flags hidden).
    pub fn empty() -> Self {
        Self {
            branch: String::new(),
            clean: String::new(),
            staged: String::new(),
            conflict: String::new(),
            modified: String::new(),
            stashed: String::new(),
            untracked: String::new(),
            ahead: String::new(),
            behind: String::new(),
            insertions: String::new(),
            deletions: String::new(),
        }
    }

    /// Glyph for `field`. Fields drawn without a glyph (`clear`, `remote`,
    /// `divergence`) return `""`; divergence glyphs live in `ahead`/`behind`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Clear | Field::Remote | Field::Divergence => "",
            Field::Clean => &self.clean,
            Field::Branch => &self.branch,
            Field::Staged => &self.staged,
            Field::Conflict => &self.conflict,
            Field::Modified => &self.modified,
            Field::Stashed => &self.stashed,
            Field::Untracked => &self.untracked,
            Field::Insertions => &self.insertions,
            Field::Deletions => &self.deletions,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            branch: "⎇ ".to_string(),
            clean: "✔".to_string(),
            staged: "● ".to_string(),
            conflict: "✖ ".to_string(),
            modified: "✚ ".to_string(),
            stashed: "⚑ ".to_string(),
            untracked: "… ".to_string(),
            ahead: "↑·".to_string(),
            behind: "↓·".to_string(),
            insertions: "Σ".to_string(),
            deletions: "Δ".to_string(),
        }
    }
}

/// Render one field as `style + symbol + count`.
///
/// Returns `None` when `symbol` is empty. A `None` count renders the symbol
/// alone.
pub fn render_field(symbol: &str, style: &str, count: Option<u32>) -> Option<String> {
    if symbol.is_empty() {
        return None;
    }
    Some(match count {
        Some(count) => format!("{style}{symbol}{count}"),
        None => format!("{style}{symbol}"),
    })
}
