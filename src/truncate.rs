//! Branch name truncation.
//!
//! Long branch names are shortened to a configured budget by replacing the
//! cut part with an ellipsis. The cut happens at the end, the start or the
//! middle of the name, and always falls on a `char` boundary so multi-byte
//! characters are never split.

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Which part of a name survives truncation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Keep the start, cut the end: `super-long-b...`
    #[default]
    #[serde(alias = "trailing")]
    #[strum(to_string = "right", serialize = "trailing")]
    Right,
    /// Keep the end, cut the start: `...-long-branch`
    #[serde(alias = "leading")]
    #[strum(to_string = "left", serialize = "leading")]
    Left,
    /// Keep both ends, cut the middle: `super-...branch`
    #[serde(alias = "centered")]
    #[strum(to_string = "center", serialize = "centered")]
    Center,
}

/// How the length of a name is measured against the budget.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WidthMode {
    /// One unit per code point.
    #[default]
    Chars,
    /// Terminal columns: wide and fullwidth glyphs (CJK, most emoji) count 2.
    Columns,
}

impl WidthMode {
    /// Measure `s` in this mode.
    pub fn str_width(self, s: &str) -> usize {
        match self {
            WidthMode::Chars => s.chars().count(),
            WidthMode::Columns => s.width(),
        }
    }

    /// Byte offsets where `text` may be cut, in increasing order.
    ///
    /// In columns mode a cut never separates a zero-width char (variation
    /// selector, combining mark, ZWJ) from the char before it, nor falls
    /// right after a ZWJ.
    fn cuts(self, text: &str) -> Vec<usize> {
        let mut cuts: Vec<usize> = text
            .char_indices()
            .filter(|&(idx, ch)| match self {
                WidthMode::Chars => true,
                WidthMode::Columns => {
                    idx == 0
                        || (ch.width() != Some(0)
                            && !text[..idx].ends_with('\u{200D}'))
                }
            })
            .map(|(idx, _)| idx)
            .collect();
        cuts.push(text.len());
        cuts
    }
}

/// Truncate `text` to at most `max` code points, inserting `ellipsis` at the cut.
///
/// `max == 0` disables truncation. See [`truncate_with`].
pub fn truncate(text: &str, ellipsis: &str, max: usize, direction: Direction) -> String {
    truncate_with(text, ellipsis, max, direction, WidthMode::Chars)
}

/// Truncate `text` so it measures at most `max` in `mode`.
///
/// Text that already fits, or `max == 0`, is returned unchanged. The ellipsis
/// counts against the budget; when it alone is wider than `max` it is left
/// out and the text is simply cut to `max`.
///
/// For [`Direction::Center`] the kept prefix gets half of the remaining
/// budget (rounded down) and the suffix gets the rest.
///
/// Every candidate is measured as a whole, so the result never measures more
/// than `max` even when `mode` treats a sequence differently from its chars.
///
/// # Examples
/// ```
/// use gitmux::{Direction, truncate};
///
/// assert_eq!(truncate("super-long-branch", "...", 15, Direction::Right), "super-long-b...");
/// assert_eq!(truncate("super-long-branch", "...", 15, Direction::Center), "super-...branch");
/// ```
pub fn truncate_with(
    text: &str,
    ellipsis: &str,
    max: usize,
    direction: Direction,
    mode: WidthMode,
) -> String {
    if max == 0 || mode.str_width(text) <= max {
        return text.to_string();
    }

    let ellipsis = if mode.str_width(ellipsis) > max {
        ""
    } else {
        ellipsis
    };
    let cuts = mode.cuts(text);
    let fits = |candidate: &str| mode.str_width(candidate) <= max;

    // Cutting at 0 (right) or at len (left) leaves the ellipsis alone,
    // which fits, so the fallbacks are never taken.
    match direction {
        Direction::Right => cuts
            .iter()
            .rev()
            .map(|&end| format!("{}{ellipsis}", &text[..end]))
            .find(|candidate| fits(candidate.as_str()))
            .unwrap_or_else(|| ellipsis.to_string()),
        Direction::Left => cuts
            .iter()
            .map(|&start| format!("{ellipsis}{}", &text[start..]))
            .find(|candidate| fits(candidate.as_str()))
            .unwrap_or_else(|| ellipsis.to_string()),
        Direction::Center => {
            let half = (max - mode.str_width(ellipsis)) / 2;
            let head_end = cuts
                .iter()
                .rev()
                .copied()
                .find(|&end| mode.str_width(&text[..end]) <= half)
                .unwrap_or(0);
            let head = &text[..head_end];
            cuts.iter()
                .filter(|&&start| start >= head_end)
                .map(|&start| format!("{head}{ellipsis}{}", &text[start..]))
                .find(|candidate| fits(candidate.as_str()))
                .unwrap_or_else(|| format!("{head}{ellipsis}"))
        }
    }
}
