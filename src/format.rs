//! Status line composition.
//!
//! [`Formater`] walks the configured layout and renders each item against a
//! [`Status`] snapshot. Every dynamic part starts with the `clear` style so
//! that styles never leak from one part into the next, and the line always
//! ends with [`RESET_STYLES`].
//!
//! Visibility rules:
//! - flags are hidden when their symbol is empty or their count is zero;
//! - the clean flag is driven by [`Status::is_clean`] and `hide_clean`;
//! - divergence and stats parts are hidden only when their count is zero.

use std::io::Write;

use crate::config::{Config, Flag, LayoutItem, render_field};
use crate::error::Error;
use crate::status::Status;
use crate::truncate::truncate_with;

/// tmux markup resetting every style, appended to every status line.
pub const RESET_STYLES: &str = "#[norm]";

/// Renders status snapshots according to an immutable [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Formater {
    config: Config,
}

impl Formater {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `st` and write it to `w`.
    ///
    /// The only failure is `w` rejecting the write; nothing is retried.
    pub fn format<W: Write + ?Sized>(&self, w: &mut W, st: &Status) -> Result<(), Error> {
        let line = self.format_to_string(st);
        w.write_all(line.as_bytes()).map_err(Error::SinkWrite)?;
        w.flush().map_err(Error::SinkWrite)
    }

    /// Render `st` to a string.
    pub fn format_to_string(&self, st: &Status) -> String {
        Line::new(&self.config, st).render()
    }

    /// The flags segment alone, `""` when no flag is visible.
    pub fn flags(&self, st: &Status) -> String {
        Line::new(&self.config, st).flags()
    }

    /// The divergence segment alone, `""` when in sync with the upstream.
    pub fn divergence(&self, st: &Status) -> String {
        Line::new(&self.config, st).divergence()
    }

    /// The stats segment alone, `""` without insertions or deletions.
    pub fn stats(&self, st: &Status) -> String {
        Line::new(&self.config, st).stats()
    }
}

/// Render `st` with `config` and write the line to `sink`.
pub fn render<W: Write + ?Sized>(config: &Config, st: &Status, sink: &mut W) -> Result<(), Error> {
    let line = render_to_string(config, st);
    sink.write_all(line.as_bytes()).map_err(Error::SinkWrite)?;
    sink.flush().map_err(Error::SinkWrite)
}

/// Render `st` with `config` to a string.
pub fn render_to_string(config: &Config, st: &Status) -> String {
    Line::new(config, st).render()
}

/// One render of one snapshot.
struct Line<'a> {
    config: &'a Config,
    st: &'a Status,
}

impl<'a> Line<'a> {
    fn new(config: &'a Config, st: &'a Status) -> Self {
        Self { config, st }
    }

    fn render(&self) -> String {
        let clear = &self.config.styles.clear;
        let mut out = String::with_capacity(128);
        // Dynamic parts with no literal between them are separated by a
        // space; empty parts are skipped and literals are never padded.
        let mut after_part = false;

        for item in &self.config.layout {
            let part = match item {
                LayoutItem::Literal(text) => {
                    out.push_str(clear);
                    out.push_str(text);
                    after_part = false;
                    continue;
                }
                LayoutItem::Branch => self.branch(),
                LayoutItem::Remote => self.remote(),
                LayoutItem::RemoteBranch => self.remote_branch(),
                LayoutItem::Divergence => self.divergence(),
                LayoutItem::Flags => self.flags(),
                LayoutItem::Stats => self.stats(),
            };

            if part.is_empty() {
                log::debug!("Layout item {:?} is empty", item.as_str());
                continue;
            }
            if after_part {
                out.push(' ');
            }
            out.push_str(&part);
            after_part = true;
        }

        out.push_str(RESET_STYLES);
        out
    }

    fn truncate_branch(&self, name: &str) -> String {
        let options = &self.config.options;
        truncate_with(
            name,
            &options.ellipsis,
            options.branch_max_len,
            options.branch_trim,
            options.width_mode,
        )
    }

    fn branch(&self) -> String {
        let clear = &self.config.styles.clear;
        let style = &self.config.styles.branch;
        let symbol = &self.config.symbols.branch;
        let name = self.truncate_branch(&self.st.local_branch);
        format!("{clear}{style}{symbol}{clear}{style}{name}")
    }

    fn remote_branch(&self) -> String {
        if self.st.remote_branch.is_empty() {
            return String::new();
        }
        let clear = &self.config.styles.clear;
        let style = &self.config.styles.remote;
        let name = self.truncate_branch(&self.st.remote_branch);
        format!("{clear}{style}{name}")
    }

    /// Remote branch followed by the divergence. Prefer `remote-branch` and
    /// `divergence` as separate layout items.
    fn remote(&self) -> String {
        let mut out = self.remote_branch();
        if out.is_empty() {
            return out;
        }
        let divergence = self.divergence();
        if !divergence.is_empty() {
            out.push(' ');
            out.push_str(&divergence);
        }
        out
    }

    fn divergence(&self) -> String {
        let st = self.st;
        if !st.is_diverged() {
            return String::new();
        }

        let symbols = &self.config.symbols;
        let options = &self.config.options;
        let behind = (st.behind != 0).then(|| format!("{}{}", symbols.behind, st.behind));
        let ahead = (st.ahead != 0).then(|| format!("{}{}", symbols.ahead, st.ahead));
        let (first, second) = if options.swap_divergence {
            (ahead, behind)
        } else {
            (behind, ahead)
        };
        let separator = if options.divergence_space { " " } else { "" };
        let counts: Vec<String> = [first, second].into_iter().flatten().collect();

        let styles = &self.config.styles;
        format!(
            "{}{}{}",
            styles.clear,
            styles.divergence,
            counts.join(separator)
        )
    }

    /// `None` when the flag is hidden.
    fn flag(&self, flag: Flag) -> Option<String> {
        let count = self.st.flag_count(flag);
        if count == 0 {
            return None;
        }
        let field = flag.field();
        render_field(
            self.config.symbols.get(field),
            self.config.styles.get(field),
            (!self.config.options.flags_without_count).then_some(count),
        )
    }

    fn flags(&self) -> String {
        let styles = &self.config.styles;
        let symbols = &self.config.symbols;
        let show_clean =
            self.st.is_clean && !self.config.options.hide_clean && !symbols.clean.is_empty();

        let flags: Vec<String> = if show_clean {
            self.flag(Flag::Stashed)
                .into_iter()
                .chain(render_field(&symbols.clean, &styles.clean, None))
                .collect()
        } else {
            Flag::ORDER
                .into_iter()
                .filter_map(|flag| self.flag(flag))
                .collect()
        };

        if flags.is_empty() {
            return String::new();
        }
        format!("{}{}", styles.clear, flags.join(" "))
    }

    fn stats(&self) -> String {
        let styles = &self.config.styles;
        let symbols = &self.config.symbols;
        let stats: Vec<String> = [
            (self.st.insertions, &styles.insertions, &symbols.insertions),
            (self.st.deletions, &styles.deletions, &symbols.deletions),
        ]
        .into_iter()
        .filter(|(count, _, _)| *count != 0)
        .map(|(count, style, symbol)| format!("{style}{symbol}{count}"))
        .collect();

        if stats.is_empty() {
            return String::new();
        }
        format!("{}{}", styles.clear, stats.join(" "))
    }
}
