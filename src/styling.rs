//! Terminal styling for gitmux's own diagnostics.
//!
//! The status line carries tmux markup taken from the config and is never
//! styled here. These constants only color messages printed to a terminal
//! (errors on stderr, `--print-config` hints).
//!
//! Uses the anstyle ecosystem: anstream strips ANSI codes when the stream is
//! not a terminal or `NO_COLOR` is set.

use anstyle::{AnsiColor, Color, Style};

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

/// Auto-detecting print that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::print;

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Error emoji - use with ERROR style: `eprintln!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

/// Hint emoji - use with HINT style
pub const HINT_EMOJI: &str = "💡";

/// Format an error and its causes for stderr.
///
/// The outermost message is styled as an error; each cause follows on its own
/// dimmed line. Causes already quoted by the message above them are skipped.
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("{ERROR_EMOJI} {ERROR}{err}{ERROR:#}");
    let mut above = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if above.contains(&text) {
            continue;
        }
        out.push_str(&format!("\n   {HINT}{text}{HINT:#}"));
        above = text;
    }
    out
}

/// Hint printed as a TOML comment above `--print-config` output.
pub fn config_hint(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => format!("# {HINT_EMOJI} Save as {} to customize", path.display()),
        None => format!("# {HINT_EMOJI} Pass with --config to customize"),
    }
}
