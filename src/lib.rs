//! Render git status into a tmux status-line fragment.
//!
//! ```
//! use gitmux::{Config, Formater, Status};
//!
//! let st = Status {
//!     local_branch: "main".into(),
//!     modified: 2,
//!     ..Default::default()
//! };
//! let line = Formater::new(Config::default()).format_to_string(&st);
//! assert!(line.ends_with(gitmux::RESET_STYLES));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod status;
pub mod styling;
pub mod truncate;

pub use config::{Config, LayoutItem, Options, Styles, Symbols};
pub use error::Error;
pub use format::{Formater, RESET_STYLES, render, render_to_string};
pub use status::Status;
pub use truncate::{Direction, WidthMode, truncate, truncate_with};
