use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gitmux")]
#[command(version)]
#[command(about = "Render git status for the tmux status line", long_about = None)]
#[command(after_help = "\
The status snapshot is a JSON object, for example:
  {\"local_branch\": \"main\", \"remote_branch\": \"origin/main\", \"ahead\": 1, \"modified\": 2}

Config keys can be overridden from the environment:
  GITMUX_OPTIONS__BRANCH_MAX_LEN=24 GITMUX_SYMBOLS__CLEAN=ok gitmux status.json")]
pub struct Cli {
    /// JSON status snapshot; reads stdin when omitted or `-`
    #[arg(value_name = "STATUS")]
    pub status: Option<PathBuf>,

    /// Config file [default: <config dir>/gitmux/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Log config and render decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The snapshot path, `None` for stdin.
    pub fn status_path(&self) -> Option<&std::path::Path> {
        self.status
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}
