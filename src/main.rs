mod cli;

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use gitmux::config::resolve_config_path;
use gitmux::styling::{config_hint, eprintln, format_error, print};
use gitmux::{Config, Error, Formater, Status};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{}", format_error(&err));
        process::exit(1);
    }
}

/// `RUST_LOG` applies as usual; `--verbose` turns on debug output for gitmux.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    if verbose {
        builder.filter_module("gitmux", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_path = resolve_config_path(cli.config.clone());

    if cli.print_config {
        let toml = Config::default().to_toml().map_err(Error::Config)?;
        let hint = config_hint(config_path.as_ref().map(|p| p.path()));
        print!("{hint}\n{toml}");
        return Ok(());
    }

    let config = Config::load(config_path.as_ref()).map_err(Error::Config)?;

    let st = match cli.status_path() {
        Some(path) => {
            log::debug!("Reading status from {}", path.display());
            let file = File::open(path)
                .map_err(Error::StatusRead)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Status::from_json(BufReader::new(file)).map_err(Error::from)?
        }
        None => {
            log::debug!("Reading status from stdin");
            Status::from_json(io::stdin().lock()).map_err(Error::from)?
        }
    };
    log::debug!("{st:?}");

    // tmux embeds the output verbatim, so no trailing newline
    Formater::new(config).format(&mut io::stdout().lock(), &st)?;
    Ok(())
}
