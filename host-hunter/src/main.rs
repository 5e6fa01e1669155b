//! Host Hunter CLI Application
//!
//! Sweeps a newline-delimited host list for live HTTP(S) endpoints with an
//! operator-chosen number of concurrent workers.

mod prompt;
mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use host_hunter_lib::{read_domains_from_file, HostChecker, ProbeConfig};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for host-hunter
#[derive(Parser, Debug)]
#[command(name = "host-hunter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe a list of hosts over HTTP(S) and report which ones answer")]
#[command(
    long_about = "Probe a list of hosts over HTTP(S) and report which ones answer.\n\nReads one host per line from HOSTFILE, asks for the scan speed (number of concurrent workers), then streams one line per host followed by a summary."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// File with one host per line
    #[arg(value_name = "HOSTFILE")]
    pub hostfile: PathBuf,

    /// TOML file overriding timeouts, pool sizes and queue capacity
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose diagnostic logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "host_hunter=debug,host_hunter_lib=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Build the probe configuration from the optional config file.
fn load_config(args: &Args) -> Result<ProbeConfig, Box<dyn std::error::Error>> {
    match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            Ok(ProbeConfig::from_file(path)?)
        }
        None => Ok(ProbeConfig::default()),
    }
}

/// Main probing flow
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args)?;

    let domains = read_domains_from_file(&args.hostfile)?;
    info!(count = domains.len(), file = %args.hostfile.display(), "loaded domains");

    ui::print_banner();

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let workers = prompt::prompt_worker_count(&mut stdin, &mut stdout).await?;

    let checker = HostChecker::new(config)?;
    let report = checker.run(domains, workers, ui::print_result).await?;

    ui::print_summary(&report);
    ui::print_successful_domains(&report);

    Ok(())
}
