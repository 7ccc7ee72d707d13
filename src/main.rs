#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};

use simple_ntp::core::logging::{level_for_verbosity, setup_console_logging};
use simple_ntp::core::{OutputFormat, Settings};
use simple_ntp::{client, DecodedFields, DisplayOptions, Error, ErrorClass, QueryInput};

#[derive(Parser, Debug)]
#[command(version, about = "Query an NTP server once and show the decoded reply header")]
struct Cli {
    /// NTP server host (e.g. ntp.nict.jp, time.cloudflare.com, time.google.com)
    host: String,

    /// Server port; values outside 0-65535 fall back to 123
    #[arg(short, long, allow_negative_numbers = true)]
    port: Option<i64>,

    /// Timeout in seconds; zero or negative falls back to 10
    #[arg(short, long, allow_negative_numbers = true)]
    timeout: Option<i64>,

    /// Also show the reference ID as an IPv4 address (it is not always one)
    #[arg(long)]
    ipv4_form: bool,

    /// Show precision, root delay and root dispersion in milliseconds
    #[arg(long)]
    ms: bool,

    /// Print the fields as JSON
    #[arg(long)]
    json: bool,

    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => return report(&e),
        },
        None => Settings::default(),
    };

    let base = settings.log_level.unwrap_or(Level::WARN);
    setup_console_logging(level_for_verbosity(base, cli.verbose));
    debug!(?settings, "settings loaded");

    let input = QueryInput {
        host: cli.host.clone(),
        port: cli.port.unwrap_or_else(|| settings.port()),
        timeout_secs: cli.timeout.unwrap_or_else(|| settings.timeout()),
    };
    let file_options = settings.display_options();
    let options = DisplayOptions {
        show_ipv4_form: cli.ipv4_form || file_options.show_ipv4_form,
        milliseconds: cli.ms || file_options.milliseconds,
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        settings.format
    };

    match client::probe_input(&input, options).await {
        Ok(fields) => match print_fields(&fields, format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report(&Error::decode(e.to_string())),
        },
        Err(e) => report(&e),
    }
}

fn print_fields(fields: &DecodedFields, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(fields)?),
        OutputFormat::Text => {
            let rows = fields.rows();
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
            for (label, value) in rows {
                println!("{:<width$} {}", format!("{}:", label), value, width = width);
            }
        }
    }
    Ok(())
}

fn report(err: &Error) -> ExitCode {
    let prefix = match err.class() {
        ErrorClass::Validation => "Error",
        ErrorClass::Transport => "An error occurred during the request",
        ErrorClass::Decode => "An error occurred during the parsing",
    };
    eprintln!("{}: {}", prefix, err);

    match err.class() {
        ErrorClass::Validation => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
