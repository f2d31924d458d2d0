use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use harprobe_cli::{
    DEFAULT_COMMON_OUTPUT, DEFAULT_DOMAIN_MAP, OutputFormat, capture_paths, commands,
};
use harprobe_core::analysis::AnalysisOptions;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "harprobe")]
#[command(author, version)]
#[command(
    about = "Extract privacy and tracking metrics from HTTP Archive (HAR) captures",
    long_about = "harprobe counts requests, redirections and cookies in a HAR capture, lists the \
                  third-party domains, entities and SameSite=None cookies it contains, and \
                  reports what two captures of the same page have in common."
)]
struct Cli {
    /// HAR captures to analyze: none (first.har and second.har) or exactly two
    #[arg(value_name = "HAR")]
    files: Vec<PathBuf>,

    /// JSON map from registrable domain to {"displayName": ...}
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DOMAIN_MAP)]
    domain_map: PathBuf,

    /// Where to write the results common to both captures
    #[arg(long, value_name = "FILE", default_value = DEFAULT_COMMON_OUTPUT)]
    common_output: PathBuf,

    /// Skip malformed Set-Cookie values instead of failing
    #[arg(long)]
    lenient_cookies: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Summary printed after the result files are written
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    // Initialize logging
    init_logging(cli.verbose);

    let files = match capture_paths(cli.files) {
        Ok(files) => files,
        Err(e) => {
            return usage_error(Cli::command().error(ErrorKind::WrongNumberOfValues, e));
        }
    };

    let options = AnalysisOptions {
        lenient_cookies: cli.lenient_cookies,
    };

    tracing::debug!("Output format: {}", cli.format.as_str());

    match commands::analyze::execute(
        &files,
        &cli.domain_map,
        &cli.common_output,
        options,
        cli.format,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print a clap error; usage problems exit with status 1, --help/--version with 0
fn usage_error(err: clap::Error) -> ExitCode {
    if err.print().is_err() {
        eprintln!("{err}");
    }
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harprobe=debug,harprobe_cli=debug,harprobe_core=debug")
    } else {
        EnvFilter::new("harprobe=info,harprobe_cli=info,harprobe_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
