//! resume-match: match a resume PDF against a job description.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
};
use resume_match::{
    api::AnalyzeClient,
    app::App,
    config::{self, Config, DEFAULT_SERVER_URL},
    intake::{self, ResumeFile},
    report,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(version, about = "Match a resume PDF against a job description", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Interactive terminal UI
    resume-match --server http://localhost:5000

    # One-shot analysis, job description from stdin
    pbpaste | resume-match analyze --job - --resume cv.pdf

    # Machine-readable output, also save the text report
    resume-match analyze --job job.txt --resume cv.pdf --json --save")]
struct Cli {
    /// Base URL of the analysis service
    #[arg(long, global = true, env = "RESUME_MATCH_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "RESUME_MATCH_TIMEOUT", default_value_t = 120)]
    timeout: u64,

    /// Directory reports are saved into (defaults to the download directory)
    #[arg(long, global = true, env = "RESUME_MATCH_REPORT_DIR")]
    report_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Tui,
    /// Analyze once and print the report
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// File containing the job description, or `-` for stdin
    #[arg(long)]
    job: PathBuf,

    /// Resume PDF to upload
    #[arg(long)]
    resume: PathBuf,

    /// Print the raw result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Also save the text report to the report directory
    #[arg(long)]
    save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config {
        server_url: cli.server.clone(),
        timeout: Duration::from_secs(cli.timeout),
        ..Config::default()
    };
    if let Some(dir) = cli.report_dir.clone() {
        config.report_dir = dir;
    }

    match cli.command {
        Some(Commands::Analyze(args)) => {
            init_stderr_logging(cli.verbose);
            run_analyze(&config, args).await
        }
        Some(Commands::Tui) | None => {
            init_file_logging(cli.verbose);
            run_tui(config)
        }
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    let log_level = if verbose { "debug" } else { "info" };
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
}

fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// The TUI owns the terminal, so logs go to a file in the cache directory.
fn init_file_logging(verbose: bool) {
    let file = config::log_path().and_then(|path| {
        fs::create_dir_all(path.parent()?).ok()?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(file) = file {
        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
}

fn run_tui(config: Config) -> Result<()> {
    info!(server = %config.server_url, "Starting resume-match TUI");
    let mut app = App::new(config).context("failed to start")?;

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableBracketedPaste)?;

    let result = app.run(&mut terminal);

    execute!(io::stdout(), DisableBracketedPaste)?;
    ratatui::restore();

    result.context("terminal error")
}

async fn run_analyze(config: &Config, args: AnalyzeArgs) -> Result<()> {
    let job_desc = read_job_description(&args.job)?;
    intake::validate_job_description(&job_desc)?;
    let file = ResumeFile::from_path(&args.resume, config.max_upload_bytes)?;

    let client = AnalyzeClient::new(&config.server_url, config.timeout)?
        .with_max_upload_bytes(config.max_upload_bytes);
    let result = client.analyze(&job_desc, &file).await?;

    if args.json {
        println!("{}", report::render_report_json(&result)?);
    } else {
        print!("{}", report::render_report(&result));
        println!("\n{}", result.band().label());
    }

    if args.save {
        let path = report::save_report(&config.report_dir, &result)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn read_job_description(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read job description from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("failed to read job description from {}", source.display()))
    }
}
