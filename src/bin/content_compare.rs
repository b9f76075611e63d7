//! CLI: extract one element from two HTML trees into mirrored text artifacts,
//! then optionally run a diff tool over the results.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use content_compare::{
    run_and_compare, CommandDiffTool, Config, DiffTool, DiffToolConfig, ElementQuery, Error,
    RunSummary,
};
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "content-compare",
    about = "HTML content compare file generator",
    version
)]
struct Cli {
    /// Element code (h, t, m, l, b, f, i, 1, 2, 3). Prompts when omitted.
    #[arg(short, long, value_parser = parse_element)]
    element: Option<ElementQuery>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    source_a: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    source_b: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    target_a: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    target_b: Option<PathBuf>,

    /// File-name glob for source documents
    #[arg(long)]
    pattern: Option<String>,

    /// Process files in parallel
    #[arg(long)]
    parallel: bool,

    /// Diff program run on the two target trees afterwards
    #[arg(long, value_name = "PROGRAM")]
    diff_program: Option<String>,

    /// Argument passed to the diff program before the target roots (repeatable)
    #[arg(long = "diff-arg", value_name = "ARG", allow_hyphen_values = true)]
    diff_args: Vec<String>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_element(s: &str) -> Result<ElementQuery, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            // Per-file failures are warnings and always shown
            0 => "warn".to_string(),
            1 => "warn,content_compare=info".to_string(),
            2 => "info,content_compare=debug".to_string(),
            _ => "debug,content_compare=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Ask for an element code on stdin until a valid one is entered.
fn prompt_element() -> io::Result<ElementQuery> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "\n{}\nChoice: ", ElementQuery::menu())?;
    stdout.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no element selected",
            ));
        }
        match line.parse() {
            Ok(query) => return Ok(query),
            Err(_) => {
                write!(stdout, "Invalid selection, please retry...\nChoice: ")?;
                stdout.flush()?;
            }
        }
    }
}

fn build_config(cli: &Cli) -> Result<Config, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(dir) = &cli.source_a {
        config.source_a.clone_from(dir);
    }
    if let Some(dir) = &cli.source_b {
        config.source_b.clone_from(dir);
    }
    if let Some(dir) = &cli.target_a {
        config.target_a.clone_from(dir);
    }
    if let Some(dir) = &cli.target_b {
        config.target_b.clone_from(dir);
    }
    if let Some(pattern) = &cli.pattern {
        config.pattern.clone_from(pattern);
    }
    config.parallel |= cli.parallel;
    // --diff-arg replaces the configured args; it never applies to nothing.
    if let Some(program) = &cli.diff_program {
        config.diff_tool = Some(DiffToolConfig {
            program: program.clone(),
            args: cli.diff_args.clone(),
        });
    } else if !cli.diff_args.is_empty() {
        match config.diff_tool.as_mut() {
            Some(tool) => tool.args.clone_from(&cli.diff_args),
            None => {
                return Err(Error::DiffTool(
                    "--diff-arg requires --diff-program or a configured diff_tool".to_string(),
                ))
            }
        }
    }
    Ok(config)
}

fn print_summary(config: &Config, summary: &RunSummary) {
    for (source, target, report) in [
        (&config.source_a, &config.target_a, &summary.source_a),
        (&config.source_b, &config.target_b, &summary.source_b),
    ] {
        println!(
            "{} processed to {}: {} files, {} artifacts, {} without element, {} failed",
            source.display(),
            target.display(),
            report.attempted,
            report.written,
            report.no_match,
            report.failures.len(),
        );
        for failure in &report.failures {
            println!("  FAILED {}: {}", failure.path.display(), failure.error);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let query = match cli.element {
        Some(query) => query,
        None => match prompt_element() {
            Ok(query) => query,
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let diff = config.diff_tool.clone().map(CommandDiffTool::new);
    let diff_ref = diff.as_ref().map(|d| d as &dyn DiffTool);

    match run_and_compare(&config, query, diff_ref) {
        Ok(summary) => {
            print_summary(&config, &summary);
            if summary.failure_count() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
