//! Argument parsing and command dispatch.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap::error::ErrorKind;
use opscheck::{ScanConfig, artifact, output, validate_directory, validate_file};
use tracing_subscriber::EnvFilter;

use crate::health;
use crate::print::Painter;

#[derive(Parser)]
#[command(
    name = "opscheck",
    version,
    about = "Multi-format configuration validator and artifact analyzer"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate configuration files (JSON/YAML/TOML/ENV)
    Validate {
        /// File or directory to validate
        path: PathBuf,
        /// Emit the result as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Exclude patterns (glob format), repeatable
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Analyze build artifacts (DEB/RPM/Docker/Archives)
    Analyze {
        /// File or directory to analyze
        path: PathBuf,
        /// Emit the result as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Check system and DevOps tools health
    Health,
}

/// Parse arguments, run the selected command, return the process exit
/// code. Usage errors (unknown command, missing argument) print the
/// usage text and exit 1; `--help`/`--version` exit 0.
pub fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return code;
        }
    };

    init_logging(cli.verbose);

    let painter = Painter {
        enabled: !cli.no_color && std::io::stdout().is_terminal(),
    };

    match cli.command {
        Command::Validate {
            path,
            json,
            exclude,
        } => {
            let mut config = ScanConfig::default();
            config.exclude = exclude;
            run_validate(&path, &config, json, &painter)
        }
        Command::Analyze { path, json } => match run_analyze(&path, json, &painter) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}", painter.error(&format!("Analysis failed: {err}")));
                1
            }
        },
        Command::Health => {
            health::print_report(&health::collect(), &painter);
            0
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("opscheck=debug")
    } else {
        EnvFilter::new("opscheck=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_validate(path: &Path, config: &ScanConfig, json: bool, painter: &Painter) -> i32 {
    if path.is_dir() {
        let summary = validate_directory(path, config);
        if json {
            if let Err(err) = output::write_json(&summary, &mut std::io::stdout()) {
                eprintln!("{}", painter.error(&format!("Output failed: {err}")));
                return 1;
            }
        } else {
            painter.print_summary(&summary);
        }
        i32::from(!summary.valid)
    } else {
        let result = validate_file(path, config);
        if json {
            if let Err(err) = output::write_json(&result, &mut std::io::stdout()) {
                eprintln!("{}", painter.error(&format!("Output failed: {err}")));
                return 1;
            }
        } else {
            painter.print_file(path, &result);
        }
        i32::from(!result.valid)
    }
}

fn run_analyze(path: &Path, json: bool, painter: &Painter) -> anyhow::Result<()> {
    let infos = if path.is_dir() {
        println!("{}", painter.info(&format!("Analyzing artifacts in: {}", path.display())));
        artifact::analyze_directory(path)?
    } else {
        vec![artifact::analyze_file(path)?]
    };

    if json {
        output::write_json(&infos, &mut std::io::stdout())?;
    } else {
        for info in &infos {
            painter.print_artifact(info);
        }
        println!("Total artifacts analyzed: {}", infos.len());
    }
    Ok(())
}
