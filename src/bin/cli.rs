use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use appsafety::config::Config;
use appsafety::output::OutputFormat;
use appsafety::rules::{RuleEngine, Severity};
use appsafety::RateOptions;

#[derive(Parser)]
#[command(
    name = "appsafety",
    about = "Permission-based safety rating for sandboxed applications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate an app's permission declaration (summary JSON or Flatpak metadata keyfile)
    Rate {
        /// Path to the manifest file
        path: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Minimum severity to fail (safe, probably-safe, potentially-unsafe, unsafe)
        #[arg(long)]
        fail_on: Option<String>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List all permission rules in evaluation order
    ListRules {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .appsafety.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rate {
            path,
            config,
            format,
            fail_on,
            output,
        } => cmd_rate(path, config, format, fail_on, output),
        Commands::ListRules { format } => cmd_list_rules(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_rate(
    path: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    output_path: Option<PathBuf>,
) -> Result<i32, appsafety::error::SafetyError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let sev = Severity::from_str_lenient(&s);
        if sev.is_none() {
            eprintln!("Warning: unknown severity '{}', using config default", s);
        }
        sev
    });

    let options = RateOptions {
        config_path: config,
        format,
        fail_on_override: fail_on,
    };

    let report = appsafety::rate(&path, &options)?;
    let rendered = appsafety::render_report(&report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = findings above threshold
    Ok(if report.verdict.pass { 0 } else { 1 })
}

fn cmd_list_rules(format_str: String) -> Result<i32, appsafety::error::SafetyError> {
    let engine = RuleEngine::new();
    let rules = engine.list_rules();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rules)?;
            println!("{}", json);
        }
        _ => {
            println!(
                "{:<40} {:<28} {:<20} DESCRIPTION",
                "KEY", "NAME", "SEVERITY"
            );
            println!("{}", "-".repeat(100));
            for rule in &rules {
                println!(
                    "{:<40} {:<28} {:<20} {}",
                    rule.key,
                    rule.name,
                    rule.severity.to_string(),
                    rule.description,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, appsafety::error::SafetyError> {
    let path = PathBuf::from(".appsafety.toml");

    if path.exists() && !force {
        eprintln!(".appsafety.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .appsafety.toml");

    Ok(0)
}
