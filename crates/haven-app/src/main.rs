//! Haven - rule-based crisis risk classifier.
//!
//! This is the main binary:
//! - `serve`: HTTP API for the chat pipeline
//! - `analyze`: classify messages from the command line or stdin
//! - `resources`: print the crisis resource directory

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use haven_core::classifier::RulePatterns;
use haven_core::{resource_for, Region, RiskClassifier};
use haven_server::models::{ResourceEntry, ResourcesResponse};
use haven_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Haven - rule-based crisis risk classifier
#[derive(Parser, Debug)]
#[command(name = "haven", version, about)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// JSON rules file replacing the built-in patterns
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Analyze messages; reads stdin lines when none are given
    Analyze {
        /// JSON rules file replacing the built-in patterns
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Messages to analyze
        messages: Vec<String>,
    },

    /// Print the crisis resource directory
    Resources {
        /// Only print this region (US, UK, Canada, Australia, international)
        #[arg(long)]
        region: Option<String>,
    },
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "haven", "Haven").map(|dirs| dirs.data_dir().join("logs"))
}

fn env_filter(args: &Args) -> EnvFilter {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("haven={},warn", log_level)))
}

/// Initialize logging. The server also writes rotated log files.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = env_filter(args);

    if matches!(args.command, Command::Serve { .. }) {
        if let Some(log_dir) = logs_dir() {
            if std::fs::create_dir_all(&log_dir).is_ok() {
                let file_appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .max_log_files(5)
                    .filename_prefix("haven")
                    .filename_suffix("log")
                    .build(&log_dir)
                    .ok();

                if let Some(appender) = file_appender {
                    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(io::stderr))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();

                    tracing::info!("Logging to {:?}", log_dir);
                    return Some(guard);
                }
            }
        }

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
        tracing::warn!("File logging unavailable, using console only");
        return None;
    }

    // Stdout carries JSON output, so console logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    None
}

fn load_classifier(rules: Option<&Path>) -> Result<RiskClassifier> {
    match rules {
        Some(path) => {
            let patterns = RulePatterns::load(path)
                .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
            RiskClassifier::from_patterns(&patterns)
                .with_context(|| format!("Invalid rules in {}", path.display()))
        }
        None => Ok(RiskClassifier::with_defaults()),
    }
}

/// Writes one JSON result per message.
fn analyze_messages<I, W>(classifier: &RiskClassifier, messages: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut flagged = 0;
    for message in messages {
        let result = classifier.analyze(&message);
        if result.is_potential_crisis {
            flagged += 1;
        }
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    }
    Ok(flagged)
}

fn run_analyze(rules: Option<&Path>, messages: Vec<String>) -> Result<()> {
    let classifier = load_classifier(rules)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let flagged = if messages.is_empty() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?;
        let lines = lines.into_iter().filter(|l| !l.trim().is_empty());
        analyze_messages(&classifier, lines, &mut out)?
    } else {
        analyze_messages(&classifier, messages, &mut out)?
    };

    tracing::debug!(flagged, "Analysis finished");
    Ok(())
}

fn run_resources(region: Option<&str>) -> Result<()> {
    let json = match region {
        Some(key) => {
            let region: Region = key.parse()?;
            serde_json::to_string_pretty(&ResourceEntry::new(region, resource_for(region)))?
        }
        None => serde_json::to_string_pretty(&ResourcesResponse {
            resources: ResourceEntry::all(),
        })?,
    };
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args);

    match args.command {
        Command::Serve { host, port, rules } => {
            let mut config = ServerConfig::default().with_host(host).with_port(port);
            if let Some(path) = rules {
                config = config.with_rules_path(path);
            }

            let server = Server::new(config).context("Failed to start API server")?;
            server.run().await?;
        }
        Command::Analyze { rules, messages } => run_analyze(rules.as_deref(), messages)?,
        Command::Resources { region } => run_resources(region.as_deref())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_defaults() {
        let args = Args::try_parse_from(["haven", "serve"]).unwrap();
        match args.command {
            Command::Serve { host, port, rules } => {
                assert_eq!(host, DEFAULT_HOST);
                assert_eq!(port, DEFAULT_PORT);
                assert!(rules.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_analyze_messages_and_global_flags() {
        let args =
            Args::try_parse_from(["haven", "analyze", "--debug", "hello", "I wish I was dead"])
                .unwrap();
        assert!(args.debug);
        match args.command {
            Command::Analyze { messages, .. } => assert_eq!(messages.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn analyze_writes_one_line_per_message() {
        let classifier = RiskClassifier::with_defaults();
        let mut out = Vec::new();
        let flagged = analyze_messages(
            &classifier,
            vec![
                "I want to kill myself".to_string(),
                "I feel great today".to_string(),
            ],
            &mut out,
        )
        .unwrap();

        assert_eq!(flagged, 1);
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["confidence"], "high");
        assert_eq!(lines[1]["isPotentialCrisis"], false);
    }

    #[test]
    fn missing_rules_file_is_reported() {
        let err = load_classifier(Some(Path::new("/nonexistent/rules.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read rules file"));
    }

    #[test]
    fn unknown_region_is_an_error() {
        assert!(run_resources(Some("atlantis")).is_err());
    }
}
