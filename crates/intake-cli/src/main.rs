//! mp-intake — operator CLI for the intake pipeline.
//!
//! Stands in for the presentation layer: runs one intake from a JSON
//! draft file, prints the bilingual option tables the form renders from,
//! manages the endpoint config, and dumps the submission log.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use intake_bedrock::client::{self, CredentialSource};
use intake_bedrock::endpoint::BedrockEndpoint;
use intake_bedrock::prompt;
use intake_core::locale::{self, Language};
use intake_core::models::record::IntakeDraft;
use intake_core::options::{
    Activity, Duration, Goal, PainArea, PainDescriptor, PainSide, SittingHours,
};
use intake_session::config::{self, IntakeConfig};
use intake_session::state::Session;

#[derive(Parser)]
#[command(name = "mp-intake")]
#[command(about = "Massage Philosophy client-intake pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one intake submission from a JSON draft file.
    Submit {
        /// Path to an IntakeDraft JSON file.
        input: PathBuf,
        /// Override the configured log file path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Skip the log appender for this run.
        #[arg(long, default_value_t = false)]
        no_log: bool,
        /// Print the assembled instruction block instead of calling the
        /// endpoint.
        #[arg(long, default_value_t = false)]
        show_prompt: bool,
    },
    /// Print the recognized form options with their bilingual labels.
    Options,
    /// Manage the endpoint configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Print the submission log.
    Log {
        /// Log file path; defaults to the configured one.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a fresh config file.
    Init {
        #[arg(long, default_value = "us-east-1")]
        region: String,
        #[arg(long, default_value = config::DEFAULT_MODEL_ID)]
        model: String,
        #[arg(long)]
        log_path: Option<PathBuf>,
        /// Use a named AWS profile instead of the default chain.
        #[arg(long)]
        profile: Option<String>,
    },
    /// Show the current config, secrets redacted.
    Show,
    /// Delete the config file.
    Delete,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    locale::verify_label_tables()?;

    match Cli::parse().command {
        Commands::Submit {
            input,
            log,
            no_log,
            show_prompt,
        } => submit(input, log, no_log, show_prompt).await,
        Commands::Options => {
            print_options();
            Ok(())
        }
        Commands::Config { command } => run_config(command),
        Commands::Log { path } => print_log(path),
    }
}

async fn submit(
    input: PathBuf,
    log: Option<PathBuf>,
    no_log: bool,
    show_prompt: bool,
) -> Result<()> {
    let draft: IntakeDraft = serde_json::from_str(&std::fs::read_to_string(&input)?)
        .map_err(|e| eyre::eyre!("invalid draft file {}: {e}", input.display()))?;

    if show_prompt {
        let record = draft.finalize().map_err(|e| eyre::eyre!("{e}"))?;
        println!("--- system ---\n{}", prompt::SYSTEM_PROMPT);
        println!("--- user ---\n{}", prompt::build_user_message(&record));
        return Ok(());
    }

    let config = config::load_config()
        .map_err(|e| eyre::eyre!("no usable config ({e}); run `mp-intake config init` first"))?;

    let log_path = if no_log { None } else { log.or(config.log_path.clone()) };

    let aws_config = client::build_aws_config(&config.region, &config.credentials).await;
    let endpoint = BedrockEndpoint::new(&aws_config, config.model_id.clone());

    let mut session = Session::new(draft.language, log_path);
    session.draft = draft;

    println!("{}", locale::labels(session.language).loading);

    let report = session
        .submit(&endpoint)
        .await
        .map_err(|e| eyre::eyre!("submission failed: {e}"))?
        .clone();

    println!("{}", locale::labels(session.language).success);
    println!("--- {} ---", locale::labels(session.language).result_title);
    println!("{}", report.text);
    println!("\nSystem ID: {}  (model: {})", report.reference_id, report.model_id);

    if let Some(reason) = session.last_append_error() {
        eprintln!("warning: submission was not logged: {reason}");
    }

    Ok(())
}

fn print_options() {
    print_table("pain_area", PainArea::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("pain_side", PainSide::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("duration", Duration::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("pain_descriptors", PainDescriptor::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("activity", Activity::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("sitting_hours", SittingHours::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
    print_table("goals", Goal::ALL, |o| (o.token(), o.label(Language::En), o.label(Language::Zh)));
}

fn print_table<O: Copy>(
    field: &str,
    all: &[O],
    row: impl Fn(O) -> (&'static str, &'static str, &'static str),
) {
    println!("{field}:");
    for &option in all {
        let (token, en, zh) = row(option);
        println!("  {token:<14} {en}  /  {zh}");
    }
    println!();
}

fn run_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init {
            region,
            model,
            log_path,
            profile,
        } => {
            let credentials = match profile {
                Some(profile_name) => CredentialSource::Profile { profile_name },
                None => CredentialSource::DefaultChain,
            };
            let config = IntakeConfig {
                config_version: 0, // stamped by save_config
                region,
                model_id: model,
                log_path,
                created_at: jiff::Timestamp::now(),
                credentials,
            };
            config::save_config(&config)?;
            println!("config written");
            Ok(())
        }
        ConfigCommand::Show => {
            let config = config::load_config()?;
            println!("{}", serde_json::to_string_pretty(&config::config_info(&config))?);
            Ok(())
        }
        ConfigCommand::Delete => {
            config::delete_config()?;
            println!("config deleted");
            Ok(())
        }
    }
}

fn print_log(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => config::load_config()?
            .log_path
            .ok_or_else(|| eyre::eyre!("no log path configured; pass --path"))?,
    };

    let entries = intake_log::read_entries(&path)?;
    println!("{} submission(s) in {}", entries.len(), path.display());
    for entry in entries {
        println!(
            "{}  {}  pain {}/10  [{}]",
            entry.timestamp,
            entry.name,
            entry.pain_level.value(),
            entry
                .pain_area
                .iter()
                .map(|a| a.token())
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    Ok(())
}
