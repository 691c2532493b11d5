mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use boarding_forms::BoardingFormsLocalClient;
use boarding_forms::config::BoardingFormsConfig;
use boarding_forms::domain::counts::section_counts;
use boarding_forms::domain::notify::TracingNotifier;
use boarding_forms::domain::presets::PresetSelection;
use boarding_forms::domain::service::BoardingFormsService;
use boarding_forms::infra::{
    InMemoryPlatformRepository, InMemoryTemplateRepository, SimulatedLatency,
};
use boarding_forms_sdk::{BoardingFormsApi, PresetOutcome, PresetSkipReason, SessionContext};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingConfig, MODULE_NAME};

/// Boarding Forms - form template and platform configuration
#[derive(Parser)]
#[command(name = "boarding-forms")]
#[command(about = "Boarding Forms - form template and platform configuration")]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Skip the simulated backend latency
    #[arg(long)]
    no_latency: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List connection presets
    Presets,
    /// List templates
    Templates,
    /// Print a template as JSON
    Template { id: String },
    /// Apply a connection preset to a stored template and show the result
    ApplyPreset {
        template_id: String,
        preset_id: String,
        /// Print the outcome, section counts and resulting field tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// List platforms
    Platforms,
    /// Print a platform profile as JSON
    Platform { id: String },
    /// Validate configuration and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML (if provided) -> env (BOARDING__*)
    let app = AppConfig::load_or_default(cli.config.as_deref())?;
    init_logging(&app.logging, cli.verbose);

    let mut module: BoardingFormsConfig = app.module_config_or_default(MODULE_NAME)?;
    if cli.no_latency {
        module = module.without_latency();
    }

    if cli.print_config {
        println!("{}", effective_config(&app, &module)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("no command given, see --help");
    };

    tracing::debug!(config = ?cli.config, "boarding forms host starting");

    if matches!(command, Commands::CheckConfig) {
        println!("Configuration is valid");
        println!("{}", effective_config(&app, &module)?);
        return Ok(());
    }

    let client = build_client(module);
    run(&client, command).await
}

fn init_logging(config: &LoggingConfig, verbose: u8) {
    let default_directive = match verbose {
        0 => config.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr so command output on stdout stays machine-readable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn effective_config(app: &AppConfig, module: &BoardingFormsConfig) -> Result<String> {
    let mut effective = app.clone();
    effective.modules.insert(
        MODULE_NAME.to_owned(),
        json!({ "config": serde_json::to_value(module)? }),
    );
    Ok(serde_json::to_string_pretty(&effective)?)
}

fn build_client(config: BoardingFormsConfig) -> BoardingFormsLocalClient {
    let latency = SimulatedLatency::from_config(&config);
    let service = BoardingFormsService::new(
        Arc::new(InMemoryTemplateRepository::seeded(latency)),
        Arc::new(InMemoryPlatformRepository::seeded(latency)),
        Arc::new(TracingNotifier),
        config,
    );
    BoardingFormsLocalClient::new(Arc::new(service))
}

async fn run(client: &dyn BoardingFormsApi, command: Commands) -> Result<()> {
    // The host acts as an administrator; field configuration needs admin mode.
    let ctx = SessionContext::admin();

    match command {
        Commands::Presets => {
            for preset in client.list_presets(&ctx).await? {
                let keys: usize = preset.fields.sections().map(|(_, s)| s.key_count()).sum();
                println!(
                    "{:<16} {:<16} {keys:>3} keys  {}",
                    preset.id, preset.name, preset.description
                );
            }
        }
        Commands::Templates => {
            for row in client.list_templates(&ctx).await? {
                println!(
                    "{:<8} {:<32} {:<14} {}",
                    row.id, row.name, row.created_by, row.created_on
                );
            }
        }
        Commands::Template { id } => {
            let template = client.get_template(&ctx, &id).await?;
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Commands::ApplyPreset {
            template_id,
            preset_id,
            json,
        } => apply_preset(client, &ctx, &template_id, &preset_id, json).await?,
        Commands::Platforms => {
            for row in client.list_platforms(&ctx).await? {
                let demo = if row.is_demo { "demo" } else { "" };
                println!(
                    "{:<8} {:<24} {:>12} {:>8} {:>6} {:>6} {demo}",
                    row.id, row.name, row.volume, row.transactions, row.rejects, row.connections
                );
            }
        }
        Commands::Platform { id } => {
            let profile = client.get_platform(&ctx, &id).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::CheckConfig => {}
    }
    Ok(())
}

async fn apply_preset(
    client: &dyn BoardingFormsApi,
    ctx: &SessionContext,
    template_id: &str,
    preset_id: &str,
    as_json: bool,
) -> Result<()> {
    let mut selection = PresetSelection::new();
    selection.select(preset_id);

    let mut template = client.get_template(ctx, template_id).await?;
    let outcome = client
        .apply_preset(ctx, &mut template, selection.selected_id())
        .await?;
    let counts = section_counts(&template.custom_form_fields);

    if as_json {
        let counts: serde_json::Map<_, _> = counts
            .iter()
            .map(|(kind, count)| (kind.to_string(), json!(count)))
            .collect();
        let report = json!({
            "outcome": outcome,
            "counts": counts,
            "customFormFields": template.custom_form_fields,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome {
        PresetOutcome::Applied {
            preset_name,
            report,
        } => {
            println!(
                "{preset_name} applied to {template_id}: {} fields written, {} keys skipped",
                report.applied.len(),
                report.skipped.len()
            );
            for skipped in &report.skipped {
                println!("  skipped {skipped}");
            }
        }
        PresetOutcome::Skipped(reason) => {
            let reason = match reason {
                PresetSkipReason::NoSelection => "no preset selected".to_owned(),
                PresetSkipReason::Custom => "custom preset starts from a blank slate".to_owned(),
                PresetSkipReason::UnknownPreset(id) => format!("unknown preset '{id}'"),
            };
            println!("nothing applied: {reason}");
        }
    }
    for (kind, count) in counts {
        println!("{kind:<14} {count}");
    }
    Ok(())
}
