use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hubspot_config::{AppConfig, LoggingConfig};
use hubspot_core::{
    MemoryReporter, StreamBuildError, StreamDescriptor, StreamRegistry, Tap, TapConfig,
    TracingReporter,
};
use hubspot_streams::default_registry;
use serde_json::json;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tap-hubspot")]
#[command(about = "Singer tap for HubSpot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tap name, its config schema and the known streams
    About {
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Build the selected streams and print their descriptors as JSON
    Discover {
        /// Path to the tap config file (json, yaml or toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check the config and report which streams would be selected
    Validate {
        /// Path to the tap config file (json, yaml or toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::About { format } => {
            init_tracing(&LoggingConfig::default())?;

            let registry = default_registry();
            let about = json!({
                "name": Tap::NAME,
                "streams": registry.keys(),
                "implementations": registry.list_factories(),
                "settings": TapConfig::json_schema(),
            });

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&about)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&about)?),
            }
        }

        Commands::Discover { config } => {
            let app_config = load_config(config)?;
            init_tracing(&app_config.logging)?;

            let tap = Tap::new(app_config.tap);
            info!("Running discovery for {}", tap.name());

            let registry = default_registry();
            let streams = tap
                .discover_streams(&registry, &TracingReporter)
                .context("Stream discovery failed")?;

            let descriptors: Vec<StreamDescriptor> =
                streams.iter().map(|s| s.descriptor()).collect();
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }

        Commands::Validate { config } => {
            let app_config = load_config(config)?;
            init_tracing(&app_config.logging)?;

            let registry = default_registry();
            let tap = Tap::new(app_config.tap);

            let (lines, result) = validation_report(&tap, &registry);
            for line in &lines {
                println!("{}", line);
            }

            if let Err(e) = result {
                error!("Validation failed: {}", e);
                return Err(e).context("Stream construction failed");
            }
        }
    }

    Ok(())
}

/// Lines printed by `validate`, plus the discovery outcome
fn validation_report(
    tap: &Tap,
    registry: &StreamRegistry,
) -> (Vec<String>, Result<(), StreamBuildError>) {
    let mut lines = Vec::new();

    if let Some(requested) = tap.config().selected_streams() {
        let unknown: Vec<&String> = requested
            .iter()
            .filter(|name| !registry.contains_key(name))
            .collect();
        if !unknown.is_empty() {
            lines.push(format!("⚠ Unknown streams: {:?}", unknown));
        }
    }

    let reporter = MemoryReporter::new();
    let result = tap.discover_streams(registry, &reporter);
    for (level, message) in reporter.entries() {
        if level != Level::INFO {
            lines.push(format!("  [{}] {}", level, message));
        }
    }

    match result {
        Ok(streams) => {
            lines.push("✓ Configuration is valid".to_string());
            lines.push(format!("\n🔄 Streams: {}", streams.len()));
            for stream in &streams {
                let mode = match stream.replication_key() {
                    Some(key) => format!("incremental on {}", key),
                    None => "full table".to_string(),
                };
                lines.push(format!("  • {} ({}) {}", stream.name(), stream.path(), mode));
            }
            (lines, Ok(()))
        }
        Err(e) => (lines, Err(e)),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let description = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "environment".to_string());
    AppConfig::load(path.as_deref())
        .with_context(|| format!("Failed to load config from {}", description))
}

/// Install the global subscriber. RUST_LOG takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubspot_streams::{HubspotStreamFactory, DEFINITIONS};
    use std::sync::Arc;

    fn tap(streams: &[&str]) -> Tap {
        Tap::new(TapConfig {
            streams: Some(streams.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        })
    }

    #[test]
    fn test_validation_report_lists_selected_streams() {
        let (lines, result) = validation_report(&tap(&["deals", "nope"]), &default_registry());

        assert!(result.is_ok());
        assert_eq!(lines[0], "⚠ Unknown streams: [\"nope\"]");
        assert!(lines.contains(&"✓ Configuration is valid".to_string()));
        assert!(lines
            .iter()
            .any(|l| l == "  • deals (/crm/v3/objects/deals) incremental on updatedAt"));
    }

    #[test]
    fn test_validation_report_is_not_valid_when_construction_fails() {
        let mut broken = DEFINITIONS[0];
        broken.implementation = "BrokenContact";
        broken.primary_keys = &[];

        let mut registry = default_registry();
        registry.register_factory(Arc::new(HubspotStreamFactory::new(broken)));
        registry.add_stream("contacts", "BrokenContact");

        let (lines, result) = validation_report(&tap(&["contacts"]), &registry);

        assert!(result.unwrap_err().is_fatal());
        assert!(!lines.iter().any(|l| l.contains("Configuration is valid")));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  [ERROR]"));
    }
}
