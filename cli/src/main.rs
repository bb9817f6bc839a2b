//! CLI entrypoint for group-context
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use group_context_application::{EntityRepository, GroupContextHandler, ResolverConfigStore};
use group_context_domain::{RequestContext, ReturnMode};
use group_context_infrastructure::{
    ConfigLoader, FileConfig, InMemoryConfigStore, InMemoryEntityRepository, StaticResolverRegistry,
    StoreBackend, TomlFileConfigStore, default_registry,
};
use group_context_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type Handler = GroupContextHandler<StaticResolverRegistry, dyn ResolverConfigStore>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    // === Dependency Injection ===
    let store = build_store(&config);
    let entities: Arc<dyn EntityRepository> =
        Arc::new(InMemoryEntityRepository::from_config(&config));

    let uri = match &command {
        Command::Resolve { uri } => uri.as_str(),
        _ => "/",
    };
    let request = Arc::new(
        RequestContext::parse(uri).with_context(|| format!("Invalid request URI: {}", uri))?,
    );
    let registry = Arc::new(default_registry(request, entities)?);
    let handler: Handler = GroupContextHandler::new(registry, store.clone());

    if config.resolution.sync_on_start && !matches!(command, Command::Sync) {
        let created = handler.update_config_storage()?;
        debug!(created = created.len(), "Startup reconciliation finished");
    }

    info!(backend = ?config.store.backend, "Running command");

    let output = match command {
        Command::Resolve { uri } => {
            let context = handler.resolve()?;
            match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_context(&uri, &context),
                OutputFormat::Json => ConsoleFormatter::format_context_json(&uri, &context),
            }
        }
        Command::Plugins { mode } => {
            let mode = ReturnMode::from(mode);
            let plugins = handler.get_plugins(mode)?;
            let records = store.load_all()?;
            match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_plugins(mode, &plugins, &records),
                OutputFormat::Json => ConsoleFormatter::format_plugins_json(&plugins, &records),
            }
        }
        Command::Sync => {
            let created = handler.update_config_storage()?;
            match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_synced(&created),
                OutputFormat::Json => ConsoleFormatter::format_records_json(&created),
            }
        }
        Command::Update(args) => {
            let record = match handler.update_plugin(&args.id, &args.to_config_update()) {
                Ok(record) => record,
                Err(e) if e.needs_sync() => {
                    anyhow::bail!("{}; run `group-context sync` first", e)
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to update resolver {}", args.id));
                }
            };
            match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_record(&record),
                OutputFormat::Json => {
                    ConsoleFormatter::format_records_json(std::slice::from_ref(&record))
                }
            }
        }
    };

    print!("{}", output);
    Ok(())
}

fn build_store(config: &FileConfig) -> Arc<dyn ResolverConfigStore> {
    match config.store.backend {
        StoreBackend::File => Arc::new(TomlFileConfigStore::new(&config.store.path)),
        StoreBackend::Memory => Arc::new(InMemoryConfigStore::new()),
    }
}
