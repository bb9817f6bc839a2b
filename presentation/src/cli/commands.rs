//! CLI command definitions

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use group_context_domain::{ConfigUpdate, ReturnMode};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// Which resolvers `plugins` lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Configured and enabled
    Active,
    /// Configured, enabled or not
    Configured,
    /// Every registered resolver
    All,
}

impl From<ModeArg> for ReturnMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Active => ReturnMode::OnlyActive,
            ModeArg::Configured => ReturnMode::OnlyConfigured,
            ModeArg::All => ReturnMode::All,
        }
    }
}

/// CLI arguments for group-context
#[derive(Parser, Debug)]
#[command(name = "group-context")]
#[command(author, version, about = "Resolve the group relevant to a request")]
#[command(long_about = r#"
group-context runs an ordered chain of group resolvers against a request URI
and reports the first group found.

Resolvers are registered in a persisted catalog holding their status
(enabled/disabled) and weight (lower runs earlier). New resolvers are added
to the catalog disabled; enable them with `update <ID> --enable`.

Configuration files are loaded from (in priority order):
1. GROUP_CONTEXT_* environment variables
2. --config <path>              Explicit config file
3. ./group-context.toml         Project-level config
4. ~/.config/group-context/config.toml   Global config

Example:
  group-context sync
  group-context update route_entity --enable --weight 0
  group-context resolve "/node/5?og-type=node&og-id=5"
  group-context plugins --mode all
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the group for a request URI
    Resolve {
        /// Request URI (path and query), e.g. "/node/5?og-type=node&og-id=5"
        uri: String,
    },

    /// List resolvers in execution order
    Plugins {
        /// Which resolvers to list
        #[arg(short, long, value_enum, default_value = "active")]
        mode: ModeArg,
    },

    /// Create catalog records for newly registered resolvers
    Sync,

    /// Update a resolver's catalog record
    Update(UpdateArgs),
}

/// Arguments of `update`; at least one change is required
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["enable", "disable", "weight", "label", "description"]),
))]
pub struct UpdateArgs {
    /// Resolver identifier
    pub id: String,

    /// Enable the resolver
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Disable the resolver
    #[arg(long)]
    pub disable: bool,

    /// New weight (lower runs earlier)
    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<i32>,

    /// New label
    #[arg(long)]
    pub label: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

impl UpdateArgs {
    /// Collect the flags that were given into a partial update
    pub fn to_config_update(&self) -> ConfigUpdate {
        let mut update = ConfigUpdate::new();
        if self.enable {
            update = update.with_status(true);
        } else if self.disable {
            update = update.with_status(false);
        }
        if let Some(weight) = self.weight {
            update = update.with_weight(weight);
        }
        if let Some(label) = &self.label {
            update = update.with_label(label);
        }
        if let Some(description) = &self.description {
            update = update.with_description(description);
        }
        update
    }
}
