//! Console output formatter for resolution results and the resolver catalog

use std::collections::BTreeMap;

use colored::Colorize;
use group_context_application::GroupContext;
use group_context_domain::{ResolverConfig, ResolverDescriptor, ReturnMode};
use serde_json::{Value, json};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the outcome of a resolution pass
    pub fn format_context(uri: &str, context: &GroupContext) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Request:".cyan().bold(), uri));

        match &context.group {
            Some(group) => {
                output.push_str(&format!("{} {}", "Group:".cyan().bold(), group.to_string().green()));
                if !group.label().is_empty() {
                    output.push_str(&format!(" ({})", group.label()));
                }
                output.push('\n');
            }
            None => output.push_str(&format!("{} {}\n", "Group:".cyan().bold(), "none".dimmed())),
        }

        if let Some(resolver) = &context.resolver_id {
            output.push_str(&format!("{} {}\n", "Resolver:".cyan().bold(), resolver));
        }

        let contexts: Vec<&str> = context.cache_context_ids.iter().map(String::as_str).collect();
        output.push_str(&format!(
            "{} {}\n",
            "Cache contexts:".cyan().bold(),
            if contexts.is_empty() {
                "-".to_string()
            } else {
                contexts.join(", ")
            }
        ));

        output
    }

    /// Format the outcome of a resolution pass as JSON
    pub fn format_context_json(uri: &str, context: &GroupContext) -> String {
        let value = json!({
            "request": uri,
            "group": context.group,
            "resolver": context.resolver_id,
            "cache_contexts": context.cache_context_ids,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an ordered resolver list with its catalog records
    pub fn format_plugins(
        mode: ReturnMode,
        plugins: &[ResolverDescriptor],
        records: &BTreeMap<String, ResolverConfig>,
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Group resolvers ({})", mode)));
        output.push('\n');

        if plugins.is_empty() {
            output.push_str(&format!("{}\n", "No resolvers.".dimmed()));
            return output;
        }

        for (position, plugin) in plugins.iter().enumerate() {
            let (status, weight) = match records.get(&plugin.id) {
                Some(record) if record.status => ("enabled".green(), record.weight.to_string()),
                Some(record) => ("disabled".yellow(), record.weight.to_string()),
                None => ("unconfigured".dimmed(), "-".to_string()),
            };

            output.push_str(&format!(
                "{:>3}. {} [{}] weight {}\n",
                position + 1,
                plugin.id.bold(),
                status,
                weight
            ));
            output.push_str(&format!("     {}\n", plugin.label));
            if !plugin.description.is_empty() {
                output.push_str(&format!("     {}\n", plugin.description.dimmed()));
            }
        }

        output
    }

    /// Format an ordered resolver list as JSON
    pub fn format_plugins_json(
        plugins: &[ResolverDescriptor],
        records: &BTreeMap<String, ResolverConfig>,
    ) -> String {
        let rows: Vec<Value> = plugins
            .iter()
            .map(|plugin| {
                let record = records.get(&plugin.id);
                json!({
                    "id": plugin.id,
                    "label": plugin.label,
                    "description": plugin.description,
                    "status": record.map(|r| r.status),
                    "weight": record.map(|r| r.weight),
                })
            })
            .collect();
        serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the records created by reconciliation
    pub fn format_synced(created: &[ResolverConfig]) -> String {
        if created.is_empty() {
            return format!("{}\n", "Resolver catalog is up to date.".dimmed());
        }

        let mut output = format!(
            "{} {} resolver(s)\n",
            "Registered".green().bold(),
            created.len()
        );
        for record in created {
            output.push_str(&format!("  * {} (weight {}, disabled)\n", record.id, record.weight));
        }
        output
    }

    /// Format a single catalog record after an update
    pub fn format_record(record: &ResolverConfig) -> String {
        format!(
            "{} {}: {}, weight {}\n",
            "Updated".green().bold(),
            record.id,
            if record.status { "enabled" } else { "disabled" },
            record.weight
        )
    }

    /// Format records as JSON (sync and update results)
    pub fn format_records_json(records: &[ResolverConfig]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
