//! Materialize registered items and display their snapshots
//!
//! Uses the built-in catalog unless a data directory is given.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use item_content::ContentFactory;
use item_core::{ItemConfig, ItemRegistry, NamespacedKey, PersistedValue, RenderedItem};

use crate::utils::{field, paint};

/// Materialize and print item snapshots
#[derive(Parser)]
pub struct Dump {
    /// Item to show (`key` or `namespace:key`); all items when omitted
    #[arg(value_name = "ID")]
    id: Option<String>,

    /// Data directory with `items.ron` and optional `config.toml`
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Rendered name and lore, attributes and decorations
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Dump {
    pub fn execute(self) -> Result<()> {
        let (config, mut registry) = self.load()?;

        let snapshots: Vec<Arc<RenderedItem>> = match &self.id {
            Some(id) => {
                let id = NamespacedKey::parse_with_default(id, &config.namespace)
                    .with_context(|| format!("Invalid item id {id:?}"))?;
                let definition = registry.lookup_mut(&id).with_context(|| {
                    format!("Unknown item {id}\n\nHint: run `xtask dump` to list every item")
                })?;
                vec![definition.materialize()]
            }
            None => registry.materialize_all(),
        };

        match self.format {
            OutputFormat::Summary => {
                field("Namespace:", &config.namespace);
                field("Items:", snapshots.len());
                println!();
                for snapshot in &snapshots {
                    print_summary(snapshot)?;
                }
            }
            OutputFormat::Json => print_json(&snapshots)?,
            OutputFormat::Debug => {
                for snapshot in &snapshots {
                    println!("{:#?}", snapshot);
                }
            }
        }

        Ok(())
    }

    fn load(&self) -> Result<(ItemConfig, ItemRegistry)> {
        match &self.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let config = factory.load_config()?.with_env_overrides();
                let registry = factory.load_registry_with(&config)?;
                Ok((config, registry))
            }
            None => {
                let config = ItemConfig::from_env();
                let registry = ContentFactory::builtin_registry(&config)?;
                Ok((config, registry))
            }
        }
    }
}

fn print_summary(item: &RenderedItem) -> Result<()> {
    println!(
        "{} {} {}",
        style("===").bold().green(),
        style(&item.id).bold().green(),
        style(format!("({})", item.kind)).dim()
    );
    field("  Name:", paint(&item.name));

    if !item.lore.is_empty() {
        println!("{}", style("  Lore:").bold().cyan());
        for line in &item.lore {
            println!("    {}", paint(line));
        }
    }

    println!("{}", style("  Attributes:").bold().cyan());
    for entry in &item.attributes {
        println!("    {} = {} ({})", entry.key, format_value(&entry.value), entry.tag());
    }

    field("  Unbreakable:", item.unbreakable);
    field("  Fireproof:", item.fireproof);
    if !item.flags.is_empty() {
        let names: Vec<&str> = item.flags.iter_names().map(|(name, _)| name).collect();
        field("  Flags:", names.join(", "));
    }
    if let Some(tier) = item.tier {
        field("  Tier:", tier);
    }
    for modifier in &item.modifiers {
        field("  Modifier:", format!("{} {}", modifier.name, modifier.level));
    }
    let digest = item
        .digest()
        .with_context(|| format!("Failed to encode snapshot of {}", item.id))?;
    field("  Digest:", hex::encode(digest));
    println!();
    Ok(())
}

fn format_value(value: &PersistedValue) -> String {
    match value {
        PersistedValue::Byte(v) => v.to_string(),
        PersistedValue::Int(v) => v.to_string(),
        PersistedValue::Float(v) => v.to_string(),
        PersistedValue::Double(v) => v.to_string(),
        PersistedValue::String(v) => format!("{v:?}"),
    }
}

fn print_json(snapshots: &[Arc<RenderedItem>]) -> Result<()> {
    let items: Vec<&RenderedItem> = snapshots.iter().map(|snapshot| &**snapshot).collect();
    let json =
        serde_json::to_string_pretty(&items).context("Failed to serialize snapshots to JSON")?;
    println!("{}", json);
    Ok(())
}
