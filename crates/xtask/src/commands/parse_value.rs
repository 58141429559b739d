//! Parse attribute value literals and show how they persist

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use item_core::{AttributeValue, PersistedValue};

/// Parse attribute value literals
#[derive(Parser)]
pub struct ParseValue {
    /// Literals such as `true`, `5b`, `42i`, `1.5f`, `2.0d`, `'text'`, `7`
    #[arg(value_name = "LITERAL", required = true, allow_hyphen_values = true)]
    literals: Vec<String>,
}

impl ParseValue {
    pub fn execute(self) -> Result<()> {
        for literal in &self.literals {
            let value: AttributeValue = literal
                .parse()
                .with_context(|| format!("Failed to parse {literal:?}"))?;
            let persisted = PersistedValue::from(&value);

            println!(
                "{} {} {} {}",
                style(literal).bold().cyan(),
                style(value.type_name()).yellow(),
                value,
                style(format!("-> {}", persisted.tag())).dim()
            );
        }
        Ok(())
    }
}
