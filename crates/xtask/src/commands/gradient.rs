//! Preview color and gradient tokens in the terminal

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use item_core::{ItemConfig, ItemError, Placeholders, TextField, parse_color};

use crate::utils::{field, paint};

/// Preview a color or gradient token on some text
#[derive(Parser)]
pub struct Gradient {
    /// Color token, e.g. `#33FFBB` or `#12EADC-#43F0C0<>`
    #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
    token: String,

    /// Text to color; `{name}` placeholders are substituted first
    #[arg(value_name = "TEXT")]
    text: String,

    /// Placeholder value as `name=value` (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    placeholders: Vec<String>,

    /// Print the hex color of every run
    #[arg(short, long)]
    verbose: bool,
}

impl Gradient {
    pub fn execute(self) -> Result<()> {
        let color = match parse_color(&self.token) {
            Ok(color) => color,
            Err(err) if err.severity().is_recoverable() => {
                let fallback = ItemConfig::default().default_name_color;
                tracing::warn!(code = err.error_code(), %fallback, "{err}, using default color");
                fallback
            }
            Err(err) => return Err(err.into()),
        };

        let mut placeholders = Placeholders::new();
        for pair in &self.placeholders {
            let (name, value) = pair
                .split_once('=')
                .with_context(|| format!("Expected NAME=VALUE, got {pair:?}"))?;
            placeholders.insert(name.to_string(), value.to_string());
        }

        let runs = TextField::new(self.text, color).render(&placeholders);

        field("Token:", color);
        field("Runs:", runs.len());
        println!();
        println!("{}", paint(&runs));

        if self.verbose {
            println!();
            for (index, run) in runs.iter().enumerate() {
                println!("  {:>3} {} {:?}", index, style(run.color).dim(), run.text);
            }
        }

        Ok(())
    }
}
