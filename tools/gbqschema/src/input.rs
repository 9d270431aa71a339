use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

/// Where the schema to convert comes from. Exactly one source is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Input object as a JSON string
    #[arg(short, long)]
    input: Option<String>,

    /// Input object as a file path
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<Value> {
        match (&self.input, &self.file) {
            (Some(text), _) => serde_json::from_str(text).context("input parsing error"),
            (None, Some(path)) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("file reading error: {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("input parsing error in {}", path.display()))
            }
            (None, None) => unreachable!("clap enforces one input source"),
        }
    }
}

/// Pretty-prints `value` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}
