use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Args;
use gbqschema_jsonschema::column_list_to_json_schema;
use tracing::info;

use crate::input::{InputArgs, write_output};

#[derive(Args)]
pub struct ToJsonSchemaArgs {
    #[command(flatten)]
    source: InputArgs,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Allow properties not listed in the schema
    #[arg(long)]
    additional_properties: bool,
}

impl ToJsonSchemaArgs {
    pub fn run(self) -> Result<()> {
        let columns = self.source.read()?;

        let started = Instant::now();
        let document = column_list_to_json_schema(&columns, self.additional_properties)
            .context("schema conversion error")?;
        info!(
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "converted column list to JSON Schema"
        );

        write_output(self.output.as_deref(), &document)
    }
}
