use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Args;
use gbqschema_jsonschema::json_schema_to_column_list_with_policy;
use tracing::info;

use crate::{
    input::{InputArgs, write_output},
    naming::TypeNaming,
};

#[derive(Args)]
pub struct ToGbqArgs {
    #[command(flatten)]
    source: InputArgs,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Type names for integer/number properties: canonical | 64bit
    #[arg(long, value_enum, default_value_t = TypeNaming::Canonical)]
    naming: TypeNaming,
}

impl ToGbqArgs {
    pub fn run(self) -> Result<()> {
        let document = self.source.read()?;

        let started = Instant::now();
        let columns = json_schema_to_column_list_with_policy(&document, self.naming.into())
            .context("schema conversion error")?;
        info!(
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "converted JSON Schema to column list"
        );

        write_output(self.output.as_deref(), &columns)
    }
}
