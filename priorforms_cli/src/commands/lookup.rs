use anyhow::Result;
use clap::Args;
use priorforms_lib::validation;
use priorforms_lib::{Client, FormLookup};

use crate::output::{print_json, print_records_table, OutputFormat};

#[derive(Args)]
pub struct LookupArgs {
    /// Comma-separated form identifiers, e.g. "Form W-2, Form 1095-C"
    #[arg(long)]
    pub form_names: String,

    /// Number of concurrent catalog lookups
    #[arg(long, default_value = "5")]
    pub concurrency: usize,
}

pub async fn run(args: &LookupArgs, format: &OutputFormat) -> Result<()> {
    let names = validation::parse_form_names(&args.form_names)?;

    let lookup = FormLookup::new(Client::new()).with_concurrency(args.concurrency);
    let report = lookup.lookup_all(&names).await;

    for failure in &report.failures {
        eprintln!("lookup failed for {}: {}", failure.form_number, failure.error);
    }

    match format {
        OutputFormat::Json => print_json(&report.records),
        OutputFormat::Table => print_records_table(&report.records),
    }

    Ok(())
}
