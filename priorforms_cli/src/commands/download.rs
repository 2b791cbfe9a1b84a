use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use priorforms_lib::validation;
use priorforms_lib::PdfDownloader;

use crate::output::{download_report, print_downloads_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DownloadArgs {
    /// Form identifier, e.g. "Form W-2"
    #[arg(long)]
    pub form_name: String,

    /// First year of the inclusive range
    #[arg(long)]
    pub start: String,

    /// Last year of the inclusive range
    #[arg(long)]
    pub end: String,

    /// Directory downloaded documents are written to
    #[arg(long, default_value = "pdf_downloads")]
    pub out_dir: PathBuf,

    /// Number of concurrent downloads
    #[arg(long, default_value = "5")]
    pub concurrency: usize,
}

pub async fn run(args: &DownloadArgs, format: &OutputFormat) -> Result<()> {
    let form_name = validation::validate_form_name(&args.form_name)?;
    // Years are validated before any network activity.
    let (start, end) = validation::validate_year_range(&args.start, &args.end)?;

    let downloader = PdfDownloader::new(&args.out_dir)?.with_concurrency(args.concurrency);
    let downloads = downloader.download_range(&form_name, start, end).await;

    match format {
        OutputFormat::Json => print_json(&download_report(&downloads)),
        OutputFormat::Table => print_downloads_table(&downloads),
    }

    Ok(())
}
