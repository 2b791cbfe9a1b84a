use priorforms_lib::{DownloadStatus, FormRecord, YearDownload};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Product Number")]
    form_number: String,
    #[tabled(rename = "Title")]
    form_title: String,
    #[tabled(rename = "Earliest")]
    min_year: String,
    #[tabled(rename = "Latest")]
    max_year: String,
}

#[derive(Tabled)]
struct DownloadRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Status")]
    status: String,
}

// -- Row builders --

fn build_record_rows(records: &[FormRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            form_number: r.form_number.clone(),
            form_title: r.form_title.clone(),
            min_year: r.min_year.clone().unwrap_or_else(|| "-".to_string()),
            max_year: r.max_year.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_download_rows(downloads: &[YearDownload]) -> Vec<DownloadRow> {
    downloads
        .iter()
        .map(|d| DownloadRow {
            year: d.year,
            status: match &d.status {
                DownloadStatus::Saved(path) => path.display().to_string(),
                DownloadStatus::NotPublished => "not published".to_string(),
                DownloadStatus::Failed(e) => format!("failed: {}", e),
            },
        })
        .collect()
}

// -- Table output --

pub fn print_records_table(records: &[FormRecord]) {
    println!("{}", Table::new(build_record_rows(records)));
}

pub fn print_downloads_table(downloads: &[YearDownload]) {
    println!("{}", Table::new(build_download_rows(downloads)));
}

// -- JSON output --

/// JSON document for a download run: one entry per requested year, in range
/// order, holding the saved path on success and `false` otherwise.
pub fn download_report(downloads: &[YearDownload]) -> serde_json::Value {
    let paths: Vec<serde_json::Value> = downloads
        .iter()
        .map(|d| match d.saved_path() {
            Some(path) => serde_json::Value::String(path.display().to_string()),
            None => serde_json::Value::Bool(false),
        })
        .collect();
    serde_json::json!({ "downloaded pdf paths": paths })
}

/// Serializes with a 4-space indent.
fn to_json<T: serde::Serialize>(data: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match to_json(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
