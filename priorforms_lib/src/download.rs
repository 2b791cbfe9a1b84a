//! Per-year PDF downloads from the static prior-year document host.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use priorforms_api::user_agent::get_user_agent;

use crate::error::PriorFormsError;

/// What happened for one requested year.
#[derive(Debug)]
pub enum DownloadStatus {
    /// The document was fetched and written to this path.
    Saved(PathBuf),
    /// The host answered with a non-success status: no document is
    /// published for that year.
    NotPublished,
    /// The fetch or the file write failed.
    Failed(PriorFormsError),
}

/// Outcome of one year's download.
#[derive(Debug)]
pub struct YearDownload {
    pub year: i32,
    pub status: DownloadStatus,
}

impl YearDownload {
    /// Path of the saved file, when the download succeeded.
    pub fn saved_path(&self) -> Option<&Path> {
        match &self.status {
            DownloadStatus::Saved(path) => Some(path),
            _ => None,
        }
    }
}

/// Maps a form name to its token in document URLs: the literal `Form`
/// becomes `f`, spaces and hyphens are removed, the rest is lowercased.
///
/// "Form W-2" becomes `fw2`, "Form 1095-C" becomes `f1095c`.
pub fn url_token(form_name: &str) -> String {
    form_name
        .replace("Form", "f")
        .replace(' ', "")
        .replace('-', "")
        .to_lowercase()
}

/// Downloads prior-year documents for one form over a bounded worker pool.
///
/// Holds a single `reqwest::Client` with a 30-second timeout; documents are
/// saved as `"{form name} - {year}.pdf"` under the output directory.
pub struct PdfDownloader {
    http: reqwest::Client,
    base_url: String,
    out_dir: PathBuf,
    concurrency: usize,
}

impl PdfDownloader {
    /// Creates a downloader against the production document host.
    pub fn new(out_dir: impl AsRef<Path>) -> Result<Self, PriorFormsError> {
        Self::with_base_url("https://www.irs.gov", out_dir)
    }

    /// Creates a downloader with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        out_dir: impl AsRef<Path>,
    ) -> Result<Self, PriorFormsError> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            out_dir: out_dir.as_ref().to_path_buf(),
            concurrency: crate::DEFAULT_CONCURRENCY,
        })
    }

    /// Sets the worker-pool size (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Downloads every year in the inclusive range.
    ///
    /// Results come back one per year, in range order. Years the host has no
    /// document for are reported as [`DownloadStatus::NotPublished`]; fetch
    /// and write failures are captured per year without aborting the rest.
    /// An inverted range yields no results.
    pub async fn download_range(
        &self,
        form_name: &str,
        start_year: i32,
        end_year: i32,
    ) -> Vec<YearDownload> {
        let token = url_token(form_name);
        let years: Vec<i32> = (start_year..=end_year).collect();

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set = JoinSet::new();

        for (index, &year) in years.iter().enumerate() {
            let sem = Arc::clone(&semaphore);
            let http = self.http.clone();
            let url = format!("{}/pub/irs-prior/{}--{}.pdf", self.base_url, token, year);
            let dest = self.out_dir.join(format!("{} - {}.pdf", form_name, year));

            join_set.spawn(async move {
                let _permit = sem.acquire().await.expect("semaphore closed");
                (index, download_year(&http, &url, &dest).await)
            });
        }

        let mut slots: Vec<Option<DownloadStatus>> = (0..years.len()).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, status)) => slots[index] = Some(status),
                Err(join_error) => tracing::error!("Download task aborted: {}", join_error),
            }
        }

        years
            .into_iter()
            .zip(slots)
            .map(|(year, slot)| YearDownload {
                year,
                status: slot.unwrap_or_else(|| {
                    DownloadStatus::Failed(PriorFormsError::Task(
                        "worker ended without a result".to_string(),
                    ))
                }),
            })
            .collect()
    }
}

async fn download_year(http: &reqwest::Client, url: &str, dest: &Path) -> DownloadStatus {
    let resp = match http.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", url, e);
            return DownloadStatus::Failed(e.into());
        }
    };

    if !resp.status().is_success() {
        tracing::warn!("No document at {} (status {})", url, resp.status());
        return DownloadStatus::NotPublished;
    }

    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", url, e);
            return DownloadStatus::Failed(e.into());
        }
    };

    if let Some(parent) = dest.parent() {
        if let Err(e) = fs::create_dir_all(parent).await {
            return DownloadStatus::Failed(PriorFormsError::Io {
                path: parent.to_path_buf(),
                source: e,
            });
        }
    }
    if let Err(e) = fs::write(dest, &bytes).await {
        tracing::error!("Failed to write {}: {}", dest.display(), e);
        return DownloadStatus::Failed(PriorFormsError::Io {
            path: dest.to_path_buf(),
            source: e,
        });
    }

    tracing::info!("Saved {}", dest.display());
    DownloadStatus::Saved(dest.to_path_buf())
}
