//! Library layer for the IRS prior-year products catalog: revision-year
//! lookup, batch orchestration, and per-year PDF downloads.
//!
//! Wraps the `priorforms_api` catalog client with grouped earliest/latest
//! reduction over listing pages, a bounded worker pool that preserves input
//! order and captures per-item failures, and a downloader for the static
//! document host.

pub mod download;
pub mod error;
pub mod extrema;
pub mod lookup;
pub mod validation;

pub use priorforms_api;
pub use priorforms_api::{
    Client, Criteria, ListingTable, Query, RevisionQuery, SortDirection,
};

pub use download::{DownloadStatus, PdfDownloader, YearDownload};
pub use error::PriorFormsError;
pub use extrema::{revision_extrema, Extremum, RevisionExtrema};
pub use lookup::{FormLookup, FormRecord, LookupFailure, LookupReport};

/// Default worker-pool size for batch lookups and downloads.
pub const DEFAULT_CONCURRENCY: usize = 5;
