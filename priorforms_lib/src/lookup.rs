//! Revision-year lookup for form identifiers, single and batched.
//!
//! One lookup issues two catalog searches (ascending and descending by
//! revision date) and merges the reduced sides into at most one record. The
//! batch runner fans identifiers out over a bounded worker pool, preserving
//! input order and capturing per-identifier failures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use priorforms_api::{Client, Query, RevisionQuery, SortDirection};

use crate::error::PriorFormsError;
use crate::extrema::{revision_extrema, Extremum};

/// Revision-year extrema for one form.
///
/// Field order keeps serialized keys alphabetical, matching the CLI's
/// sorted-keys JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Exact identifier as listed in the catalog, e.g. "Form W-2".
    pub form_number: String,
    /// Title the identifier is listed under.
    pub form_title: String,
    /// Latest revision year, absent when the descending side had no rows.
    pub max_year: Option<String>,
    /// Earliest revision year, absent when the ascending side had no rows.
    pub min_year: Option<String>,
}

/// A lookup that failed entirely for one identifier.
#[derive(Debug)]
pub struct LookupFailure {
    pub form_number: String,
    pub error: PriorFormsError,
}

/// Outcome of a batch lookup: records in input order plus the failures
/// captured along the way.
#[derive(Debug, Default)]
pub struct LookupReport {
    pub records: Vec<FormRecord>,
    pub failures: Vec<LookupFailure>,
}

/// Batch lookup runner over the catalog client.
pub struct FormLookup {
    client: Arc<Client>,
    concurrency: usize,
}

impl FormLookup {
    /// Creates a runner with the default worker-pool size.
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
            concurrency: crate::DEFAULT_CONCURRENCY,
        }
    }

    /// Sets the worker-pool size (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Looks up one identifier: fetches the ascending and descending first
    /// pages, reduces each side, and merges them.
    ///
    /// Comes back empty when neither side lists the identifier; otherwise one
    /// record, with `min_year`/`max_year` absent for a side that had no rows.
    pub async fn lookup_form(&self, form_number: &str) -> Result<Vec<FormRecord>, PriorFormsError> {
        lookup_single(&self.client, form_number).await
    }

    /// Runs lookups for every identifier over the bounded worker pool.
    ///
    /// Records come back flattened in input order regardless of completion
    /// order; identifiers that match nothing contribute nothing. A failed
    /// lookup is captured in the report instead of aborting the batch.
    pub async fn lookup_all(&self, form_numbers: &[String]) -> LookupReport {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set = JoinSet::new();

        for (index, form_number) in form_numbers.iter().enumerate() {
            let sem = Arc::clone(&semaphore);
            let client = Arc::clone(&self.client);
            let form_number = form_number.clone();

            join_set.spawn(async move {
                let _permit = sem.acquire().await.expect("semaphore closed");
                (index, lookup_single(&client, &form_number).await)
            });
        }

        let mut slots: Vec<Option<Result<Vec<FormRecord>, PriorFormsError>>> =
            (0..form_numbers.len()).map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(join_error) => tracing::error!("Lookup task aborted: {}", join_error),
            }
        }

        let mut report = LookupReport::default();
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(Ok(records)) => report.records.extend(records),
                Some(Err(error)) => {
                    tracing::warn!("Lookup failed for {}: {}", form_numbers[index], error);
                    report.failures.push(LookupFailure {
                        form_number: form_numbers[index].clone(),
                        error,
                    });
                }
                None => report.failures.push(LookupFailure {
                    form_number: form_numbers[index].clone(),
                    error: PriorFormsError::Task("worker ended without a result".to_string()),
                }),
            }
        }
        report
    }
}

async fn lookup_single(
    client: &Client,
    form_number: &str,
) -> Result<Vec<FormRecord>, PriorFormsError> {
    let ascending = client
        .search(&RevisionQuery::form_number(form_number).with_sort_direction(SortDirection::Asc))
        .await?;
    let descending = client
        .search(&RevisionQuery::form_number(form_number).with_sort_direction(SortDirection::Desc))
        .await?;

    let earliest = revision_extrema(&ascending, form_number, Extremum::Earliest);
    let latest = revision_extrema(&descending, form_number, Extremum::Latest);

    // Either side alone is enough to identify the form; the other side's
    // year is then simply absent.
    let Some((number, title)) = earliest.keys().chain(latest.keys()).next().cloned() else {
        return Ok(Vec::new());
    };

    let key = (number.clone(), title.clone());
    Ok(vec![FormRecord {
        form_number: number,
        form_title: title,
        max_year: latest.get(&key).cloned(),
        min_year: earliest.get(&key).cloned(),
    }])
}
