//! Grouped earliest/latest revision reduction over a catalog listing.
//!
//! All functions operate on an extracted [`ListingTable`] and return standard
//! collections. They address columns by header name and do not perform
//! network calls.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use priorforms_api::ListingTable;

/// Header of the column holding form identifiers.
pub const PRODUCT_NUMBER: &str = "Product Number";
/// Header of the column holding form titles.
pub const TITLE: &str = "Title";
/// Header of the column holding revision dates.
pub const REVISION_DATE: &str = "Revision Date";

/// Which end of the revision ordering to keep per group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Keep the smallest revision value in each group.
    Earliest,
    /// Keep the largest revision value in each group.
    Latest,
}

/// Map from `(product number, title)` to the extreme revision value found.
///
/// A `BTreeMap` keeps iteration deterministic: when an identifier groups
/// under several titles, the first key is the lexically smallest title.
pub type RevisionExtrema = BTreeMap<(String, String), String>;

/// Reduces a listing to the earliest or latest revision per
/// `(product number, title)` group, keeping only rows whose product number
/// equals `form_number` exactly (case-sensitive, no normalization).
///
/// The catalog matches search values as substrings, so a listing for
/// "Form W-2" also carries W-2AS, W-2GU and similar rows; those are dropped
/// here. Returns an empty map when no row matches or when the listing is
/// missing any of the required columns.
pub fn revision_extrema(
    table: &ListingTable,
    form_number: &str,
    extremum: Extremum,
) -> RevisionExtrema {
    let mut result = RevisionExtrema::new();

    let (Some(numbers), Some(titles), Some(revisions)) = (
        table.column(PRODUCT_NUMBER),
        table.column(TITLE),
        table.column(REVISION_DATE),
    ) else {
        tracing::debug!("Listing is missing a required column");
        return result;
    };

    for ((number, title), revision) in numbers.iter().zip(titles.iter()).zip(revisions.iter()) {
        if number.as_str() != form_number {
            continue;
        }
        match result.entry((number.clone(), title.clone())) {
            Entry::Vacant(entry) => {
                entry.insert(revision.clone());
            }
            Entry::Occupied(mut entry) => {
                let keep = match extremum {
                    Extremum::Earliest => revision < entry.get(),
                    Extremum::Latest => revision > entry.get(),
                };
                if keep {
                    entry.insert(revision.clone());
                }
            }
        }
    }

    result
}
