//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use url::Url;

/// Trait implemented by catalog query builders. Provides URL serialization and
/// shared builder methods for pagination and sort direction.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the zero-based index of the first result row.
    fn with_index_of_first_row(mut self, index_of_first_row: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().index_of_first_row = index_of_first_row;
        self
    }

    /// Sets the number of results per page.
    fn with_results_per_page(mut self, results_per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().results_per_page = results_per_page;
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for catalog results.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (earliest revision first).
    Asc,
    /// Descending order (latest revision first). This is the default.
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire value for the catalog's `isDescending` parameter.
    pub(crate) fn is_descending(self) -> &'static str {
        match self {
            SortDirection::Asc => "false",
            SortDirection::Desc => "true",
        }
    }
}

/// Fields shared by all query types: pagination and sort direction.
#[derive(Clone, Copy)]
pub struct QueryCommon {
    /// Zero-based index of the first result row. Defaults to 0.
    pub index_of_first_row: i64,
    /// Results per page. Defaults to 25, the catalog's listing size.
    pub results_per_page: i64,
    /// Sort direction. Defaults to descending.
    pub sort_direction: SortDirection,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            index_of_first_row: 0,
            results_per_page: 25,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl QueryCommon {
    /// Appends the common pagination parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("indexOfFirstRow", &self.index_of_first_row.to_string());
        url.query_pairs_mut()
            .append_pair("resultsPerPage", &self.results_per_page.to_string());
        url
    }
}
