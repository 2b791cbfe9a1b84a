//! Extraction of the catalog's results table into named columns.

use scraper::{ElementRef, Html, Selector};

/// CSS selector for the results table on a catalog search page.
const RESULTS_TABLE: &str = "table.picklist-dataTable";

/// One extracted column: the trimmed header text and the cell values below it.
#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<String>,
}

/// The results table of one catalog page, reconstructed as named columns.
///
/// Columns appear in header order and all hold the same number of values:
/// one per data row processed before the first non-uniform row.
#[derive(Debug, Clone, Default)]
pub struct ListingTable {
    columns: Vec<Column>,
}

impl ListingTable {
    /// Parses a catalog page and reconstructs its results table.
    ///
    /// The first row of the table is the header; its trimmed cell texts become
    /// the column names. Each following row contributes one value per column,
    /// in document order. The first row whose cell count differs from the
    /// header's ends the data section (the catalog closes the table with a
    /// pagination row spanning all columns), and everything after it is
    /// ignored. A page without the table yields an empty `ListingTable`.
    pub fn parse(html: &str) -> ListingTable {
        let document = Html::parse_document(html);
        let table_selector =
            Selector::parse(RESULTS_TABLE).expect("Invalid CSS selector for the results table");
        let row_selector = Selector::parse("tr").expect("Invalid CSS selector for table rows");
        let cell_selector =
            Selector::parse("th, td").expect("Invalid CSS selector for table cells");

        let Some(table) = document.select(&table_selector).next() else {
            tracing::debug!("No results table in page");
            return ListingTable::default();
        };

        let mut rows = table.select(&row_selector);
        let Some(header) = rows.next() else {
            return ListingTable::default();
        };

        let mut columns: Vec<Column> = header
            .select(&cell_selector)
            .map(|cell| Column {
                name: cell_text(cell),
                values: Vec::new(),
            })
            .collect();

        for row in rows {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
            if cells.len() != columns.len() {
                break;
            }
            for (column, cell) in columns.iter_mut().zip(cells) {
                column.values.push(cell_text(cell));
            }
        }

        ListingTable { columns }
    }

    /// Builds a table directly from `(name, values)` pairs.
    ///
    /// Callers are expected to supply value vectors of equal length.
    pub fn from_columns<I>(columns: I) -> ListingTable
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        ListingTable {
            columns: columns
                .into_iter()
                .map(|(name, values)| Column { name, values })
                .collect(),
        }
    }

    /// Looks up a column's values by its trimmed header name.
    ///
    /// When two headers trim to the same name, the last occurrence wins.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .rev()
            .find(|column| column.name == name)
            .map(|column| column.values.as_slice())
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    /// True when the table has no columns or no data rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// Full text content of a cell, nested elements included, trimmed.
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<Vec<_>>().join("").trim().to_string()
}
