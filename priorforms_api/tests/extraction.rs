use priorforms_api::ListingTable;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn extract_listing_full() {
    let html = load_fixture("w2_desc.html");
    let table = ListingTable::parse(&html);

    assert_eq!(
        table.column_names(),
        vec!["Product Number", "Title", "Revision Date"]
    );
    assert_eq!(table.row_count(), 5);

    let numbers = table.column("Product Number").unwrap();
    assert_eq!(numbers[0], "Form W-2");
    assert_eq!(numbers[1], "Form W-2AS");
    assert_eq!(numbers[2], "Form W-2GU");

    let titles = table.column("Title").unwrap();
    assert_eq!(titles[0], "Wage and Tax Statement (Info Copy Only)");

    let revisions = table.column("Revision Date").unwrap();
    assert_eq!(revisions, ["2011", "2011", "2010", "2002", "1999"]);
}

#[test]
fn extract_stops_at_pagination_row() {
    // The fixture closes the table with a single-cell pagination row; nothing
    // from it may leak into the columns.
    let html = load_fixture("w2_asc.html");
    let table = ListingTable::parse(&html);

    assert_eq!(table.row_count(), 5);
    let revisions = table.column("Revision Date").unwrap();
    assert!(revisions.iter().all(|value| value.parse::<i32>().is_ok()));
}

#[test]
fn extract_ignores_rows_after_first_nonuniform_row() {
    let html = r#"
        <table class="picklist-dataTable">
          <tr><th>Product Number</th><th>Title</th><th>Revision Date</th></tr>
          <tr><td>Form W-2</td><td>Wage and Tax Statement</td><td>2011</td></tr>
          <tr><td colspan="3">1 - 25 of 187 files</td></tr>
          <tr><td>Form W-2</td><td>Wage and Tax Statement</td><td>2010</td></tr>
        </table>
    "#;
    let table = ListingTable::parse(html);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column("Revision Date").unwrap(), ["2011"]);
}

#[test]
fn extract_trims_nested_cell_text() {
    let html = r##"
        <table class="picklist-dataTable">
          <tr><th> <a href="#">Product Number</a> <a href="#"><img alt=""/></a> </th></tr>
          <tr><td>  <a href="#">Form 1095-C</a>  </td></tr>
        </table>
    "##;
    let table = ListingTable::parse(html);

    assert_eq!(table.column_names(), vec!["Product Number"]);
    assert_eq!(table.column("Product Number").unwrap(), ["Form 1095-C"]);
}

#[test]
fn extract_missing_table_is_empty() {
    let html = load_fixture("no_results.html");
    let table = ListingTable::parse(&html);

    assert!(table.is_empty());
    assert!(table.column("Product Number").is_none());
}

#[test]
fn extract_header_only_table_is_empty() {
    let html = r#"
        <table class="picklist-dataTable">
          <tr><th>Product Number</th><th>Title</th><th>Revision Date</th></tr>
        </table>
    "#;
    let table = ListingTable::parse(html);

    assert!(table.is_empty());
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column("Title").unwrap().len(), 0);
}

#[test]
fn extract_duplicate_header_last_occurrence_wins() {
    let html = r#"
        <table class="picklist-dataTable">
          <tr><th>Title</th><th>Title</th></tr>
          <tr><td>first</td><td>second</td></tr>
        </table>
    "#;
    let table = ListingTable::parse(html);

    assert_eq!(table.column("Title").unwrap(), ["second"]);
}

#[test]
fn from_columns_lookup() {
    let table = ListingTable::from_columns([
        (
            "Product Number".to_string(),
            vec!["Form W-2".to_string(), "Form W-2".to_string()],
        ),
        (
            "Revision Date".to_string(),
            vec!["1999".to_string(), "2011".to_string()],
        ),
    ]);

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column("Revision Date").unwrap(), ["1999", "2011"]);
    assert!(table.column("Title").is_none());
}
