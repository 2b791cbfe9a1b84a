use priorforms_lib::{DownloadStatus, PdfDownloader, PriorFormsError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PDF_BYTES: &[u8] = b"%PDF-1.4 test document";

async fn mount_pdf(server: &MockServer, token: &str, year: i32) {
    Mock::given(method("GET"))
        .and(path(format!("/pub/irs-prior/{}--{}.pdf", token, year)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn download_range_saves_files_and_flags_gaps() {
    let mock_server = MockServer::start().await;
    mount_pdf(&mock_server, "fw2", 2008).await;
    mount_pdf(&mock_server, "fw2", 2010).await;
    mount_pdf(&mock_server, "fw2", 2011).await;
    Mock::given(method("GET"))
        .and(path("/pub/irs-prior/fw2--2009.pdf"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let downloader = PdfDownloader::with_base_url(&mock_server.uri(), out_dir.path()).unwrap();
    let downloads = downloader.download_range("Form W-2", 2008, 2011).await;

    assert_eq!(downloads.len(), 4);
    assert_eq!(
        downloads.iter().map(|d| d.year).collect::<Vec<_>>(),
        vec![2008, 2009, 2010, 2011]
    );
    assert!(matches!(downloads[0].status, DownloadStatus::Saved(_)));
    assert!(matches!(downloads[1].status, DownloadStatus::NotPublished));
    assert!(matches!(downloads[2].status, DownloadStatus::Saved(_)));
    assert!(matches!(downloads[3].status, DownloadStatus::Saved(_)));

    let saved = out_dir.path().join("Form W-2 - 2008.pdf");
    assert_eq!(downloads[0].saved_path(), Some(saved.as_path()));
    assert_eq!(std::fs::read(&saved).unwrap(), PDF_BYTES);
    assert!(!out_dir.path().join("Form W-2 - 2009.pdf").exists());
}

#[tokio::test]
async fn download_range_uses_token_urls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/irs-prior/f1095c--2020.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES.to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let downloader = PdfDownloader::with_base_url(&mock_server.uri(), out_dir.path()).unwrap();
    let downloads = downloader.download_range("Form 1095-C", 2020, 2020).await;

    assert_eq!(downloads.len(), 1);
    let saved = out_dir.path().join("Form 1095-C - 2020.pdf");
    assert_eq!(downloads[0].saved_path(), Some(saved.as_path()));
}

#[tokio::test]
async fn download_range_inverted_is_empty() {
    let mock_server = MockServer::start().await;

    let out_dir = tempfile::tempdir().unwrap();
    let downloader = PdfDownloader::with_base_url(&mock_server.uri(), out_dir.path()).unwrap();
    let downloads = downloader.download_range("Form W-2", 2011, 2008).await;

    assert!(downloads.is_empty());
}

#[tokio::test]
async fn download_range_creates_output_directory() {
    let mock_server = MockServer::start().await;
    mount_pdf(&mock_server, "fw2", 2011).await;

    let out_dir = tempfile::tempdir().unwrap();
    let nested = out_dir.path().join("pdf_downloads");
    let downloader = PdfDownloader::with_base_url(&mock_server.uri(), &nested).unwrap();
    let downloads = downloader.download_range("Form W-2", 2011, 2011).await;

    assert!(matches!(downloads[0].status, DownloadStatus::Saved(_)));
    assert!(nested.join("Form W-2 - 2011.pdf").exists());
}

#[tokio::test]
async fn download_write_failure_is_captured() {
    let mock_server = MockServer::start().await;
    mount_pdf(&mock_server, "fw2", 2011).await;

    // The output directory path points at an existing file, so creating it
    // must fail and the year must come back as a capture, not a save.
    let scratch = tempfile::tempdir().unwrap();
    let blocker = scratch.path().join("not_a_dir");
    std::fs::write(&blocker, b"occupied").unwrap();

    let downloader = PdfDownloader::with_base_url(&mock_server.uri(), &blocker).unwrap();
    let downloads = downloader.download_range("Form W-2", 2011, 2011).await;

    assert_eq!(downloads.len(), 1);
    assert!(matches!(
        downloads[0].status,
        DownloadStatus::Failed(PriorFormsError::Io { .. })
    ));
    assert_eq!(downloads[0].saved_path(), None);
}
