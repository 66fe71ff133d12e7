use std::io::Write;
use std::sync::{Arc, Mutex};

use gigarelay_engine::{
    EngineEvent, FailureKind, ProgressSink, ReqwestUploader, TransferProgress, UploadJob,
    UploadLinks, UploadOutcome, UploadSettings, UploadSource, Uploader,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn progress(&self) -> Vec<TransferProgress> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Progress(progress) => Some(*progress),
                _ => None,
            })
            .collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn uploader_for(server: &MockServer) -> ReqwestUploader {
    ReqwestUploader::new(UploadSettings {
        endpoint: format!("{}/api/upload", server.uri()),
        chunk_size: 4,
        ..UploadSettings::default()
    })
}

fn url_job(url: &str, duration_days: u32) -> UploadJob {
    UploadJob {
        transfer_id: 1,
        source: UploadSource::Url(url.to_string()),
        duration_days,
    }
}

async fn mount_json(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

async fn received_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

#[tokio::test]
async fn url_upload_sends_url_and_duration_only() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        r#"{"success":true,"url":"https://g/p1","raw_url":"https://g/r1","proxy_url":"https://g/x1","expires":"2026-01-28T10:00:00+00:00"}"#,
    )
    .await;

    let sink = Arc::new(TestSink::default());
    let outcome = uploader_for(&server)
        .upload(&url_job("https://example.com/a.zip", 7), sink.clone())
        .await
        .expect("upload ok");

    assert_eq!(
        outcome,
        UploadOutcome::Accepted(UploadLinks {
            page_url: "https://g/p1".to_string(),
            direct_url: "https://g/r1".to_string(),
            proxy_url: "https://g/x1".to_string(),
            filename: None,
            expires: Some("2026-01-28T10:00:00+00:00".to_string()),
        })
    );

    let body = received_body(&server).await;
    assert!(body.contains("name=\"url\"\r\n\r\nhttps://example.com/a.zip\r\n"));
    assert!(body.contains("name=\"duration\"\r\n\r\n7\r\n"));
    assert!(!body.contains("name=\"file\""));
    assert!(sink.progress().is_empty());
}

#[tokio::test]
async fn file_upload_streams_bytes_and_reports_progress() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        r#"{"success":true,"url":"https://g/p1","raw_url":"https://g/r1","proxy_url":"https://g/x1","filename":"report.pdf"}"#,
    )
    .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"0123456789").unwrap();
    file.flush().unwrap();

    let job = UploadJob {
        transfer_id: 9,
        source: UploadSource::File {
            path: file.path().to_path_buf(),
            name: "report.pdf".to_string(),
            size: 10,
        },
        duration_days: 100,
    };
    let sink = Arc::new(TestSink::default());
    let outcome = uploader_for(&server)
        .upload(&job, sink.clone())
        .await
        .expect("upload ok");
    match outcome {
        UploadOutcome::Accepted(links) => {
            assert_eq!(links.filename.as_deref(), Some("report.pdf"))
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    let body = received_body(&server).await;
    assert!(body.contains("name=\"file\"; filename=\"report.pdf\""));
    assert!(body.contains("0123456789"));
    assert!(body.contains("name=\"duration\"\r\n\r\n100\r\n"));
    assert!(!body.contains("name=\"url\""));

    let progress = sink.progress();
    assert!(progress.iter().all(|p| p.transfer_id == 9));
    assert!(progress.iter().all(|p| p.total_bytes == Some(10)));
    let sent: Vec<u64> = progress.iter().map(|p| p.bytes_sent).collect();
    assert_eq!(sent.first(), Some(&0));
    assert_eq!(sent.last(), Some(&10));
    assert!(sent.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn success_false_is_a_rejection() {
    let server = MockServer::start().await;
    mount_json(&server, 200, r#"{"success":false,"error":"too large"}"#).await;

    let outcome = uploader_for(&server)
        .upload(&url_job("https://example.com/a.zip", 3), Arc::new(TestSink::default()))
        .await
        .expect("2xx reply");
    assert_eq!(
        outcome,
        UploadOutcome::Rejected {
            error: Some("too large".to_string())
        }
    );
}

#[tokio::test]
async fn non_success_status_carries_detail() {
    let server = MockServer::start().await;
    mount_json(&server, 500, r#"{"detail":"gigafile unreachable"}"#).await;

    let err = uploader_for(&server)
        .upload(&url_job("https://example.com/a.zip", 5), Arc::new(TestSink::default()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.detail.as_deref(), Some("gigafile unreachable"));
}

#[tokio::test]
async fn non_json_error_body_has_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = uploader_for(&server)
        .upload(&url_job("https://example.com/a.zip", 5), Arc::new(TestSink::default()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.detail, None);
    assert_eq!(err.to_string(), "http status 502: Bad Gateway");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let closed_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uploader = ReqwestUploader::new(UploadSettings {
        endpoint: format!("http://127.0.0.1:{closed_port}/api/upload"),
        ..UploadSettings::default()
    });

    let err = uploader
        .upload(&url_job("https://example.com/a.zip", 5), Arc::new(TestSink::default()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let server = MockServer::start().await;
    let job = UploadJob {
        transfer_id: 2,
        source: UploadSource::File {
            path: "/definitely/not/here.bin".into(),
            name: "here.bin".to_string(),
            size: 1,
        },
        duration_days: 100,
    };
    let err = uploader_for(&server)
        .upload(&job, Arc::new(TestSink::default()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
    assert!(server.received_requests().await.unwrap().is_empty());
}
