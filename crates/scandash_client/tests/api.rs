use pretty_assertions::assert_eq;
use scandash_client::{ApiClient, ClientError, StartReply};
use scandash_core::{ScanStatusRecord, TargetRecord};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri()).expect("valid base url")
}

#[tokio::test]
async fn fetch_targets_decodes_records_including_absent_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/targets/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id": 2, "domain": "b.com", "brand": null, "status": "INCOMPLETE",
                 "is_verified": false, "is_active": false},
                {"id": 1, "domain": "a.com", "brand": "Acme", "status": "ORIGINAL (CSE)",
                 "is_verified": true, "is_active": true, "scan_interval_minutes": 10,
                 "homepage_url": "https://a.com", "notes": null}
            ]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let targets = client_for(&server).await.fetch_targets().await.expect("fetch ok");

    // Returned as-is; ordering is the view model's concern.
    assert_eq!(
        targets,
        vec![
            TargetRecord {
                id: 2,
                domain: "b.com".to_string(),
                brand: None,
                status: "INCOMPLETE".to_string(),
                is_verified: false,
                is_active: false,
                scan_interval_minutes: None,
            },
            TargetRecord {
                id: 1,
                domain: "a.com".to_string(),
                brand: Some("Acme".to_string()),
                status: "ORIGINAL (CSE)".to_string(),
                is_verified: true,
                is_active: true,
                scan_interval_minutes: Some(10),
            },
        ]
    );
}

#[tokio::test]
async fn fetch_targets_reports_decode_error_on_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/targets/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_targets().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn fetch_targets_reports_server_error_with_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/targets/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"detail":"database exploded"}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_targets().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Server {
            status: 500,
            body: r#"{"detail":"database exploded"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn fetch_targets_reports_network_error_when_unreachable() {
    // Discard port; nothing listens there.
    let client = ApiClient::new("http://127.0.0.1:9").expect("valid base url");
    let err = client.fetch_targets().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn fetch_status_decodes_the_flag_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/targets/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"running": true, "stopped": false, "current_target": "a.com"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let status = client_for(&server).await.fetch_status().await.expect("fetch ok");
    assert_eq!(
        status,
        ScanStatusRecord {
            running: true,
            stopped: false,
            current_target: Some("a.com".to_string()),
        }
    );
}

#[tokio::test]
async fn start_scan_posts_without_body_and_returns_domain_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/targets/start"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status": "started", "domains": 12}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let reply = client_for(&server).await.start_scan().await.expect("start ok");
    assert_eq!(reply, StartReply { domains: 12 });
}

#[tokio::test]
async fn start_scan_surfaces_rejection_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/targets/start"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"detail":"Scan already running"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).await.start_scan().await.unwrap_err();
    match err {
        ClientError::Server { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Scan already running"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn stop_scan_succeeds_without_reading_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/targets/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status": "stopped", "whatever": [1, 2, 3]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    client_for(&server).await.stop_scan().await.expect("stop ok");
}

#[tokio::test]
async fn upload_bulk_posts_multipart_field_file_and_echoes_raw_reply() {
    let server = MockServer::start().await;
    let reply = r#"{"status":"ok","inserted":3}"#;
    Mock::given(method("POST"))
        .and(path("/targets/bulk"))
        .and(body_string_contains(r#"name="file""#))
        .and(body_string_contains(r#"filename="targets.csv""#))
        .and(body_string_contains("domain,brand"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(reply, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .await
        .upload_bulk("targets.csv", b"domain,brand\nnew.com,Acme\n".to_vec())
        .await
        .expect("upload ok");

    assert_eq!(body, reply);
}

#[tokio::test]
async fn upload_bulk_rejects_non_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/targets/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_string("uploaded!"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .upload_bulk("targets.csv", b"domain\n".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn upload_bulk_surfaces_server_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/targets/bulk"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"bad csv"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .upload_bulk("targets.csv", b"oops".to_vec())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Server {
            status: 422,
            body: r#"{"detail":"bad csv"}"#.to_string(),
        }
    );
}
