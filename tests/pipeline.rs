//! End-to-end tests for the release pipeline against a mock releases API.

use release_dl::{ClientConfig, Error, GithubClient, ReleaseRequest};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO: &str = "dgraph-io/dgraph";

fn asset(server: &MockServer, tag: &str, name: &str, size: usize) -> serde_json::Value {
    json!({
        "url": format!("{}/api/assets/{}", server.uri(), name),
        "browser_download_url": format!("{}/download/{}/{}", server.uri(), tag, name),
        "name": name,
        "content_type": "application/octet-stream",
        "size": size
    })
}

fn release(server: &MockServer, tag: &str, names: &[&str]) -> serde_json::Value {
    json!({
        "tag_name": tag,
        "name": format!("Dgraph {}", tag),
        "created_at": "2018-01-01T00:00:00Z",
        "published_at": "2018-01-02T00:00:00Z",
        "assets": names.iter().map(|n| asset(server, tag, n, 11)).collect::<Vec<_>>()
    })
}

/// Mount a release list (newest first) and one download body per release.
async fn mount_repo(server: &MockServer) {
    let releases = json!([
        release(server, "v1.1.0", &["dgraph-darwin-amd64.tar.gz", "dgraph-linux-amd64.tar.gz"]),
        release(server, "nightly", &["dgraph-linux-amd64.tar.gz"]),
        release(server, "v1.0.4", &["dgraph-linux-amd64.tar.gz", "dgraph-windows-amd64.zip"]),
        release(server, "v0.9.4", &["dgraph-linux-amd64.tar.gz"]),
    ]);

    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases", REPO)))
        .respond_with(ResponseTemplate::new(200).set_body_json(releases))
        .mount(server)
        .await;

    for tag in ["v1.1.0", "v1.0.4", "v0.9.4"] {
        Mock::given(method("GET"))
            .and(path(format!("/download/{}/dgraph-linux-amd64.tar.gz", tag)))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("linux {}", tag)))
            .mount(server)
            .await;
    }
}

fn client_for(server: &MockServer) -> GithubClient {
    GithubClient::new(ClientConfig::default().with_api_base(&server.uri()))
}

#[tokio::test]
async fn test_download_latest_release() {
    let server = MockServer::start().await;
    mount_repo(&server).await;
    let dir = TempDir::new().unwrap();

    let request = ReleaseRequest::new(REPO)
        .directory(dir.path())
        .platform("linux")
        .arch("x64");
    let mut total = 0usize;
    let mut on_chunk = |len: usize| total += len;
    let path = client_for(&server)
        .download_release(&request, Some(&mut on_chunk))
        .unwrap();

    assert_eq!(path, dir.path().join("dgraph-linux-amd64.tar.gz"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "linux v1.1.0");
    assert_eq!(total, contents.len());
}

#[tokio::test]
async fn test_download_by_range() {
    let server = MockServer::start().await;
    mount_repo(&server).await;
    let dir = TempDir::new().unwrap();

    let request = ReleaseRequest::new(REPO)
        .constraint("~1.0")
        .directory(dir.path())
        .platform("linux")
        .arch("amd64");
    let path = client_for(&server).download_release(&request, None).unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "linux v1.0.4");
}

#[tokio::test]
async fn test_resolve_then_match() {
    let server = MockServer::start().await;
    mount_repo(&server).await;
    let client = client_for(&server);

    let release = client.resolve_release(REPO, "^1.0").unwrap();
    assert_eq!(release.tag_name, "v1.1.0");
    assert_eq!(release.display_name(), "Dgraph v1.1.0");
    assert_eq!(release.published_at.as_deref(), Some("2018-01-02T00:00:00Z"));

    let asset = release_dl::match_asset(&release, "darwin", "x64").unwrap();
    assert_eq!(asset.name, "dgraph-darwin-amd64.tar.gz");
    assert_eq!(asset.content_type, "application/octet-stream");
    assert_eq!(asset.size, 11);
}

#[tokio::test]
async fn test_pipeline_stops_at_first_failure() {
    let server = MockServer::start().await;
    mount_repo(&server).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(&server);

    let request = ReleaseRequest::new(REPO).constraint("abc").directory(dir.path());
    let err = client.download_release(&request, None).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)));

    let request = ReleaseRequest::new(REPO).constraint("^7.0").directory(dir.path());
    let err = client.download_release(&request, None).unwrap_err();
    assert_eq!(err.to_string(), "no version satisfies range ^7.0");

    let request = ReleaseRequest::new(REPO)
        .directory(dir.path())
        .platform("aix")
        .arch("s390x");
    let err = client.download_release(&request, None).unwrap_err();
    assert_eq!(err.to_string(), "no asset for platform aix with arch s390x");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_asset_body_leaves_no_file() {
    let server = MockServer::start().await;
    mount_repo(&server).await;
    let dir = TempDir::new().unwrap();

    // The darwin asset of v1.1.0 is listed but has no download mounted
    let request = ReleaseRequest::new(REPO)
        .directory(dir.path())
        .platform("darwin")
        .arch("x64");
    let err = client_for(&server).download_release(&request, None).unwrap_err();

    assert!(matches!(err, Error::Download { ref file_name, .. } if file_name == "dgraph-darwin-amd64.tar.gz"));
    assert!(!dir.path().join("dgraph-darwin-amd64.tar.gz").exists());
}
