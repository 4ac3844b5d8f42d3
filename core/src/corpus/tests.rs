use super::*;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const CORPUS: &str = r#"{
    "home": ["house", "building"],
    "car": ["automobile", "vehicle", "transport"],
    "cart": ["shopping", "trolley"],
    "dot": []
}"#;

mod common {
    use super::*;

    pub(super) fn names(records: &[IconRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    /// Serves exactly one HTTP response and returns the URL to request.
    pub(super) async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/icon-tags.json")
    }

    pub(super) fn direct_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }
}

mod parse {
    use super::common::*;
    use super::*;

    #[test]
    fn test_preserves_document_order() {
        let records = parse_corpus(CORPUS).unwrap();

        assert_eq!(names(&records), vec!["home", "car", "cart", "dot"]);
        assert_eq!(records[1].tags, vec!["automobile", "vehicle", "transport"]);
        assert!(records[3].tags.is_empty());
    }

    #[test]
    fn test_empty_object() {
        let records = parse_corpus("{}").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_invalid_names() {
        let records = parse_corpus(r#"{ "  ": ["blank"], "star": ["favorite"] }"#).unwrap();

        assert_eq!(names(&records), vec!["star"]);
    }

    #[test]
    fn test_trims_names() {
        let records = parse_corpus(r#"{ " star ": ["favorite"] }"#).unwrap();

        assert_eq!(names(&records), vec!["star"]);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_corpus(r#"{ "home": ["house""#).unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_array_tags() {
        let err = parse_corpus(r#"{ "home": "house" }"#).unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_string_tags() {
        let err = parse_corpus(r#"{ "home": ["house", 3] }"#).unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_rejects_top_level_array() {
        let err = parse_corpus(r#"[["home", "house"]]"#).unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }
}

mod file {
    use super::common::*;
    use super::*;

    #[tokio::test]
    async fn test_loads_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("icon-tags.json");
        std::fs::write(&path, CORPUS).unwrap();

        let provider = FileCorpusProvider::new(&path);
        let records = provider.load().await.unwrap();

        assert_eq!(names(&records), vec!["home", "car", "cart", "dot"]);
        assert_eq!(provider.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let provider = FileCorpusProvider::new(tmp.path().join("missing.json"));

        let err = provider.load().await.unwrap_err();

        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("icon-tags.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileCorpusProvider::new(&path).load().await.unwrap_err();

        assert!(matches!(err, CorpusError::Parse(_)));
    }
}

mod http {
    use super::common::*;
    use super::*;

    #[tokio::test]
    async fn test_loads_over_http() {
        let url = serve_once("200 OK", r#"{ "home": ["house"] }"#).await;
        let provider = HttpCorpusProvider::with_client(direct_client(), url);

        let records = provider.load().await.unwrap();

        assert_eq!(names(&records), vec!["home"]);
        assert_eq!(records[0].tags, vec!["house"]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let url = serve_once("404 Not Found", "missing").await;
        let provider = HttpCorpusProvider::with_client(direct_client(), url.clone());

        let err = provider.load().await.unwrap_err();

        match err {
            CorpusError::Status { status, url: failed } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let url = serve_once("200 OK", "<html></html>").await;
        let provider = HttpCorpusProvider::with_client(direct_client(), url);

        let err = provider.load().await.unwrap_err();

        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider =
            HttpCorpusProvider::with_client(direct_client(), format!("http://{addr}/tags.json"));
        let err = provider.load().await.unwrap_err();

        assert!(matches!(err, CorpusError::Http(_)));
    }
}

mod source {
    use super::*;

    #[tokio::test]
    async fn test_inline_source_builds_provider() {
        let provider = CorpusSource::Inline {
            document: CORPUS.to_string(),
        }
        .into_provider();

        let records = provider.load().await.unwrap();

        assert_eq!(records.len(), 4);
        assert!(provider.describe().starts_with("inline"));
    }

    #[test]
    fn test_file_source_describes_path() {
        let provider = CorpusSource::File {
            path: PathBuf::from("assets/icon-tags.json"),
        }
        .into_provider();

        assert_eq!(provider.describe(), "file assets/icon-tags.json");
    }

    #[test]
    fn test_http_source_describes_url() {
        let provider = CorpusSource::Http {
            url: "https://cdn.example.com/icon-tags.json".to_string(),
        }
        .into_provider();

        assert_eq!(
            provider.describe(),
            "url https://cdn.example.com/icon-tags.json"
        );
    }

    #[test]
    fn test_source_deserializes_from_tagged_json() {
        let source: CorpusSource =
            serde_json::from_str(r#"{ "kind": "http", "url": "http://localhost/tags.json" }"#)
                .unwrap();

        assert_eq!(
            source,
            CorpusSource::Http {
                url: "http://localhost/tags.json".to_string()
            }
        );
    }
}
