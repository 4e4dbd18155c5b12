use tutor_core::api::{is_local_hostname, select_origin, AnalysisKind, Endpoints};
use tutor_core::config::{ClientConfig, EndpointConfig};
use tutor_core::consts::{LOCAL_ORIGIN, PRODUCTION_ORIGIN};

// ---------------------------------------------------------------------------
// Endpoint selection
// ---------------------------------------------------------------------------

#[test]
fn test_localhost_selects_local_origin() {
    let endpoints = EndpointConfig::default();
    assert_eq!(select_origin("localhost", &endpoints), LOCAL_ORIGIN);
    assert_eq!(select_origin("127.0.0.1", &endpoints), LOCAL_ORIGIN);
}

#[test]
fn test_local_hostname_ignores_case_and_trailing_dot() {
    let endpoints = EndpointConfig::default();
    for host in ["LOCALHOST", "LocalHost", "localhost.", "127.0.0.1."] {
        assert!(is_local_hostname(host), "host {host:?}");
        assert_eq!(select_origin(host, &endpoints), LOCAL_ORIGIN, "host {host:?}");
    }
}

#[test]
fn test_other_hostnames_select_production_origin() {
    let endpoints = EndpointConfig::default();
    for host in ["gre-ai-cbdb67695e84.herokuapp.com", "example.com", "", "localhost..", "my-localhost", "0.0.0.0"] {
        assert_eq!(select_origin(host, &endpoints), PRODUCTION_ORIGIN, "host {host:?}");
        assert!(!is_local_hostname(host));
    }
}

#[test]
fn test_endpoint_urls() {
    let urls = Endpoints::new("http://127.0.0.1:8000/");
    assert_eq!(urls.origin(), "http://127.0.0.1:8000");
    assert_eq!(
        urls.analyze(AnalysisKind::Verbal),
        "http://127.0.0.1:8000/analyze-gre-verbal"
    );
    assert_eq!(
        urls.analyze(AnalysisKind::Quant),
        "http://127.0.0.1:8000/analyze-gre-quant"
    );
    assert_eq!(
        urls.analyze(AnalysisKind::Writing),
        "http://127.0.0.1:8000/analyze-gre-writing"
    );
    assert_eq!(urls.follow_up(), "http://127.0.0.1:8000/follow-up");
    assert_eq!(urls.feedback(), "http://127.0.0.1:8000/feedback");
    assert_eq!(urls.server_version(), "http://127.0.0.1:8000/tesseract-version");
}

#[test]
fn test_analysis_kind_display() {
    assert_eq!(format!("{}", AnalysisKind::Verbal), "Verbal");
    assert_eq!(format!("{}", AnalysisKind::Quant), "Quant");
    assert_eq!(format!("{}", AnalysisKind::Writing), "Writing");
    assert_eq!(AnalysisKind::default(), AnalysisKind::Verbal);
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_targets_local_server() {
    let config = ClientConfig::default();
    assert_eq!(config.hostname, "localhost");
    assert_eq!(config.request_timeout_secs, None);
    assert_eq!(config.endpoints().origin(), LOCAL_ORIGIN);
}

#[test]
fn test_config_toml_roundtrip() {
    let config = ClientConfig {
        hostname: "tutor.example.com".into(),
        analysis: AnalysisKind::Writing,
        request_timeout_secs: Some(90),
        endpoints: EndpointConfig {
            local_origin: "http://localhost:9000".into(),
            production_origin: "https://tutor.example.com".into(),
        },
    };
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("analysis = \"writing\""), "got:\n{text}");
    assert_eq!(ClientConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = ClientConfig::from_toml_str("hostname = \"example.org\"\n").unwrap();
    assert_eq!(config.analysis, AnalysisKind::Verbal);
    assert_eq!(config.endpoints, EndpointConfig::default());
    assert_eq!(config.endpoints().origin(), PRODUCTION_ORIGIN);
}

#[test]
fn test_invalid_config_is_an_error() {
    assert!(ClientConfig::from_toml_str("analysis = \"history\"").is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor.toml");
    std::fs::write(&path, "hostname = \"127.0.0.1\"\nrequest_timeout_secs = 5\n").unwrap();

    let config = ClientConfig::load(&path).unwrap();
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(config.endpoints().origin(), LOCAL_ORIGIN);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ClientConfig::load(&dir.path().join("missing.toml")).is_err());
}
