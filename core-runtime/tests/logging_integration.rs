//! Integration tests for logging system

use bridge_traits::logging::LogLevel;
use core_runtime::logging::{
    init_logging, redact_if_sensitive, redact_query_key, LogFormat, LoggingConfig,
};

#[test]
fn test_logging_initialization() {
    // A global subscriber can only be installed once per process
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_pii_redaction(true);

    init_logging(config).unwrap();
    tracing::info!(api_key = %redact_if_sensitive("api_key", "AIza-secret"), "Logging initialized");

    assert!(init_logging(LoggingConfig::default()).is_err());
}

#[test]
fn test_api_key_redaction() {
    assert_eq!(redact_if_sensitive("api_key", "AIza-secret"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("Authorization", "Bearer x"), "[REDACTED]");

    let url = "https://www.googleapis.com/drive/v3/files?q=%27root%27%20in%20parents&key=AIza-secret&fields=files";
    let redacted = redact_if_sensitive("url", url);

    assert!(!redacted.contains("AIza-secret"));
    assert!(redacted.contains("key=REDACTED"));
    assert!(redacted.contains("&fields=files"));
}

#[test]
fn test_normal_values_pass_through() {
    assert_eq!(redact_if_sensitive("folder_id", "1AbC"), "1AbC");
    assert_eq!(redact_if_sensitive("name", "report.pdf"), "report.pdf");
    assert_eq!(
        redact_query_key("https://drive.google.com/uc?id=1&export=download"),
        "https://drive.google.com/uc?id=1&export=download"
    );
}

#[test]
fn test_format_selection() {
    // Debug builds should default to Pretty
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    // Release builds should default to JSON
    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Warn)
        .with_filter("provider_google_drive=trace,reqwest=debug")
        .with_pii_redaction(false)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(
        config.filter,
        Some("provider_google_drive=trace,reqwest=debug".to_string())
    );
    assert!(!config.redact_pii);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}
