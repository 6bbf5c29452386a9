// tests/logging_level.rs

use pkgwatch::cli::LogLevel;
use pkgwatch::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), Level::TRACE);
}

#[test]
fn env_value_is_parsed_leniently() {
    assert_eq!(resolve_level(None, Some(" Warning ")), Level::WARN);
    assert_eq!(resolve_level(None, Some("DEBUG")), Level::DEBUG);
}

#[test]
fn unknown_or_missing_env_defaults_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), Level::INFO);
    assert_eq!(resolve_level(None, None), Level::INFO);
}
