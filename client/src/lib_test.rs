use super::*;

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(log_level(None), log::Level::Info);
    assert_eq!(log_level(Some("bogus")), log::Level::Info);
}

#[test]
fn log_level_parses_configured_values() {
    assert_eq!(log_level(Some("error")), log::Level::Error);
    assert_eq!(log_level(Some("warn")), log::Level::Warn);
    assert_eq!(log_level(Some("debug")), log::Level::Debug);
    assert_eq!(log_level(Some("trace")), log::Level::Trace);
}
