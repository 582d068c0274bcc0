//! Tests for installing a process-wide configuration.
//!
//! Kept in its own test binary because installation is once per process.

use eid::{check_state, ConfigError, Eid, EidConfig};

#[test]
fn test_install_applies_and_is_final() {
    let config = EidConfig {
        uniq_length: 32,
        default_message: "unexpected".to_string(),
        log_message_separator: " -> ".to_string(),
    };
    config.clone().install().unwrap();
    assert_eq!(EidConfig::current(), &config);

    let eid = Eid::new("20150718:075046").unwrap();
    assert_eq!(eid.uniq().len(), 32);
    assert_eq!(eid.make_log_message("done", &[]), format!("{eid} -> done"));

    let err = check_state(false, "20150718:075046").unwrap_err();
    assert_eq!(err.to_string(), "[20150718:075046|unexpected]");

    assert_eq!(EidConfig::default().install(), Err(ConfigError::AlreadyInstalled));
}

#[test]
fn test_install_rejects_invalid_config() {
    let config = EidConfig {
        uniq_length: 4,
        ..EidConfig::default()
    };
    assert_eq!(
        config.install(),
        Err(ConfigError::UniqLengthOutOfRange { length: 4 })
    );
}
