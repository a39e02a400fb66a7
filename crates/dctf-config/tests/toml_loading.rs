//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use std::path::PathBuf;

use dctf_config::{ConfigError, DctfConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_query_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[query]
delay_ms = 0
seed = 42
"#,
        )?;

        let config: DctfConfig = Figment::from(Serialized::defaults(DctfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.query.delay_ms, 0);
        assert_eq!(config.query.seed, Some(42));
        assert_eq!(config.export.file_prefix, "resultados_dctf");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dctf")?;
        jail.create_file(
            ".dctf/config.toml",
            r#"
[export]
output_dir = "relatorios"
file_prefix = "dctf_mensal"
"#,
        )?;

        let config = DctfConfig::load().expect("config loads");
        assert_eq!(config.export.output_dir, PathBuf::from("relatorios"));
        assert_eq!(config.export.file_prefix, "dctf_mensal");
        assert_eq!(config.query.delay_ms, 500);
        Ok(())
    });
}

#[test]
fn invalid_prefix_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
file_prefix = ""
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(DctfConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = DctfConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[query\ndelay_ms = 1")?;

        let figment = Figment::from(Serialized::defaults(DctfConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = DctfConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
