use std::path::PathBuf;

use dctf_config::DctfConfig;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("DCTF_QUERY__DELAY_MS", "25");
        jail.set_env("DCTF_QUERY__SEED", "7");
        jail.set_env("DCTF_EXPORT__OUTPUT_DIR", "/tmp/dctf");

        let config = DctfConfig::load().expect("config loads");
        assert_eq!(config.query.delay_ms, 25);
        assert_eq!(config.query.seed, Some(7));
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/dctf"));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dctf")?;
        jail.create_file(".dctf/config.toml", "[query]\ndelay_ms = 900\n")?;
        jail.set_env("DCTF_QUERY__DELAY_MS", "10");

        let config = DctfConfig::load().expect("config loads");
        assert_eq!(config.query.delay_ms, 10);
        Ok(())
    });
}

#[test]
fn unparsable_env_value_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("DCTF_QUERY__DELAY_MS", "soon");
        assert!(DctfConfig::load().is_err());
        Ok(())
    });
}
