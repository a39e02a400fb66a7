use anyhow::Context;
use dctf_config::DctfConfig;

use crate::cli::Cli;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(cli: &Cli) -> anyhow::Result<DctfConfig> {
    let mut config = DctfConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(delay_ms) = cli.delay_ms {
        config.query.delay_ms = delay_ms;
    }
    if let Some(seed) = cli.seed {
        config.query.seed = Some(seed);
    }
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir.clone_from(dir);
    }

    tracing::debug!(
        delay_ms = config.query.delay_ms,
        output_dir = %config.export.output_dir.display(),
        "configuration loaded"
    );
    Ok(config)
}
