use dctf_config::{DctfConfig, ExportConfig};
use dctf_session::{SessionContext, SimulatedStatusProvider, StatusProvider};

use crate::cli::GlobalFlags;

/// Everything a shell command can touch during one session.
pub struct AppContext {
    pub session: SessionContext,
    pub provider: Box<dyn StatusProvider>,
    pub export: ExportConfig,
    pub flags: GlobalFlags,
}

impl AppContext {
    /// Fresh session backed by the simulated status provider.
    #[must_use]
    pub fn init(config: &DctfConfig, flags: GlobalFlags) -> Self {
        let delay = config.query.delay();
        let provider = match config.query.seed {
            Some(seed) => SimulatedStatusProvider::seeded(delay, seed),
            None => SimulatedStatusProvider::new(delay),
        };
        tracing::debug!(?delay, seeded = config.query.seed.is_some(), "session started");

        Self::with_provider(Box::new(provider), config.export.clone(), flags)
    }

    #[must_use]
    pub fn with_provider(
        provider: Box<dyn StatusProvider>,
        export: ExportConfig,
        flags: GlobalFlags,
    ) -> Self {
        Self {
            session: SessionContext::new(),
            provider,
            export,
            flags,
        }
    }
}
