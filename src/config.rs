// src/config.rs
use crate::args::Args;
use crate::error::Result;
use stamp_version_engine::config::{StampConfig, StampConfigBuilder};
use stamp_version_engine::record::Clock;

impl TryFrom<Args> for StampConfig {
    type Error = crate::error::AppError;

    fn try_from(args: Args) -> Result<Self> {
        let clock = if args.utc { Clock::Utc } else { Clock::Local };

        let config = StampConfigBuilder::default()
            .target(args.target)
            .marker(args.marker)
            .declaration(args.declaration)
            .clock(clock)
            .dry_run(args.dry_run)
            .build()
            .map_err(stamp_version_engine::error::StampError::from)?;
        Ok(config)
    }
}
