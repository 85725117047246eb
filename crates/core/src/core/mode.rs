//! Mode selector.
//!
//! Turns the option set into exactly one core variant. Precise-runahead
//! options are read only on that branch; the other modes never see them.

use tracing::info;

use crate::common::error::ConfigError;
use crate::config::{ModeTag, Options};
use crate::core::cpu::{CoreVariant, O3Core, PreParams};

/// Builds the core described by `opts.mode`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSize`] if the ROB, or for PRE the PRDQ or SST,
/// is sized to zero.
pub fn select(opts: &Options) -> Result<O3Core, ConfigError> {
    let variant = match opts.mode {
        ModeTag::Baseline => CoreVariant::Baseline,
        ModeTag::Runahead => CoreVariant::Runahead,
        ModeTag::PreciseRunahead => CoreVariant::PreciseRunahead(PreParams {
            sst_enabled: opts.sst_enabled,
            rrr_enabled: opts.rrr_enabled,
            exit_on_squash: opts.exit_pre_when_squash,
            prdq_entries: nonzero("prdq_entries", opts.prdq_entries)?,
            sst_entries: nonzero("sst_entries", opts.sst_entries)?,
        }),
    };
    let rob_entries = nonzero("rob_size", opts.rob_size)?;

    info!("{}", variant.banner());
    Ok(O3Core::new(variant, rob_entries))
}

/// Parses a mode tag and selects the core in one step.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownMode`] for anything other than the three known tags.
pub fn select_by_tag(tag: &str, opts: &Options) -> Result<O3Core, ConfigError> {
    let mode: ModeTag = tag.parse()?;
    select(&Options {
        mode,
        ..opts.clone()
    })
}

fn nonzero(option: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidSize {
            option,
            value: value.to_string(),
        });
    }
    Ok(value)
}
