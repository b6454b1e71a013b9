//! Policy thresholds for the engine, in one place.
//!
//! Every caller that decomposes a frame or plans a reorder takes its cutoffs
//! from an `EngineConfig` instead of carrying its own literals, so a policy
//! change happens once.
//!
//! ```rust
//! use stretcher_core::{
//!     config::EngineConfig,
//!     models::frame::FrameType,
//!     num,
//! };
//!
//! let config = EngineConfig::builder()
//!     .brace_threshold(120u32)
//!     .double_brace_threshold(200u32)
//!     .buffer_ratio(num!(0.25))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.thin_cutoff(), 90);
//! assert_eq!(config.frame_type_for(90), FrameType::Thin);
//! assert_eq!(config.crossbars_for(150), 1);
//! assert_eq!(config.crossbars_for(210), 2);
//! ```

use crate::{
    error::{Error, Result},
    models::frame::{Dimension, FrameType},
};
use getset::CopyGetters;
use rust_decimal::prelude::*;

/// Longest side (cm) above which a frame is built from THICK bars.
pub const DEFAULT_THIN_CUTOFF: Dimension = 90;
/// Longest side (cm) above which a frame gets a crossbar.
pub const DEFAULT_BRACE_THRESHOLD: Dimension = 120;

/// Default safety buffer added on top of a deficit when reordering (20%).
pub fn default_buffer_ratio() -> Decimal {
    Decimal::new(2, 1)
}

/// The engine's policy constants.
#[derive(Clone, Debug, PartialEq, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into), build_fn(validate = "Self::validate"))]
#[getset(get_copy = "pub")]
pub struct EngineConfig {
    /// Frames whose longest side exceeds this use THICK bars
    #[builder(default = "DEFAULT_THIN_CUTOFF")]
    thin_cutoff: Dimension,
    /// Frames whose longest side exceeds this get one crossbar
    #[builder(default = "DEFAULT_BRACE_THRESHOLD")]
    brace_threshold: Dimension,
    /// Frames whose longest side exceeds this get two crossbars. Unset means
    /// frames never get more than one.
    #[builder(default)]
    double_brace_threshold: Option<Dimension>,
    /// Safety buffer applied to deficits when reordering
    #[builder(default = "default_buffer_ratio()")]
    buffer_ratio: Decimal,
}

impl EngineConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        let brace = self.brace_threshold.unwrap_or(DEFAULT_BRACE_THRESHOLD);
        if let Some(Some(double)) = self.double_brace_threshold {
            if double <= brace {
                return Err(format!("double brace threshold ({}) must be above the brace threshold ({})", double, brace));
            }
        }
        if let Some(ratio) = self.buffer_ratio {
            if ratio.is_sign_negative() {
                return Err(format!("buffer ratio ({}) must not be negative", ratio));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thin_cutoff: DEFAULT_THIN_CUTOFF,
            brace_threshold: DEFAULT_BRACE_THRESHOLD,
            double_brace_threshold: None,
            buffer_ratio: default_buffer_ratio(),
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Build a config, mapping builder failures into our error type.
    pub fn try_from_builder(builder: EngineConfigBuilder) -> Result<Self> {
        builder.build().map_err(Error::InvalidConfig)
    }

    /// Which profile family a frame with the given longest side is built from.
    pub fn frame_type_for(&self, longest_side: Dimension) -> FrameType {
        if longest_side > self.thin_cutoff {
            FrameType::Thick
        } else {
            FrameType::Thin
        }
    }

    /// How many crossbars a frame with the given longest side needs.
    pub fn crossbars_for(&self, longest_side: Dimension) -> u32 {
        match self.double_brace_threshold {
            Some(double) if longest_side > double => 2,
            _ if longest_side > self.brace_threshold => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.thin_cutoff(), 90);
        assert_eq!(config.brace_threshold(), 120);
        assert_eq!(config.double_brace_threshold(), None);
        assert_eq!(config.buffer_ratio(), num!(0.2));
        assert_eq!(EngineConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn validates() {
        let res = EngineConfig::try_from_builder(EngineConfig::builder().double_brace_threshold(120u32));
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
        let res = EngineConfig::try_from_builder(EngineConfig::builder().brace_threshold(150u32).double_brace_threshold(140u32));
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
        let res = EngineConfig::try_from_builder(EngineConfig::builder().buffer_ratio(num!(-0.1)));
        assert!(matches!(res, Err(Error::InvalidConfig(_))));

        let config = EngineConfig::try_from_builder(EngineConfig::builder().buffer_ratio(num!(0)).double_brace_threshold(121u32)).unwrap();
        assert_eq!(config.buffer_ratio(), num!(0));
        assert_eq!(config.double_brace_threshold(), Some(121));
    }

    #[rstest]
    #[case(20, FrameType::Thin)]
    #[case(89, FrameType::Thin)]
    #[case(90, FrameType::Thin)]
    #[case(91, FrameType::Thick)]
    #[case(160, FrameType::Thick)]
    fn frame_type_cutoff(#[case] longest: Dimension, #[case] expected: FrameType) {
        assert_eq!(EngineConfig::default().frame_type_for(longest), expected);
    }

    #[rstest]
    #[case(None, 120, 0)]
    #[case(None, 121, 1)]
    #[case(None, 400, 1)]
    #[case(Some(180), 120, 0)]
    #[case(Some(180), 180, 1)]
    #[case(Some(180), 181, 2)]
    fn bracing(#[case] double: Option<Dimension>, #[case] longest: Dimension, #[case] expected: u32) {
        let config = EngineConfig::builder()
            .double_brace_threshold(double)
            .build()
            .unwrap();
        assert_eq!(config.crossbars_for(longest), expected);
    }

    #[test]
    fn bracing_never_decreases() {
        let config = EngineConfig::builder().double_brace_threshold(150u32).build().unwrap();
        let mut last = 0;
        for longest in 1..=300 {
            let crossbars = config.crossbars_for(longest);
            assert!(crossbars >= last);
            last = crossbars;
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn thick_never_flips_back() {
        let config = EngineConfig::default();
        let mut seen_thick = false;
        for longest in 1..=300 {
            match config.frame_type_for(longest) {
                FrameType::Thick => seen_thick = true,
                FrameType::Thin => assert!(!seen_thick),
            }
        }
    }
}
