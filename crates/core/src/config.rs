//! Top-level simulation settings and their capability checks.
//!
//! A `SimulationConfig` may only be used once `validate` has accepted it:
//! touch UI needs a touch platform, gyro controls need a gyro platform.
//! Violations are reported, never silently downgraded.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core_log::CoreLog;
use crate::error::{ConfigurationError, Result};
use crate::platform::{Platform, Requirements, supports};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
    Ultra,
}

/// Scenery detail. Carried through untouched; validation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingDetail {
    pub airports: DetailLevel,
    pub world: DetailLevel,
    pub dynamic_lighting: bool,
}

impl Default for RenderingDetail {
    fn default() -> Self {
        RenderingDetail {
            airports: DetailLevel::High,
            world: DetailLevel::Medium,
            dynamic_lighting: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub platform: Platform,
    #[serde(default)]
    pub rendering: RenderingDetail,
    #[serde(default = "default_true")]
    pub enable_atc: bool,
    #[serde(default)]
    pub enable_touch_ui: bool,
    #[serde(default)]
    pub enable_gyro_controls: bool,
}

impl SimulationConfig {
    /// Baseline settings: ATC on, touch UI and gyro off.
    pub fn new(platform: Platform) -> Self {
        SimulationConfig {
            platform,
            rendering: RenderingDetail::default(),
            enable_atc: true,
            enable_touch_ui: false,
            enable_gyro_controls: false,
        }
    }

    pub fn with_rendering(mut self, rendering: RenderingDetail) -> Self {
        self.rendering = rendering;
        self
    }

    pub fn with_atc(mut self, on: bool) -> Self {
        self.enable_atc = on;
        self
    }

    pub fn with_touch_ui(mut self, on: bool) -> Self {
        self.enable_touch_ui = on;
        self
    }

    pub fn with_gyro_controls(mut self, on: bool) -> Self {
        self.enable_gyro_controls = on;
        self
    }

    /// Check every feature toggle against the platform's capabilities.
    pub fn validate(&self) -> Result<()> {
        if self.enable_touch_ui && !supports(self.platform, Requirements::NONE.with_touch()) {
            return Err(ConfigurationError::TouchUnsupported {
                platform: self.platform,
            });
        }
        if self.enable_gyro_controls && !supports(self.platform, Requirements::NONE.with_gyro()) {
            return Err(ConfigurationError::GyroUnsupported {
                platform: self.platform,
            });
        }
        Ok(())
    }

    /// Parse a config and validate it before handing it out.
    pub fn from_json(content: &str, logger: &Arc<dyn CoreLog>) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(content)?;
        if let Err(e) = config.validate() {
            logger.error(&format!("[from_json] rejected config: {e}"));
            return Err(e);
        }
        logger.debug(&format!(
            "[from_json] config ok: platform={} atc={} touch_ui={} gyro={}",
            config.platform, config.enable_atc, config.enable_touch_ui, config.enable_gyro_controls
        ));
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Settings for a fresh session on `platform`. Touch UI and gyro controls
/// are enabled only on the touch/gyro platform; the result is validated
/// before it is returned.
pub fn default_config(platform: Platform) -> Result<SimulationConfig> {
    let handheld = platform == Platform::Android;
    let config = SimulationConfig::new(platform)
        .with_touch_ui(handheld)
        .with_gyro_controls(handheld);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_log::NoopLog;

    #[test]
    fn touch_ui_on_linux_is_rejected() {
        let cfg = SimulationConfig::new(Platform::Linux).with_touch_ui(true);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::TouchUnsupported {
                platform: Platform::Linux
            })
        ));
    }

    #[test]
    fn gyro_on_windows_is_rejected() {
        let cfg = SimulationConfig::new(Platform::Windows).with_gyro_controls(true);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::GyroUnsupported {
                platform: Platform::Windows
            })
        ));
    }

    #[test]
    fn touch_is_reported_before_gyro() {
        let cfg = SimulationConfig::new(Platform::Linux)
            .with_touch_ui(true)
            .with_gyro_controls(true);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::TouchUnsupported { .. })
        ));
    }

    #[test]
    fn defaults_are_valid_for_every_platform() {
        for platform in Platform::iter() {
            let cfg = default_config(platform).unwrap();
            assert_eq!(cfg.platform, platform);
            assert!(cfg.enable_atc);
            assert_eq!(cfg.enable_touch_ui, platform == Platform::Android);
            assert_eq!(cfg.enable_gyro_controls, platform == Platform::Android);
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn rendering_defaults() {
        let r = SimulationConfig::new(Platform::Linux).rendering;
        assert_eq!(r.airports, DetailLevel::High);
        assert_eq!(r.world, DetailLevel::Medium);
        assert!(r.dynamic_lighting);
    }

    #[test]
    fn from_json_fills_defaults() {
        let logger: Arc<dyn CoreLog> = Arc::new(NoopLog);
        let cfg = SimulationConfig::from_json(r#"{"platform":"windows"}"#, &logger).unwrap();
        assert_eq!(cfg, SimulationConfig::new(Platform::Windows));

        let cfg = SimulationConfig::from_json(
            r#"{"platform":"android","enable_atc":false,"enable_gyro_controls":true,
                "rendering":{"world":"ultra"}}"#,
            &logger,
        )
        .unwrap();
        assert!(!cfg.enable_atc);
        assert!(cfg.enable_gyro_controls);
        assert_eq!(cfg.rendering.world, DetailLevel::Ultra);
        assert_eq!(cfg.rendering.airports, DetailLevel::High);
    }

    #[test]
    fn from_json_never_returns_invalid_config() {
        let logger: Arc<dyn CoreLog> = Arc::new(NoopLog);
        let err = SimulationConfig::from_json(
            r#"{"platform":"linux","enable_touch_ui":true}"#,
            &logger,
        );
        assert!(matches!(err, Err(ConfigurationError::TouchUnsupported { .. })));

        let err = SimulationConfig::from_json("not json", &logger);
        assert!(matches!(err, Err(ConfigurationError::Parse(_))));
    }
}
