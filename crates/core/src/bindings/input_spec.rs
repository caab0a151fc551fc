use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

use crate::error::{ConfigurationError, Result};
use crate::platform::Requirements;

/// Class of physical input device an event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Keyboard,
    MouseButton,
    MouseAxis,
    Gamepad,
    Touch,
    Gyro,
}

impl DeviceType {
    pub const ALL: [DeviceType; 6] = [
        DeviceType::Keyboard,
        DeviceType::MouseButton,
        DeviceType::MouseAxis,
        DeviceType::Gamepad,
        DeviceType::Touch,
        DeviceType::Gyro,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Keyboard => "keyboard",
            DeviceType::MouseButton => "mouse_button",
            DeviceType::MouseAxis => "mouse_axis",
            DeviceType::Gamepad => "gamepad",
            DeviceType::Touch => "touch",
            DeviceType::Gyro => "gyro",
        }
    }

    /// What a platform must expose to carry this device.
    /// Gamepads aren't tracked by the registry, so they require nothing.
    pub const fn required_capability(self) -> Requirements {
        match self {
            DeviceType::Keyboard => Requirements::NONE.with_keyboard(),
            DeviceType::MouseButton | DeviceType::MouseAxis => Requirements::NONE.with_pointer(),
            DeviceType::Touch => Requirements::NONE.with_touch(),
            DeviceType::Gyro => Requirements::NONE.with_gyro(),
            DeviceType::Gamepad => Requirements::NONE,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceType {
    type Err = ConfigurationError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownDevice(s.trim().to_string()))
    }
}

fn default_scale() -> OrderedFloat<f64> {
    OrderedFloat(1.0)
}

/// One physical input event source: device class + device-specific code,
/// with a scale factor applied to continuous axes.
///
/// Equality covers all three fields, so the same device/code at two scales
/// are distinct specs. Only finite scales survive (de)serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInputSpec")]
pub struct InputSpec {
    pub device: DeviceType,
    pub code: Arc<str>,
    pub scale: OrderedFloat<f64>,
}

#[derive(Deserialize)]
struct RawInputSpec {
    device: DeviceType,
    code: Arc<str>,
    #[serde(default = "default_scale")]
    scale: OrderedFloat<f64>,
}

impl TryFrom<RawInputSpec> for InputSpec {
    type Error = ConfigurationError;
    fn try_from(raw: RawInputSpec) -> Result<Self> {
        let spec = InputSpec {
            device: raw.device,
            code: raw.code,
            scale: raw.scale,
        };
        spec.check_scale()?;
        Ok(spec)
    }
}

impl InputSpec {
    #[inline]
    pub fn new(device: DeviceType, code: impl Into<Arc<str>>) -> Self {
        Self::scaled(device, code, 1.0)
    }

    #[inline]
    pub fn scaled(device: DeviceType, code: impl Into<Arc<str>>, scale: f64) -> Self {
        InputSpec {
            device,
            code: code.into(),
            scale: OrderedFloat(scale),
        }
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale.into_inner()
    }

    /// NaN and infinities have no JSON form, so they can't be exported.
    pub fn check_scale(&self) -> Result<()> {
        if self.scale_factor().is_finite() {
            return Ok(());
        }
        Err(ConfigurationError::InvalidScale {
            device: self.device,
            code: self.code.to_string(),
            scale: self.scale_factor(),
        })
    }
}

impl fmt::Display for InputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.device, self.code)?;
        if self.scale != default_scale() {
            write!(f, "*{}", self.scale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_to_one() {
        let spec = InputSpec::new(DeviceType::Keyboard, "E");
        assert_eq!(spec.scale_factor(), 1.0);
        assert_eq!(spec, InputSpec::scaled(DeviceType::Keyboard, "E", 1.0));
    }

    #[test]
    fn equality_includes_scale() {
        let a = InputSpec::scaled(DeviceType::MouseAxis, "y-", 0.5);
        let b = InputSpec::scaled(DeviceType::MouseAxis, "y-", 0.75);
        assert_ne!(a, b);
    }

    #[test]
    fn display_omits_unit_scale() {
        assert_eq!(InputSpec::new(DeviceType::Keyboard, "F12").to_string(), "keyboard:F12");
        assert_eq!(
            InputSpec::scaled(DeviceType::Touch, "swipe_up", 0.8).to_string(),
            "touch:swipe_up*0.8"
        );
    }

    #[test]
    fn missing_scale_deserializes_as_one() {
        let spec: InputSpec = serde_json::from_str(r#"{"device":"gyro","code":"roll_left"}"#).unwrap();
        assert_eq!(spec, InputSpec::new(DeviceType::Gyro, "roll_left"));
    }

    #[test]
    fn non_finite_scales_fail_the_check() {
        assert!(InputSpec::scaled(DeviceType::MouseAxis, "y-", 0.5).check_scale().is_ok());
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let spec = InputSpec::scaled(DeviceType::MouseAxis, "y-", bad);
            assert!(matches!(
                spec.check_scale(),
                Err(ConfigurationError::InvalidScale { device: DeviceType::MouseAxis, .. })
            ));
        }
    }

    #[test]
    fn null_scale_is_rejected_on_load() {
        let err = serde_json::from_str::<InputSpec>(r#"{"device":"gyro","code":"x","scale":null}"#);
        assert!(err.is_err());
    }

    #[test]
    fn device_names_parse() {
        assert_eq!("mouse-axis".parse::<DeviceType>().unwrap(), DeviceType::MouseAxis);
        assert_eq!("Gyro".parse::<DeviceType>().unwrap(), DeviceType::Gyro);
        assert!("joystick".parse::<DeviceType>().is_err());
    }

    #[test]
    fn gamepad_is_never_gated() {
        assert_eq!(DeviceType::Gamepad.required_capability(), Requirements::NONE);
        assert!(DeviceType::Touch.required_capability().touch);
    }
}
