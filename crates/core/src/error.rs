//! Error types for configuration and capability validation.

use crate::bindings::input_spec::DeviceType;
use crate::platform::Platform;

/// Raised when a configuration or profile asks for something the target
/// platform cannot provide, or when external data can't be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Touch UI requested on a platform without touch input.
    #[error("touch UI requested on {platform}, which has no touch support")]
    TouchUnsupported { platform: Platform },

    /// Gyro controls requested on a platform without a gyroscope.
    #[error("gyro controls requested on {platform}, which has no gyro support")]
    GyroUnsupported { platform: Platform },

    /// A profile binds an input device the platform does not expose.
    #[error("action '{action}' is bound to {device} input, which {platform} does not support")]
    UnsupportedDevice {
        platform: Platform,
        action: String,
        device: DeviceType,
    },

    /// Scale factor that is NaN or infinite.
    #[error("input {device}:{code} has non-finite scale {scale}")]
    InvalidScale {
        device: DeviceType,
        code: String,
        scale: f64,
    },

    #[error("unknown platform '{0}' (expected one of: linux, windows, android)")]
    UnknownPlatform(String),

    #[error("unknown input device '{0}'")]
    UnknownDevice(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
