//! Platform capability registry.
//!
//! Every `Platform` maps to exactly one fixed `PlatformCapabilities` record.
//! The table is a `const fn` over the enum, so it is total and needs no lock.

use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigurationError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    Android,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Android => "android",
        }
    }

    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Windows, Platform::Android];

    pub fn iter() -> impl Iterator<Item = Platform> {
        Self::ALL.into_iter()
    }

    #[inline]
    pub const fn capabilities(self) -> PlatformCapabilities {
        capabilities_of(self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ConfigurationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "windows" | "win" => Ok(Platform::Windows),
            "android" => Ok(Platform::Android),
            _ => Err(ConfigurationError::UnknownPlatform(s.trim().to_string())),
        }
    }
}

/// Input channels physically available on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    pub pointer: bool,
    pub keyboard: bool,
    pub touch: bool,
    pub gyro: bool,
}

impl PlatformCapabilities {
    /// True if every requested capability is present.
    #[inline]
    pub const fn satisfies(&self, req: &Requirements) -> bool {
        !(req.gyro && !self.gyro)
            && !(req.touch && !self.touch)
            && !(req.pointer && !self.pointer)
            && !(req.keyboard && !self.keyboard)
    }
}

const DESKTOP: PlatformCapabilities = PlatformCapabilities {
    pointer: true,
    keyboard: true,
    touch: false,
    gyro: false,
};

const HANDHELD: PlatformCapabilities = PlatformCapabilities {
    pointer: false,
    keyboard: false,
    touch: true,
    gyro: true,
};

/// Capability record for `platform`.
pub const fn capabilities_of(platform: Platform) -> PlatformCapabilities {
    match platform {
        Platform::Linux | Platform::Windows => DESKTOP,
        Platform::Android => HANDHELD,
    }
}

/// A set of capabilities a caller needs. `Default` asks for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements {
    pub gyro: bool,
    pub touch: bool,
    pub pointer: bool,
    pub keyboard: bool,
}

impl Requirements {
    pub const NONE: Requirements = Requirements {
        gyro: false,
        touch: false,
        pointer: false,
        keyboard: false,
    };

    #[inline]
    pub const fn with_gyro(mut self) -> Self {
        self.gyro = true;
        self
    }

    #[inline]
    pub const fn with_touch(mut self) -> Self {
        self.touch = true;
        self
    }

    #[inline]
    pub const fn with_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    #[inline]
    pub const fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }
}

/// Check whether a platform offers the required input channels.
#[inline]
pub const fn supports(platform: Platform, req: Requirements) -> bool {
    capabilities_of(platform).satisfies(&req)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_platforms_have_pointer_and_keyboard_only() {
        for p in [Platform::Linux, Platform::Windows] {
            let caps = capabilities_of(p);
            assert!(caps.pointer);
            assert!(caps.keyboard);
            assert!(!caps.touch);
            assert!(!caps.gyro);
        }
    }

    #[test]
    fn android_has_touch_and_gyro_only() {
        let caps = Platform::Android.capabilities();
        assert_eq!(
            caps,
            PlatformCapabilities {
                pointer: false,
                keyboard: false,
                touch: true,
                gyro: true,
            }
        );
    }

    #[test]
    fn empty_requirements_always_supported() {
        for p in Platform::iter() {
            assert!(supports(p, Requirements::default()));
            assert!(supports(p, Requirements::NONE));
        }
    }

    #[test]
    fn gating_matches_capability_table() {
        for p in Platform::iter() {
            let caps = capabilities_of(p);
            assert_eq!(supports(p, Requirements::NONE.with_touch()), caps.touch);
            assert_eq!(supports(p, Requirements::NONE.with_gyro()), caps.gyro);
            assert_eq!(
                supports(p, Requirements::NONE.with_touch().with_gyro()),
                caps.touch && caps.gyro
            );
        }
    }

    #[test]
    fn any_missing_capability_fails_the_whole_request() {
        let req = Requirements::NONE.with_keyboard().with_touch();
        assert!(!supports(Platform::Linux, req));
        assert!(!supports(Platform::Android, req));
    }

    #[test]
    fn parse_platform_names() {
        assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!(" win ".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("ANDROID".parse::<Platform>().unwrap(), Platform::Android);
        assert!(matches!(
            "amiga".parse::<Platform>(),
            Err(ConfigurationError::UnknownPlatform(s)) if s == "amiga"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for p in Platform::iter() {
            assert_eq!(p.to_string().parse::<Platform>().unwrap(), p);
        }
    }
}
