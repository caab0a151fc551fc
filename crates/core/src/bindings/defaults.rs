//! Reference profiles shipped with the simulator.

use crate::bindings::{
    control_profile::ControlProfile,
    input_spec::{DeviceType, InputSpec},
};
use crate::platform::Platform;

/// Axis sensitivity for mouse-driven flight controls.
pub const MOUSE_AXIS_SCALE: f64 = 0.5;
/// Throttle step per touch swipe.
pub const SWIPE_THROTTLE_SCALE: f64 = 0.8;

pub fn default_desktop_profile() -> ControlProfile {
    use DeviceType::*;
    let mut profile = ControlProfile::new("desktop_default", Platform::Linux);
    profile.bind("pitch_up", InputSpec::scaled(MouseAxis, "y-", MOUSE_AXIS_SCALE));
    profile.bind("pitch_down", InputSpec::scaled(MouseAxis, "y+", MOUSE_AXIS_SCALE));
    profile.bind("roll_left", InputSpec::scaled(MouseAxis, "x-", MOUSE_AXIS_SCALE));
    profile.bind("roll_right", InputSpec::scaled(MouseAxis, "x+", MOUSE_AXIS_SCALE));
    profile.bind("throttle_increase", InputSpec::new(Keyboard, "E"));
    profile.bind("throttle_decrease", InputSpec::new(Keyboard, "Q"));
    profile.bind("toggle_ap", InputSpec::new(MouseButton, "left"));
    profile.bind("toggle_atc_menu", InputSpec::new(Keyboard, "F12"));
    profile
}

pub fn default_android_profile() -> ControlProfile {
    use DeviceType::*;
    let mut profile = ControlProfile::new("android_default", Platform::Android);
    profile.bind("pitch_up", InputSpec::scaled(Gyro, "pitch_up", 1.0));
    profile.bind("pitch_down", InputSpec::scaled(Gyro, "pitch_down", 1.0));
    profile.bind("roll_left", InputSpec::scaled(Gyro, "roll_left", 1.0));
    profile.bind("roll_right", InputSpec::scaled(Gyro, "roll_right", 1.0));
    profile.bind("toggle_ap", InputSpec::new(Touch, "tap_ap_button"));
    profile.bind("toggle_atc_menu", InputSpec::new(Touch, "tap_atc_button"));
    profile.bind(
        "throttle_increase",
        InputSpec::scaled(Touch, "swipe_up", SWIPE_THROTTLE_SCALE),
    );
    profile.bind(
        "throttle_decrease",
        InputSpec::scaled(Touch, "swipe_down", SWIPE_THROTTLE_SCALE),
    );
    profile
}

/// Default profile for the active platform. Desktop platforms share one
/// layout, re-scoped to the platform asked for.
pub fn default_profile(platform: Platform) -> ControlProfile {
    match platform {
        Platform::Android => default_android_profile(),
        Platform::Linux | Platform::Windows => {
            let mut profile = default_desktop_profile();
            profile.platform = platform;
            profile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_profile_has_eight_actions() {
        let p = default_desktop_profile();
        assert_eq!(p.len(), 8);
        assert_eq!(p.platform, Platform::Linux);
        assert_eq!(
            p.binding("pitch_up").unwrap().inputs(),
            [InputSpec::scaled(DeviceType::MouseAxis, "y-", 0.5)]
        );
    }

    #[test]
    fn android_throttle_uses_scaled_swipes() {
        let p = default_android_profile();
        assert_eq!(
            p.binding("throttle_decrease").unwrap().inputs(),
            [InputSpec::scaled(DeviceType::Touch, "swipe_down", 0.8)]
        );
    }

    #[test]
    fn default_profile_follows_platform() {
        for platform in Platform::iter() {
            let p = default_profile(platform);
            assert_eq!(p.platform, platform);
            assert!(p.validate().is_ok(), "{platform} default must be legal");
        }
        assert_eq!(default_profile(Platform::Android).name, "android_default");
        assert_eq!(default_profile(Platform::Windows).name, "desktop_default");
    }
}
