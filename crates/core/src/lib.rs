//! Core library for flight-simulator input bindings and capability checks.
//!
//! This crate is UI-agnostic and device-agnostic. It exposes:
//! - `platform`: the fixed platform → capability table and `supports` predicate.
//! - `bindings`: input specs, action bindings, control profiles, reference profiles.
//! - `config`: simulation settings validated against platform capabilities.
//! - `aircraft`: read-only cockpit catalog hosts display next to profiles.
//! - `core_log::CoreLog`: thin logging trait the host (CLI/UI) can implement.
//!
//! Import the `prelude` if you want the most common types in scope.

pub mod core_log;
pub mod error;

pub mod aircraft;
pub mod bindings;
pub mod config;
pub mod platform;

/// Convenient re-exports for downstream users (CLI/tests).
pub use core_log::CoreLog;
pub use error::ConfigurationError;

pub mod prelude {
    pub use crate::core_log::{CoreLog, LogLevel, NoopLog};
    pub use crate::error::ConfigurationError;

    // Capability registry
    pub use crate::platform::{Platform, PlatformCapabilities, Requirements, capabilities_of, supports};

    // Bindings graph
    pub use crate::bindings::action_binding::ActionBinding;
    pub use crate::bindings::control_profile::ControlProfile;
    pub use crate::bindings::defaults::{
        default_android_profile, default_desktop_profile, default_profile,
    };
    pub use crate::bindings::input_spec::{DeviceType, InputSpec};

    // Session settings
    pub use crate::config::{DetailLevel, RenderingDetail, SimulationConfig, default_config};

    // Catalog
    pub use crate::aircraft::{
        AIRCRAFT_CATALOG, Aircraft, AircraftType, ControlDescriptor, ControlKind, PanelSection,
    };
}
