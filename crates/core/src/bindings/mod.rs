// Public API surface of the bindings module.
pub mod action_binding;
pub mod control_profile;
pub mod defaults;
pub mod input_spec;
