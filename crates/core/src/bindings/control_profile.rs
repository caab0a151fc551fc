use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::bindings::{
    action_binding::{ActionBinding, RawBinding},
    input_spec::{DeviceType, InputSpec},
};
use crate::core_log::{CoreLog, NoopLog};
use crate::error::{ConfigurationError, Result};
use crate::platform::{Platform, supports};

/// A named, platform-scoped set of action bindings.
///
/// Every key equals its binding's `action`, and no stored binding is empty.
/// Editing is forgiving: binding twice or unbinding something that isn't
/// there is a no-op, never an error. Deserialization goes through the same
/// repair step as `from_json`, just without logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProfile")]
pub struct ControlProfile {
    pub name: String,
    pub platform: Platform,
    bindings: IndexMap<Arc<str>, ActionBinding>,
}

/// Wire shape of a profile before the map invariants are restored.
#[derive(Deserialize)]
struct RawProfile {
    name: String,
    platform: Platform,
    #[serde(default)]
    bindings: IndexMap<Arc<str>, RawBinding>,
}

impl From<RawProfile> for ControlProfile {
    fn from(raw: RawProfile) -> Self {
        ControlProfile::from_raw(raw, &NoopLog)
    }
}

impl ControlProfile {
    pub fn new(name: impl Into<String>, platform: Platform) -> Self {
        ControlProfile {
            name: name.into(),
            platform,
            bindings: IndexMap::new(),
        }
    }

    /// Attach `spec` to `action`, creating the binding on first use.
    pub fn bind(&mut self, action: &str, spec: InputSpec) {
        if let Some(existing) = self.bindings.get_mut(action) {
            existing.add(spec);
            return;
        }
        let mut binding = ActionBinding::new(action);
        binding.add(spec);
        self.bindings.insert(binding.action.clone(), binding);
    }

    /// Detach `spec` from `action`; drops the action once nothing drives it.
    pub fn unbind(&mut self, action: &str, spec: &InputSpec) {
        let Some(binding) = self.bindings.get_mut(action) else {
            return;
        };
        binding.remove(spec);
        if binding.is_empty() {
            // shift_remove keeps the remaining actions in insertion order
            self.bindings.shift_remove(action);
        }
    }

    /// Bindings with at least one input from `device`, in profile order.
    /// Evaluated lazily against the current state each time it is called.
    pub fn bindings_for_device(&self, device: DeviceType) -> impl Iterator<Item = &ActionBinding> {
        self.bindings.values().filter(move |b| b.uses_device(device))
    }

    #[inline]
    pub fn binding(&self, action: &str) -> Option<&ActionBinding> {
        self.bindings.get(action)
    }

    #[inline]
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|k| &**k)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ActionBinding> {
        self.bindings.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every bound input whose device this profile's platform can't carry.
    pub fn unsupported_inputs(&self) -> impl Iterator<Item = (&ActionBinding, &InputSpec)> {
        let platform = self.platform;
        self.bindings.values().flat_map(move |b| {
            b.iter()
                .filter(move |s| !supports(platform, s.device.required_capability()))
                .map(move |s| (b, s))
        })
    }

    /// Fail on the first binding that uses a device the platform lacks.
    pub fn validate(&self) -> Result<()> {
        match self.unsupported_inputs().next() {
            Some((binding, spec)) => Err(ConfigurationError::UnsupportedDevice {
                platform: self.platform,
                action: binding.action.to_string(),
                device: spec.device,
            }),
            None => Ok(()),
        }
    }

    /// Pretty JSON export. Fails instead of writing a non-finite scale,
    /// which JSON would turn into `null`.
    pub fn to_json(&self) -> Result<String> {
        for spec in self.iter().flat_map(|b| b.iter()) {
            spec.check_scale()?;
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a profile and restore the map invariants (keys match actions,
    /// no duplicate inputs, no empty bindings), logging each repair.
    pub fn from_json(content: &str, logger: &Arc<dyn CoreLog>) -> Result<Self> {
        let raw: RawProfile = serde_json::from_str(content)?;
        let profile = ControlProfile::from_raw(raw, &**logger);
        logger.info(&format!(
            "[from_json] Loaded profile '{}' for {} with {} actions",
            profile.name,
            profile.platform,
            profile.len()
        ));
        Ok(profile)
    }

    fn from_raw(raw: RawProfile, logger: &dyn CoreLog) -> Self {
        let mut profile = ControlProfile::new(raw.name, raw.platform);

        for (key, raw_binding) in raw.bindings {
            let (mut binding, dupes) = ActionBinding::from_raw(raw_binding);
            if binding.action != key {
                logger.warn(&format!(
                    "[from_json] binding under '{key}' names action '{}'; using '{key}'",
                    binding.action
                ));
                binding.action = key.clone();
            }
            if dupes > 0 {
                logger.warn(&format!("[from_json] dropped {dupes} duplicate input(s) on '{key}'"));
            }
            if binding.is_empty() {
                logger.warn(&format!("[from_json] dropped empty binding '{key}'"));
                continue;
            }
            profile.bindings.insert(key, binding);
        }
        profile
    }
}
