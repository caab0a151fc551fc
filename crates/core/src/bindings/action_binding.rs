use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::bindings::input_spec::{DeviceType, InputSpec};

/// The inputs currently driving one logical action.
///
/// `inputs` is an insertion-ordered set. It is only reachable through
/// `add`/`remove`, and deserialized bindings are de-duplicated on the way in.
/// An empty binding is meaningless and gets dropped by its profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBinding")]
pub struct ActionBinding {
    pub action: Arc<str>,
    pub(crate) inputs: Vec<InputSpec>,
}

/// Wire shape of a binding before the set invariant is restored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawBinding {
    pub(crate) action: Arc<str>,
    #[serde(default)]
    pub(crate) inputs: Vec<InputSpec>,
}

impl From<RawBinding> for ActionBinding {
    fn from(raw: RawBinding) -> Self {
        ActionBinding::from_raw(raw).0
    }
}

impl ActionBinding {
    /// Build from wire data, returning how many duplicate inputs were dropped.
    pub(crate) fn from_raw(raw: RawBinding) -> (Self, usize) {
        let mut binding = ActionBinding {
            action: raw.action,
            inputs: Vec::with_capacity(raw.inputs.len()),
        };
        let mut dupes = 0;
        for spec in raw.inputs {
            if !binding.add(spec) {
                dupes += 1;
            }
        }
        (binding, dupes)
    }

    #[inline]
    pub fn new(action: impl Into<Arc<str>>) -> Self {
        ActionBinding {
            action: action.into(),
            inputs: Vec::new(),
        }
    }

    /// Append `spec` unless an equal one is already bound. Returns whether it was added.
    pub fn add(&mut self, spec: InputSpec) -> bool {
        if self.inputs.contains(&spec) {
            return false;
        }
        self.inputs.push(spec);
        true
    }

    /// Remove `spec` if present. Returns whether anything was removed.
    pub fn remove(&mut self, spec: &InputSpec) -> bool {
        let before = self.inputs.len();
        self.inputs.retain(|existing| existing != spec);
        self.inputs.len() != before
    }

    #[inline]
    pub fn contains(&self, spec: &InputSpec) -> bool {
        self.inputs.contains(spec)
    }

    #[inline]
    pub fn uses_device(&self, device: DeviceType) -> bool {
        self.inputs.iter().any(|s| s.device == device)
    }

    #[inline]
    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &InputSpec> {
        self.inputs.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Human summary of the bound inputs, e.g. `keyboard:E, gamepad:rt`.
    pub fn inputs_label(&self) -> Option<String> {
        if self.inputs.is_empty() {
            return None;
        }
        Some(
            self.inputs
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
