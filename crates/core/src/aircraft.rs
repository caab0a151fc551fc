//! Read-only aircraft catalog: cockpit controls grouped by panel section.
//!
//! Nothing in the binding/config core reads this; hosts show it next to
//! profiles.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftType {
    A380,
    B747,
    Generic,
}

impl AircraftType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AircraftType::A380 => "Airbus A380",
            AircraftType::B747 => "Boeing 747",
            AircraftType::Generic => "Generic",
        }
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSection {
    Overhead,
    Main,
    Center,
    Pedestal,
}

impl PanelSection {
    pub const ALL: [PanelSection; 4] = [
        PanelSection::Overhead,
        PanelSection::Main,
        PanelSection::Center,
        PanelSection::Pedestal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelSection::Overhead => "overhead",
            PanelSection::Main => "main",
            PanelSection::Center => "center",
            PanelSection::Pedestal => "pedestal",
        }
    }
}

impl fmt::Display for PanelSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    PushButton,
    Rotary,
    Toggle,
}

/// Metadata for one interactive cockpit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub control_id: Arc<str>,
    pub label: Arc<str>,
    pub section: PanelSection,
    pub kind: ControlKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detents: Option<Vec<Arc<str>>>,
    #[serde(default)]
    pub guarded: bool,
}

impl ControlDescriptor {
    pub fn new(
        control_id: &str,
        label: &str,
        section: PanelSection,
        kind: ControlKind,
    ) -> Self {
        ControlDescriptor {
            control_id: control_id.into(),
            label: label.into(),
            section,
            kind,
            detents: None,
            guarded: false,
        }
    }

    pub fn with_detents(mut self, detents: &[&str]) -> Self {
        self.detents = Some(detents.iter().map(|d| Arc::from(*d)).collect());
        self
    }

    pub fn guarded(mut self) -> Self {
        self.guarded = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AircraftSystems {
    pub avionics: Vec<Arc<str>>,
    pub navigation: Vec<Arc<str>>,
    pub autoflight: Vec<Arc<str>>,
    pub electrical: Vec<Arc<str>>,
    pub hydraulics: Vec<Arc<str>>,
    pub fuel: Vec<Arc<str>>,
    pub environmental: Vec<Arc<str>>,
    pub warnings: Vec<Arc<str>>,
}

fn names(list: &[&str]) -> Vec<Arc<str>> {
    list.iter().map(|s| Arc::from(*s)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub name: String,
    pub kind: AircraftType,
    #[serde(default)]
    pub cockpit_controls: Vec<ControlDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systems: Option<AircraftSystems>,
}

impl Aircraft {
    pub fn new(name: impl Into<String>, kind: AircraftType) -> Self {
        Aircraft {
            name: name.into(),
            kind,
            cockpit_controls: Vec::new(),
            systems: None,
        }
    }

    pub fn add_control(&mut self, control: ControlDescriptor) {
        self.cockpit_controls.push(control);
    }

    pub fn controls_in_section(
        &self,
        section: PanelSection,
    ) -> impl Iterator<Item = &ControlDescriptor> {
        self.cockpit_controls
            .iter()
            .filter(move |c| c.section == section)
    }

    pub fn control(&self, control_id: &str) -> Option<&ControlDescriptor> {
        self.cockpit_controls
            .iter()
            .find(|c| &*c.control_id == control_id)
    }
}

/// Build the stock aircraft with their cockpit definitions.
pub fn predefined_aircraft() -> Vec<Aircraft> {
    use ControlKind::*;
    use PanelSection::*;

    let mut a380 = Aircraft::new("Airbus A380", AircraftType::A380);
    a380.systems = Some(AircraftSystems {
        avionics: names(&["FMGC", "EFIS", "RADIO"]),
        navigation: names(&["IRS", "GNSS", "ILS", "VOR"]),
        autoflight: names(&["Autopilot", "Autothrust", "Flight Director"]),
        electrical: names(&["IDG", "APU GEN", "EXT PWR"]),
        hydraulics: names(&["Green", "Blue", "Yellow"]),
        fuel: names(&["Inner", "Outer", "Trim", "Center", "Transfer"]),
        environmental: names(&["Packs", "Bleed", "Pressurization"]),
        warnings: names(&["ECAM", "GPWS", "TCAS"]),
    });
    a380.add_control(ControlDescriptor::new("ap_master", "AP1", Main, PushButton));
    a380.add_control(
        ControlDescriptor::new("efis_range", "ND Range", Main, Rotary)
            .with_detents(&["10", "20", "40", "80", "160", "320"]),
    );
    a380.add_control(ControlDescriptor::new("battery_master", "BAT", Overhead, Toggle).guarded());

    let mut b747 = Aircraft::new("Boeing 747", AircraftType::B747);
    b747.systems = Some(AircraftSystems {
        avionics: names(&["FMC", "EFIS", "RADIO"]),
        navigation: names(&["IRS", "GNSS", "ILS", "VOR"]),
        autoflight: names(&["Autopilot", "Autothrottle", "Flight Director"]),
        electrical: names(&["IDG", "APU GEN", "EXT PWR"]),
        hydraulics: names(&["Sys1", "Sys2", "Sys3", "Sys4"]),
        fuel: names(&["Main1", "Main2", "Main3", "Main4", "Center", "Stab"]),
        environmental: names(&["Packs", "Bleed", "Pressurization"]),
        warnings: names(&["EICAS", "GPWS", "TCAS"]),
    });
    b747.add_control(ControlDescriptor::new("yaw_damper", "Yaw Damper", Overhead, Toggle));
    b747.add_control(ControlDescriptor::new("flt_dir_left", "FD L", Main, Toggle));
    b747.add_control(
        ControlDescriptor::new("autobrake", "Autobrake", Center, Rotary)
            .with_detents(&["RTO", "OFF", "1", "2", "3", "4"]),
    );

    vec![a380, b747]
}

/// Shared catalog built on first access.
pub static AIRCRAFT_CATALOG: Lazy<Vec<Aircraft>> = Lazy::new(predefined_aircraft);

pub fn find_aircraft(kind: AircraftType) -> Option<&'static Aircraft> {
    AIRCRAFT_CATALOG.iter().find(|a| a.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_airliners() {
        let kinds: Vec<AircraftType> = AIRCRAFT_CATALOG.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, [AircraftType::A380, AircraftType::B747]);
        assert!(find_aircraft(AircraftType::Generic).is_none());
    }

    #[test]
    fn controls_grouped_by_section() {
        let a380 = find_aircraft(AircraftType::A380).unwrap();
        let main: Vec<&str> = a380
            .controls_in_section(PanelSection::Main)
            .map(|c| &*c.control_id)
            .collect();
        assert_eq!(main, ["ap_master", "efis_range"]);
        assert_eq!(a380.controls_in_section(PanelSection::Pedestal).count(), 0);
    }

    #[test]
    fn guarded_and_detent_metadata() {
        let a380 = find_aircraft(AircraftType::A380).unwrap();
        assert!(a380.control("battery_master").unwrap().guarded);
        let b747 = find_aircraft(AircraftType::B747).unwrap();
        let detents = b747.control("autobrake").unwrap().detents.as_ref().unwrap();
        assert_eq!(detents.first().map(|d| &**d), Some("RTO"));
        assert_eq!(detents.len(), 6);
        assert_eq!(b747.systems.as_ref().unwrap().hydraulics.len(), 4);
    }
}
