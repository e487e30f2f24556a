use serde::{Deserialize, Serialize};

use super::scene::GameScene;

/// Something that can tag log messages with its identity
pub trait Component {
    /// Short type name, e.g. `Part`
    fn type_name(&self) -> &str;

    /// Name of this particular instance, when it has one worth showing
    fn instance_name(&self) -> Option<&str> {
        None
    }

    /// `Type (name)` or just `Type`
    fn label(&self) -> String {
        match self.instance_name() {
            Some(name) => format!("{} ({})", self.type_name(), name),
            None => self.type_name().to_string(),
        }
    }
}

/// A part placed on a craft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Name of the part prefab this part was built from
    pub name: String,
}

impl Part {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for Part {
    fn type_name(&self) -> &str {
        "Part"
    }

    fn instance_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vessel {
    pub vessel_name: String,
    pub root_part: Option<Part>,
}

impl Vessel {
    pub fn new(vessel_name: impl Into<String>) -> Self {
        Self {
            vessel_name: vessel_name.into(),
            root_part: None,
        }
    }
}

impl Component for Vessel {
    fn type_name(&self) -> &str {
        "Vessel"
    }

    fn instance_name(&self) -> Option<&str> {
        Some(&self.vessel_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiControlKind {
    #[default]
    Label,
    Toggle,
    FloatRange,
    FloatEdit,
    Cycle,
}

/// Widget backing a field in one scene
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiControl {
    pub kind: UiControlKind,
    pub controls_enabled: bool,
}

/// A field exposed by a part module in the right-click menu
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseField {
    pub name: String,
    pub gui_active: bool,
    pub gui_active_editor: bool,
    pub ui_control_flight: Option<UiControl>,
    pub ui_control_editor: Option<UiControl>,
}

impl BaseField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The control used in `scene`: the flight control in flight, the editor
    /// control in the editor, none elsewhere
    pub fn ui_control_current(&self, scene: GameScene) -> Option<&UiControl> {
        if scene.is_flight() {
            self.ui_control_flight.as_ref()
        } else if scene.is_editor() {
            self.ui_control_editor.as_ref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartModule {
    pub module_name: String,
    pub fields: Vec<BaseField>,
}

impl PartModule {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            fields: Vec::new(),
        }
    }

    /// Show every field in both the flight and editor menus
    pub fn activate_all_fields(&mut self) {
        for field in &mut self.fields {
            field.gui_active = true;
            field.gui_active_editor = true;
        }
    }
}

impl Component for PartModule {
    fn type_name(&self) -> &str {
        &self.module_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_labels() {
        assert_eq!(Part::new("fuelTank").label(), "Part (fuelTank)");
        assert_eq!(Vessel::new("Kerbal X").label(), "Vessel (Kerbal X)");
        assert_eq!(PartModule::new("ModuleEngines").label(), "ModuleEngines");
    }

    #[test]
    fn test_ui_control_current() {
        let mut field = BaseField::new("thrustLimit");
        field.ui_control_flight = Some(UiControl {
            kind: UiControlKind::FloatRange,
            controls_enabled: true,
        });
        field.ui_control_editor = Some(UiControl {
            kind: UiControlKind::FloatEdit,
            controls_enabled: false,
        });

        assert_eq!(
            field.ui_control_current(GameScene::Flight).unwrap().kind,
            UiControlKind::FloatRange
        );
        assert_eq!(
            field.ui_control_current(GameScene::Editor).unwrap().kind,
            UiControlKind::FloatEdit
        );
        assert!(field.ui_control_current(GameScene::SpaceCenter).is_none());
    }

    #[test]
    fn test_activate_all_fields() {
        let mut module = PartModule::new("ModuleDataTransmitter");
        module.fields.push(BaseField::new("packetSize"));
        module.fields.push(BaseField::new("packetInterval"));
        module.activate_all_fields();
        assert!(module.fields.iter().all(|f| f.gui_active && f.gui_active_editor));
    }
}
