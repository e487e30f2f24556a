use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};

use super::part::{Part, Vessel};

/// Scenes of the host game, in load order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum GameScene {
    #[default]
    #[strum(serialize = "LOADING")]
    Loading = 0,
    #[strum(serialize = "LOADINGBUFFER")]
    LoadingBuffer = 1,
    #[strum(serialize = "MAINMENU")]
    MainMenu = 2,
    #[strum(serialize = "SETTINGS")]
    Settings = 3,
    #[strum(serialize = "CREDITS")]
    Credits = 4,
    #[strum(serialize = "SPACECENTER")]
    SpaceCenter = 5,
    #[strum(serialize = "EDITOR")]
    Editor = 6,
    #[strum(serialize = "FLIGHT")]
    Flight = 7,
    #[strum(serialize = "TRACKSTATION")]
    TrackingStation = 8,
}

impl GameScene {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn is_flight(self) -> bool {
        self == Self::Flight
    }

    pub fn is_editor(self) -> bool {
        self == Self::Editor
    }

    /// On-screen messages are only shown once past the space center
    pub fn shows_screen_messages(self) -> bool {
        self > Self::SpaceCenter
    }
}

/// Read access to the host's current scene state
pub trait SceneHost {
    fn loaded_scene(&self) -> GameScene;

    /// Root part of the craft being edited, if any
    fn editor_root_part(&self) -> Option<&Part>;

    /// The vessel under player control, if any
    fn active_vessel(&self) -> Option<&Vessel>;
}

/// Root part of whatever craft the current scene is about.
///
/// The edited craft in the editor, the active vessel in flight, nothing elsewhere.
pub fn scene_root_part<H: SceneHost + ?Sized>(host: &H) -> Option<&Part> {
    match host.loaded_scene() {
        GameScene::Editor => host.editor_root_part(),
        GameScene::Flight => host
            .active_vessel()
            .and_then(|vessel| vessel.root_part.as_ref()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    struct FakeHost {
        scene: GameScene,
        editor_root: Option<Part>,
        vessel: Option<Vessel>,
    }

    impl SceneHost for FakeHost {
        fn loaded_scene(&self) -> GameScene {
            self.scene
        }

        fn editor_root_part(&self) -> Option<&Part> {
            self.editor_root.as_ref()
        }

        fn active_vessel(&self) -> Option<&Vessel> {
            self.vessel.as_ref()
        }
    }

    fn host(scene: GameScene) -> FakeHost {
        let mut vessel = Vessel::new("Kerbal X");
        vessel.root_part = Some(Part::new("mk1pod"));
        FakeHost {
            scene,
            editor_root: Some(Part::new("probeCoreOcto")),
            vessel: Some(vessel),
        }
    }

    #[test]
    fn test_scene_ordering() {
        assert!(GameScene::Flight > GameScene::SpaceCenter);
        assert!(GameScene::MainMenu < GameScene::SpaceCenter);
        assert!(GameScene::Editor.shows_screen_messages());
        assert!(GameScene::TrackingStation.shows_screen_messages());
        assert!(!GameScene::SpaceCenter.shows_screen_messages());
        assert!(!GameScene::Loading.shows_screen_messages());
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(GameScene::from_str("FLIGHT").unwrap(), GameScene::Flight);
        assert_eq!(GameScene::TrackingStation.to_string(), "TRACKSTATION");
        assert_eq!(GameScene::from_u8(6), Some(GameScene::Editor));
        assert_eq!(GameScene::from_u8(42), None);
    }

    #[test]
    fn test_scene_root_part() {
        let editor = host(GameScene::Editor);
        assert_eq!(scene_root_part(&editor).unwrap().name, "probeCoreOcto");

        let flight = host(GameScene::Flight);
        assert_eq!(scene_root_part(&flight).unwrap().name, "mk1pod");

        let menu = host(GameScene::MainMenu);
        assert!(scene_root_part(&menu).is_none());
    }

    #[test]
    fn test_scene_root_part_without_vessel() {
        let mut flight = host(GameScene::Flight);
        flight.vessel = None;
        assert!(scene_root_part(&flight).is_none());
    }
}
