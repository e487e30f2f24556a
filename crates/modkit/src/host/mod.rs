//! Model of the host game the library plugs into.
//!
//! The host owns scenes, crafts and their parts; these types mirror just
//! enough of it for the logging and lookup helpers to work against.

mod part;
mod scene;

pub use part::{BaseField, Component, Part, PartModule, UiControl, UiControlKind, Vessel};
pub use scene::{GameScene, SceneHost, scene_root_part};
