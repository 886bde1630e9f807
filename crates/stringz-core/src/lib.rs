pub mod actor;
pub mod banner;
pub mod config;
pub mod constants;
pub mod guitar;
pub mod hover;
pub mod note;
pub mod scene;
pub mod stickman;
pub mod surface;
pub mod trail;

pub use actor::{Actor, Emissions, FrameEnv};
pub use config::{ConfigError, SceneConfig};
pub use guitar::{Guitar, GuitarKind};
pub use hover::{HoverAction, HoverReport};
pub use note::Note;
pub use scene::{Scene, SceneStats};
pub use stickman::Stickman;
pub use surface::{DrawCmd, RecordingSurface, Surface};
