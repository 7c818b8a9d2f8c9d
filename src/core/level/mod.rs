pub mod layout;
pub mod loader;
pub mod progression;
pub mod registry;

pub use loader::{LevelLoaderPlugin, LevelOverride};
pub use progression::{LevelLoaded, LevelProgress, LoadLevel, PendingSceneChange, SceneChange};
pub use registry::LevelCatalog;
