pub mod parse;
pub mod plugin;
pub mod systems;
pub mod types;

pub use plugin::{InputActionUpdateSet, InputActionsPlugin};
pub use types::InputMap;
