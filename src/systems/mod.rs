//! The Entity-Component-System (ECS) module.
//!
//! Gameplay systems operate only on components and resources, so they run the
//! same in a windowed game and in a headless world. Input and rendering
//! systems additionally need SDL handles stored as non-send resources.

pub mod collision;
pub mod components;
pub mod errors;
pub mod input;
pub mod pipe;
pub mod player;
pub mod render;
pub mod state;

pub use self::collision::*;
pub use self::components::*;
pub use self::errors::*;
pub use self::input::*;
pub use self::pipe::*;
pub use self::player::*;
pub use self::render::*;
pub use self::state::*;
