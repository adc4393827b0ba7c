// src/tables/mod.rs

pub mod definitions;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod utils;

pub(crate) mod systems;

pub use plugin::TablesPlugin;
pub use resources::TableStore;
