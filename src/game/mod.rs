pub mod apples;
pub mod collision;
pub mod constants;
pub mod grid;
pub mod movement;
pub mod state;
pub mod types;
