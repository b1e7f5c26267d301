pub mod config;
pub mod motd;
pub mod render;
pub mod system;

pub use config::*;
pub use render::*;
pub use system::*;
