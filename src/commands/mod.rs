pub mod configure;
pub mod doctor;
pub mod motd;
pub mod render;
pub mod update;

pub use configure::*;
pub use doctor::*;
pub use motd::*;
pub use render::*;
pub use update::*;
