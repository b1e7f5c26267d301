pub mod config;
pub mod palette;
pub mod platform;

pub use config::*;
pub use palette::*;
pub use platform::*;
