pub mod config;
pub mod month;
pub mod pick;
pub mod presets;
pub mod range;
pub mod show;
