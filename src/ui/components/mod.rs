pub mod app;
pub mod boot;
pub mod gauge;
pub mod progress;
pub mod spinner;
pub mod taskbar;
pub mod wheel;
pub mod window;
