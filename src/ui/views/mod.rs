pub mod desktop;
pub mod ipod;

pub use desktop::DesktopView;
pub use ipod::IpodView;
