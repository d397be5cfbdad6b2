pub mod audio;
pub mod catalog;
pub mod config;
pub mod desktop;
pub mod event;
pub mod http;
pub mod ipod;
pub mod news;
pub mod remote;
pub mod shell;
pub mod ui;
pub mod util;
pub mod wheel;
