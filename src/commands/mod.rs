pub mod generate;
pub mod macos_icon;
pub mod tray;
pub mod windows_icon;
