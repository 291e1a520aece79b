// Settings service
// TOML-backed persistence of the timeline configuration

mod service;

pub use service::SettingsService;
