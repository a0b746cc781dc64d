// Settings service
// Persistence of picker options

mod service;

pub use service::SettingsService;
