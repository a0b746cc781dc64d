// Module exports for models

pub mod preset;
pub mod range;
pub mod settings;
pub mod ui;
