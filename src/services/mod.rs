// Service module exports

pub mod picker;
pub mod settings;
