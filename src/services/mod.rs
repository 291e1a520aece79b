// Service module exports

pub mod settings;
pub mod timeline;
