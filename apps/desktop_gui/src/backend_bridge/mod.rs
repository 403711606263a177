//! Bridge between the egui thread and the async division api worker.

pub mod commands;
pub mod runtime;
