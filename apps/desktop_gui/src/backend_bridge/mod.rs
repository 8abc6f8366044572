//! Bridge between the UI thread and the worker that hosts the submission sink.

pub mod commands;
pub mod runtime;
