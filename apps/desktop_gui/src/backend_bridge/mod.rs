//! Backend bridge: command queue consumer running shorten requests off the UI thread.

pub mod commands;
pub mod runtime;
