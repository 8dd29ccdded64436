//! Core models for the authentication screens

#[cfg(feature = "ssr")]
pub mod config;
pub mod forms;
mod panel;

pub use forms::*;
pub use panel::AuthPanel;
