//! Result handling shared by the FMOD Ex binding.
//!
//! Re-exports the translation layer from `fmod-base` and adds the pieces the
//! binding uses around it: environment configuration, log setup and a
//! [`check`] helper for wrapping native calls.

pub mod check;
pub mod config;
pub mod logging;

pub use check::{check, check_any};
pub use fmod_base::*;
