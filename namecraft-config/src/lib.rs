//! Configuration loading for namecraft.
//!
//! Hosts call [`RenamerConfig::load_from_env`] once at startup to obtain the
//! renamer settings and the script to run. Files may be TOML or JSON.
#![allow(missing_docs)]

pub mod models;
pub mod util;

pub use models::renamer::{RenamerConfig, RenamerConfigSource};
