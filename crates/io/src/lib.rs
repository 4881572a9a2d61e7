//! File layer for Statera.
//!
//! This crate provides:
//! - Trial balance CSV loading
//! - Mapping template loading
//! - Text, CSV and JSON statement renderers

pub mod error;
pub mod mapping;
pub mod render;
pub mod trial_balance;

pub use error::{LoadError, RenderError};
pub use mapping::load_mapping;
pub use render::{RenderOptions, output_path, render, write_report};
pub use trial_balance::{load_trial_balance, read_trial_balance};
