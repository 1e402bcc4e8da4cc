//! gddoc — reference pages from GDScript reflection dumps.
//!
//! The pipeline: [`reflection`] turns JSON dumps into the [`model`],
//! [`index::ClassIndex`] registers every class once, and [`compose`] builds
//! one [`compose::Document`] per page, resolving `[Class.symbol]` references
//! through [`resolve`]. Nothing past [`reflection`] touches I/O.

pub mod compose;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod reflection;
pub mod render;
pub mod resolve;
pub mod toc;
pub mod warning;

pub use compose::{generate, Document};
pub use config::Config;
pub use error::{Error, Result};
