//! Region queries against the mesh.
//!
//! - [`cover`]: [`Cover`], the breadth-first covering of a convex region, and its [`CoverStats`]
//! - [`ranges`]: [`RangeSet`] of merged [`IdRange`]s at one level
//! - [`config`]: [`CoverConfig`] depth settings
//! - [`report`]: [`write_ranges`] in name, id, CSV or JSON form

pub mod config;
pub mod cover;
pub mod ranges;
pub mod report;

pub use config::CoverConfig;
pub use cover::{Cover, CoverStats};
pub use ranges::{IdRange, RangeSet};
pub use report::{write_ranges, RangeFormat};
