//! glyphgrid-test - Regression test harness for glyphgrid
//!
//! Every regression test creates a [`RegParams`], records numbered checks
//! against it, and asserts on [`RegParams::cleanup`] at the end. Failing
//! checks do not panic immediately, so one run reports every mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use glyphgrid_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("blur");
//! let img = synthetic::uniform(16, 16, 128);
//! rp.compare_values(16.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Test inputs are generated by [`synthetic`] rather than loaded from disk.

mod params;
pub mod synthetic;

pub use params::RegParams;
