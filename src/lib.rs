//! Clean URL capability probing.
//!
//! Verifies whether a web server can serve clean (rewritten, extensionless)
//! request paths, the way a CMS settings page or install wizard would check
//! before offering the option. The check flows render through the
//! [`ui::UiHandle`] seam so they run against any surface; the binary drives
//! them from a YAML site config onto the console.

pub mod check;
pub mod config;
pub mod timezone;
pub mod ui;
