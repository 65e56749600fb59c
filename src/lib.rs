//! Hearthstone board codec library.
//!
//! Decodes recorded match logs, encodes board snapshots into fixed-width
//! feature vectors with perspective-relative outcome labels, and builds
//! training datasets from directories of logs.

pub mod dataset;
pub mod document;
pub mod encoding;
pub mod record;
