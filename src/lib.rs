//! `wondergrain` adds synthetic film grain to an image.
//!
//! The crate exposes a single operation, [`operations::film_grain`]: two
//! independently seeded noise fields are generated, optionally blurred, and
//! composited onto the source image with an overlay blend. [`node`] wraps the
//! operation as an invocation for a node-graph host; the host supplies the
//! image fetch and store services and installs whatever logger it wants.

#![forbid(unsafe_code)]

pub mod error;
pub mod image;
pub mod node;
pub mod operations;
pub mod params;
