//! Inkboard core crate.
//!
//! A minimal finger-painting canvas: raw pointer samples are smoothed into
//! quadratic curves and committed, one segment at a time, into an offscreen
//! RGBA raster that the host composites each frame.

pub mod canvas;
pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod path;
pub mod raster;
