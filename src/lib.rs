//! Tilemosaic - round tile mosaics from images
//!
//! Decodes PNG images, reduces them to a grid of averaged tile colors with
//! `mosaic-core` and snaps the colors onto a tile catalog.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
