//! Neoview - Near-Earth Object Orbit Visualizer
//!
//! A library crate exposing the orbital-mechanics core, the picking
//! resolver, and the application plugins for testing and integration.

pub mod camera;
pub mod catalog;
pub mod elements;
pub mod input;
pub mod kepler;
pub mod picking;
pub mod render;
pub mod types;
pub mod ui;

#[cfg(test)]
mod proptest_kepler;
