//! Core abstractions for meshplot.
//!
//! This crate provides the fundamental types shared by the mesh builders:
//! - [`MeshBuffers`], the parallel position/normal/color/index output
//! - [`MeshBuilder`] trait for visuals that produce buffers
//! - [`Scale`] for turning raw data into heights and color-map lookups
//! - [`ColorMap`] and the [`ColorMapping`] trait
//! - [`CartGrid`] and [`HexGrid`] behind the [`Adjacency`] neighbor lookup

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod buffers;
pub mod builder;
pub mod color_maps;
pub mod error;
pub mod grid;
pub mod scale;

pub use buffers::{GpuVertex, MeshBuffers};
pub use builder::MeshBuilder;
pub use color_maps::{ColorMap, ColorMapRegistry, ColorMapping};
pub use error::{MeshplotError, Result};
pub use grid::{Adjacency, CartDir, CartGrid, GridGeometry, HexDir, HexGrid};
pub use scale::{Scale, ScaleMode};

// Re-export glam types for convenience
pub use glam::{Mat2, Vec2, Vec3};
