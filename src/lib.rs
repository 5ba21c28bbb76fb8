//! Vibe Planner - mood-based recommendation aggregation service
//!
//! Maps one free-text vibe description to keyword searches across five
//! independent content providers (playlists, recipe videos, books, movies,
//! nearby cafes) plus a geocoder, and merges whatever comes back into a
//! single composite response.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{derive_keywords, Planner};
pub use crate::models::{Coordinates, LocationInfo, VibeRequest, VibeResponse};
