//! distrikml - Normalize district boundary KML files into styled web-ready KML

pub mod config;
pub mod discover;
pub mod domain;
pub mod error;
pub mod kml;
pub mod pipeline;
pub mod slug;
