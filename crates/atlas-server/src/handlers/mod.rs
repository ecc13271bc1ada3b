//! HTTP handlers for the Atlas REST surface.

pub mod countries;
pub mod image;
pub mod refresh;
pub mod status;
