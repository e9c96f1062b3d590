//! Engine for the Loudi atlas: data model, spot filtering, era grouping,
//! region hierarchy, boundary loading, and view-state transitions.

pub mod boundary;
pub mod camera;
pub mod era;
pub mod filter;
pub mod models;
pub mod regions;
pub mod state;
