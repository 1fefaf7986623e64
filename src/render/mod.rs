//! Rendering collaborators for generated geometry
//!
//! Nothing here is needed to convert coordinates or build solids; these
//! types only hand a finished mesh to something a person can look at.

pub mod export;
pub mod preview;

#[cfg(test)]
mod tests;

pub use export::{MeshExporter, MeshFormat};
pub use preview::{Camera, PreviewRenderer};
