//! CAD kernel abstraction
//!
//! The solid modeling kernel is an external collaborator. Fastener
//! operations only need the small workplane surface defined in [`traits`].

mod recording;
mod traits;

pub use recording::RecordingWorkplane;
pub use traits::{CadError, CadResult, HoleDepth, NullWorkplane, Workplane};
