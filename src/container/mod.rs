//! The self-describing byte artifact bundling a cipher document with its
//! packed bit payload.

pub mod artifact;

pub use artifact::{Artifact, HeaderInfo, ARTIFACT_FORMAT_VERSION, ARTIFACT_MAGIC};
