//! Core library for the PSK skeletal mesh format.
//!
//! Provides the primitive little-endian reader, the in-memory asset model,
//! the post-decode builder/validator and the error taxonomy. The chunk-level
//! file decoder lives in the `psk-io` crate.

pub mod asset;
pub mod builder;
pub mod reader;
pub mod status;

pub use asset::{Asset, Bone, Face, FaceRange, Material, RawWeight, Vertex, Wedge};
pub use reader::ByteReader;
pub use status::{PskError, Result};
