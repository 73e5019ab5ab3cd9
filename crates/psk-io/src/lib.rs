//! I/O layer for the PSK skeletal mesh format.
//!
//! PSK is a legacy chunked binary interchange format for skeletal meshes:
//! vertices, UV wedges, triangle faces, materials, a bone hierarchy and
//! per-vertex bone weights. This crate decodes the chunk stream into the
//! in-memory [`psk_core::Asset`] model; writing/export is out of scope.
//!
//! # Entry points
//!
//! ```ignore
//! // From a path:
//! let asset = psk_io::read_psk("model.psk")?;
//!
//! // From bytes already in memory:
//! let asset = psk_io::decode(&bytes)?;
//!
//! // Or with explicit control over validation:
//! let mut reader = psk_io::PskReader::open("model.psk")?;
//! let raw = reader.read_chunks()?; // no cross-reference checks yet
//! ```
//!
//! Static (non-skeletal) `.pskx` content uses the same chunk stream without
//! bone or weight chunks; the decoder treats their absence as a valid state
//! rather than branching on the file extension.

pub mod psk_reader;

pub use psk_reader::{decode, read_psk, ChunkTag, PskReader};
