//! In-memory model for a decoded PSK asset.
//!
//! Indices are 0-based positions within the sequence they reference. Every
//! record is appended once while its owning chunk decodes and is immutable
//! afterwards; the dense weight matrix and per-material face ranges are
//! derived later by [`Asset::finalize`](crate::builder).

use std::collections::HashMap;

/// A mesh point. Its index is its position in [`Asset::vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// A (vertex, UV, material) triple. Several wedges may reference the same
/// vertex to support seams and UV splits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wedge {
    /// Index into [`Asset::vertices`].
    pub point: u32,
    pub uv: [f32; 2],
    pub material_index: u32,
}

/// A triangle over three wedges, in raw file order.
///
/// The core does not reorder the winding; a consumer expecting the opposite
/// handedness emits `[w0, w2, w1]` itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Face {
    /// Indices into [`Asset::wedges`]. 16-bit file variants are widened on
    /// decode.
    pub wedge_indices: [u32; 3],
    pub material_index: u8,
    pub aux_material_index: u8,
    /// Bitmask grouping faces for normal smoothing; opaque, passed through.
    pub smoothing_group: u32,
}

/// One joint of the reference skeleton.
///
/// Bone 0 is the root; its `parent` field is never dereferenced. The format
/// does not guarantee that parents precede children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bone {
    pub name: String,
    /// Index into [`Asset::bones`]; meaningless for bone 0.
    pub parent: u32,
    /// Local translation.
    pub offset: [f32; 3],
    /// Quaternion, x y z w.
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub name: String,
}

/// A sparse skin-weight record, exactly as stored in the file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawWeight {
    pub influence: f32,
    /// Index into [`Asset::vertices`].
    pub vertex_index: u32,
    /// Index into [`Asset::bones`].
    pub bone_index: u32,
}

/// Contiguous run of face indices sharing a material, recorded as the first
/// and last face index observed.
///
/// Contiguity is an assumption of this format, not a verified invariant; a
/// consumer that needs a non-contiguous-safe grouping should re-derive it
/// from the per-face `material_index` fields instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRange {
    pub first: usize,
    pub last: usize,
}

/// A fully decoded PSK asset.
///
/// "No bones" and "no weights" are valid states: static (non-skeletal)
/// meshes simply never emit those chunks. A vertex absent from `weights` is
/// unskinned (all-zero influence), not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Asset {
    pub vertices: Vec<Vertex>,
    pub wedges: Vec<Wedge>,
    pub faces: Vec<Face>,
    pub materials: Vec<Material>,
    pub bones: Vec<Bone>,
    /// Weight records in file order, kept so consumers can re-derive any
    /// grouping themselves.
    pub raw_weights: Vec<RawWeight>,
    /// Dense influence rows keyed by vertex index, one slot per bone.
    /// Populated by [`Asset::finalize`]; influences are file values verbatim,
    /// never normalized.
    pub weights: HashMap<u32, Vec<f32>>,
    /// Per-material face range, indexed by material index. `None` for a
    /// material no face references. Populated by [`Asset::finalize`].
    pub material_ranges: Vec<Option<FaceRange>>,
}

impl Asset {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the asset carries a skeleton.
    pub fn is_skeletal(&self) -> bool {
        !self.bones.is_empty()
    }
}
