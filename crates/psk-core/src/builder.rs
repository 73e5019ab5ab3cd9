//! Post-decode model building and validation.
//!
//! Runs once after the chunk stream is exhausted: cross-checks every index
//! field, materializes the dense weight matrix (deferred until now so the
//! final bone count is known even when a weight chunk preceded the skeleton
//! chunk in file order), and records the per-material face ranges.

use std::collections::HashMap;

use crate::asset::{Asset, FaceRange, RawWeight};
use crate::status::{PskError, Result};

impl Asset {
    /// Validates cross-references and derives the weight matrix and material
    /// face ranges.
    ///
    /// The chunk layer accepts any index values; this is where dangling
    /// references surface as [`PskError::ReferentialIntegrity`]. Either the
    /// whole asset is coherent or finalization fails.
    pub fn finalize(&mut self) -> Result<()> {
        self.validate_references()?;
        self.weights = build_weight_matrix(&self.raw_weights, self.bones.len());
        self.material_ranges = material_face_ranges(self);
        Ok(())
    }

    fn validate_references(&self) -> Result<()> {
        // Files without a materials chunk still stamp material 0 on wedges
        // and faces; like absent bones or weights, an empty materials
        // sequence is a valid state, so the index checks apply only when
        // materials were actually decoded.
        let has_materials = !self.materials.is_empty();
        for (i, wedge) in self.wedges.iter().enumerate() {
            check("wedge", i, "point", wedge.point, self.vertices.len())?;
            if has_materials {
                check(
                    "wedge",
                    i,
                    "material index",
                    wedge.material_index,
                    self.materials.len(),
                )?;
            }
        }
        for (i, face) in self.faces.iter().enumerate() {
            for &w in &face.wedge_indices {
                check("face", i, "wedge index", w, self.wedges.len())?;
            }
            if has_materials {
                check(
                    "face",
                    i,
                    "material index",
                    u32::from(face.material_index),
                    self.materials.len(),
                )?;
            }
        }
        // Bone 0 is the root; its parent field is never dereferenced.
        for (i, bone) in self.bones.iter().enumerate().skip(1) {
            check("bone", i, "parent index", bone.parent, self.bones.len())?;
        }
        for (i, weight) in self.raw_weights.iter().enumerate() {
            check(
                "weight",
                i,
                "vertex index",
                weight.vertex_index,
                self.vertices.len(),
            )?;
            check("weight", i, "bone index", weight.bone_index, self.bones.len())?;
        }
        Ok(())
    }

    /// Parent-to-children adjacency over the flat bone sequence.
    ///
    /// Bones stay in their arena; the hierarchy is expressed as index
    /// references only. Tolerates parents appearing after their children.
    pub fn bone_children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.bones.len()];
        for (i, bone) in self.bones.iter().enumerate().skip(1) {
            if let Some(list) = children.get_mut(bone.parent as usize) {
                list.push(i);
            }
        }
        children
    }

    /// Depth-first bone order starting at the root.
    ///
    /// A visited set guards against malformed parent chains that loop, so a
    /// consumer walking the hierarchy cannot hang; bones trapped in a cycle
    /// are simply absent from the order.
    pub fn bone_traversal_order(&self) -> Vec<usize> {
        if self.bones.is_empty() {
            return Vec::new();
        }
        let children = self.bone_children();
        let mut order = Vec::with_capacity(self.bones.len());
        let mut visited = vec![false; self.bones.len()];
        let mut stack = vec![0usize];
        while let Some(i) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            order.push(i);
            for &child in children[i].iter().rev() {
                stack.push(child);
            }
        }
        order
    }
}

fn check(
    entity: &'static str,
    index: usize,
    field: &'static str,
    value: u32,
    limit: usize,
) -> Result<()> {
    if (value as usize) < limit {
        Ok(())
    } else {
        Err(PskError::ReferentialIntegrity {
            entity,
            index,
            field,
            value,
            limit,
        })
    }
}

/// Builds dense influence rows from the sparse weight records.
///
/// Each row is sized to the final bone count and zero-initialized; a later
/// record for the same vertex/bone pair overwrites the earlier one. Vertices
/// no record mentions get no row at all.
fn build_weight_matrix(raw: &[RawWeight], bone_count: usize) -> HashMap<u32, Vec<f32>> {
    let mut matrix: HashMap<u32, Vec<f32>> = HashMap::new();
    for weight in raw {
        let row = matrix
            .entry(weight.vertex_index)
            .or_insert_with(|| vec![0.0; bone_count]);
        row[weight.bone_index as usize] = weight.influence;
    }
    matrix
}

/// First and last face index observed per material.
///
/// One slot per decoded material; with no materials decoded there are no
/// slots, whatever the faces claim.
fn material_face_ranges(asset: &Asset) -> Vec<Option<FaceRange>> {
    let mut ranges: Vec<Option<FaceRange>> = vec![None; asset.materials.len()];
    for (i, face) in asset.faces.iter().enumerate() {
        match ranges.get_mut(usize::from(face.material_index)) {
            Some(Some(range)) => range.last = i,
            Some(slot) => *slot = Some(FaceRange { first: i, last: i }),
            None => {}
        }
    }
    ranges
}
