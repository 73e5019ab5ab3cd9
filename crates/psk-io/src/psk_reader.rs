//! PSK chunk stream reader.
//!
//! A PSK file is a flat sequence of self-describing chunks:
//!
//! `[20 bytes tag, NUL-padded][u32 type_flag][u32 element_size][u32 element_count][payload]`
//!
//! with `element_count * element_size` payload bytes, little-endian
//! throughout and no alignment padding. Chunk order is not constrained;
//! unknown tags are valid and skipped verbatim. The stream ends cleanly only
//! at a chunk boundary; a partial header or payload is a hard error.
//!
//! # Example
//!
//! ```ignore
//! use psk_io::PskReader;
//!
//! let asset = PskReader::open("model.psk")?.read_asset()?;
//! println!("{} vertices, {} bones", asset.vertices.len(), asset.bones.len());
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use psk_core::asset::{Asset, Bone, Face, Material, RawWeight, Vertex, Wedge};
use psk_core::reader::ByteReader;
use psk_core::status::{PskError, Result};

/// Width of the NUL-padded tag slot at the start of every chunk header.
pub const TAG_LEN: usize = 20;

/// Byte width of the fixed-length name fields in bone and material records.
const NAME_LEN: usize = 64;

/// The chunk kinds this decoder understands.
///
/// Tags are matched after trimming trailing NULs, case-sensitively. Anything
/// else falls through to the skip path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    /// `ACTRHEAD`: file preamble, no meaningful payload.
    ActorHead,
    /// `PNTS0000`: vertex positions.
    Points,
    /// `VTXW0000` / `VTXW3200`: wedges (vertex, UV, material triples).
    Wedges,
    /// `FACE0000`: triangles with 16-bit wedge indices.
    Faces16,
    /// `FACE3200`: triangles with 32-bit wedge indices.
    Faces32,
    /// `REFSKELT` / `REFSKEL0`: reference skeleton bones.
    Skeleton,
    /// `MATT0000`: materials.
    Materials,
    /// `EXTRAUV0`..`EXTRAUV2`: reserved extra UV channels, read and dropped.
    ExtraUv,
    /// `RAWWEIGHTS`: sparse per-vertex bone influences.
    Weights,
}

impl ChunkTag {
    /// Looks up a trimmed tag string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ACTRHEAD" => Some(ChunkTag::ActorHead),
            "PNTS0000" => Some(ChunkTag::Points),
            "VTXW0000" | "VTXW3200" => Some(ChunkTag::Wedges),
            "FACE0000" => Some(ChunkTag::Faces16),
            "FACE3200" => Some(ChunkTag::Faces32),
            "REFSKELT" | "REFSKEL0" => Some(ChunkTag::Skeleton),
            "MATT0000" => Some(ChunkTag::Materials),
            "EXTRAUV0" | "EXTRAUV1" | "EXTRAUV2" => Some(ChunkTag::ExtraUv),
            "RAWWEIGHTS" => Some(ChunkTag::Weights),
            _ => None,
        }
    }

    /// The element width this decoder can parse for the tag, or `None` when
    /// any width is accepted.
    fn expected_element_size(self) -> Option<u32> {
        match self {
            // Preamble payloads (usually empty) are consumed blind.
            ChunkTag::ActorHead => None,
            ChunkTag::Points => Some(12),
            ChunkTag::Wedges => Some(16),
            ChunkTag::Faces16 => Some(12),
            ChunkTag::Faces32 => Some(18),
            ChunkTag::Skeleton => Some(120),
            ChunkTag::Materials => Some(88),
            ChunkTag::ExtraUv => Some(8),
            ChunkTag::Weights => Some(12),
        }
    }
}

#[derive(Debug)]
struct ChunkHeader {
    name: String,
    element_size: u32,
    element_count: u32,
    /// Stream offset of the start of this chunk's header.
    offset: u64,
}

impl ChunkHeader {
    fn payload_len(&self) -> u64 {
        u64::from(self.element_size) * u64::from(self.element_count)
    }
}

/// Reader for PSK chunk streams.
pub struct PskReader<R: Read> {
    reader: ByteReader<R>,
}

impl PskReader<BufReader<File>> {
    /// Open a PSK file from a path.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> PskReader<R> {
    /// Create a reader over any sequential byte source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: ByteReader::new(reader),
        }
    }

    /// Decodes the whole chunk stream into a raw, unvalidated [`Asset`].
    ///
    /// Index fields are taken at face value here; cross-reference checks and
    /// the derived weight matrix come from [`Asset::finalize`]. Most callers
    /// want [`read_asset`](Self::read_asset) instead.
    pub fn read_chunks(&mut self) -> Result<Asset> {
        let mut asset = Asset::new();
        while let Some(header) = self.read_header()? {
            match ChunkTag::from_name(&header.name) {
                Some(tag) => self
                    .decode_payload(tag, &header, &mut asset)
                    .map_err(|e| e.in_chunk(&header.name, "truncated payload"))?,
                None => self
                    .reader
                    .skip(header.payload_len())
                    .map_err(|e| e.in_chunk(&header.name, "truncated payload"))?,
            }
        }
        Ok(asset)
    }

    /// Decodes and finalizes: the validated asset or the first error.
    pub fn read_asset(&mut self) -> Result<Asset> {
        let mut asset = self.read_chunks()?;
        asset.finalize()?;
        Ok(asset)
    }

    /// Reads the next chunk header, or `None` at a clean end of stream.
    ///
    /// Zero bytes where a tag would start ends the stream; a partial tag
    /// slot or truncated metadata is fatal.
    fn read_header(&mut self) -> Result<Option<ChunkHeader>> {
        let offset = self.reader.position();
        let mut tag = [0u8; TAG_LEN];
        if !self.reader.read_exact_or_eof(&mut tag)? {
            return Ok(None);
        }
        let trimmed = match tag.iter().rposition(|&b| b != 0) {
            Some(last) => &tag[..=last],
            None => &[][..],
        };
        // Lossy so that a garbage tag stays skippable instead of failing the
        // whole decode.
        let name = String::from_utf8_lossy(trimmed).into_owned();

        let metadata = |e: PskError| e.in_chunk(&name, "truncated chunk header");
        let _type_flag = self.reader.read_u32().map_err(metadata)?;
        let element_size = self.reader.read_u32().map_err(metadata)?;
        let element_count = self.reader.read_u32().map_err(metadata)?;

        Ok(Some(ChunkHeader {
            name,
            element_size,
            element_count,
            offset,
        }))
    }

    fn decode_payload(
        &mut self,
        tag: ChunkTag,
        header: &ChunkHeader,
        asset: &mut Asset,
    ) -> Result<()> {
        if let Some(expected) = tag.expected_element_size() {
            if header.element_size != expected {
                // Recognized tag, layout we cannot parse: a future format
                // variant, not a corrupt file.
                return Err(PskError::UnsupportedEncoding {
                    tag: header.name.clone(),
                    offset: header.offset,
                    element_size: header.element_size,
                });
            }
        }

        let r = &mut self.reader;
        let count = header.element_count;
        match tag {
            ChunkTag::ActorHead => r.skip(header.payload_len())?,
            ChunkTag::Points => {
                for _ in 0..count {
                    asset.vertices.push(Vertex {
                        position: r.read_vec3()?,
                    });
                }
            }
            ChunkTag::Wedges => {
                for _ in 0..count {
                    asset.wedges.push(Wedge {
                        point: r.read_u32()?,
                        uv: r.read_vec2()?,
                        material_index: r.read_u32()?,
                    });
                }
            }
            ChunkTag::Faces16 => {
                for _ in 0..count {
                    let wedge_indices = [
                        u32::from(r.read_u16()?),
                        u32::from(r.read_u16()?),
                        u32::from(r.read_u16()?),
                    ];
                    asset.faces.push(Face {
                        wedge_indices,
                        material_index: r.read_u8()?,
                        aux_material_index: r.read_u8()?,
                        smoothing_group: r.read_u32()?,
                    });
                }
            }
            ChunkTag::Faces32 => {
                for _ in 0..count {
                    let wedge_indices = [r.read_u32()?, r.read_u32()?, r.read_u32()?];
                    asset.faces.push(Face {
                        wedge_indices,
                        material_index: r.read_u8()?,
                        aux_material_index: r.read_u8()?,
                        smoothing_group: r.read_u32()?,
                    });
                }
            }
            ChunkTag::Skeleton => {
                for _ in 0..count {
                    let name = r.read_fixed_string(NAME_LEN)?;
                    let _flags = r.read_u32()?;
                    let _child_count = r.read_u32()?;
                    let parent = r.read_u32()?;
                    let rotation = r.read_vec4()?;
                    let offset = r.read_vec3()?;
                    let _length = r.read_f32()?;
                    let scale = r.read_vec3()?;
                    asset.bones.push(Bone {
                        name,
                        parent,
                        offset,
                        rotation,
                        scale,
                    });
                }
            }
            ChunkTag::Materials => {
                for _ in 0..count {
                    let name = r.read_fixed_string(NAME_LEN)?;
                    // Texture index, poly flags, aux material, aux flags,
                    // LOD bias, LOD style.
                    for _ in 0..6 {
                        let _ = r.read_u32()?;
                    }
                    asset.materials.push(Material { name });
                }
            }
            ChunkTag::ExtraUv => {
                // Reserved channel; consume every pair so the stream stays
                // positioned at the next chunk.
                for _ in 0..count {
                    let _uv = r.read_vec2()?;
                }
            }
            ChunkTag::Weights => {
                for _ in 0..count {
                    asset.raw_weights.push(RawWeight {
                        influence: r.read_f32()?,
                        vertex_index: r.read_u32()?,
                        bone_index: r.read_u32()?,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Decodes a PSK file from a path.
pub fn read_psk<P: AsRef<Path>>(path: P) -> Result<Asset> {
    let mut reader = PskReader::open(path).map_err(|e| PskError::Io(e.to_string()))?;
    reader.read_asset()
}

/// Decodes a PSK chunk stream from an in-memory byte slice.
pub fn decode(bytes: &[u8]) -> Result<Asset> {
    PskReader::new(io::Cursor::new(bytes)).read_asset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, WriteBytesExt};
    use std::io::Cursor;

    // Type flag value commonly written by Unreal exporters; the decoder
    // consumes and ignores it.
    const TYPE_FLAG: u32 = 1999801;

    fn chunk(tag: &str, element_size: u32, element_count: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut slot = [0u8; TAG_LEN];
        slot[..tag.len()].copy_from_slice(tag.as_bytes());
        out.extend_from_slice(&slot);
        out.write_u32::<LittleEndian>(TYPE_FLAG).unwrap();
        out.write_u32::<LittleEndian>(element_size).unwrap();
        out.write_u32::<LittleEndian>(element_count).unwrap();
        out.extend_from_slice(payload);
        out
    }

    fn points_chunk(points: &[[f32; 3]]) -> Vec<u8> {
        let mut payload = Vec::new();
        for p in points {
            for c in p {
                payload.write_f32::<LittleEndian>(*c).unwrap();
            }
        }
        chunk("PNTS0000", 12, points.len() as u32, &payload)
    }

    fn wedges_chunk(wedges: &[(u32, [f32; 2], u32)]) -> Vec<u8> {
        let mut payload = Vec::new();
        for (point, uv, mat) in wedges {
            payload.write_u32::<LittleEndian>(*point).unwrap();
            payload.write_f32::<LittleEndian>(uv[0]).unwrap();
            payload.write_f32::<LittleEndian>(uv[1]).unwrap();
            payload.write_u32::<LittleEndian>(*mat).unwrap();
        }
        chunk("VTXW0000", 16, wedges.len() as u32, &payload)
    }

    fn faces16_chunk(faces: &[([u16; 3], u8, u8, u32)]) -> Vec<u8> {
        let mut payload = Vec::new();
        for (wedges, mat, aux, smooth) in faces {
            for w in wedges {
                payload.write_u16::<LittleEndian>(*w).unwrap();
            }
            payload.push(*mat);
            payload.push(*aux);
            payload.write_u32::<LittleEndian>(*smooth).unwrap();
        }
        chunk("FACE0000", 12, faces.len() as u32, &payload)
    }

    fn materials_chunk(names: &[&str]) -> Vec<u8> {
        let mut payload = Vec::new();
        for name in names {
            let mut slot = [0u8; NAME_LEN];
            slot[..name.len()].copy_from_slice(name.as_bytes());
            payload.extend_from_slice(&slot);
            for _ in 0..6 {
                payload.write_u32::<LittleEndian>(0).unwrap();
            }
        }
        chunk("MATT0000", 88, names.len() as u32, &payload)
    }

    fn skeleton_chunk(bones: &[(&str, u32)]) -> Vec<u8> {
        let mut payload = Vec::new();
        for (name, parent) in bones {
            let mut slot = [0u8; NAME_LEN];
            slot[..name.len()].copy_from_slice(name.as_bytes());
            payload.extend_from_slice(&slot);
            payload.write_u32::<LittleEndian>(0).unwrap(); // flags
            payload.write_u32::<LittleEndian>(0).unwrap(); // child count
            payload.write_u32::<LittleEndian>(*parent).unwrap();
            for c in [0.0f32, 0.0, 0.0, 1.0] {
                payload.write_f32::<LittleEndian>(c).unwrap(); // rotation
            }
            for c in [0.0f32, 0.0, 0.0] {
                payload.write_f32::<LittleEndian>(c).unwrap(); // offset
            }
            payload.write_f32::<LittleEndian>(0.0).unwrap(); // length
            for c in [1.0f32, 1.0, 1.0] {
                payload.write_f32::<LittleEndian>(c).unwrap(); // scale
            }
        }
        chunk("REFSKELT", 120, bones.len() as u32, &payload)
    }

    fn weights_chunk(weights: &[(f32, u32, u32)]) -> Vec<u8> {
        let mut payload = Vec::new();
        for (influence, vertex, bone) in weights {
            payload.write_f32::<LittleEndian>(*influence).unwrap();
            payload.write_u32::<LittleEndian>(*vertex).unwrap();
            payload.write_u32::<LittleEndian>(*bone).unwrap();
        }
        chunk("RAWWEIGHTS", 12, weights.len() as u32, &payload)
    }

    fn decode_bytes(bytes: &[u8]) -> Result<Asset> {
        PskReader::new(Cursor::new(bytes.to_vec())).read_asset()
    }

    #[test]
    fn empty_stream_decodes_to_empty_asset() {
        let asset = decode_bytes(&[]).unwrap();
        assert_eq!(asset, Asset::new());
    }

    #[test]
    fn minimal_triangle_file() {
        let mut data = chunk("ACTRHEAD", 0, 0, &[]);
        data.extend(points_chunk(&[[1.0, 2.0, 3.0]]));
        data.extend(wedges_chunk(&[(0, [0.5, 0.5], 0)]));
        data.extend(faces16_chunk(&[([0, 0, 0], 0, 0, 1)]));
        data.extend(materials_chunk(&["default"]));

        let asset = decode_bytes(&data).unwrap();
        assert_eq!(asset.vertices.len(), 1);
        assert_eq!(asset.vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(asset.wedges.len(), 1);
        assert_eq!(asset.wedges[0].point, 0);
        assert_eq!(asset.wedges[0].uv, [0.5, 0.5]);
        assert_eq!(asset.faces.len(), 1);
        assert_eq!(asset.faces[0].wedge_indices, [0, 0, 0]);
        assert_eq!(asset.materials[0].name, "default");
        assert!(!asset.is_skeletal());
    }

    #[test]
    fn triangle_without_materials_chunk_decodes_cleanly() {
        // Some exporters omit MATT0000 entirely while still stamping
        // material 0 on every wedge and face.
        let mut data = points_chunk(&[[0.0, 0.0, 0.0]]);
        data.extend(wedges_chunk(&[(0, [0.0, 0.0], 0)]));
        data.extend(faces16_chunk(&[([0, 0, 0], 0, 0, 0)]));

        let asset = decode_bytes(&data).unwrap();
        assert_eq!(asset.vertices.len(), 1);
        assert_eq!(asset.wedges.len(), 1);
        assert_eq!(asset.faces.len(), 1);
        assert!(asset.materials.is_empty());
        assert!(asset.material_ranges.is_empty());
    }

    #[test]
    fn face_winding_is_preserved_in_file_order() {
        let mut data = points_chunk(&[[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        data.extend(wedges_chunk(&[
            (0, [0.0, 0.0], 0),
            (1, [1.0, 0.0], 0),
            (2, [0.0, 1.0], 0),
        ]));
        data.extend(faces16_chunk(&[([0, 1, 2], 0, 0, 1)]));
        data.extend(materials_chunk(&["m"]));

        let asset = decode_bytes(&data).unwrap();
        // Raw order [w0, w1, w2]; a consumer that wants [w0, w2, w1] reorders
        // at presentation time.
        assert_eq!(asset.faces[0].wedge_indices, [0, 1, 2]);
    }

    #[test]
    fn faces32_variant_carries_wide_indices() {
        let mut payload = Vec::new();
        for w in [0u32, 1, 2] {
            payload.write_u32::<LittleEndian>(w).unwrap();
        }
        payload.push(0);
        payload.push(3);
        payload.write_u32::<LittleEndian>(7).unwrap();

        let mut data = points_chunk(&[[0.0; 3]]);
        data.extend(wedges_chunk(&[
            (0, [0.0; 2], 0),
            (0, [0.0; 2], 0),
            (0, [0.0; 2], 0),
        ]));
        data.extend(chunk("FACE3200", 18, 1, &payload));
        data.extend(materials_chunk(&["m"]));

        let asset = decode_bytes(&data).unwrap();
        assert_eq!(asset.faces[0].wedge_indices, [0, 1, 2]);
        assert_eq!(asset.faces[0].aux_material_index, 3);
        assert_eq!(asset.faces[0].smoothing_group, 7);
    }

    #[test]
    fn refskel0_is_accepted_as_skeleton() {
        let mut data = skeleton_chunk(&[("root", 0)]);
        // Rewrite the tag slot in place.
        data[..TAG_LEN].copy_from_slice(b"REFSKEL0\0\0\0\0\0\0\0\0\0\0\0\0");
        let asset = decode_bytes(&data).unwrap();
        assert_eq!(asset.bones.len(), 1);
        assert_eq!(asset.bones[0].name, "root");
    }

    #[test]
    fn unknown_chunk_is_skipped_exactly() {
        let mut data = chunk("MYSTERY0", 5, 3, &[0xAB; 15]);
        data.extend(points_chunk(&[[4.0, 5.0, 6.0]]));

        let asset = decode_bytes(&data).unwrap();
        // The follow-up chunk parses, so the skip advanced by exactly
        // size * count; nothing else was touched.
        assert_eq!(asset.vertices.len(), 1);
        assert_eq!(asset.vertices[0].position, [4.0, 5.0, 6.0]);
        assert!(asset.wedges.is_empty());
        assert!(asset.faces.is_empty());
    }

    #[test]
    fn truncated_unknown_chunk_payload_is_fatal() {
        // Declares 16 payload bytes, provides 4.
        let mut data = chunk("MYSTERY0", 16, 1, &[]);
        data.extend_from_slice(&[1, 2, 3, 4]);
        match decode_bytes(&data) {
            Err(PskError::CorruptChunk { tag, .. }) => assert_eq!(tag, "MYSTERY0"),
            other => panic!("expected CorruptChunk, got {other:?}"),
        }
    }

    #[test]
    fn truncated_face_payload_is_fatal_not_short() {
        let mut data = points_chunk(&[[0.0; 3]]);
        data.extend(wedges_chunk(&[(0, [0.0; 2], 0)]));
        data.extend(materials_chunk(&["m"]));
        // Claims two faces but carries bytes for one.
        let mut payload = Vec::new();
        for w in [0u16, 0, 0] {
            payload.write_u16::<LittleEndian>(w).unwrap();
        }
        payload.push(0);
        payload.push(0);
        payload.write_u32::<LittleEndian>(1).unwrap();
        data.extend(chunk("FACE0000", 12, 2, &payload));

        match decode_bytes(&data) {
            Err(PskError::CorruptChunk { tag, reason, .. }) => {
                assert_eq!(tag, "FACE0000");
                assert_eq!(reason, "truncated payload");
            }
            other => panic!("expected CorruptChunk, got {other:?}"),
        }
    }

    #[test]
    fn partial_tag_slot_is_fatal() {
        let data = b"PNTS0000\0\0".to_vec();
        assert!(matches!(
            decode_bytes(&data),
            Err(PskError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn truncated_header_metadata_is_fatal() {
        // Full tag slot, half of the 12 metadata bytes.
        let mut data = vec![0u8; TAG_LEN];
        data[..8].copy_from_slice(b"PNTS0000");
        data.extend_from_slice(&[0u8; 6]);
        match decode_bytes(&data) {
            Err(PskError::CorruptChunk { tag, reason, .. }) => {
                assert_eq!(tag, "PNTS0000");
                assert_eq!(reason, "truncated chunk header");
            }
            other => panic!("expected CorruptChunk, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_element_size_is_unsupported_encoding() {
        // A hypothetical widened vertex record: recognized tag, layout we
        // cannot parse.
        let data = chunk("PNTS0000", 16, 1, &[0u8; 16]);
        match decode_bytes(&data) {
            Err(PskError::UnsupportedEncoding {
                tag,
                offset,
                element_size,
            }) => {
                assert_eq!(tag, "PNTS0000");
                assert_eq!(offset, 0);
                assert_eq!(element_size, 16);
            }
            other => panic!("expected UnsupportedEncoding, got {other:?}"),
        }
    }

    #[test]
    fn extra_uv_pairs_are_consumed_per_element() {
        let mut payload = Vec::new();
        for c in [0.1f32, 0.2, 0.3, 0.4] {
            payload.write_f32::<LittleEndian>(c).unwrap();
        }
        let mut data = chunk("EXTRAUV0", 8, 2, &payload);
        data.extend(points_chunk(&[[9.0, 9.0, 9.0]]));

        let asset = decode_bytes(&data).unwrap();
        // Both pairs were consumed, leaving the stream aligned on the next
        // header.
        assert_eq!(asset.vertices.len(), 1);
    }

    #[test]
    fn dangling_bone_index_passes_chunks_fails_finalize() {
        let mut data = points_chunk(&[[0.0; 3]]);
        data.extend(skeleton_chunk(&[("root", 0)]));
        data.extend(weights_chunk(&[(1.0, 0, 5)]));

        let raw = PskReader::new(Cursor::new(data.clone()))
            .read_chunks()
            .unwrap();
        assert_eq!(raw.raw_weights.len(), 1);

        assert!(matches!(
            decode_bytes(&data),
            Err(PskError::ReferentialIntegrity {
                entity: "weight",
                field: "bone index",
                ..
            })
        ));
    }

    #[test]
    fn weights_before_skeleton_still_size_rows_from_final_bone_count() {
        let mut data = points_chunk(&[[0.0; 3]]);
        data.extend(weights_chunk(&[(0.5, 0, 1)]));
        data.extend(skeleton_chunk(&[("root", 0), ("spine", 0)]));

        let asset = decode_bytes(&data).unwrap();
        let row = &asset.weights[&0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[1], 0.5);
    }

    #[test]
    fn skeletal_asset_decodes_bones_and_weights() {
        let mut data = points_chunk(&[[0.0; 3], [1.0, 0.0, 0.0]]);
        data.extend(skeleton_chunk(&[("root", 0), ("spine", 0), ("head", 1)]));
        data.extend(weights_chunk(&[(1.0, 0, 0), (0.3, 1, 1), (0.7, 1, 2)]));

        let asset = decode_bytes(&data).unwrap();
        assert!(asset.is_skeletal());
        assert_eq!(asset.bones[2].parent, 1);
        assert_eq!(asset.weights[&1], vec![0.0, 0.3, 0.7]);
        assert_eq!(asset.weights[&0], vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn decode_helper_matches_reader() {
        let data = points_chunk(&[[1.0, 2.0, 3.0]]);
        let a = decode(&data).unwrap();
        let b = decode_bytes(&data).unwrap();
        assert_eq!(a, b);
    }
}
