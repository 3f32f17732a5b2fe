//! GLB container parsing and re-serialization.
//!
//! A GLB file is a 12-byte header followed by a JSON chunk and an optional
//! binary chunk. The JSON chunk is the glTF document; the binary chunk holds
//! buffer data. Editing happens on the parsed document, the binary payload is
//! carried through untouched.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use gltf::binary::{Glb, Header};
use gltf::json::Root;

use crate::error::PostProcessError;

const HEADER_SIZE: usize = 12;
const CHUNK_HEADER_SIZE: usize = 8;

/// A converter-produced GLB, parsed into its document and binary payload.
#[derive(Debug)]
pub struct GlbDocument {
    pub root: Root,
    pub bin: Option<Vec<u8>>,
}

impl GlbDocument {
    /// Reads and parses a GLB file.
    pub fn open(path: &Path) -> Result<Self, PostProcessError> {
        let bytes = fs::read(path).map_err(|e| PostProcessError::ReadGlb {
            path: path.to_path_buf(),
            source: e,
        })?;

        let glb = Glb::from_slice(&bytes).map_err(|e| PostProcessError::ParseContainer {
            path: path.to_path_buf(),
            source: e,
        })?;

        let root: Root =
            serde_json::from_slice(&glb.json).map_err(|e| PostProcessError::ParseDocument {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            root,
            bin: glb.bin.map(|b| b.into_owned()),
        })
    }

    /// Serializes the document back into a GLB at `path`, overwriting it.
    pub fn save(&self, path: &Path) -> Result<(), PostProcessError> {
        let json = serde_json::to_vec(&self.root).map_err(PostProcessError::SerializeDocument)?;

        let glb = Glb {
            header: Header {
                magic: *b"glTF",
                version: 2,
                length: container_length(json.len(), self.bin.as_ref().map(Vec::len)),
            },
            json: Cow::Owned(json),
            bin: self.bin.as_deref().map(Cow::Borrowed),
        };

        let mut bytes = Vec::new();
        glb.to_writer(&mut bytes)
            .map_err(PostProcessError::EncodeContainer)?;

        fs::write(path, bytes).map_err(|e| PostProcessError::WriteGlb {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Total container length: header plus both chunks, each padded to four bytes.
fn container_length(json_len: usize, bin_len: Option<usize>) -> u32 {
    let mut length = HEADER_SIZE + CHUNK_HEADER_SIZE + align4(json_len);
    if let Some(bin_len) = bin_len {
        length += CHUNK_HEADER_SIZE + align4(bin_len);
    }
    length as u32
}

fn align4(n: usize) -> usize {
    (n + 3) & !3
}
