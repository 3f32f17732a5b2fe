//! GLB fixture builders shared by unit tests.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use gltf::binary::{Glb, Header};
use gltf::json::validation::{Checked, USize64};
use gltf::json::{self, Index, Root};

/// A document with one textured material, a mesh primitive referencing it,
/// plus the sampler/texture/image chain behind the material.
pub fn textured_root() -> Root {
    let mut root = Root::default();

    root.buffers.push(json::Buffer {
        byte_length: USize64(16),
        name: None,
        uri: None,
        extensions: Default::default(),
        extras: Default::default(),
    });
    root.buffer_views.push(json::buffer::View {
        buffer: Index::new(0),
        byte_length: USize64(16),
        byte_offset: None,
        byte_stride: None,
        name: None,
        target: None,
        extensions: Default::default(),
        extras: Default::default(),
    });
    root.images.push(json::Image {
        buffer_view: Some(Index::new(0)),
        mime_type: Some(json::image::MimeType("image/png".to_string())),
        name: None,
        uri: None,
        extensions: Default::default(),
        extras: Default::default(),
    });
    root.samplers.push(json::texture::Sampler::default());
    root.textures.push(json::Texture {
        name: None,
        sampler: Some(Index::new(0)),
        source: Index::new(0),
        extensions: Default::default(),
        extras: Default::default(),
    });

    let mut material = json::Material::default();
    material.pbr_metallic_roughness.base_color_texture = Some(texture_info());
    material.pbr_metallic_roughness.metallic_roughness_texture = Some(texture_info());
    material.normal_texture = Some(json::material::NormalTexture {
        index: Index::new(0),
        scale: 1.0,
        tex_coord: 0,
        extensions: Default::default(),
        extras: Default::default(),
    });
    material.occlusion_texture = Some(json::material::OcclusionTexture {
        index: Index::new(0),
        strength: json::material::StrengthFactor(1.0),
        tex_coord: 0,
        extensions: Default::default(),
        extras: Default::default(),
    });
    material.emissive_texture = Some(texture_info());
    root.materials.push(material);

    root.meshes.push(json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        primitives: vec![json::mesh::Primitive {
            attributes: Default::default(),
            extensions: Default::default(),
            extras: Default::default(),
            indices: None,
            material: Some(Index::new(0)),
            mode: Checked::Valid(json::mesh::Mode::Triangles),
            targets: None,
        }],
        weights: None,
    });

    root
}

fn texture_info() -> json::texture::Info {
    json::texture::Info {
        index: Index::new(0),
        tex_coord: 0,
        extensions: Default::default(),
        extras: Default::default(),
    }
}

/// Encodes a document (and optional binary payload) as GLB bytes.
pub fn glb_bytes(root: &Root, bin: Option<Vec<u8>>) -> Vec<u8> {
    let json = serde_json::to_vec(root).unwrap();
    encode_glb(&json, bin)
}

pub fn write_glb(path: &Path, root: &Root, bin: Option<Vec<u8>>) {
    fs::write(path, glb_bytes(root, bin)).unwrap();
}

/// Writes a structurally valid container whose JSON chunk need not be a
/// valid glTF document.
pub fn write_glb_raw_json(path: &Path, json: &[u8]) {
    fs::write(path, encode_glb(json, None)).unwrap();
}

fn encode_glb(json: &[u8], bin: Option<Vec<u8>>) -> Vec<u8> {
    let mut length = 12 + 8 + align4(json.len());
    if let Some(bin) = &bin {
        length += 8 + align4(bin.len());
    }

    let glb = Glb {
        header: Header {
            magic: *b"glTF",
            version: 2,
            length: length as u32,
        },
        json: Cow::Borrowed(json),
        bin: bin.as_deref().map(Cow::Borrowed),
    };

    let mut bytes = Vec::new();
    glb.to_writer(&mut bytes).unwrap();
    bytes
}

fn align4(n: usize) -> usize {
    (n + 3) & !3
}
