//! Fixture builders: a textured GLB document and a fake converter script.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use gltf::binary::{Glb, Header};
use gltf::json::validation::{Checked, USize64};
use gltf::json::{self, Index, Root};

/// Writes a GLB with one textured material, a mesh referencing it and a
/// small binary payload — the kind of document the real converter produces.
pub fn write_textured_glb(path: &Path) {
    let root = textured_root();
    let json = serde_json::to_vec(&root).unwrap();
    let bin: Vec<u8> = vec![0u8; 16];

    let mut length = 12 + 8 + align4(json.len());
    length += 8 + align4(bin.len());

    let glb = Glb {
        header: Header {
            magic: *b"glTF",
            version: 2,
            length: length as u32,
        },
        json: Cow::Owned(json),
        bin: Some(Cow::Owned(bin)),
    };

    let mut bytes = Vec::new();
    glb.to_writer(&mut bytes).unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// Writes the fake converter script: mirrors the real CLI
/// (`-i <input> -o <output> --binary`), copies the fixture to the output and
/// fails with exit code 2 for inputs whose name starts with `bad`.
#[cfg(unix)]
pub fn write_fake_converter(dir: &Path, fixture: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-fbx2gltf");
    let body = format!(
        "#!/bin/sh\ncase \"$(basename \"$2\")\" in\n  bad*) echo 'unsupported fbx feature' >&2; exit 2 ;;\nesac\ncp \"{}\" \"$4\"\n",
        fixture.display()
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

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
    material.pbr_metallic_roughness.base_color_texture = Some(json::texture::Info {
        index: Index::new(0),
        tex_coord: 0,
        extensions: Default::default(),
        extras: Default::default(),
    });
    material.normal_texture = Some(json::material::NormalTexture {
        index: Index::new(0),
        scale: 1.0,
        tex_coord: 0,
        extensions: Default::default(),
        extras: Default::default(),
    });
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

fn align4(n: usize) -> usize {
    (n + 3) & !3
}
