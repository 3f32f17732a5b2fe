//! Removal of texture and material sub-resources from a glTF document.
//!
//! Reference removal only: buffer bytes backing embedded images are left in
//! the binary payload and simply become unreferenced.

use gltf::json::Root;

/// Removes all texture and image entries and clears every material texture
/// reference. Samplers are only reachable through textures, so they go too.
pub fn strip_textures(root: &mut Root) {
    for material in &mut root.materials {
        material.pbr_metallic_roughness.base_color_texture = None;
        material.pbr_metallic_roughness.metallic_roughness_texture = None;
        material.normal_texture = None;
        material.occlusion_texture = None;
        material.emissive_texture = None;
    }

    root.textures.clear();
    root.images.clear();
    root.samplers.clear();
}

/// Removes all material entries and clears every mesh primitive material
/// reference.
pub fn strip_materials(root: &mut Root) {
    for mesh in &mut root.meshes {
        for primitive in &mut mesh.primitives {
            primitive.material = None;
        }
    }

    root.materials.clear();
}
