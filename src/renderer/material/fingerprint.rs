//! Material fingerprints for batching.
//!
//! A fingerprint buckets resolved materials that can share one shading
//! group. Only the fields that separate render passes cheaply contribute:
//! diffuse color, object id, specular color, roughness, the ghost flag and
//! the texture identity. `base_color`, `metallic` and texture contents are
//! left out on purpose, so two materials differing only there merge.
//!
//! Contributions are combined by wrapping addition rather than re-mixed.
//! Collisions are tolerated; the fingerprint is not an identity.

use glam::Vec3;

use crate::resources::material::ResolvedMaterial;
use crate::utils::hash;

/// Fixed-point steps per unit used to quantize color channels and roughness.
pub const QUANTIZATION_STEPS: f32 = 512.0;

#[inline]
fn quantize(value: f32) -> u32 {
    // Float-to-int `as` saturates, so out-of-range input clamps to [0, u32::MAX].
    (value * QUANTIZATION_STEPS).round() as u32
}

#[inline]
fn quantize_color(color: Vec3) -> [u32; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// 32-bit batching key of `material` drawn as ghost or not.
#[must_use]
pub fn material_fingerprint(material: &ResolvedMaterial, is_ghost: bool) -> u32 {
    let [r, g, b] = quantize_color(material.diffuse_color);
    let mut result = hash::uint_hash_v4([r, g, b, material.object_id]);

    let [r, g, b] = quantize_color(material.specular_color);
    result = result.wrapping_add(hash::uint_hash_v4([r, g, b, quantize(material.roughness)]));

    result = result.wrapping_add(hash::uint_hash(u32::from(is_ghost)));

    if let Some(texture) = material.texture_ref {
        result = result.wrapping_add(hash::ptr_hash(texture.handle()));
    }

    result
}
