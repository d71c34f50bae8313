//! Color resolution: turns shading state plus an optional scene material
//! into the [`ResolvedMaterial`] a draw call shades with.

use glam::Vec3;

use crate::resources::material::{
    DEFAULT_BASE_COLOR, DIELECTRIC_SPECULAR, DEFAULT_ROUGHNESS, ResolvedMaterial, SourceMaterial,
};
use crate::resources::object::ObjectInfo;
use crate::resources::shading::{ColorType, ShadingConfig};
use crate::utils::hash;

/// Saturation of random object colors.
pub const RANDOM_COLOR_SATURATION: f32 = 0.5;
/// Value (brightness) of random object colors.
pub const RANDOM_COLOR_VALUE: f32 = 0.8;

/// Resolves the shading parameters of `object` drawn with `material`.
///
/// Total over its inputs: a missing material keeps the defaults (0.8 grey,
/// 5% dielectric specular, metallic 0, roughness 0.5).
///
/// Texture color resolves like material color; the image itself is carried
/// in [`ResolvedMaterial::texture_ref`] when the object can show it, and
/// the binder decides whether to sample it.
#[must_use]
pub fn resolve_material(
    config: &ShadingConfig,
    object: &ObjectInfo,
    material: Option<&SourceMaterial>,
    specular_enabled: bool,
) -> ResolvedMaterial {
    let color_type = match config.color_type {
        ColorType::Texture => ColorType::Material,
        other => other,
    };

    let mut data = ResolvedMaterial {
        object_id: object.object_id,
        ..ResolvedMaterial::default()
    };

    match color_type {
        ColorType::Single => {
            data.diffuse_color = config.single_color;
            data.base_color = data.diffuse_color;
        }
        ColorType::Random => {
            data.diffuse_color = random_object_color(object);
            data.base_color = data.diffuse_color;
        }
        ColorType::Material | ColorType::Texture => {
            if let Some(mat) = material {
                apply_material_color(&mut data, mat, specular_enabled);
            }
        }
    }

    if config.effective_color_type(object.image.as_ref(), object.display_type) == ColorType::Texture {
        data.texture_ref = object.image;
    }

    data
}

fn apply_material_color(data: &mut ResolvedMaterial, mat: &SourceMaterial, specular_enabled: bool) {
    data.base_color = mat.color;
    if specular_enabled {
        let metallic = mat.metallic;
        data.diffuse_color = mat.color * (1.0 - metallic);
        data.specular_color = mat.color * metallic + Vec3::splat(DIELECTRIC_SPECULAR * (1.0 - metallic));
        data.metallic = metallic;
        // Remap to disney roughness.
        data.roughness = mat.roughness.sqrt();
    } else {
        data.diffuse_color = mat.color;
    }
}

/// Stable per-object hue. Linked objects also mix in their library name so
/// same-named objects from different files differ.
#[must_use]
pub fn random_object_color(object: &ObjectInfo) -> Vec3 {
    let mut h = hash::str_hash(&object.name);
    if let Some(library) = &object.library {
        h = h.wrapping_mul(13) ^ hash::str_hash(library);
    }

    let hue = hash::hash_int_01(h);
    hsv_to_rgb(Vec3::new(hue, RANDOM_COLOR_SATURATION, RANDOM_COLOR_VALUE))
}

/// HSV (all components in `[0, 1]`) to RGB.
#[must_use]
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let (h, s, v) = (hsv.x, hsv.y, hsv.z);
    let n = Vec3::new(
        (h * 6.0 - 3.0).abs() - 1.0,
        2.0 - (h * 6.0 - 2.0).abs(),
        2.0 - (h * 6.0 - 4.0).abs(),
    )
    .clamp(Vec3::ZERO, Vec3::ONE);

    ((n - Vec3::ONE) * s + Vec3::ONE) * v
}
