//! Material uniform bindings.
//!
//! Decides which uniforms a draw call needs for a resolved material and
//! pushes them into the host renderer's shading group. The decision is
//! kept separate from the push so it can be inspected without a GPU.
//!
//! At most three bindings are produced, always in this order:
//! 1. `image` texture **or** `materialDiffuseColor`
//! 2. `materialMetallic` **or** `materialSpecularColor` (specular highlight only)
//! 3. `materialRoughness` (specular highlight only)

use glam::Vec3;
use smallvec::SmallVec;

use crate::resources::material::{ResolvedMaterial, TextureRef};
use crate::resources::object::DisplayType;
use crate::resources::shading::{ColorType, ShadingConfig};

pub const UNIFORM_IMAGE: &str = "image";
pub const UNIFORM_DIFFUSE_COLOR: &str = "materialDiffuseColor";
pub const UNIFORM_METALLIC: &str = "materialMetallic";
pub const UNIFORM_SPECULAR_COLOR: &str = "materialSpecularColor";
pub const UNIFORM_ROUGHNESS: &str = "materialRoughness";

/// Value bound to a named uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Vec3(Vec3),
    Float(f32),
    Texture(TextureRef),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBinding {
    pub name: &'static str,
    pub value: UniformValue,
}

impl UniformBinding {
    #[inline]
    fn new(name: &'static str, value: UniformValue) -> Self {
        Self { name, value }
    }
}

pub type UniformBindings = SmallVec<[UniformBinding; 3]>;

/// Receiver of named uniform bindings, implemented by the renderer's
/// shading group (draw-call state container).
pub trait ShadingGroup {
    fn uniform_vec3(&mut self, name: &'static str, value: Vec3);
    fn uniform_float(&mut self, name: &'static str, value: f32);
    fn uniform_texture(&mut self, name: &'static str, texture: TextureRef);
}

/// Uniforms to bind when drawing `material` on an object shown at
/// `display_type`.
///
/// `use_metallic` selects the metallic workflow: base color plus a metallic
/// scalar instead of diffuse color plus a specular color.
#[must_use]
pub fn describe_bindings(
    config: &ShadingConfig,
    material: &ResolvedMaterial,
    display_type: DisplayType,
    use_metallic: bool,
) -> UniformBindings {
    let mut bindings = UniformBindings::new();

    match material.texture_ref {
        Some(texture)
            if config.effective_color_type(Some(&texture), display_type)
                == ColorType::Texture =>
        {
            bindings.push(UniformBinding::new(
                UNIFORM_IMAGE,
                UniformValue::Texture(texture),
            ));
        }
        _ => {
            let color = if use_metallic {
                material.base_color
            } else {
                material.diffuse_color
            };
            bindings.push(UniformBinding::new(
                UNIFORM_DIFFUSE_COLOR,
                UniformValue::Vec3(color),
            ));
        }
    }

    if config.specular_highlight_enabled() {
        if use_metallic {
            bindings.push(UniformBinding::new(
                UNIFORM_METALLIC,
                UniformValue::Float(material.metallic),
            ));
        } else {
            bindings.push(UniformBinding::new(
                UNIFORM_SPECULAR_COLOR,
                UniformValue::Vec3(material.specular_color),
            ));
        }
        bindings.push(UniformBinding::new(
            UNIFORM_ROUGHNESS,
            UniformValue::Float(material.roughness),
        ));
    }

    bindings
}

/// Pushes `bindings` into `group` in order.
pub fn apply_bindings<G: ShadingGroup + ?Sized>(group: &mut G, bindings: &[UniformBinding]) {
    for binding in bindings {
        match binding.value {
            UniformValue::Vec3(v) => group.uniform_vec3(binding.name, v),
            UniformValue::Float(f) => group.uniform_float(binding.name, f),
            UniformValue::Texture(t) => group.uniform_texture(binding.name, t),
        }
    }
}

/// Describes and applies the material uniforms in one step.
pub fn bind_material_uniforms<G: ShadingGroup + ?Sized>(
    group: &mut G,
    config: &ShadingConfig,
    material: &ResolvedMaterial,
    display_type: DisplayType,
    use_metallic: bool,
) {
    let bindings = describe_bindings(config, material, display_type, use_metallic);
    apply_bindings(group, &bindings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::shading::ShadingFlags;

    #[test]
    fn test_plain_material_binds_single_color() {
        let bindings = describe_bindings(
            &ShadingConfig::default(),
            &ResolvedMaterial::default(),
            DisplayType::Textured,
            false,
        );

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name, UNIFORM_DIFFUSE_COLOR);
    }

    #[test]
    fn test_specular_adds_two_bindings() {
        let config = ShadingConfig {
            flags: ShadingFlags::SPECULAR_HIGHLIGHT,
            ..Default::default()
        };
        let names: Vec<_> = describe_bindings(
            &config,
            &ResolvedMaterial::default(),
            DisplayType::Textured,
            true,
        )
        .iter()
        .map(|b| b.name)
        .collect();

        assert_eq!(
            names,
            [UNIFORM_DIFFUSE_COLOR, UNIFORM_METALLIC, UNIFORM_ROUGHNESS]
        );
    }
}
