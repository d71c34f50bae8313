//! Material data consumed and produced by the workbench material core.
//!
//! [`SourceMaterial`] is the artist-facing material as stored in the scene.
//! [`ResolvedMaterial`] is the per-draw value the renderer actually shades
//! with, produced by [`resolve_material`](crate::renderer::material::resolve_material).

use glam::Vec3;

/// Diffuse/base color used when nothing else applies.
pub const DEFAULT_BASE_COLOR: Vec3 = Vec3::splat(0.8);

/// Dielectric: 5% reflective.
pub const DIELECTRIC_SPECULAR: f32 = 0.05;

/// Resolved roughness when no material drives it (`sqrt(0.25)`).
pub const DEFAULT_ROUGHNESS: f32 = 0.5;

/// Opaque identity of an image/texture owned by the host application.
///
/// Only the identity matters here: two references are the same texture iff
/// their handles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRef(u64);

impl TextureRef {
    #[inline]
    #[must_use]
    pub const fn new(handle: u64) -> Self {
        Self(handle)
    }

    #[inline]
    #[must_use]
    pub const fn handle(self) -> u64 {
        self.0
    }
}

/// Surface parameters of a scene material. Values are expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMaterial {
    /// Base reflectance color.
    pub color: Vec3,
    pub metallic: f32,
    /// Linear roughness, before the perceptual remap.
    pub roughness: f32,
}

impl SourceMaterial {
    #[must_use]
    pub fn new(color: Vec3, metallic: f32, roughness: f32) -> Self {
        Self {
            color,
            metallic,
            roughness,
        }
    }
}

impl Default for SourceMaterial {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_COLOR, 0.0, 0.25)
    }
}

/// Shading parameters of one object/material pair for one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMaterial {
    pub base_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub metallic: f32,
    /// Perceptual ("disney") roughness.
    pub roughness: f32,
    pub object_id: u32,
    pub texture_ref: Option<TextureRef>,
}

impl Default for ResolvedMaterial {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            diffuse_color: DEFAULT_BASE_COLOR,
            specular_color: Vec3::splat(DIELECTRIC_SPECULAR),
            metallic: 0.0,
            roughness: DEFAULT_ROUGHNESS,
            object_id: 0,
            texture_ref: None,
        }
    }
}

impl ResolvedMaterial {
    #[must_use]
    pub fn with_texture(mut self, texture: TextureRef) -> Self {
        self.texture_ref = Some(texture);
        self
    }
}
