//! Viewport Shading Configuration
//!
//! [`ShadingConfig`] is the per-session shading state the renderer owns and
//! hands to every resolver call by shared reference. Nothing in this crate
//! keeps it in a global; callers capture it once at the top of a frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use workbench::{ColorType, Lighting, ShadingConfig, ShadingFlags};
//!
//! let config = ShadingConfig {
//!     color_type: ColorType::Random,
//!     lighting: Lighting::Studio,
//!     flags: ShadingFlags::SHADOW | ShadingFlags::SPECULAR_HIGHLIGHT,
//!     ..Default::default()
//! };
//!
//! let from_disk = ShadingConfig::from_json_str(r#"{ "color_type": "Single" }"#)?;
//! ```

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkbenchError};
use crate::resources::material::TextureRef;
use crate::resources::object::DisplayType;

/// `WORKBENCH_ENCODE_NORMALS`: fixed at build time by the `encode-normals` feature.
pub const NORMAL_ENCODING_ENABLED: bool = cfg!(feature = "encode-normals");

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Source of an object's base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorType {
    /// Color from the object's material (falls back to defaults without one).
    #[default]
    Material,
    /// Per-object random hue derived from the object (and library) name.
    Random,
    /// One flat color for everything.
    Single,
    /// Color sampled from the material's image; degrades to
    /// [`Material`](Self::Material) when no texture can be used.
    Texture,
}

impl TryFrom<u8> for ColorType {
    type Error = WorkbenchError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Material),
            1 => Ok(Self::Random),
            2 => Ok(Self::Single),
            3 => Ok(Self::Texture),
            other => Err(WorkbenchError::InvalidColorType(other)),
        }
    }
}

/// Lighting sub-mode. Discriminants are the values packed into shader
/// variant keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Lighting {
    Flat = 0,
    #[default]
    Studio = 1,
    Matcap = 2,
}

impl TryFrom<u8> for Lighting {
    type Error = WorkbenchError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Flat),
            1 => Ok(Self::Studio),
            2 => Ok(Self::Matcap),
            other => Err(WorkbenchError::InvalidLighting(other)),
        }
    }
}

/// Which cavity technique runs when [`ShadingFlags::CAVITY`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CavityType {
    /// World-space ambient occlusion.
    #[default]
    Ssao,
    /// Screen-space curvature ridges/valleys.
    Curvature,
    Both,
}

impl TryFrom<u8> for CavityType {
    type Error = WorkbenchError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Ssao),
            1 => Ok(Self::Curvature),
            2 => Ok(Self::Both),
            other => Err(WorkbenchError::InvalidCavityType(other)),
        }
    }
}

bitflags! {
    /// Boolean shading features toggled in the viewport.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ShadingFlags: u32 {
        const OBJECT_OUTLINE     = 1 << 0;
        const SHADOW             = 1 << 1;
        const CAVITY             = 1 << 2;
        const SPECULAR_HIGHLIGHT = 1 << 3;
    }
}

// ---------------------------------------------------------------------------
// ShadingConfig
// ---------------------------------------------------------------------------

/// Session-scoped viewport shading state. Read-only to the material core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub color_type: ColorType,
    /// Flat color used by [`ColorType::Single`].
    pub single_color: Vec3,
    pub flags: ShadingFlags,
    pub lighting: Lighting,
    pub cavity_type: CavityType,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            color_type: ColorType::Material,
            single_color: Vec3::splat(0.8),
            flags: ShadingFlags::empty(),
            lighting: Lighting::Studio,
            cavity_type: CavityType::Ssao,
        }
    }
}

impl ShadingConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    #[must_use]
    pub fn studio_light_enabled(&self) -> bool {
        self.lighting == Lighting::Studio
    }

    #[inline]
    #[must_use]
    pub fn matcap_enabled(&self) -> bool {
        self.lighting == Lighting::Matcap
    }

    #[inline]
    #[must_use]
    pub fn flat_enabled(&self) -> bool {
        self.lighting == Lighting::Flat
    }

    #[inline]
    #[must_use]
    pub fn shadow_enabled(&self) -> bool {
        self.flags.contains(ShadingFlags::SHADOW)
    }

    #[inline]
    #[must_use]
    pub fn outline_enabled(&self) -> bool {
        self.flags.contains(ShadingFlags::OBJECT_OUTLINE)
    }

    #[inline]
    #[must_use]
    pub fn cavity_enabled(&self) -> bool {
        self.flags.contains(ShadingFlags::CAVITY)
    }

    #[must_use]
    pub fn ssao_enabled(&self) -> bool {
        self.cavity_enabled() && matches!(self.cavity_type, CavityType::Ssao | CavityType::Both)
    }

    #[must_use]
    pub fn curvature_enabled(&self) -> bool {
        self.cavity_enabled()
            && matches!(self.cavity_type, CavityType::Curvature | CavityType::Both)
    }

    /// Specular highlighting follows the flag alone; it implies studio
    /// lighting in the selected shader variant.
    #[inline]
    #[must_use]
    pub fn specular_highlight_enabled(&self) -> bool {
        self.flags.contains(ShadingFlags::SPECULAR_HIGHLIGHT)
    }

    /// Whether the normal G-buffer pass is needed by any enabled feature.
    #[must_use]
    pub fn normal_viewport_pass_enabled(&self) -> bool {
        self.matcap_enabled()
            || self.studio_light_enabled()
            || self.shadow_enabled()
            || self.ssao_enabled()
            || self.curvature_enabled()
            || self.specular_highlight_enabled()
    }

    /// Color type actually used to draw an object shown at `display_type`.
    ///
    /// Texture color needs both an image and a display type that shows
    /// textures. Objects drawn below textured detail always use material
    /// color.
    #[must_use]
    pub fn effective_color_type(
        &self,
        texture: Option<&TextureRef>,
        display_type: DisplayType,
    ) -> ColorType {
        match self.color_type {
            ColorType::Texture if texture.is_none() => ColorType::Material,
            _ if !display_type.shows_textures() => ColorType::Material,
            other => other,
        }
    }
}
