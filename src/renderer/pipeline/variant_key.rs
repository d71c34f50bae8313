//! Shader variant keys.
//!
//! A workbench shader program is picked by a handful of discrete features.
//! [`ShaderVariantKey`] holds them as named fields; [`encode`] packs them
//! into the compact index used as a cache key, and [`defines`] produces the
//! `#define` set actually fed to the compiler. Both come from the same key,
//! so the index and the compiled source cannot disagree.
//!
//! # Index layout
//!
//! | Bits | Field                                         |
//! |------|-----------------------------------------------|
//! | 0    | texture color                                 |
//! | 1-2  | lighting: flat 0, studio 1, matcap 2, specular 3 |
//! | 3    | shadow                                        |
//! | 4    | cavity                                        |
//! | 5    | object outline                                |
//! | 6    | hair                                          |
//!
//! Adding a field means widening the index type and [`MAX_SHADERS`] together.
//!
//! [`encode`]: ShaderVariantKey::encode
//! [`defines`]: ShaderVariantKey::defines

use crate::errors::{Result, WorkbenchError};
use crate::resources::shader_defines::ShaderDefines;
use crate::resources::shading::{Lighting, NORMAL_ENCODING_ENABLED, ShadingConfig};

/// Number of distinct variant indices (7 bits).
pub const MAX_SHADERS: usize = 1 << 7;

const TEXTURE_BIT: u8 = 1 << 0;
const LIGHTING_SHIFT: u8 = 1;
const LIGHTING_MASK: u8 = 0b11 << LIGHTING_SHIFT;
const SHADOW_BIT: u8 = 1 << 3;
const CAVITY_BIT: u8 = 1 << 4;
const OUTLINE_BIT: u8 = 1 << 5;
const HAIR_BIT: u8 = 1 << 6;

const _: () = assert!(MAX_SHADERS == (HAIR_BIT as usize) << 1);

/// Lighting field of a variant. `Specular` is studio lighting with
/// specular highlights and overrides whatever lighting mode is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VariantLighting {
    Flat = 0,
    Studio = 1,
    Matcap = 2,
    Specular = 3,
}

impl From<Lighting> for VariantLighting {
    fn from(lighting: Lighting) -> Self {
        match lighting {
            Lighting::Flat => Self::Flat,
            Lighting::Studio => Self::Studio,
            Lighting::Matcap => Self::Matcap,
        }
    }
}

impl VariantLighting {
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Flat,
            1 => Self::Studio,
            2 => Self::Matcap,
            _ => Self::Specular,
        }
    }
}

/// Feature combination identifying exactly one compiled shader variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderVariantKey {
    pub use_textures: bool,
    pub lighting: VariantLighting,
    pub shadow: bool,
    pub cavity: bool,
    pub outline: bool,
    pub hair: bool,
}

impl ShaderVariantKey {
    /// Selects the variant for the current shading state.
    #[must_use]
    pub fn select(config: &ShadingConfig, use_textures: bool, is_hair: bool) -> Self {
        let lighting = if config.specular_highlight_enabled() {
            VariantLighting::Specular
        } else {
            config.lighting.into()
        };

        Self {
            use_textures,
            lighting,
            shadow: config.shadow_enabled(),
            cavity: config.ssao_enabled() || config.curvature_enabled(),
            outline: config.outline_enabled(),
            hair: is_hair,
        }
    }

    /// Packs the key into its variant index (always `< MAX_SHADERS`).
    #[must_use]
    pub fn encode(self) -> u8 {
        let mut index = (self.lighting as u8) << LIGHTING_SHIFT;
        if self.use_textures {
            index |= TEXTURE_BIT;
        }
        if self.shadow {
            index |= SHADOW_BIT;
        }
        if self.cavity {
            index |= CAVITY_BIT;
        }
        if self.outline {
            index |= OUTLINE_BIT;
        }
        if self.hair {
            index |= HAIR_BIT;
        }
        index
    }

    /// Unpacks a variant index.
    pub fn decode(index: u8) -> Result<Self> {
        if usize::from(index) >= MAX_SHADERS {
            return Err(WorkbenchError::VariantIndexOutOfRange {
                index: index.into(),
                max: MAX_SHADERS,
            });
        }

        Ok(Self {
            use_textures: index & TEXTURE_BIT != 0,
            lighting: VariantLighting::from_bits((index & LIGHTING_MASK) >> LIGHTING_SHIFT),
            shadow: index & SHADOW_BIT != 0,
            cavity: index & CAVITY_BIT != 0,
            outline: index & OUTLINE_BIT != 0,
            hair: index & HAIR_BIT != 0,
        })
    }

    /// Whether the normal G-buffer pass is needed by this variant.
    #[must_use]
    pub fn normal_viewport_pass(self) -> bool {
        self.lighting != VariantLighting::Flat || self.shadow || self.cavity
    }

    /// Compiler defines of this variant.
    #[must_use]
    pub fn defines(self) -> ShaderDefines {
        let mut defines = ShaderDefines::with_capacity(8);

        defines.enable_if(self.outline, "V3D_SHADING_OBJECT_OUTLINE");
        defines.enable_if(self.shadow, "V3D_SHADING_SHADOW");
        defines.enable_if(self.cavity, "WB_CAVITY");
        match self.lighting {
            VariantLighting::Specular => {
                defines.enable("V3D_SHADING_SPECULAR_HIGHLIGHT");
                defines.enable("V3D_LIGHTING_STUDIO");
            }
            VariantLighting::Studio => defines.enable("V3D_LIGHTING_STUDIO"),
            VariantLighting::Flat => defines.enable("V3D_LIGHTING_FLAT"),
            VariantLighting::Matcap => defines.enable("V3D_LIGHTING_MATCAP"),
        }
        defines.enable_if(self.normal_viewport_pass(), "NORMAL_VIEWPORT_PASS_ENABLED");
        defines.enable_if(self.use_textures, "V3D_SHADING_TEXTURE_COLOR");
        defines.enable_if(NORMAL_ENCODING_ENABLED, "WORKBENCH_ENCODE_NORMALS");
        defines.enable_if(self.hair, "HAIR_SHADER");

        defines
    }
}

/// Variant index for the current shading state.
#[must_use]
pub fn shader_index(config: &ShadingConfig, use_textures: bool, is_hair: bool) -> u8 {
    ShaderVariantKey::select(config, use_textures, is_hair).encode()
}

/// Compiler defines for the current shading state.
#[must_use]
pub fn build_defines(config: &ShadingConfig, use_textures: bool, is_hair: bool) -> ShaderDefines {
    ShaderVariantKey::select(config, use_textures, is_hair).defines()
}
