//! Core data definitions, independent of any GPU backend:
//! - Shading configuration
//! - Source and resolved materials
//! - Object identity
//! - Shader define sets

pub mod material;
pub mod object;
pub mod shader_defines;
pub mod shading;

pub use material::{ResolvedMaterial, SourceMaterial, TextureRef};
pub use object::{DisplayType, ObjectInfo};
pub use shader_defines::ShaderDefines;
pub use shading::{CavityType, ColorType, Lighting, ShadingConfig, ShadingFlags};
