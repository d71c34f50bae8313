//! Shader variant selection.
//!
//! - [`ShaderVariantKey`]: feature set of one variant, its packed index and defines
//! - [`ShaderVariantCache`]: compiled program per variant index

pub mod cache;
pub mod variant_key;

pub use cache::ShaderVariantCache;
pub use variant_key::{
    MAX_SHADERS, ShaderVariantKey, VariantLighting, build_defines, shader_index,
};
