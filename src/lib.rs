//! Workbench viewport shading: material parameter resolution and shader
//! variant selection for a real-time viewport renderer.
//!
//! ```rust,ignore
//! use workbench::prelude::*;
//!
//! let config = ShadingConfig::from_json_str(settings_json)?;
//! let object = ObjectInfo::new("OBCube").with_object_id(7);
//!
//! let material = resolve_material(&config, &object, Some(&source), config.specular_highlight_enabled());
//! let batch = batcher.insert(&material, false);
//!
//! let key = ShaderVariantKey::select(&config, material.texture_ref.is_some(), false);
//! let program = variants.get_or_compile(key, |defines| gpu.compile(&defines.to_source()));
//!
//! bind_material_uniforms(&mut group, &config, &material, object.display_type, false);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod converter;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod utils;

pub use errors::{Result, WorkbenchError};
pub use renderer::{
    MaterialBatcher, ShaderVariantCache, ShaderVariantKey, ShadingGroup, UniformBinding,
    UniformValue, bind_material_uniforms, describe_bindings, material_fingerprint,
    resolve_material,
};
pub use resources::{
    CavityType, ColorType, DisplayType, Lighting, ObjectInfo, ResolvedMaterial, ShaderDefines,
    ShadingConfig, ShadingFlags, SourceMaterial, TextureRef,
};
pub use utils::interner;

pub mod prelude {
    pub use crate::converter::{LibLoadOptions, LibLoadStatus, MergeQueue, SceneConverter};
    pub use crate::renderer::pipeline::{build_defines, shader_index};
    pub use crate::{
        CavityType, ColorType, DisplayType, Lighting, MaterialBatcher, ObjectInfo,
        ResolvedMaterial, ShaderDefines, ShaderVariantCache, ShaderVariantKey, ShadingConfig,
        ShadingFlags, ShadingGroup, SourceMaterial, TextureRef, bind_material_uniforms,
        describe_bindings, material_fingerprint, resolve_material,
    };
}
