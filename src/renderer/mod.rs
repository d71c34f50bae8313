//! Workbench material pipeline.
//!
//! Per draw, leaf to root:
//!
//! 1. [`material::resolve_material`] resolves colors, metallic and roughness
//! 2. [`material::material_fingerprint`] buckets the result for batching
//! 3. [`pipeline::ShaderVariantKey`] picks the shader variant from shading state
//! 4. [`binding::describe_bindings`] lists the uniforms the draw needs
//!
//! Every step is a pure function over caller-owned values and may run on
//! any number of threads as long as the inputs are not mutated meanwhile.

pub mod binding;
pub mod material;
pub mod pipeline;

pub use binding::{
    ShadingGroup, UniformBinding, UniformBindings, UniformValue, apply_bindings,
    bind_material_uniforms, describe_bindings,
};
pub use material::{MaterialBatcher, material_fingerprint, resolve_material};
pub use pipeline::{ShaderVariantCache, ShaderVariantKey, VariantLighting};
