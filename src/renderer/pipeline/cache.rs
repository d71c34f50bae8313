//! Shader Variant Cache
//!
//! Owns the compiled program of every workbench variant used this session.
//! Programs are stored in a fixed table of [`MAX_SHADERS`] slots addressed
//! directly by the variant index, so lookup is a single array access and
//! each variant compiles at most once.
//!
//! The program type `P` is whatever the GPU layer hands back from
//! compilation (a pipeline handle, a shader module, an id…).
//!
//! ```rust,ignore
//! let mut cache = ShaderVariantCache::new();
//! let key = ShaderVariantKey::select(&config, use_textures, is_hair);
//! let program = cache.get_or_compile(key, |defines| gpu.compile(WB_SOURCE, &defines.to_source()));
//! ```

use crate::renderer::pipeline::variant_key::{MAX_SHADERS, ShaderVariantKey};
use crate::resources::shader_defines::ShaderDefines;

pub struct ShaderVariantCache<P> {
    slots: Vec<Option<P>>,
    compiled: usize,
}

impl<P> Default for ShaderVariantCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ShaderVariantCache<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(MAX_SHADERS).collect(),
            compiled: 0,
        }
    }

    /// Program of `key`, if it has been compiled.
    #[inline]
    #[must_use]
    pub fn get(&self, key: ShaderVariantKey) -> Option<&P> {
        self.slots[usize::from(key.encode())].as_ref()
    }

    /// Returns the program of `key`, compiling it from the variant's
    /// defines on first use.
    pub fn get_or_compile<F>(&mut self, key: ShaderVariantKey, compile: F) -> &P
    where
        F: FnOnce(&ShaderDefines) -> P,
    {
        let index = usize::from(key.encode());
        let compiled = &mut self.compiled;

        self.slots[index].get_or_insert_with(|| {
            let defines = key.defines();
            log::debug!(
                "Compiling workbench shader variant {index:#04x} ({} defines)",
                defines.len()
            );
            *compiled += 1;
            compile(&defines)
        })
    }

    /// Number of compiled variants.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled == 0
    }

    /// Drops every compiled program (e.g. after a shader source reload).
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.compiled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::shading::ShadingConfig;

    #[test]
    fn test_compiles_once_per_variant() {
        let mut cache = ShaderVariantCache::new();
        let key = ShaderVariantKey::select(&ShadingConfig::default(), false, false);
        let mut calls = 0;

        for _ in 0..3 {
            let program = *cache.get_or_compile(key, |defines| {
                calls += 1;
                defines.compute_hash()
            });
            assert_eq!(program, key.defines().compute_hash());
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_forgets_programs() {
        let mut cache = ShaderVariantCache::new();
        let key = ShaderVariantKey::select(&ShadingConfig::default(), true, true);
        cache.get_or_compile(key, |_| 7_u32);

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get(key).is_none());
    }
}
