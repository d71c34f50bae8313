//! Shader Macro Definition Set
//!
//! The textual input to shader compilation. Every workbench variant is a
//! set of `#define` lines; [`ShaderDefines`] keeps them as interned
//! [`Symbol`] pairs so two sets compare and hash as integers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use workbench::resources::ShaderDefines;
//!
//! let mut defines = ShaderDefines::new();
//! defines.enable("V3D_SHADING_SHADOW");
//! defines.set("MAX_SHADOW_CASCADES", "4");
//!
//! let header = defines.to_source();
//! // "#define MAX_SHADOW_CASCADES 4\n#define V3D_SHADING_SHADOW\n"
//! ```

use std::hash::{Hash, Hasher};

use crate::utils::interner::{self, Symbol};

/// Ordered set of shader macro definitions.
///
/// Entries are kept sorted by key symbol, so identical sets produce
/// identical hashes regardless of insertion order. A flag define (no value)
/// stores the empty string as its value.
#[derive(Debug, Clone, Default)]
pub struct ShaderDefines {
    defines: Vec<(Symbol, Symbol)>,
}

impl ShaderDefines {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            defines: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            defines: Vec::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.set_symbol(interner::intern(key), interner::intern(value));
    }

    /// Adds a value-less define (`#define KEY`).
    pub fn enable(&mut self, key: &str) {
        self.set(key, "");
    }

    /// Adds `key` only when `condition` holds.
    pub fn enable_if(&mut self, condition: bool, key: &str) {
        if condition {
            self.enable(key);
        }
    }

    #[inline]
    pub fn set_symbol(&mut self, key: Symbol, value: Symbol) {
        match self.defines.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(idx) => self.defines[idx].1 = value,
            Err(idx) => self.defines.insert(idx, (key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let Some(key_sym) = interner::get(key) else {
            return false;
        };
        match self.defines.binary_search_by_key(&key_sym, |&(k, _)| k) {
            Ok(idx) => {
                self.defines.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        interner::get(key).is_some_and(|key_sym| {
            self.defines
                .binary_search_by_key(&key_sym, |&(k, _)| k)
                .is_ok()
        })
    }

    /// Value of `key`; flag defines yield `Some("")`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let key_sym = interner::get(key)?;
        self.defines
            .binary_search_by_key(&key_sym, |&(k, _)| k)
            .ok()
            .map(|idx| interner::resolve(self.defines[idx].1))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }

    /// Define names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .defines
            .iter()
            .map(|&(k, _)| interner::resolve(k))
            .collect();
        names.sort_unstable();
        names
    }

    /// Renders the set as a shader preamble, one `#define` per line in
    /// alphabetical order.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut entries: Vec<_> = self
            .defines
            .iter()
            .map(|&(k, v)| (interner::resolve(k), interner::resolve(v)))
            .collect();
        entries.sort_unstable_by_key(|&(k, _)| k);

        let mut source = String::new();
        for (key, value) in entries {
            source.push_str("#define ");
            source.push_str(key);
            if !value.is_empty() {
                source.push(' ');
                source.push_str(value);
            }
            source.push('\n');
        }
        source
    }

    /// Content hash for compiled-program lookup.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        use std::hash::BuildHasher;

        rustc_hash::FxBuildHasher.hash_one(self)
    }
}

impl Hash for ShaderDefines {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.defines.hash(state);
    }
}

impl PartialEq for ShaderDefines {
    fn eq(&self, other: &Self) -> bool {
        self.defines == other.defines
    }
}

impl Eq for ShaderDefines {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_and_get() {
        let mut defines = ShaderDefines::new();
        defines.enable("V3D_SHADING_SHADOW");
        defines.set("SAMPLES", "16");

        assert!(defines.contains("V3D_SHADING_SHADOW"));
        assert!(!defines.contains("HAIR_SHADER"));
        assert_eq!(defines.get("V3D_SHADING_SHADOW"), Some(""));
        assert_eq!(defines.get("SAMPLES"), Some("16"));
    }

    #[test]
    fn test_enable_if() {
        let mut defines = ShaderDefines::new();
        defines.enable_if(false, "WB_CAVITY");
        defines.enable_if(true, "HAIR_SHADER");

        assert_eq!(defines.len(), 1);
        assert!(defines.contains("HAIR_SHADER"));
    }

    #[test]
    fn test_to_source_is_alphabetical() {
        let mut defines = ShaderDefines::new();
        defines.enable("WB_CAVITY");
        defines.set("B_VALUE", "2");
        defines.enable("A_FLAG");

        assert_eq!(
            defines.to_source(),
            "#define A_FLAG\n#define B_VALUE 2\n#define WB_CAVITY\n"
        );
    }

    #[test]
    fn test_hash_ignores_insertion_order() {
        let mut d1 = ShaderDefines::new();
        d1.enable("V3D_LIGHTING_FLAT");
        d1.enable("HAIR_SHADER");

        let mut d2 = ShaderDefines::new();
        d2.enable("HAIR_SHADER");
        d2.enable("V3D_LIGHTING_FLAT");

        assert_eq!(d1, d2);
        assert_eq!(d1.compute_hash(), d2.compute_hash());
    }

    #[test]
    fn test_remove() {
        let mut defines = ShaderDefines::new();
        defines.enable("V3D_SHADING_OBJECT_OUTLINE");

        assert!(defines.remove("V3D_SHADING_OBJECT_OUTLINE"));
        assert!(!defines.remove("V3D_SHADING_OBJECT_OUTLINE"));
        assert!(defines.is_empty());
    }
}
