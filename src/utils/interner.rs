//! Global string interner.
//!
//! Shader define names are interned into integer [`Symbol`]s so define sets
//! can be compared and hashed without touching string data.

use lasso::{Spur, ThreadedRodeo};
use std::sync::LazyLock;

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Compact integer identifier of an interned string.
pub type Symbol = Spur;

/// Interns `s`, returning the existing symbol if it was already interned.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Returns the symbol of an already interned string without allocating.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a symbol back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

/// Pre-interns every define name the workbench variants can emit, keeping
/// interning off the per-draw path.
pub fn preload_workbench_defines() {
    let names = [
        "V3D_SHADING_OBJECT_OUTLINE",
        "V3D_SHADING_SHADOW",
        "WB_CAVITY",
        "V3D_SHADING_SPECULAR_HIGHLIGHT",
        "V3D_LIGHTING_STUDIO",
        "V3D_LIGHTING_FLAT",
        "V3D_LIGHTING_MATCAP",
        "NORMAL_VIEWPORT_PASS_ENABLED",
        "V3D_SHADING_TEXTURE_COLOR",
        "WORKBENCH_ENCODE_NORMALS",
        "HAIR_SHADER",
        "",
    ];

    for name in names {
        intern(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let s1 = intern("WB_CAVITY");
        let s2 = intern("WB_CAVITY");
        let s3 = intern("HAIR_SHADER");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(resolve(s1), "WB_CAVITY");
        assert_eq!(resolve(s3), "HAIR_SHADER");
    }

    #[test]
    fn test_get() {
        preload_workbench_defines();

        assert!(get("V3D_LIGHTING_MATCAP").is_some());
        assert!(get("NOT_A_WORKBENCH_DEFINE").is_none());
    }
}
