//! Utility Module
//!
//! - [`interner`]: String interning for shader define names
//! - [`hash`]: Deterministic 32-bit mixing functions used for object colors
//!   and material fingerprints
//!
//! ```rust,ignore
//! use workbench::utils::interner;
//!
//! let sym1 = interner::intern("WB_CAVITY");
//! let sym2 = interner::intern("WB_CAVITY");
//! assert_eq!(sym1, sym2); // O(1) comparison
//! ```

pub mod hash;
pub mod interner;

pub use interner::Symbol;
