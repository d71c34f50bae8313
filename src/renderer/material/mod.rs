//! Material resolution, fingerprinting and batching.
//!
//! Per object/material pair the renderer calls [`resolve_material`], hashes
//! the result with [`material_fingerprint`], and groups draws through a
//! [`MaterialBatcher`].

pub mod batch;
pub mod fingerprint;
pub mod resolve;

pub use batch::{BatchId, MaterialBatch, MaterialBatcher};
pub use fingerprint::material_fingerprint;
pub use resolve::{hsv_to_rgb, random_object_color, resolve_material};
