//! Scene Converter Contract
//!
//! The converter turns authored scenes into runtime scenes and links
//! external asset files at runtime. Its internals (mesh and material
//! conversion, worker pools, asset databases) belong to the host engine;
//! this module fixes the interface it offers and the pieces of state that
//! cross it:
//!
//! - [`LibLoadStatus`] / [`LibLoadHandle`]: progress of one link
//! - [`LibLoadOptions`]: link flags
//! - [`MergeQueue`]: converted scenes waiting for the game thread
//!
//! A failed link is never fatal: callers log it and keep the session
//! running, see [`link_or_warn`].

pub mod merge_queue;
pub mod status;

use std::path::PathBuf;

pub use merge_queue::MergeQueue;
pub use status::{LibLoadHandle, LibLoadOptions, LibLoadStatus};

use crate::errors::Result;

/// Where the data of a linked library comes from.
#[derive(Debug, Clone)]
pub enum LinkSource {
    /// A complete file already in memory.
    Memory(Vec<u8>),
    Path(PathBuf),
    /// A file the host already opened, by opaque handle.
    Handle(u64),
}

/// Operations the host engine's scene converter provides.
pub trait SceneConverter {
    type Scene;
    type Rasterizer;
    type Canvas;

    /// Converts the authored scene matching `target` into it.
    /// `lib_loading` is set when the conversion comes from a library link.
    fn convert_scene(
        &mut self,
        target: &mut Self::Scene,
        rasterizer: &mut Self::Rasterizer,
        canvas: &mut Self::Canvas,
        lib_loading: bool,
    );

    /// Frees everything converted for `scene`.
    fn remove_scene(&mut self, scene: &Self::Scene);

    /// Links `group` (e.g. `"Scene"`, `"Mesh"`, `"Action"`) from a library
    /// into a new asset database, merging into `scene_merge`.
    ///
    /// With [`LibLoadOptions::ASYNC`] the returned status finishes later,
    /// after [`merge_async_loads`](Self::merge_async_loads) picks it up.
    fn link_blend_file(
        &mut self,
        source: LinkSource,
        path: &str,
        group: &str,
        scene_merge: &mut Self::Scene,
        options: LibLoadOptions,
    ) -> Result<LibLoadHandle>;

    /// Unloads a linked library and everything converted from it.
    fn free_blend_file(&mut self, path: &str) -> Result<()>;

    /// Queues a finished async conversion for merging.
    fn add_scenes_to_merge_queue(&mut self, status: LibLoadHandle);

    /// Merges whatever async loads have completed so far.
    fn merge_async_loads(&mut self);

    /// Waits for all outstanding async loads, then merges them.
    fn finalize_async_loads(&mut self);
}

/// Links a library, logging a failure instead of propagating it.
pub fn link_or_warn<C: SceneConverter + ?Sized>(
    converter: &mut C,
    source: LinkSource,
    path: &str,
    group: &str,
    scene_merge: &mut C::Scene,
    options: LibLoadOptions,
) -> Option<LibLoadHandle> {
    match converter.link_blend_file(source, path, group, scene_merge, options) {
        Ok(status) => {
            if options.contains(LibLoadOptions::VERBOSE) {
                log::info!("Linking library '{path}' ({group})");
            }
            Some(status)
        }
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}
