//! Scene Converter Contract Tests
//!
//! Tests for:
//! - LibLoadStatus: options, progress, finish/fail
//! - MergeQueue: deferred merges, failed loads skipped, concurrent producers
//! - link_or_warn: failed links are non-fatal

use std::sync::Arc;
use std::thread;

use workbench::WorkbenchError;
use workbench::converter::{
    LibLoadHandle, LibLoadOptions, LibLoadStatus, LinkSource, MergeQueue, SceneConverter,
    link_or_warn,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Toy converter: scenes are name lists, libraries convert to one scene each.
// ============================================================================

#[derive(Debug, Default)]
struct Scene {
    name: String,
    objects: Vec<String>,
}

#[derive(Default)]
struct ToyConverter {
    queue: MergeQueue,
    libraries: Vec<String>,
    in_flight: Vec<LibLoadHandle>,
    merged: Vec<(Option<String>, String)>,
}

impl SceneConverter for ToyConverter {
    type Scene = Scene;
    type Rasterizer = ();
    type Canvas = ();

    fn convert_scene(&mut self, target: &mut Scene, _: &mut (), _: &mut (), _lib_loading: bool) {
        target.objects.push(format!("{}.converted", target.name));
    }

    fn remove_scene(&mut self, scene: &Scene) {
        self.merged.retain(|(target, _)| target.as_deref() != Some(scene.name.as_str()));
    }

    fn link_blend_file(
        &mut self,
        source: LinkSource,
        path: &str,
        group: &str,
        scene_merge: &mut Scene,
        options: LibLoadOptions,
    ) -> workbench::Result<LibLoadHandle> {
        if let LinkSource::Memory(bytes) = &source {
            if !bytes.starts_with(b"BLENDER") {
                return Err(WorkbenchError::LibraryLink {
                    path: path.to_owned(),
                    reason: "not a blend file".to_owned(),
                });
            }
        }
        if self.libraries.iter().any(|lib| lib == path) {
            return Err(WorkbenchError::LibraryLink {
                path: path.to_owned(),
                reason: "library already loaded".to_owned(),
            });
        }
        self.libraries.push(path.to_owned());

        let mut status = LibLoadStatus::new(path, options).with_merge_target(scene_merge.name.clone());
        status.add_pending_scene(format!("{group}@{path}"));
        let handle = status.into_handle();

        if options.contains(LibLoadOptions::ASYNC) {
            self.in_flight.push(Arc::clone(&handle));
        } else {
            self.queue.push(Arc::clone(&handle));
            self.merge_async_loads();
        }
        Ok(handle)
    }

    fn free_blend_file(&mut self, path: &str) -> workbench::Result<()> {
        let before = self.libraries.len();
        self.libraries.retain(|lib| lib != path);
        if self.libraries.len() == before {
            return Err(WorkbenchError::LibraryNotLoaded(path.to_owned()));
        }
        Ok(())
    }

    fn add_scenes_to_merge_queue(&mut self, status: LibLoadHandle) {
        self.queue.push(status);
    }

    fn merge_async_loads(&mut self) {
        let merged = &mut self.merged;
        self.queue.merge_pending(|target, scene| {
            merged.push((target.map(str::to_owned), scene.to_owned()));
        });
    }

    fn finalize_async_loads(&mut self) {
        for handle in std::mem::take(&mut self.in_flight) {
            self.add_scenes_to_merge_queue(handle);
        }
        self.merge_async_loads();
    }
}

// ============================================================================
// LibLoadStatus
// ============================================================================

#[test]
fn status_reports_options() {
    let status = LibLoadStatus::new("//lib.blend", LibLoadOptions::ASYNC | LibLoadOptions::VERBOSE);
    assert!(status.is_async());
    assert!(!status.options().contains(LibLoadOptions::LOAD_SCRIPTS));
    assert_eq!(status.path(), "//lib.blend");
    assert!(!status.is_finished());
}

#[test]
fn option_bits_match_link_flags() {
    assert_eq!(LibLoadOptions::LOAD_ACTIONS.bits(), 1);
    assert_eq!(LibLoadOptions::VERBOSE.bits(), 2);
    assert_eq!(LibLoadOptions::LOAD_SCRIPTS.bits(), 4);
    assert_eq!(LibLoadOptions::ASYNC.bits(), 8);
}

// ============================================================================
// Converter flow
// ============================================================================

#[test]
fn sync_link_merges_immediately() {
    init_logger();
    let mut converter = ToyConverter::default();
    let mut scene = Scene {
        name: "SCMain".into(),
        ..Default::default()
    };

    let handle = converter
        .link_blend_file(LinkSource::Path("//props.blend".into()), "//props.blend", "Scene", &mut scene, LibLoadOptions::empty())
        .unwrap();

    assert!(handle.lock().is_finished());
    assert_eq!(converter.merged, [(Some("SCMain".to_owned()), "Scene@//props.blend".to_owned())]);
}

#[test]
fn async_link_waits_for_finalize() {
    init_logger();
    let mut converter = ToyConverter::default();
    let mut scene = Scene {
        name: "SCMain".into(),
        ..Default::default()
    };

    let handle = converter
        .link_blend_file(LinkSource::Handle(1), "//level2.blend", "Scene", &mut scene, LibLoadOptions::ASYNC)
        .unwrap();

    converter.merge_async_loads();
    assert!(!handle.lock().is_finished());
    assert!(converter.merged.is_empty());

    converter.finalize_async_loads();
    assert!(handle.lock().is_finished());
    assert_eq!(handle.lock().progress(), 1.0);
    assert_eq!(converter.merged.len(), 1);
}

#[test]
fn failed_link_is_not_fatal() {
    init_logger();
    let mut converter = ToyConverter::default();
    let mut scene = Scene {
        name: "SCMain".into(),
        ..Default::default()
    };

    let bad = link_or_warn(
        &mut converter,
        LinkSource::Memory(b"garbage".to_vec()),
        "memory://garbage",
        "Scene",
        &mut scene,
        LibLoadOptions::VERBOSE,
    );
    assert!(bad.is_none());

    let good = link_or_warn(
        &mut converter,
        LinkSource::Memory(b"BLENDER-v280".to_vec()),
        "memory://good",
        "Mesh",
        &mut scene,
        LibLoadOptions::empty(),
    );
    assert!(good.is_some());
    assert_eq!(converter.merged.len(), 1);
}

#[test]
fn free_unknown_library_errors() {
    let mut converter = ToyConverter::default();
    assert!(matches!(
        converter.free_blend_file("//missing.blend"),
        Err(WorkbenchError::LibraryNotLoaded(_))
    ));
}

#[test]
fn convert_and_remove_scene() {
    let mut converter = ToyConverter::default();
    let mut scene = Scene {
        name: "SCMain".into(),
        ..Default::default()
    };
    converter.convert_scene(&mut scene, &mut (), &mut (), false);
    assert_eq!(scene.objects, ["SCMain.converted"]);

    converter
        .link_blend_file(LinkSource::Path("//a.blend".into()), "//a.blend", "Scene", &mut scene, LibLoadOptions::empty())
        .unwrap();
    converter.remove_scene(&scene);
    assert!(converter.merged.is_empty());
}

// ============================================================================
// MergeQueue
// ============================================================================

#[test]
fn merge_queue_skips_failed_loads() {
    init_logger();
    let queue = MergeQueue::new();

    let mut ok = LibLoadStatus::new("//ok.blend", LibLoadOptions::ASYNC).with_merge_target("SCMain");
    ok.add_pending_scene("SCOk");
    let mut failed = LibLoadStatus::new("//bad.blend", LibLoadOptions::ASYNC);
    failed.add_pending_scene("SCBad");
    failed.fail("truncated file");

    queue.push(failed.into_handle());
    let ok = ok.into_handle();
    queue.push(Arc::clone(&ok));

    let mut scenes = Vec::new();
    let merged = queue.merge_pending(|_, scene| scenes.push(scene.to_owned()));

    assert_eq!(merged, 1);
    assert_eq!(scenes, ["SCOk"]);
    assert!(ok.lock().is_finished());
    assert!(queue.is_empty());
}

#[test]
fn merge_queue_accepts_concurrent_producers() {
    let queue = Arc::new(MergeQueue::new());

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..8 {
                    let mut status = LibLoadStatus::new(format!("//w{worker}_{i}.blend"), LibLoadOptions::ASYNC);
                    status.add_pending_scene(format!("SC{worker}_{i}"));
                    queue.push(status.into_handle());
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(queue.len(), 32);
    let mut count = 0;
    assert_eq!(queue.merge_pending(|_, _| count += 1), 32);
    assert_eq!(count, 32);
}
