//! Loading models from actual files on disk.

use std::fs;
use std::path::PathBuf;

use rampart_geom::io::{LoadError, load_obj};
use rampart_geom::solids;

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../demos/assets")
        .join(name)
}

#[test]
fn loads_the_demo_cube() {
    let mesh = load_obj(asset("box.obj")).unwrap();

    // Deduplication collapses the 36 face corners to the cube's 8
    // distinct positions
    assert_eq!(mesh.verts.len(), 8);
    assert_eq!(mesh.faces.len(), 12);
    for tri in &mesh.faces {
        assert!(tri.0.iter().all(|&i| i < mesh.verts.len()));
    }
}

#[test]
fn loaded_cube_matches_the_procedural_one() {
    let loaded = load_obj(asset("box.obj")).unwrap();
    let built = solids::cube();

    // Same positions, independent of ordering
    for v in &built.verts {
        assert!(loaded.verts.contains(v), "missing vertex {v:?}");
    }
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_obj(asset("no_such_model.obj")).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("no_such_model.obj"));
}

#[test]
fn model_without_faces_is_rejected() {
    let path = std::env::temp_dir().join("rampart_empty_model.obj");
    fs::write(&path, "# positions but no faces\nv 0 0 0\nv 1 0 0\n").unwrap();

    let err = load_obj(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty { .. }));

    fs::remove_file(&path).ok();
}
