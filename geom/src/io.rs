//! Reading triangle meshes from Wavefront OBJ files.
//!
//! Parsing is delegated to the `tobj` crate; only vertex positions are
//! read, normals and texture coordinates are ignored. The triangle
//! corners produced by the parser are deduplicated by exact position so
//! that each distinct position is stored once and shared through the
//! index list.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use rp::geom::{Mesh, Tri, Vertex, vertex};
use rp::math::{Vec3, vec3};

//
// Types
//

/// The ways loading a model can fail.
///
/// Any of these aborts the load; no partial mesh is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The model file could not be opened.
    #[error("failed to open model {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The model file could not be parsed.
    #[error("failed to parse model {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    /// The model file was parsed but contained no faces.
    #[error("model {path} contains no geometry")]
    Empty { path: String },
}

//
// Free fns
//

/// Loads a triangle mesh from the OBJ file at `path`.
///
/// Faces are triangulated by the parser; vertex positions are
/// deduplicated with [`dedup`].
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, LoadError> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: name.clone(),
        source,
    })?;
    let mesh = read_obj(&mut BufReader::new(file))
        .map_err(|source| LoadError::Parse { path: name.clone(), source })?;

    if mesh.faces.is_empty() {
        return Err(LoadError::Empty { path: name });
    }
    Ok(mesh)
}

/// Reads a triangle mesh in OBJ format from `input`.
///
/// Unlike [`load_obj`], an input without any faces yields an empty mesh
/// rather than an error.
pub fn read_obj(input: &mut impl BufRead) -> Result<Mesh, tobj::LoadError> {
    // No material library resolution: the loader only ever looks at
    // geometry, so any `mtllib` statement gets an empty stand-in.
    let (models, _) = tobj::load_obj_buf(input, true, |_| {
        Ok((vec![tobj::Material::empty()], HashMap::new()))
    })?;

    let corners = models.iter().flat_map(|model| {
        let mesh = &model.mesh;
        mesh.indices.iter().map(move |&index| {
            let i = 3 * index as usize;
            vec3(
                mesh.positions[i],
                mesh.positions[i + 1],
                mesh.positions[i + 2],
            )
        })
    });

    let (verts, indices) = dedup(corners);
    let faces = indices
        .chunks_exact(3)
        .map(|f| Tri([f[0], f[1], f[2]]))
        .collect::<Vec<_>>();

    Ok(Mesh::new(faces, verts))
}

/// Deduplicates a sequence of triangle-corner positions.
///
/// Returns the distinct positions in first-occurrence order, and one
/// index per input corner such that replaying the indices against the
/// position list reconstructs the input exactly. Positions are compared
/// bit-exactly; no tolerance is applied.
///
/// # Examples
/// ```
/// # use rampart_geom::io::dedup;
/// # use rp::geom::vertex;
/// # use rp::math::vec3;
/// let corners = [
///     vec3(0.0, 0.0, 0.0),
///     vec3(1.0, 0.0, 0.0),
///     vec3(0.0, 0.0, 0.0),
/// ];
/// let (unique, indices) = dedup(corners);
///
/// assert_eq!(unique, [vertex(corners[0]), vertex(corners[1])]);
/// assert_eq!(indices, [0, 1, 0]);
/// ```
pub fn dedup(
    corners: impl IntoIterator<Item = Vec3>,
) -> (Vec<Vertex>, Vec<usize>) {
    let mut unique = Vec::new();
    let mut indices = Vec::new();
    let mut seen: HashMap<Vertex, usize> = HashMap::new();

    for pos in corners {
        let vert = vertex(pos);
        if let Some(&i) = seen.get(&vert) {
            indices.push(i);
        } else {
            let i = unique.len();
            seen.insert(vert, i);
            unique.push(vert);
            indices.push(i);
        }
    }
    (unique, indices)
}
