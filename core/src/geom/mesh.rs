//! Triangle meshes.

use core::fmt::{self, Debug, Formatter};

use crate::math::Vec3;

use super::{Tri, Vertex, vertex};

//
// Types
//

/// A triangle mesh.
///
/// An object made of flat triangular faces. Several faces can share a
/// vertex; the mesh stores each distinct vertex once and refers to it
/// by index.
#[derive(Clone, Default)]
pub struct Mesh {
    /// The faces of the mesh, each a triplet of indices into `verts`.
    pub faces: Vec<Tri>,
    /// The vertices of the mesh.
    pub verts: Vec<Vertex>,
}

/// Incrementally builds a [`Mesh`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    m: Mesh,
}

//
// Inherent impls
//

impl Mesh {
    /// Creates a new triangle mesh with the given faces and vertices.
    ///
    /// # Panics
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn new<F, V>(faces: F, verts: V) -> Self
    where
        F: IntoIterator<Item = Tri>,
        V: IntoIterator<Item = Vertex>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        let verts: Vec<_> = verts.into_iter().collect();

        for (i, Tri(vs)) in faces.iter().enumerate() {
            assert!(
                vs.iter().all(|&j| j < verts.len()),
                "vertex index out of bounds at faces[{i}]: {vs:?}"
            )
        }
        Self { faces, verts }
    }

    /// Returns a new mesh builder.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl Builder {
    /// Appends a face with the given vertex indices.
    pub fn push_face(&mut self, a: usize, b: usize, c: usize) {
        self.m.faces.push(Tri([a, b, c]));
    }

    /// Appends a vertex with the given position.
    pub fn push_vert(&mut self, pos: Vec3) {
        self.m.verts.push(vertex(pos));
    }

    /// Returns the finished mesh containing all the added faces and
    /// vertices.
    ///
    /// # Panics
    /// If any face refers to a vertex index that was never added.
    pub fn build(self) -> Mesh {
        // Index validation done by new()
        Mesh::new(self.m.faces, self.m.verts)
    }
}

//
// Foreign trait impls
//

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("faces", &self.faces.len())
            .field("verts", &self.verts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::vec3;

    use super::*;

    #[test]
    fn builder_builds_what_was_pushed() {
        let mut b = Mesh::builder();
        b.push_vert(vec3(0.0, 0.0, 0.0));
        b.push_vert(vec3(1.0, 0.0, 0.0));
        b.push_vert(vec3(0.0, 1.0, 0.0));
        b.push_face(0, 1, 2);

        let m = b.build();
        assert_eq!(m.verts.len(), 3);
        assert_eq!(m.faces, vec![Tri([0, 1, 2])]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_face_panics() {
        let mut b = Mesh::builder();
        b.push_vert(vec3(0.0, 0.0, 0.0));
        b.push_face(0, 1, 2);
        _ = b.build();
    }
}
