/// Geometry table for the pyramid and helpers to flatten it for GPU upload
use nalgebra::{Matrix4, Vector3, Vector4};

use crate::error::SceneError;

/// Number of `f32` components per attribute entry (xyzw / rgba).
pub const COMPONENTS: usize = 4;

/// A vertex with a homogeneous position and an RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector4<f32>,
    pub color: Vector4<f32>,
}

impl Vertex {
    pub fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self {
            position: Vector4::from(position),
            color: Vector4::from(color),
        }
    }
}

/// A triangle face given as three vertex indices in right-hand order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [u8; 3],
}

impl Face {
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self { indices: [a, b, c] }
    }

    /// Calculate the (unnormalized) face normal implied by the winding order
    pub fn calculate_normal(&self, vertices: &[Vertex]) -> Vector3<f32> {
        let [v0, v1, v2] = self.indices.map(|i| vertices[i as usize].position.xyz());

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2)
    }
}

/// An indexed mesh: a vertex table plus faces indexing into it.
///
/// The tables are fixed once constructed; nothing hands out mutable access.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, rejecting faces that reference missing vertices.
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<Self, SceneError> {
        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// The four-vertex, four-face pyramid.
    ///
    /// Faces are listed in right-hand order, so every normal points out of the solid.
    pub fn pyramid() -> Self {
        Self {
            vertices: vec![
                Vertex::new([0.0, 0.0, 0.4, 1.0], [1.0, 0.0, 0.0, 1.0]),
                Vertex::new([0.25, 0.0, -0.3, 1.0], [0.0, 1.0, 0.0, 1.0]),
                Vertex::new([0.0, 0.8, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
                Vertex::new([-0.5, 0.0, 0.0, 1.0], [1.0, 0.5, 0.0, 1.0]),
            ],
            faces: vec![
                Face::new(3, 1, 0),
                Face::new(0, 1, 2),
                Face::new(3, 2, 1),
                Face::new(2, 3, 0),
            ],
        }
    }

    /// Check that every face index refers to an existing vertex
    pub fn validate(&self) -> Result<(), SceneError> {
        let vertex_count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            if let Some(&index) = f.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(SceneError::InvalidIndex {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn positions(&self) -> Vec<Vector4<f32>> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn colors(&self) -> Vec<Vector4<f32>> {
        self.vertices.iter().map(|v| v.color).collect()
    }

    /// Face indices laid out for an 8-bit element array buffer
    pub fn index_data(&self) -> Vec<u8> {
        self.faces.iter().flat_map(|f| f.indices).collect()
    }

    /// Number of indices a draw call over every face consumes
    pub fn index_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Arithmetic mean of the vertex positions
    pub fn centroid(&self) -> Vector3<f32> {
        let sum: Vector3<f32> = self.vertices.iter().map(|v| v.position.xyz()).sum();
        sum / self.vertices.len().max(1) as f32
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::pyramid()
    }
}

/// Serialize a sequence of 4-vectors into a flat buffer, entry-major
pub fn flatten(vectors: &[Vector4<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(vectors.len() * COMPONENTS);
    for v in vectors {
        out.extend_from_slice(v.as_slice());
    }
    out
}

/// Serialize a 4x4 matrix in column-major order, the layout `uniformMatrix4fv`
/// expects with `transpose = false`.
pub fn flatten_matrix(matrix: &Matrix4<f32>) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(matrix.as_slice());
    out
}
