use super::loader::{self, RawMesh};
use crate::bounding_volume::Aabb;
use crate::envelope::EnvelopeError;
use crate::math::{Isometry, Point, Real, Vector};
use crate::partitioning::AabbTree;
use crate::shape::{Primitive, Triangle};
use alloc::string::ToString;
use alloc::vec::Vec;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A ground triangle with its friction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleGround {
    /// The triangle. Its vertices are counterclockwise when seen from above the ground.
    pub triangle: Triangle,
    /// The friction scaling of the triangle.
    pub friction: Real,
    /// The index of the triangle in its mesh.
    pub id: usize,
}

impl TriangleGround {
    /// Creates a new ground triangle.
    pub fn new(triangle: Triangle, friction: Real, id: usize) -> Self {
        TriangleGround {
            triangle,
            friction,
            id,
        }
    }

    /// The unit normal of the triangle, pointing out of the ground.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn normal(&self) -> Option<Vector<Real>> {
        self.triangle.normal().map(|n| n.into_inner())
    }
}

/// A ground described by a triangle mesh, indexed by an AABB tree.
///
/// The `id` of the leaf boxes of the tree is the index of the triangle they bound.
#[derive(Clone, Debug)]
pub struct MeshGround {
    triangles: Vec<TriangleGround>,
    tree: AabbTree,
}

impl MeshGround {
    /// Creates a mesh ground from a set of triangles, and builds its AABB tree.
    ///
    /// The `id` of every triangle is reset to its index in `triangles`.
    pub fn new(mut triangles: Vec<TriangleGround>) -> Result<Self, EnvelopeError> {
        if triangles.is_empty() {
            return Err(EnvelopeError::EmptyMesh);
        }

        let mut boxes = Vec::with_capacity(triangles.len());

        for (i, tri) in triangles.iter_mut().enumerate() {
            if tri.friction < 0.0 {
                return Err(EnvelopeError::NegativeFriction { line: 0 });
            }

            let finite = tri
                .triangle
                .vertices()
                .iter()
                .all(|pt| pt.coords.iter().all(|x| x.is_finite()));
            let aabb = tri
                .triangle
                .aabb()
                .filter(|_| finite)
                .ok_or(EnvelopeError::UnboundableEntity(i))?;

            tri.id = i;
            boxes.push(aabb.with_ids(i, i));
        }

        let tree = AabbTree::from_boxes(&boxes);
        log::debug!(
            "Built a mesh ground of {} triangles (tree depth: {}).",
            triangles.len(),
            tree.depth()
        );

        Ok(MeshGround { triangles, tree })
    }

    /// Creates a mesh ground from an indexed triangle buffer with a uniform friction.
    pub fn from_triangles(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
        friction: Real,
    ) -> Result<Self, EnvelopeError> {
        let raw = RawMesh {
            vertices: vertices.to_vec(),
            faces: indices.iter().map(|idx| (*idx, friction)).collect(),
        };
        Self::from_raw(raw, &Isometry::identity())
    }

    /// Loads a mesh ground from a file, and maps its vertices by `pose`.
    ///
    /// The format is selected by the file suffix:
    /// - `.rdf` files carry a friction per triangle, and `friction` is ignored.
    /// - `.obj` files get the uniform `friction`.
    pub fn load(
        path: impl AsRef<Path>,
        friction: Real,
        pose: &Isometry<Real>,
    ) -> Result<Self, EnvelopeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "rdf" => {
                log::debug!("Loading the RDF ground mesh {}.", path.display());
                Self::read_rdf(BufReader::new(File::open(path)?), pose)
            }
            "obj" => {
                log::debug!("Loading the OBJ ground mesh {}.", path.display());
                Self::read_obj(BufReader::new(File::open(path)?), friction, pose)
            }
            _ => Err(EnvelopeError::UnrecognizedExtension(
                path.display().to_string(),
            )),
        }
    }

    /// Reads a mesh ground in the `.rdf` format, and maps its vertices by `pose`.
    pub fn read_rdf(reader: impl BufRead, pose: &Isometry<Real>) -> Result<Self, EnvelopeError> {
        Self::from_raw(loader::parse_rdf(reader)?, pose)
    }

    /// Reads a mesh ground in the `.obj` format, and maps its vertices by `pose`.
    pub fn read_obj(
        reader: impl BufRead,
        friction: Real,
        pose: &Isometry<Real>,
    ) -> Result<Self, EnvelopeError> {
        if friction < 0.0 {
            return Err(EnvelopeError::NegativeFriction { line: 0 });
        }

        Self::from_raw(loader::parse_obj(reader, friction)?, pose)
    }

    fn from_raw(raw: RawMesh, pose: &Isometry<Real>) -> Result<Self, EnvelopeError> {
        let vertex = |i: u32| {
            raw.vertices
                .get(i as usize)
                .map(|pt| pose * pt)
                .ok_or_else(|| EnvelopeError::MalformedMesh {
                    line: 0,
                    reason: format!("vertex index {} out of range", i),
                })
        };

        let triangles = raw
            .faces
            .iter()
            .enumerate()
            .map(|(id, (idx, friction))| {
                let triangle = Triangle::new(vertex(idx[0])?, vertex(idx[1])?, vertex(idx[2])?);
                Ok(TriangleGround::new(triangle, *friction, id))
            })
            .collect::<Result<Vec<_>, EnvelopeError>>()?;

        Self::new(triangles)
    }

    /// The triangles of this mesh.
    #[inline]
    pub fn triangles(&self) -> &[TriangleGround] {
        &self.triangles
    }

    /// The AABB tree over the triangles of this mesh.
    #[inline]
    pub fn tree(&self) -> &AabbTree {
        &self.tree
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Is this mesh empty? Always `false` for a successfully built mesh.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The box bounding the whole mesh.
    pub fn aabb(&self) -> Option<Aabb> {
        self.tree.root_aabb()
    }

    /// Pushes to `out` the index of every triangle whose box intersects `aabb`.
    ///
    /// `out` is cleared first.
    pub fn intersection(&self, aabb: &Aabb, out: &mut Vec<u32>) {
        out.clear();
        self.tree.intersect_aabb(aabb, &mut |leaf| out.push(leaf.id as u32));
    }
}
