use approx::assert_relative_eq;
use envelope3d::envelope::{
    EnvelopeError, EnvelopeMethod, EnvelopeSettings, Hyperellipse, MeshGround, Shell,
};
use envelope3d::math::{Isometry, Point, Vector};
use std::fs;
use std::path::PathBuf;

const RDF: &str = "\
% Two triangles of different grips.
[UNITS]
length = m

[NODES]
1 -2.0 -2.0 0.0
2  2.0 -2.0 0.0
3  2.0  2.0 0.0
4 -2.0  2.0 0.0

[ELEMENTS]
1 2 3 0.6
1 3 4 0.9
";

const OBJ: &str = "\
v -2.0 -2.0 0.0
v 2.0 -2.0 0.0
v 2.0 2.0 0.0
v -2.0 2.0 0.0
f 1 2 3 4
";

/// Writes `contents` to a temporary file, removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("envelope3d-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        TempFile(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn load_rdf() {
    let file = TempFile::new("square.rdf", RDF);
    let mesh = MeshGround::load(&file.0, 1.0, &Isometry::identity()).unwrap();

    assert_eq!(mesh.len(), 2);
    assert_eq!(mesh.triangles()[0].friction, 0.6);
    assert_eq!(mesh.triangles()[1].friction, 0.9);
    assert_eq!(mesh.triangles()[1].id, 1);

    // The second element ends on the last node.
    assert_eq!(
        mesh.triangles()[1].triangle.vertices(),
        [
            Point::new(-2.0, -2.0, 0.0),
            Point::new(2.0, 2.0, 0.0),
            Point::new(-2.0, 2.0, 0.0),
        ]
    );

    let aabb = mesh.aabb().unwrap();
    assert_relative_eq!(aabb.mins, Point::new(-2.0, -2.0, 0.0));
    assert_relative_eq!(aabb.maxs, Point::new(2.0, 2.0, 0.0));
}

#[test]
fn load_obj_with_a_pose() {
    let file = TempFile::new("square.OBJ", OBJ);
    let pose = Isometry::translation(0.0, 0.0, -1.0);
    let mesh = MeshGround::load(&file.0, 0.75, &pose).unwrap();

    assert_eq!(mesh.len(), 2);
    assert!(mesh.triangles().iter().all(|tri| tri.friction == 0.75));
    assert!(mesh
        .triangles()
        .iter()
        .flat_map(|tri| tri.triangle.vertices())
        .all(|pt| pt.z == -1.0));
}

#[test]
fn load_failures() {
    let file = TempFile::new("square.stl", OBJ);
    assert!(matches!(
        MeshGround::load(&file.0, 1.0, &Isometry::identity()),
        Err(EnvelopeError::UnrecognizedExtension(_))
    ));

    let missing =
        std::env::temp_dir().join(format!("envelope3d-{}-missing.obj", std::process::id()));
    assert!(matches!(
        MeshGround::load(&missing, 1.0, &Isometry::identity()),
        Err(EnvelopeError::Io(_))
    ));

    let empty = TempFile::new("empty.rdf", "[NODES]\n[ELEMENTS]\n");
    assert!(matches!(
        MeshGround::load(&empty.0, 1.0, &Isometry::identity()),
        Err(EnvelopeError::EmptyMesh)
    ));
}

#[test]
fn shell_on_a_loaded_ground() {
    let file = TempFile::new("setup.rdf", RDF);
    let mesh = MeshGround::load(&file.0, 1.0, &Isometry::identity()).unwrap();

    let profile = Hyperellipse::new(0.3, 4.0, 0.11, 2.0, 0.1);
    let mut shell = Shell::new(profile, 5, EnvelopeSettings::default()).unwrap();
    // Only over the first triangle.
    let pose = Isometry::translation(1.0, -1.0, 0.29).to_homogeneous();

    assert!(shell.setup(&mesh, EnvelopeMethod::Geometric, &pose).unwrap());
    assert_relative_eq!(shell.contact_friction(), 0.6, epsilon = 1.0e-12);
    assert_relative_eq!(shell.contact_normal(), Vector::z(), epsilon = 1.0e-9);
    assert_relative_eq!(shell.contact_depth(), 0.01, epsilon = 1.0e-9);
}
