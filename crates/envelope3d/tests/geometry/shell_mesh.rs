use approx::assert_relative_eq;
use envelope3d::envelope::{
    EnvelopeMethod, EnvelopeSettings, FlatGround, Hyperellipse, MeshGround, Shell,
};
use envelope3d::math::{Isometry, Point, Real, Vector};

const DEPTH: Real = 0.01;

fn shell(n: usize) -> Shell<Hyperellipse> {
    let profile = Hyperellipse::new(0.3, 4.0, 0.11, 2.0, 0.1);
    Shell::new(profile, n, EnvelopeSettings::default()).unwrap()
}

/// The square `[-5, 5]²` at `z = 0`, split along its `(-5, -5) -> (5, 5)` diagonal.
fn square() -> MeshGround {
    let vertices = [
        Point::new(-5.0, -5.0, 0.0),
        Point::new(5.0, -5.0, 0.0),
        Point::new(5.0, 5.0, 0.0),
        Point::new(-5.0, 5.0, 0.0),
    ];
    MeshGround::from_triangles(&vertices, &[[0, 1, 2], [0, 2, 3]], 0.8).unwrap()
}

#[test]
fn mesh_contact_matches_the_flat_contact() {
    let mesh = square();
    let flat = FlatGround::new(Point::origin(), Vector::z(), 0.8).unwrap();

    for method in [EnvelopeMethod::Geometric, EnvelopeMethod::Sampling] {
        let mut on_mesh = shell(5);
        let mut on_flat = shell(5);
        let r = on_mesh.ribs()[2].radius();
        let pose = Isometry::translation(2.0, -1.0, r - DEPTH).to_homogeneous();

        assert!(on_mesh.setup(&mesh, method, &pose).unwrap());
        assert!(on_flat.setup(&flat, method, &pose).unwrap());
        assert!(on_mesh.in_mesh());

        for i in 0..on_mesh.len() {
            assert_eq!(on_mesh.rib_in_contact(i), on_flat.rib_in_contact(i));
        }

        assert_relative_eq!(on_mesh.contact_point(), on_flat.contact_point(), epsilon = 1.0e-9);
        assert_relative_eq!(on_mesh.contact_normal(), on_flat.contact_normal(), epsilon = 1.0e-9);
        assert_relative_eq!(on_mesh.contact_depth(), on_flat.contact_depth(), epsilon = 1.0e-9);
        assert_relative_eq!(on_mesh.contact_friction(), 0.8, epsilon = 1.0e-12);
        assert_relative_eq!(on_mesh.contact_depth(), DEPTH, epsilon = 1.0e-9);
    }
}

#[test]
fn shell_outside_of_the_mesh() {
    let mesh = square();
    let mut shell = shell(4);
    let pose = Isometry::translation(100.0, 100.0, 0.29);

    for method in [EnvelopeMethod::Geometric, EnvelopeMethod::Sampling] {
        assert!(!shell.setup(&mesh, method, &pose.to_homogeneous()).unwrap());
        assert!(!shell.in_mesh());

        for (rib, contact) in shell.ribs().iter().zip(shell.rib_contacts()) {
            let lowest = pose * (rib.center() - Vector::z() * rib.radius());
            assert_relative_eq!(contact.point, lowest);
            assert_relative_eq!(contact.normal, Vector::z());
            assert_eq!(contact.depth, 0.0);
            assert_eq!(contact.volume, 0.0);
        }
    }
}

#[test]
fn flying_shell_over_the_mesh() {
    let mesh = square();
    let mut shell = shell(4);
    let highest = shell
        .ribs()
        .iter()
        .map(|rib| rib.radius())
        .fold(0.0, Real::max);
    let z = highest + 0.0015;

    // The shell box reaches the mesh, but none of its ribs does.
    assert!(z < shell.profile().rx);
    let pose = Isometry::translation(0.5, 0.5, z).to_homogeneous();

    assert!(!shell.setup(&mesh, EnvelopeMethod::Geometric, &pose).unwrap());
    assert!((0..shell.len()).all(|i| !shell.rib_in_contact(i)));
    assert_eq!(shell.contact_depth(), 0.0);
    assert_relative_eq!(shell.contact_normal(), Vector::z());
}

#[test]
fn moving_across_the_mesh_keeps_the_contact() {
    let mesh = square();
    let mut shell = shell(3);
    let r = shell.ribs()[1].radius();

    for step in 0..20 {
        // Stays away from the edges and the diagonal of the square.
        let x = -3.0 + 0.3 * step as Real;
        let pose = Isometry::new(
            Vector::new(x, 0.5 * x - 2.5, r - DEPTH),
            Vector::z() * (0.1 * step as Real),
        );

        assert!(shell
            .setup(&mesh, EnvelopeMethod::Geometric, &pose.to_homogeneous())
            .unwrap());
        assert!(shell.rib_in_contact(1));
        assert_relative_eq!(shell.contact_normal(), Vector::z(), epsilon = 1.0e-9);
        assert_relative_eq!(shell.contact_point().z, 0.0, epsilon = 1.0e-9);
    }
}
