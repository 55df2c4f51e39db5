use approx::assert_relative_eq;
use envelope3d::envelope::{EnvelopeMethod, EnvelopeSettings, FlatGround, Hyperellipse, Shell};
use envelope3d::math::{HomogeneousMatrix, Isometry, Point, Real, Vector};

fn shell(n: usize) -> Shell<Hyperellipse> {
    let profile = Hyperellipse::new(0.3, 4.0, 0.11, 2.0, 0.1);
    Shell::new(profile, n, EnvelopeSettings::default()).unwrap()
}

fn at(x: Real, y: Real, z: Real) -> HomogeneousMatrix<Real> {
    Isometry::translation(x, y, z).to_homogeneous()
}

#[test]
fn tangent_shell_has_no_penetration() {
    let mut shell = shell(5);
    let ground = FlatGround::new(Point::origin(), Vector::z(), 1.0).unwrap();
    let r = shell.ribs()[2].radius();

    assert!(shell.setup(&ground, EnvelopeMethod::Geometric, &at(0.0, 0.0, r)).unwrap());
    assert!(shell.in_mesh());
    assert_relative_eq!(shell.contact_depth(), 0.0, epsilon = 1.0e-12);
    assert_relative_eq!(shell.contact_normal(), Vector::z(), epsilon = 1.0e-12);
    assert!(shell.contact_volume() < 1.0e-12);
}

#[test]
fn rolled_ground_tilts_the_contact_frame() {
    let theta: Real = 0.05;
    let normal = Vector::new(0.0, -theta.sin(), theta.cos());
    let ground = FlatGround::new(Point::origin(), normal, 1.0).unwrap();
    let mut shell = shell(5);
    let r = shell.ribs()[2].radius();

    assert!(shell
        .setup(&ground, EnvelopeMethod::Geometric, &at(0.0, 0.0, r - 0.02))
        .unwrap());
    assert!(shell.rib_in_contact(2));

    for i in (0..shell.len()).filter(|i| shell.rib_in_contact(*i)) {
        let contact = shell.rib_contact(i).unwrap();
        assert_relative_eq!(contact.normal, normal, epsilon = 1.0e-9);
        assert!(contact.depth > 0.0);
    }

    assert_relative_eq!(shell.contact_normal(), normal, epsilon = 1.0e-9);

    let frame = shell.contact_frame();
    assert_relative_eq!(frame * Vector::x(), Vector::x(), epsilon = 1.0e-9);
    assert_relative_eq!(frame * Vector::z(), normal, epsilon = 1.0e-9);

    let angles = shell.relative_angles();
    assert_relative_eq!(angles.x, -theta, epsilon = 1.0e-9);
    assert_relative_eq!(angles.y, 0.0, epsilon = 1.0e-9);
    assert_relative_eq!(angles.z, 0.0, epsilon = 1.0e-9);

    // Off-center ribs are tilted by the profile slope.
    assert!(shell.rib_in_contact(3));
    let rib = shell.ribs()[3];
    let rib_angles = shell.rib_relative_angles(3).unwrap();
    assert_relative_eq!(rib_angles.x, -theta - rib.angle, epsilon = 1.0e-9);
}

#[test]
fn sampling_agrees_with_geometric_on_level_ground() {
    let ground = FlatGround::new(Point::new(0.0, 0.0, 0.5), Vector::z(), 0.7).unwrap();
    let mut geometric = shell(6);
    let mut sampling = shell(6);
    let pose = Isometry::translation(3.0, -2.0, 0.5 + 0.29).to_homogeneous();

    assert!(geometric.setup(&ground, EnvelopeMethod::Geometric, &pose).unwrap());
    assert!(sampling.setup(&ground, EnvelopeMethod::Sampling, &pose).unwrap());

    for i in 0..geometric.len() {
        assert_eq!(geometric.rib_in_contact(i), sampling.rib_in_contact(i));

        let (g, s) = (geometric.rib_contact(i).unwrap(), sampling.rib_contact(i).unwrap());
        assert_relative_eq!(g.point, s.point, epsilon = 1.0e-9);
        assert_relative_eq!(g.normal, s.normal, epsilon = 1.0e-9);
        assert_relative_eq!(g.depth, s.depth, epsilon = 1.0e-9);
        assert_relative_eq!(g.volume, s.volume, epsilon = 1.0e-9);
    }

    assert_relative_eq!(geometric.contact_point(), sampling.contact_point(), epsilon = 1.0e-9);
    assert_relative_eq!(geometric.contact_depth(), sampling.contact_depth(), epsilon = 1.0e-9);
    assert_relative_eq!(sampling.contact_friction(), 0.7, epsilon = 1.0e-12);
}

#[test]
fn deeper_shells_sink_more() {
    let ground = FlatGround::new(Point::origin(), Vector::z(), 1.0).unwrap();
    let mut shell = shell(8);
    let mut previous = (0.0, 0.0, 0.0);

    for step in 1..=5 {
        let z = 0.3 - 0.004 * step as Real;
        assert!(shell.setup(&ground, EnvelopeMethod::Geometric, &at(0.0, 0.0, z)).unwrap());

        let current = (shell.contact_depth(), shell.contact_area(), shell.contact_volume());
        assert!(current.0 > previous.0);
        assert!(current.1 > previous.1);
        assert!(current.2 > previous.2);
        assert!(shell.depth_rate(previous.0, 0.01) > 0.0);
        previous = current;
    }
}
