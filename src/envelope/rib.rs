use super::{EnvelopeSettings, FlatGround, RibContact, TriangleGround};
use crate::math::{Isometry, Point, Real, Vector, EPSILON_HIGH, EPSILON_MEDIUM};
use crate::query::intersection::{intersection_linear_plane, intersection_linear_triangle, Linear};
use crate::query::{self, Unsupported};
use crate::shape::{Disk, Entity, Line, Segment};

/// A disk-shaped cross-section of a shell.
///
/// The rib is expressed in the local frame of its shell: its center is `(0, y, 0)` and its
/// normal is the lateral axis `ŷ`. Its contact region is a band of width `width` around
/// the disk.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rib {
    /// The index of this rib in its shell.
    pub id: usize,
    /// The disk of this rib, in the shell local frame.
    pub disk: Disk,
    /// The lateral extent of this rib.
    pub width: Real,
    /// The angle of the profile tangent at the rib center.
    pub angle: Real,
}

impl Rib {
    /// Creates the rib `id`, centered at `(0, y, 0)`.
    pub fn new(id: usize, radius: Real, y: Real, width: Real, angle: Real) -> Self {
        Rib {
            id,
            disk: Disk::new(radius, Point::new(0.0, y, 0.0), Vector::y()),
            width,
            angle,
        }
    }

    /// The radius of this rib.
    #[inline]
    pub fn radius(&self) -> Real {
        self.disk.radius
    }

    /// The center of this rib, in the shell local frame.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.disk.center()
    }

    /// The disk of this rib placed in the world by `pose`.
    pub fn world_disk(&self, pose: &Isometry<Real>) -> Disk {
        Disk::new(
            self.disk.radius,
            pose * self.disk.center(),
            pose * self.disk.normal(),
        )
    }

    /// Sets `out` to the contact of this rib with no ground.
    ///
    /// The contact point is the lowest point of the rib and the normal is the vertical
    /// axis of the shell, both placed in the world by `pose`.
    pub fn envelop_default(&self, pose: &Isometry<Real>, out: &mut RibContact) {
        *out = RibContact {
            point: pose * (self.center() - Vector::z() * self.radius()),
            normal: pose * Vector::z(),
            ..RibContact::default()
        };
    }

    /// Computes the contact between this rib and a set of ground triangles by intersecting
    /// them with the rib disk.
    ///
    /// Each triangle cutting the disk along a chord contributes the circular segment under
    /// that chord: its point, normal and friction are averaged, weighted by the volume of
    /// the segment. Returns `false`, and sets `out` to the default contact, if no triangle
    /// cuts the disk.
    pub fn envelop_geometric_mesh<'a>(
        &self,
        triangles: impl IntoIterator<Item = &'a TriangleGround>,
        pose: &Isometry<Real>,
        settings: &EnvelopeSettings,
        out: &mut RibContact,
    ) -> bool {
        let radius = self.radius();
        let center = self.center();
        let disk = self.world_disk(pose);
        let rib = Entity::Disk(disk);

        let mut found = 0usize;
        let mut area = 0.0;
        let mut volume = 0.0;
        let mut point = Vector::zeros();
        let mut normal = Vector::zeros();
        let mut friction = 0.0;
        let mut mean_point = Vector::zeros();
        let mut mean_normal = Vector::zeros();
        let mut mean_friction = 0.0;

        for tri in triangles {
            let chord = match chord(&Entity::Triangle(tri.triangle), &rib, settings) {
                Some(chord) => chord,
                None => continue,
            };
            let ground_normal = match tri.normal() {
                Some(n) => n,
                None => continue,
            };

            // Chord endpoints in the rib x-z plane.
            let pa = pose.inverse_transform_vector(&(chord.a - disk.center()));
            let pb = pose.inverse_transform_vector(&(chord.b - disk.center()));
            let (mut ta, mut tb) = (pa.z.atan2(pa.x), pb.z.atan2(pb.x));
            let (mut ra, mut rb) = (pa.norm().min(radius), pb.norm().min(radius));

            if tb < ta {
                core::mem::swap(&mut ta, &mut tb);
                core::mem::swap(&mut ra, &mut rb);
            }

            let tc = (ta + tb) / 2.0;
            let td = (tb - ta) / 2.0;
            let rc = num::clamp(
                2.0 * ra * rb / (ra + rb).max(EPSILON_MEDIUM) * td.cos(),
                0.0,
                radius,
            );
            let section = radius * radius * td - ra * rb * (tb - ta).sin() / 2.0;

            let (cos_tc, sin_tc) = (tc.cos(), tc.sin());
            let seg_area = chord.length() * self.width;
            let seg_volume = section * self.width;
            let seg_point = pose * (center + Vector::new(cos_tc, 0.0, sin_tc) * rc);
            let radial = pose * Vector::new(-cos_tc, 0.0, -sin_tc);
            let seg_normal = (radial + disk.normal() * (ground_normal - radial).dot(&disk.normal()))
                .try_normalize(EPSILON_HIGH)
                .unwrap_or(radial);

            found += 1;
            area += seg_area;
            volume += seg_volume;
            point += seg_point.coords * seg_volume;
            normal += seg_normal * seg_volume;
            friction += tri.friction * seg_volume;
            mean_point += seg_point.coords;
            mean_normal += seg_normal;
            mean_friction += tri.friction;
        }

        if found == 0 || (area <= EPSILON_MEDIUM && volume <= EPSILON_MEDIUM) {
            self.envelop_default(pose, out);
            log::trace!("Rib {}: no contact with the mesh.", self.id);
            return false;
        }

        let (point, normal, friction) = if volume > EPSILON_MEDIUM {
            (point / volume, normal / volume, friction / volume)
        } else {
            let n = found as Real;
            (mean_point / n, mean_normal / n, mean_friction / n)
        };
        let point = Point::from(point);

        *out = RibContact {
            point,
            normal: normal.try_normalize(EPSILON_HIGH).unwrap_or(pose * Vector::z()),
            friction,
            depth: radius - (point - disk.center()).norm(),
            area,
            volume,
        };
        log::trace!("Rib {}: {} chords, {:?}.", self.id, found, out);
        true
    }

    /// Computes the contact between this rib and a flat ground by intersecting the ground
    /// plane with the rib disk.
    ///
    /// Returns `false`, and sets `out` to the default contact, if the plane does not cut
    /// the disk along a chord.
    pub fn envelop_geometric_flat(
        &self,
        ground: &FlatGround,
        pose: &Isometry<Real>,
        settings: &EnvelopeSettings,
        out: &mut RibContact,
    ) -> bool {
        let radius = self.radius();
        let disk = self.world_disk(pose);
        let flat = EnvelopeSettings {
            intersection_tolerance: EPSILON_HIGH,
            ..*settings
        };

        let chord = match chord(&Entity::Plane(ground.plane), &Entity::Disk(disk), &flat) {
            Some(chord) => chord,
            None => {
                self.envelop_default(pose, out);
                log::trace!("Rib {}: no contact with the flat ground.", self.id);
                return false;
            }
        };

        let point = chord.centroid();
        let ground_normal = ground.normal();
        // The rib tangent at the contact point.
        let normal = match disk
            .normal()
            .cross(&(disk.center() - point))
            .try_normalize(EPSILON_HIGH)
        {
            Some(tangent) => (ground_normal - tangent * ground_normal.dot(&tangent))
                .try_normalize(EPSILON_HIGH)
                .unwrap_or(ground_normal),
            None => ground_normal,
        };
        let depth = radius - (point - disk.center()).norm();
        let (area, volume) = self.section(depth);

        *out = RibContact {
            point,
            normal,
            friction: ground.friction,
            depth,
            area,
            volume,
        };
        log::trace!("Rib {}: {:?}.", self.id, out);
        true
    }

    /// Computes the contact between this rib and a set of ground triangles by sampling the
    /// ground along four vertical probes around the rib center.
    pub fn envelop_sampling_mesh<'a, I>(
        &self,
        triangles: I,
        pose: &Isometry<Real>,
        settings: &EnvelopeSettings,
        out: &mut RibContact,
    ) -> bool
    where
        I: IntoIterator<Item = &'a TriangleGround>,
        I::IntoIter: Clone,
    {
        let triangles = triangles.into_iter();
        let probe = |line: &Linear| {
            triangles
                .clone()
                .filter_map(|tri| {
                    intersection_linear_triangle(line, &tri.triangle, EPSILON_HIGH)
                        .map(|(_, pt)| (pt, tri.friction))
                })
                .fold(None, |best: Option<(Point<Real>, Real)>, hit| match best {
                    Some(best) if best.0.z >= hit.0.z => Some(best),
                    _ => Some(hit),
                })
        };

        self.envelop_sampling(probe, pose, settings, out)
    }

    /// Computes the contact between this rib and a flat ground by sampling the ground along
    /// four vertical probes around the rib center.
    pub fn envelop_sampling_flat(
        &self,
        ground: &FlatGround,
        pose: &Isometry<Real>,
        settings: &EnvelopeSettings,
        out: &mut RibContact,
    ) -> bool {
        let probe = |line: &Linear| {
            intersection_linear_plane(line, &ground.plane, EPSILON_HIGH)
                .map(|pt| (pt, ground.friction))
        };

        self.envelop_sampling(probe, pose, settings, out)
    }

    fn envelop_sampling(
        &self,
        probe: impl Fn(&Linear) -> Option<(Point<Real>, Real)>,
        pose: &Isometry<Real>,
        settings: &EnvelopeSettings,
        out: &mut RibContact,
    ) -> bool {
        let radius = self.radius();
        let center = self.center();
        let dx = Vector::x() * (settings.sampling_dx * radius);
        let dy = Vector::y() * (settings.sampling_dy * self.width);
        let offsets = [dx, -dx, dy, -dy];

        let mut hits = [(Point::origin(), 0.0); 4];
        for (hit, offset) in hits.iter_mut().zip(offsets.iter()) {
            let line = Line::new(pose * (center + offset), -Vector::z());

            match probe(&Linear::from_line(&line)) {
                Some(h) => *hit = h,
                None => {
                    self.envelop_default(pose, out);
                    log::trace!("Rib {}: a sampling probe missed the ground.", self.id);
                    return false;
                }
            }
        }

        let point = Point::from(hits.iter().map(|h| h.0.coords).sum::<Vector<Real>>() / 4.0);
        let normal = match (hits[0].0 - hits[1].0)
            .cross(&(hits[2].0 - hits[3].0))
            .try_normalize(EPSILON_HIGH)
        {
            Some(n) => n,
            None => {
                self.envelop_default(pose, out);
                return false;
            }
        };

        let e_y = pose * Vector::y();
        let e_z = normal
            .cross(&e_y)
            .try_normalize(EPSILON_HIGH)
            .and_then(|e_x| e_y.cross(&e_x).try_normalize(EPSILON_HIGH));
        let depth = match e_z {
            Some(e_z) => radius * normal.dot(&e_z).abs() - (point - pose * center).norm(),
            None => 0.0,
        };

        if depth <= 0.0 {
            self.envelop_default(pose, out);
            log::trace!("Rib {}: the sampled ground is under the rib.", self.id);
            return false;
        }

        let (area, volume) = self.section(depth);
        *out = RibContact {
            point,
            normal,
            friction: hits.iter().map(|h| h.1).sum::<Real>() / 4.0,
            depth,
            area,
            volume,
        };
        log::trace!("Rib {}: {:?}.", self.id, out);
        true
    }

    /// The contact area and volume of this rib sunk by `depth` into a flat ground.
    pub fn section(&self, depth: Real) -> (Real, Real) {
        let r = self.radius();
        let d = num::clamp(depth, 0.0, 2.0 * r);
        let half_chord = (d * (2.0 * r - d)).sqrt();
        let area = 2.0 * half_chord * self.width;
        let volume = (r * r * ((r - d) / r).acos() - (r - d) * half_chord) * self.width;
        (area, volume)
    }
}

/// The chord cut from a rib by a ground entity, if it is long enough.
fn chord(ground: &Entity, rib: &Entity, settings: &EnvelopeSettings) -> Option<Segment> {
    match query::intersection(ground, rib, settings.intersection_tolerance) {
        Ok(Some(Entity::Segment(chord))) if chord.length() >= settings.min_chord_length => {
            Some(chord)
        }
        Ok(_) => None,
        Err(Unsupported { first, second }) => {
            log::trace!("Skipping a {:?}/{:?} pair laying on a common plane.", first, second);
            None
        }
    }
}
