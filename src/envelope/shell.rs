use super::{EnvelopeError, EnvelopeSettings, Ground, MeshGround, Profile, Rib, RibContact};
use crate::bounding_volume::Aabb;
use crate::math::{
    HomogeneousMatrix, Isometry, Matrix, Point, Real, Rotation, Translation, Vector, EPSILON_HIGH,
};
use crate::shape::Plane;
use alloc::vec::Vec;
use arrayvec::ArrayVec;
use core::ops::{Add, Div, Mul};
use na::UnitQuaternion;
use num::Zero;

/// The maximum number of ribs of a shell.
pub const MAX_RIBS: usize = 64;

/// The strategy used to locate the contact between a rib and the ground.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum EnvelopeMethod {
    /// Intersect the rib disk with the ground, and integrate the cut circular segments.
    #[default]
    Geometric,
    /// Sample the ground height along four vertical probes around each rib center.
    Sampling,
}

/// A tire shell: a set of ribs laid side by side along the lateral axis `ŷ`, posed in the
/// world by a rigid transformation.
///
/// Each call to [`Shell::setup`] poses the shell, computes the contact of every rib with
/// the ground, and stores the results until the next call. The aggregated contact of the
/// whole shell is derived from the rib contacts on demand.
///
/// Storage is sized once by [`Shell::resize`]: setting up a shell only allocates while a
/// candidate buffer grows past its previous capacity.
#[derive(Clone, Debug)]
pub struct Shell<P> {
    profile: P,
    settings: EnvelopeSettings,
    ribs: ArrayVec<Rib, MAX_RIBS>,
    contacts: ArrayVec<RibContact, MAX_RIBS>,
    valid: ArrayVec<bool, MAX_RIBS>,
    candidates: ArrayVec<Vec<u32>, MAX_RIBS>,
    broad_phase: Vec<u32>,
    pose: Isometry<Real>,
    aabb: Aabb,
    in_mesh: bool,
}

fn sign(x: Real) -> i32 {
    (x > 0.0) as i32 - (x < 0.0) as i32
}

impl<P: Profile> Shell<P> {
    /// Creates a shell of `rib_count` ribs shaped by `profile`, posed at the origin.
    pub fn new(
        profile: P,
        rib_count: usize,
        settings: EnvelopeSettings,
    ) -> Result<Self, EnvelopeError> {
        let mut shell = Shell {
            profile,
            settings,
            ribs: ArrayVec::new(),
            contacts: ArrayVec::new(),
            valid: ArrayVec::new(),
            candidates: ArrayVec::new(),
            broad_phase: Vec::new(),
            pose: Isometry::identity(),
            aabb: Aabb::new_invalid(),
            in_mesh: false,
        };
        shell.resize(rib_count)?;
        shell.update_aabb();
        Ok(shell)
    }

    /// Splits the shell into `rib_count` ribs of equal width.
    ///
    /// The rib `i` is centered at `y = -L + w / 2 + i * w`, where `L` is the half-width of
    /// the profile and `w = 2 * L / rib_count`. On error, the shell is left unchanged.
    pub fn resize(&mut self, rib_count: usize) -> Result<(), EnvelopeError> {
        if rib_count == 0 {
            return Err(EnvelopeError::InvalidRibCount(rib_count));
        }

        if rib_count > MAX_RIBS {
            return Err(EnvelopeError::TooManyRibs {
                requested: rib_count,
                capacity: MAX_RIBS,
            });
        }

        let half_width = self.profile.half_width();
        let width = 2.0 * half_width / rib_count as Real;
        let mut ribs = ArrayVec::new();

        for i in 0..rib_count {
            let y = -half_width + width / 2.0 + i as Real * width;
            let radius = self.profile.radius(y)?;
            let angle = self.profile.angle(y)?;

            if !radius.is_finite() || radius <= 0.0 {
                return Err(EnvelopeError::InvalidRadius { rib: i, radius });
            }

            ribs.push(Rib::new(i, radius, y, width, angle));
        }

        self.ribs = ribs;
        self.contacts.clear();
        self.valid.clear();
        self.candidates.truncate(rib_count);

        for rib in &self.ribs {
            let mut contact = RibContact::default();
            rib.envelop_default(&self.pose, &mut contact);
            self.contacts.push(contact);
            self.valid.push(false);
        }

        for candidates in &mut self.candidates {
            candidates.clear();
        }

        while self.candidates.len() < rib_count {
            self.candidates.push(Vec::new());
        }

        self.in_mesh = false;
        log::debug!(
            "Shell resized to {} ribs of width {} (max radius: {}).",
            rib_count,
            width,
            self.profile.max_radius()
        );
        Ok(())
    }

    /// The number of ribs.
    #[inline]
    pub fn len(&self) -> usize {
        self.ribs.len()
    }

    /// Does this shell have no ribs? Always `false` for a successfully built shell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ribs.is_empty()
    }

    /// The ribs of this shell.
    #[inline]
    pub fn ribs(&self) -> &[Rib] {
        &self.ribs
    }

    /// The profile of this shell.
    #[inline]
    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// The settings of the contact algorithm.
    #[inline]
    pub fn settings(&self) -> &EnvelopeSettings {
        &self.settings
    }

    /// Mutable access to the settings of the contact algorithm.
    #[inline]
    pub fn settings_mut(&mut self) -> &mut EnvelopeSettings {
        &mut self.settings
    }

    /// The pose of this shell in the world.
    #[inline]
    pub fn pose(&self) -> &Isometry<Real> {
        &self.pose
    }

    /// The world-space box bounding this shell, used for the broad phase.
    ///
    /// This is the cube of half-side equal to the largest radius of the profile, centered
    /// at the shell origin.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Was the last [`Shell::setup`] successful?
    ///
    /// On a mesh, this is `false` if no rib touches the mesh. On a flat ground, this is
    /// always `true`.
    #[inline]
    pub fn in_mesh(&self) -> bool {
        self.in_mesh
    }

    fn update_aabb(&mut self) {
        let origin = Point::from(self.pose.translation.vector);
        self.aabb =
            Aabb::from_half_extents(origin, Vector::repeat(self.profile.max_radius()));
    }

    /// Checks that `pose` is a rigid, right-handed transformation and converts it.
    fn rigid_pose(&self, pose: &HomogeneousMatrix<Real>) -> Result<Isometry<Real>, EnvelopeError> {
        let tol = self.settings.transform_tolerance;
        let linear: Matrix<Real> = pose.fixed_view::<3, 3>(0, 0).into_owned();
        let determinant = linear.determinant();

        let orthonormal = (linear.transpose() * linear - Matrix::identity()).amax() <= tol;
        let affine =
            pose.fixed_view::<1, 3>(3, 0).amax() <= tol && (pose[(3, 3)] - 1.0).abs() <= tol;

        if !(orthonormal && affine && (determinant - 1.0).abs() <= tol) {
            log::warn!(
                "Rejected a shell pose that is not rigid (determinant: {}).",
                determinant
            );
            return Err(EnvelopeError::NonRigidTransform { determinant });
        }

        let rotation =
            UnitQuaternion::from_rotation_matrix(&Rotation::from_matrix_unchecked(linear));
        let translation = Translation::from(pose.fixed_view::<3, 1>(0, 3).into_owned());
        Ok(Isometry::from_parts(translation, rotation))
    }

    /// Sets the pose of this shell from a 4x4 homogeneous matrix.
    ///
    /// Fails, leaving the pose unchanged, if the matrix is not an orthonormal and
    /// right-handed rigid transformation.
    pub fn set_transform(&mut self, pose: &HomogeneousMatrix<Real>) -> Result<(), EnvelopeError> {
        let pose = self.rigid_pose(pose)?;
        self.set_pose(pose);
        Ok(())
    }

    /// Sets the pose of this shell.
    pub fn set_pose(&mut self, pose: Isometry<Real>) {
        self.pose = pose;
        self.update_aabb();
    }

    /// Poses the shell and computes the contact of every rib with `ground`.
    ///
    /// Returns whether the shell touches the ground, as reported afterward by
    /// [`Shell::in_mesh`]:
    /// - On a mesh, the triangles under the shell box are shortlisted first. If there are
    ///   none, every rib gets its default contact and the result is `false`. Otherwise, the
    ///   result is `true` if at least one rib touches the mesh.
    /// - On a flat ground, the result is always `true`.
    ///
    /// Fails, leaving the shell unchanged, if `pose` is not a rigid transformation.
    pub fn setup<'a>(
        &mut self,
        ground: impl Into<Ground<'a>>,
        method: EnvelopeMethod,
        pose: &HomogeneousMatrix<Real>,
    ) -> Result<bool, EnvelopeError> {
        self.set_transform(pose)?;

        self.in_mesh = match ground.into() {
            Ground::Mesh(mesh) => self.setup_mesh(mesh, method),
            Ground::Flat(flat) => {
                for i in 0..self.ribs.len() {
                    let (rib, out) = (&self.ribs[i], &mut self.contacts[i]);
                    self.valid[i] = match method {
                        EnvelopeMethod::Geometric => {
                            rib.envelop_geometric_flat(flat, &self.pose, &self.settings, out)
                        }
                        EnvelopeMethod::Sampling => {
                            rib.envelop_sampling_flat(flat, &self.pose, &self.settings, out)
                        }
                    };
                }
                true
            }
        };

        Ok(self.in_mesh)
    }

    fn setup_mesh(&mut self, mesh: &MeshGround, method: EnvelopeMethod) -> bool {
        mesh.intersection(&self.aabb, &mut self.broad_phase);

        if self.broad_phase.is_empty() {
            for i in 0..self.ribs.len() {
                self.ribs[i].envelop_default(&self.pose, &mut self.contacts[i]);
                self.valid[i] = false;
            }
            return false;
        }

        match method {
            EnvelopeMethod::Geometric => self.update_rib_candidates(mesh),
            EnvelopeMethod::Sampling => {
                for candidates in &mut self.candidates {
                    candidates.clear();
                    candidates.extend_from_slice(&self.broad_phase);
                }
            }
        }

        let triangles = mesh.triangles();
        let mut in_mesh = false;

        for i in 0..self.ribs.len() {
            let (rib, out) = (&self.ribs[i], &mut self.contacts[i]);
            let shortlist = self.candidates[i].iter().map(|k| &triangles[*k as usize]);

            self.valid[i] = match method {
                EnvelopeMethod::Geometric => {
                    rib.envelop_geometric_mesh(shortlist, &self.pose, &self.settings, out)
                }
                EnvelopeMethod::Sampling => {
                    rib.envelop_sampling_mesh(shortlist, &self.pose, &self.settings, out)
                }
            };
            in_mesh |= self.valid[i];
        }

        in_mesh
    }

    /// Dispatches the broad-phase triangles to the ribs they may touch.
    ///
    /// A triangle is a candidate for a rib unless its three vertices lay strictly on the
    /// same side of the rib plane.
    fn update_rib_candidates(&mut self, mesh: &MeshGround) {
        let origin = Point::from(self.pose.translation.vector);
        let mid_plane = Plane::new(origin, self.pose * Vector::y());

        for candidates in &mut self.candidates {
            candidates.clear();
        }

        for k in &self.broad_phase {
            let triangle = &mesh.triangles()[*k as usize].triangle;
            let d = triangle.vertices().map(|v| mid_plane.signed_distance(&v));

            for (rib, candidates) in self.ribs.iter().zip(self.candidates.iter_mut()) {
                let y = rib.center().y;
                let sum: i32 = d.iter().map(|di| sign(di - y)).sum();

                if -3 < sum && sum < 3 {
                    candidates.push(*k);
                }
            }
        }
    }

    /*
     * Contact of a single rib.
     */

    /// The contacts of every rib, as computed by the last [`Shell::setup`].
    #[inline]
    pub fn rib_contacts(&self) -> &[RibContact] {
        &self.contacts
    }

    /// The contact of the rib `i`.
    #[inline]
    pub fn rib_contact(&self, i: usize) -> Option<&RibContact> {
        self.contacts.get(i)
    }

    /// Did the rib `i` touch the ground during the last [`Shell::setup`]?
    #[inline]
    pub fn rib_in_contact(&self, i: usize) -> bool {
        self.valid.get(i).copied().unwrap_or(false)
    }

    /// The contact frame of the rib `i`.
    ///
    /// See [`Shell::contact_frame`].
    pub fn rib_contact_frame(&self, i: usize) -> Option<Isometry<Real>> {
        self.contacts
            .get(i)
            .map(|c| self.frame(&c.point, &c.normal))
    }

    /// The orientation of the shell relative to the contact frame of the rib `i`, minus the
    /// profile angle of the rib on the first component.
    pub fn rib_relative_angles(&self, i: usize) -> Option<Vector<Real>> {
        let frame = self.rib_contact_frame(i)?;
        let mut angles = self.relative_angles_to(&frame);
        angles.x -= self.ribs[i].angle;
        Some(angles)
    }

    /// The penetration rate of the rib `i`, given its depth `previous` one time step `dt`
    /// ago.
    pub fn rib_depth_rate(&self, i: usize, previous: Real, dt: Real) -> Option<Real> {
        self.contacts.get(i).map(|c| rate(c.depth, previous, dt))
    }

    /*
     * Contact of the whole shell.
     */

    /// Mean of a rib quantity, weighted by the rib contact volumes.
    ///
    /// Falls back to the unweighted mean when the total volume is too small.
    fn mean<T>(&self, value: impl Fn(&RibContact) -> T) -> T
    where
        T: Zero + Add<Output = T> + Mul<Real, Output = T> + Div<Real, Output = T>,
    {
        let volume = self.contact_volume();

        if volume < self.settings.min_volume {
            if self.contacts.iter().any(|c| c.area > EPSILON_HIGH) {
                log::warn!(
                    "Contact volume {} too small for weighting, falling back to unweighted means.",
                    volume
                );
            }

            let n = self.contacts.len().max(1) as Real;
            self.contacts
                .iter()
                .fold(T::zero(), |acc, c| acc + value(c))
                / n
        } else {
            self.contacts
                .iter()
                .fold(T::zero(), |acc, c| acc + value(c) * c.volume)
                / volume
        }
    }

    /// The contact point of the shell.
    pub fn contact_point(&self) -> Point<Real> {
        Point::from(self.mean(|c| c.point.coords))
    }

    /// The unit contact normal of the shell.
    pub fn contact_normal(&self) -> Vector<Real> {
        self.mean(|c| c.normal)
            .try_normalize(EPSILON_HIGH)
            .unwrap_or_else(|| self.pose * Vector::z())
    }

    /// The friction scaling at the contact of the shell.
    pub fn contact_friction(&self) -> Real {
        self.mean(|c| c.friction)
    }

    /// The penetration depth of the shell.
    pub fn contact_depth(&self) -> Real {
        self.mean(|c| c.depth)
    }

    /// The total contact area of the shell.
    pub fn contact_area(&self) -> Real {
        self.contacts.iter().map(|c| c.area).sum()
    }

    /// The total volume of the shell laying under the ground.
    pub fn contact_volume(&self) -> Real {
        self.contacts.iter().map(|c| c.volume).sum()
    }

    /// The contact frame of the shell.
    ///
    /// Its origin is the contact point and its `z` axis the contact normal. Its `x` axis is
    /// the lateral axis of the shell crossed with the normal, i.e., the rolling direction
    /// projected on the ground.
    pub fn contact_frame(&self) -> Isometry<Real> {
        self.frame(&self.contact_point(), &self.contact_normal())
    }

    fn frame(&self, point: &Point<Real>, normal: &Vector<Real>) -> Isometry<Real> {
        let lateral = self.pose * Vector::y();
        let x = lateral
            .cross(normal)
            .try_normalize(EPSILON_HIGH)
            .unwrap_or_else(|| self.pose * Vector::x());
        let y = normal.cross(&x).normalize();
        let rotation = Rotation::from_basis_unchecked(&[x, y, *normal]);

        Isometry::from_parts(
            Translation::from(point.coords),
            UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }

    fn relative_angles_to(&self, frame: &Isometry<Real>) -> Vector<Real> {
        let relative = frame.rotation.inverse() * self.pose.rotation;
        let (roll, pitch, yaw) = relative.euler_angles();
        Vector::new(roll, pitch, yaw)
    }

    /// The orientation of the shell relative to its contact frame, as roll, pitch and yaw
    /// angles.
    pub fn relative_angles(&self) -> Vector<Real> {
        self.relative_angles_to(&self.contact_frame())
    }

    /// The penetration rate of the shell, given its depth `previous` one time step `dt`
    /// ago.
    ///
    /// Returns zero if `dt` is not positive.
    pub fn depth_rate(&self, previous: Real, dt: Real) -> Real {
        rate(self.contact_depth(), previous, dt)
    }
}

fn rate(depth: Real, previous: Real, dt: Real) -> Real {
    if dt <= 0.0 {
        0.0
    } else {
        (depth - previous) / dt
    }
}
