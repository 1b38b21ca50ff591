//! Planar rectangular portals and the off-axis projection through them.
//!
//! A portal is a window onto the scene. Seen from an eye that is generally
//! not on the portal's central axis, the view frustum through the window is
//! skewed, so an ordinary field-of-view perspective would produce incorrect
//! parallax. [`Portal::projection_matrix`] computes the generalized
//! asymmetric frustum instead.
//!
//! Orientation convention: the local frame `{right, up, normal}` is right
//! handed, with `normal = right × up` pointing toward the side the portal is
//! meant to be viewed from. Distances are positive on that side.

use crate::error::{FrustumFault, GeometryFault, Result};
use crate::frustum::{validate_clipping, OffAxisFrustum};
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Unit, Vector2, Vector3};

/// Shortest edge or normal length accepted when building a portal
const LENGTH_EPSILON: f32 = 1e-6;

/// Largest accepted `|cos|` of the angle between two edges
const PERPENDICULAR_TOLERANCE: f32 = 1e-4;

/// Largest `|sin|` of the angle between the normal and world up before the
/// secondary up hint is used
const PARALLEL_TOLERANCE: f32 = 1e-4;

/// A rectangle in world space through which the scene is viewed.
///
/// Immutable after construction. The four corners are cached for rendering
/// and are always derived from `center`, the frame, and `dimensions`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Portal {
    center: Point3<f32>,
    right: Unit<Vector3<f32>>,
    up: Unit<Vector3<f32>>,
    normal: Unit<Vector3<f32>>,
    dimensions: Vector2<f32>,
    top_left: Point3<f32>,
    top_right: Point3<f32>,
    bottom_left: Point3<f32>,
    bottom_right: Point3<f32>,
}

impl Portal {
    /// Constructs a portal from three of its four corners; the top right corner is implied.
    ///
    /// The edges `bottom_right - bottom_left` and `top_left - bottom_left`
    /// are taken as-is. They must be non-degenerate and perpendicular,
    /// otherwise the corners do not describe a rectangle and
    /// [`GeometryFault`] explains why. Skewed parallelograms are rejected
    /// rather than squared up, so the portal frame is always orthonormal.
    pub fn from_corners(
        bottom_left: Point3<f32>,
        bottom_right: Point3<f32>,
        top_left: Point3<f32>,
    ) -> Result<Self> {
        let all_finite = [bottom_left, bottom_right, top_left]
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()));
        if !all_finite {
            return Err(GeometryFault::NonFinite.into());
        }

        let right_edge = bottom_right - bottom_left;
        let up_edge = top_left - bottom_left;
        let width = right_edge.norm();
        let height = up_edge.norm();
        if width <= LENGTH_EPSILON || height <= LENGTH_EPSILON {
            return Err(GeometryFault::ZeroLengthEdge.into());
        }

        let normal = right_edge.cross(&up_edge);
        if normal.norm() <= LENGTH_EPSILON * width * height {
            return Err(GeometryFault::CollinearCorners.into());
        }
        if right_edge.dot(&up_edge).abs() > PERPENDICULAR_TOLERANCE * width * height {
            return Err(GeometryFault::NonPerpendicularEdges.into());
        }

        let center = bottom_left + 0.5 * (right_edge + up_edge);
        Ok(Self::from_frame(
            center,
            Unit::new_unchecked(right_edge / width),
            Unit::new_unchecked(up_edge / height),
            Unit::new_normalize(normal),
            Vector2::new(width, height),
        ))
    }

    /// Constructs a portal centered on `center`, facing along `normal`, with
    /// the given width and height.
    ///
    /// The portal's up axis is chosen as close to world up (+y) as possible.
    /// When `normal` is (anti)parallel to world up, -z is used as the up hint
    /// instead.
    pub fn from_center_normal(
        center: Point3<f32>,
        normal: Vector3<f32>,
        dimensions: Vector2<f32>,
    ) -> Result<Self> {
        let all_finite = center
            .coords
            .iter()
            .chain(normal.iter())
            .chain(dimensions.iter())
            .all(|c| c.is_finite());
        if !all_finite {
            return Err(GeometryFault::NonFinite.into());
        }
        if dimensions.x <= 0.0 || dimensions.y <= 0.0 {
            return Err(GeometryFault::NonPositiveDimensions.into());
        }
        let normal = Unit::try_new(normal, LENGTH_EPSILON).ok_or(GeometryFault::ZeroLengthNormal)?;

        let up_hint = if normal.cross(&Vector3::y()).norm() < PARALLEL_TOLERANCE {
            -Vector3::z()
        } else {
            Vector3::y()
        };

        // Maps local +z onto the normal and local +y as close to the hint as possible
        let orientation = Rotation3::face_towards(&normal.into_inner(), &up_hint);
        let right = Unit::new_normalize(orientation * Vector3::x());
        let up = Unit::new_normalize(orientation * Vector3::y());

        Ok(Self::from_frame(center, right, up, normal, dimensions))
    }

    fn from_frame(
        center: Point3<f32>,
        right: Unit<Vector3<f32>>,
        up: Unit<Vector3<f32>>,
        normal: Unit<Vector3<f32>>,
        dimensions: Vector2<f32>,
    ) -> Self {
        let half_right = right.into_inner() * (0.5 * dimensions.x);
        let half_up = up.into_inner() * (0.5 * dimensions.y);
        Self {
            center,
            right,
            up,
            normal,
            dimensions,
            top_left: center - half_right + half_up,
            top_right: center + half_right + half_up,
            bottom_left: center - half_right - half_up,
            bottom_right: center + half_right - half_up,
        }
    }

    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    /// Unit normal, pointing toward the viewing side
    pub fn normal(&self) -> Unit<Vector3<f32>> {
        self.normal
    }

    pub fn right(&self) -> Unit<Vector3<f32>> {
        self.right
    }

    pub fn up(&self) -> Unit<Vector3<f32>> {
        self.up
    }

    /// Width along `right` and height along `up`
    pub fn dimensions(&self) -> Vector2<f32> {
        self.dimensions
    }

    pub fn top_left(&self) -> Point3<f32> {
        self.top_left
    }

    pub fn top_right(&self) -> Point3<f32> {
        self.top_right
    }

    pub fn bottom_left(&self) -> Point3<f32> {
        self.bottom_left
    }

    pub fn bottom_right(&self) -> Point3<f32> {
        self.bottom_right
    }

    /// The corners in outline order: top left, top right, bottom right, bottom left.
    pub fn corners(&self) -> [Point3<f32>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Signed perpendicular distance from `point` to the portal's plane.
    /// Positive on the side the normal points toward.
    pub fn distance(&self, point: &Point3<f32>) -> f32 {
        self.normal.dot(&(point - self.center))
    }

    /// Whether `point` is strictly on the viewing side of the portal's plane
    pub fn is_in_front(&self, point: &Point3<f32>) -> bool {
        self.distance(point) > 0.0
    }

    /// Orthogonal projection of `point` onto the portal's (unbounded) plane
    pub fn nearest_point(&self, point: &Point3<f32>) -> Point3<f32> {
        point - self.normal.into_inner() * self.distance(point)
    }

    /// The asymmetric frustum through the portal rectangle as seen from `eye`,
    /// expressed in the portal-aligned eye space of [`Portal::view_matrix`].
    ///
    /// # Errors
    /// [`FrustumFault::InvalidClipping`] unless `0 < near < far`,
    /// [`FrustumFault::EyeBehindPortal`] when the eye is on or behind the
    /// plane, and [`FrustumFault::NearPlaneBeyondPortal`] when the near plane
    /// would not lie strictly between the eye and the portal.
    pub fn frustum(&self, eye: &Point3<f32>, near: f32, far: f32) -> Result<OffAxisFrustum> {
        validate_clipping(near, far)?;

        let to_bottom_left = self.bottom_left - eye;
        let to_bottom_right = self.bottom_right - eye;
        let to_top_left = self.top_left - eye;

        let distance = -self.normal.dot(&to_bottom_left);
        // Negated comparisons so that NaN fails too
        if !(distance > 0.0) {
            return Err(FrustumFault::EyeBehindPortal { distance }.into());
        }
        if !(distance > near) {
            return Err(FrustumFault::NearPlaneBeyondPortal { near, distance }.into());
        }

        let scale = near / distance;
        OffAxisFrustum::new(
            self.right.dot(&to_bottom_left) * scale,
            self.right.dot(&to_bottom_right) * scale,
            self.up.dot(&to_bottom_left) * scale,
            self.up.dot(&to_top_left) * scale,
            near,
            far,
        )
    }

    /// Moves `eye` to the origin and rotates world space into the portal's
    /// local frame, so the portal faces the eye down the negative z-axis.
    ///
    /// This is the view half of [`Portal::projection_matrix`]; pair it only
    /// with [`OffAxisFrustum::matrix`], never with the full projection.
    pub fn view_matrix(&self, eye: &Point3<f32>) -> Matrix4<f32> {
        let to_portal_basis = Matrix3::from_rows(&[
            self.right.transpose(),
            self.up.transpose(),
            self.normal.transpose(),
        ]);
        to_portal_basis.to_homogeneous() * Matrix4::new_translation(&-eye.coords)
    }

    /// The full world-to-clip transform for rendering the scene through the
    /// portal from `eye`. The renderer's view matrix should be identity.
    ///
    /// Every corner of the portal lands exactly on the edge of the canonical
    /// view volume after the perspective divide.
    pub fn projection_matrix(&self, eye: &Point3<f32>, near: f32, far: f32) -> Result<Matrix4<f32>> {
        let frustum = self.frustum(eye, near, far)?;
        Ok(frustum.matrix() * self.view_matrix(eye))
    }
}
