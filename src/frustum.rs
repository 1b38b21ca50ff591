//! Off-axis (asymmetric) perspective frusta.

use crate::error::{FrustumFault, Result};
use nalgebra::Matrix4;

/// Extents of a view frustum at its near plane, in eye space.
///
/// The eye sits at the origin looking down the negative z-axis. Unlike a
/// field-of-view perspective, the side planes need not be symmetric about the
/// viewing axis, so `left != -right` and `bottom != -top` in general.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffAxisFrustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OffAxisFrustum {
    /// Create a frustum from its near plane extents and clipping distances.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Self> {
        validate_clipping(near, far)?;
        let finite = [left, right, bottom, top].iter().all(|v| v.is_finite());
        if !finite || left >= right || bottom >= top {
            return Err(FrustumFault::EmptyExtents.into());
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        })
    }

    /// The off-center perspective matrix, equivalent to `glFrustum`.
    ///
    /// Maps the frustum onto the canonical view volume spanning -1 to 1 along every axis.
    pub fn matrix(&self) -> Matrix4<f32> {
        let Self {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;

        let r0c0 = (2.0 * n) / (r - l);
        let r0c2 = (r + l) / (r - l);

        let r1c1 = (2.0 * n) / (t - b);
        let r1c2 = (t + b) / (t - b);

        let r2c2 = -(f + n) / (f - n);
        let r2c3 = -(2.0 * f * n) / (f - n);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            r0c0, 0.0,  r0c2, 0.0,
            0.0,  r1c1, r1c2, 0.0,
            0.0,  0.0,  r2c2, r2c3,
            0.0,  0.0,  -1.0, 0.0,
        );
        matrix
    }

    /// Whether the side planes mirror each other about the viewing axis
    pub fn is_symmetric(&self, epsilon: f32) -> bool {
        (self.left + self.right).abs() <= epsilon && (self.bottom + self.top).abs() <= epsilon
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Width over height of the near plane window.
    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height()
    }

    /// Full vertical opening angle in radians. Only describes the whole
    /// frustum when it is symmetric.
    pub fn vertical_field_of_view(&self) -> f32 {
        2.0 * (0.5 * self.height() / self.near).atan()
    }
}

/// Checks `0 < near < far` for a pair of clipping distances.
pub(crate) fn validate_clipping(near: f32, far: f32) -> Result<()> {
    if near.is_finite() && far.is_finite() && near > 0.0 && near < far {
        Ok(())
    } else {
        Err(FrustumFault::InvalidClipping { near, far }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector4};

    #[test]
    fn symmetric_frustum_matches_standard_perspective() {
        let frustum = OffAxisFrustum::new(-0.8, 0.8, -0.5, 0.5, 0.5, 100.0).unwrap();
        assert!(frustum.is_symmetric(1e-6));

        let perspective = Matrix4::new_perspective(
            frustum.aspect_ratio(),
            frustum.vertical_field_of_view(),
            0.5,
            100.0,
        );
        assert_relative_eq!(frustum.matrix(), perspective, epsilon = 1e-5);
    }

    #[test]
    fn near_plane_corners_map_to_view_volume_edges() {
        let frustum = OffAxisFrustum::new(-0.2, 1.3, -0.7, 0.1, 1.0, 50.0).unwrap();
        let matrix = frustum.matrix();

        let project = |x: f32, y: f32| {
            let clip = matrix * Vector4::new(x, y, -frustum.near, 1.0);
            Point3::from_homogeneous(clip).unwrap()
        };

        let lower_left = project(frustum.left, frustum.bottom);
        assert_relative_eq!(lower_left.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(lower_left.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(lower_left.z, -1.0, epsilon = 1e-5);

        let upper_right = project(frustum.right, frustum.top);
        assert_relative_eq!(upper_right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(upper_right.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn far_plane_maps_to_positive_depth_edge() {
        let frustum = OffAxisFrustum::new(-1.0, 2.0, -1.0, 1.0, 0.5, 20.0).unwrap();
        let clip = frustum.matrix() * Vector4::new(0.0, 0.0, -20.0, 1.0);
        let ndc = Point3::from_homogeneous(clip).unwrap();
        assert_relative_eq!(ndc.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn skewed_frustum_is_not_symmetric() {
        let frustum = OffAxisFrustum::new(-0.1, 0.9, -0.5, 0.5, 0.5, 10.0).unwrap();
        assert!(!frustum.is_symmetric(1e-6));
    }

    #[test]
    fn invalid_clipping_is_rejected() {
        for &(near, far) in &[(0.0, 10.0), (-1.0, 10.0), (10.0, 10.0), (5.0, 1.0)] {
            assert_eq!(
                OffAxisFrustum::new(-1.0, 1.0, -1.0, 1.0, near, far),
                Err(PortalError::InvalidFrustum(FrustumFault::InvalidClipping { near, far }))
            );
        }
    }

    #[test]
    fn empty_extents_are_rejected() {
        assert_eq!(
            OffAxisFrustum::new(1.0, 1.0, -1.0, 1.0, 0.5, 10.0),
            Err(PortalError::InvalidFrustum(FrustumFault::EmptyExtents))
        );
        assert_eq!(
            OffAxisFrustum::new(-1.0, 1.0, 1.0, -1.0, 0.5, 10.0),
            Err(PortalError::InvalidFrustum(FrustumFault::EmptyExtents))
        );
    }
}
