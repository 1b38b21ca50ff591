use thiserror::Error;

/// Errors produced by portal construction and per-frame projection queries
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum PortalError {
    /// The portal cannot exist; raised only at construction time
    #[error("Invalid portal geometry: {0}")]
    InvalidGeometry(GeometryFault),
    /// The frustum through the portal is undefined for this eye and clipping range
    #[error("Invalid portal frustum: {0}")]
    InvalidFrustum(FrustumFault),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryFault {
    #[error("input contains a non-finite value")]
    NonFinite,
    #[error("an edge of the rectangle has zero length")]
    ZeroLengthEdge,
    #[error("the corners are collinear")]
    CollinearCorners,
    #[error("the edges are not perpendicular")]
    NonPerpendicularEdges,
    #[error("the normal has zero length")]
    ZeroLengthNormal,
    #[error("width and height must be positive")]
    NonPositiveDimensions,
}

#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum FrustumFault {
    #[error("clipping planes must satisfy 0 < near < far, got near {near} and far {far}")]
    InvalidClipping { near: f32, far: f32 },
    #[error("eye must be in front of the portal plane, but its signed distance is {distance}")]
    EyeBehindPortal { distance: f32 },
    #[error("near plane at {near} lies beyond the portal plane at {distance}")]
    NearPlaneBeyondPortal { near: f32, distance: f32 },
    #[error("frustum extents are empty")]
    EmptyExtents,
}

impl From<GeometryFault> for PortalError {
    fn from(fault: GeometryFault) -> Self {
        Self::InvalidGeometry(fault)
    }
}

impl From<FrustumFault> for PortalError {
    fn from(fault: FrustumFault) -> Self {
        Self::InvalidFrustum(fault)
    }
}

pub type Result<T, E = PortalError> = std::result::Result<T, E>;
