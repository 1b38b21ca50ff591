//! Portals renders a scene through rectangular windows placed anywhere in
//! the world. Each window shows what would be visible through it from a
//! moving eye, using an off-axis perspective projection so that parallax
//! stays correct however the window is placed relative to the eye.
//!
//! The geometry lives in [`Portal`]; the [`runtime`] drives an [`App`] frame
//! by frame and hands each [`FramePacket`] to a [`Renderer`].
pub mod draw;
pub mod error;
pub mod frustum;
pub mod layout;
mod portal;
mod portals_app;
pub mod runtime;
pub mod scene;
mod settings;
mod vertex;
mod windowed;

use nalgebra::{Matrix4, Point3};

pub use error::{FrustumFault, GeometryFault, PortalError};
pub use frustum::OffAxisFrustum;
pub use layout::Rect;
pub use portal::Portal;
pub use portals_app::PortalsApp;
pub use runtime::{App, Renderer};
pub use scene::{Object, Shape};
pub use settings::Settings;
pub use vertex::{TexturedVertex, Vertex};
pub use windowed::{Camera, PerspectiveCamera};

/// All information necessary to define a frame of video (besides the main
/// camera, which the runtime passes alongside)
#[derive(Clone, Debug)]
pub struct FramePacket {
    /// Eye the portal views were computed from
    pub eye: Point3<f32>,
    /// The entire scene's worth of objects, drawn both in the main view and in every portal view
    pub objects: Vec<Object>,
    /// Portal outlines and frustum edges for the main view, drawn as lines
    pub overlay: (Vec<Vertex>, Vec<u16>),
    /// One entry per portal that can be seen through from `eye`
    pub portal_views: Vec<PortalView>,
    /// Indices of portals whose frustum is degenerate for `eye` this frame
    pub skipped_portals: Vec<usize>,
}

/// How to render and composite the view through one portal
#[derive(Clone, Debug)]
pub struct PortalView {
    /// Index of the portal in the app's scene
    pub portal: usize,
    /// Full world-to-clip transform; render with an identity view matrix
    pub projection: Matrix4<f32>,
    /// Signed distance from the eye to the portal's plane
    pub distance: f32,
    /// Triangle strip the off-screen image is pasted onto in the main view
    pub quad: [TexturedVertex; 4],
    /// Where the off-screen image is shown on screen
    pub thumbnail: Rect,
    pub border_color: [f32; 3],
}
