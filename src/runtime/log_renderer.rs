use super::runtime_3d::Renderer;
use crate::{Camera, FramePacket};
use anyhow::Result;
use log::{debug, trace};

/// Renderer that draws nothing and logs what it was asked to draw.
/// Stands in for a GPU backend when running headless or for diagnostics.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    portal_views: u64,
    skipped_portal_views: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total number of off-screen portal views rendered so far
    pub fn portal_views(&self) -> u64 {
        self.portal_views
    }

    /// Total number of portal views skipped for a degenerate frustum
    pub fn skipped_portal_views(&self) -> u64 {
        self.skipped_portal_views
    }
}

impl Renderer for LogRenderer {
    fn next_frame(&mut self, packet: &FramePacket, camera: &dyn Camera, window_size: (u32, u32)) -> Result<()> {
        let (width, height) = window_size;
        let view_projection = camera.matrix(width, height);
        let on_screen = view_projection.transform_point(&packet.eye);

        self.frames += 1;
        self.portal_views += packet.portal_views.len() as u64;
        self.skipped_portal_views += packet.skipped_portals.len() as u64;

        trace!(
            "Frame {}: eye {:?} (main view {:?}), {} objects, {} overlay lines",
            self.frames,
            packet.eye,
            on_screen,
            packet.objects.len(),
            packet.overlay.1.len() / 2,
        );
        for view in &packet.portal_views {
            trace!(
                "Portal {} at distance {:.3}, thumbnail {:?}",
                view.portal,
                view.distance,
                view.thumbnail
            );
        }
        if !packet.skipped_portals.is_empty() {
            debug!("Frame {} skipped portals {:?}", self.frames, packet.skipped_portals);
        }
        Ok(())
    }
}
