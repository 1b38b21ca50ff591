use crate::draw::{frustum_mesh, outline_mesh, textured_quad, LineBatch};
use crate::layout::thumbnail_rects;
use crate::runtime::{App, EyeDriver, EyeMode, FrameInput};
use crate::scene::{demo_portals, demo_scene, Object, ScenePortal};
use crate::{FramePacket, PortalView, Settings};
use anyhow::Result;
use log::{debug, info, trace};
use winit::event::WindowEvent;

/// The demo: three wall portals around the origin, watched by a wandering eye.
pub struct PortalsApp {
    portals: Vec<ScenePortal>,
    objects: Vec<Object>,
    eye: EyeDriver,
    settings: Settings,
}

impl PortalsApp {
    /// An app looking through arbitrary portals at arbitrary objects
    pub fn with_scene(settings: Settings, portals: Vec<ScenePortal>, objects: Vec<Object>) -> Self {
        Self {
            portals,
            objects,
            eye: EyeDriver::new(settings.eye_path),
            settings,
        }
    }

    pub fn eye_mode(&self) -> EyeMode {
        self.eye.mode()
    }

    pub fn set_eye_mode(&mut self, mode: EyeMode) {
        self.eye.set_mode(mode);
    }
}

impl App for PortalsApp {
    const NAME: &'static str = "Portals";

    type Args = Settings;

    fn new(settings: Settings) -> Result<Self> {
        let portals = demo_portals()?;
        let objects = demo_scene();
        info!(
            "Scene has {} portals and {} objects, off-screen targets are {}px",
            portals.len(),
            objects.len(),
            settings.offscreen_size
        );
        Ok(Self::with_scene(settings, portals, objects))
    }

    fn event(&mut self, event: &WindowEvent) -> Result<()> {
        self.eye.handle_events(event);
        Ok(())
    }

    fn next_frame(&mut self, input: &FrameInput) -> Result<FramePacket> {
        let eye = self.eye.eye(input.elapsed, input.camera);

        // Outlines first, then the frusta on top of them
        let mut overlay = LineBatch::new();
        for ScenePortal { portal, style } in &self.portals {
            overlay.append(outline_mesh(portal, style.outline))?;
        }
        for ScenePortal { portal, style } in &self.portals {
            overlay.append(frustum_mesh(portal, &eye, style.frustum))?;
        }

        let (near, far) = self.settings.clipping;
        let thumbnails = thumbnail_rects(
            input.window_size,
            self.settings.thumbnail_size,
            self.portals.len(),
        );

        let mut portal_views = Vec::with_capacity(self.portals.len());
        let mut skipped_portals = Vec::new();
        for (index, (ScenePortal { portal, style }, thumbnail)) in
            self.portals.iter().zip(thumbnails).enumerate()
        {
            match portal.projection_matrix(&eye, near, far) {
                Ok(projection) => portal_views.push(PortalView {
                    portal: index,
                    projection,
                    distance: portal.distance(&eye),
                    quad: textured_quad(portal),
                    thumbnail,
                    border_color: style.outline,
                }),
                Err(e) => {
                    debug!("Skipping portal {} this frame: {}", index, e);
                    skipped_portals.push(index);
                }
            }
        }
        trace!("Eye at {:?}, {} portal views", eye, portal_views.len());

        Ok(FramePacket {
            eye,
            objects: self.objects.clone(),
            overlay: overlay.into_mesh(),
            portal_views,
            skipped_portals,
        })
    }
}
