use crate::runtime::EyePath;
use crate::windowed::PerspectiveCamera;
use nalgebra::Point3;

/// Everything the demo app and its backends can be tuned with
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Initial window size in physical pixels
    pub window_size: (u32, u32),
    /// Near and far plane distances for every portal view
    pub clipping: (f32, f32),
    /// Side length of the square off-screen target each portal view is rendered into
    pub offscreen_size: u32,
    /// Side length of the on-screen thumbnails, in pixels
    pub thumbnail_size: f32,
    pub target_fps: u64,
    pub eye_path: EyePath,
    /// Where the orbit camera starts out, and what it looks at
    pub camera_eye: Point3<f32>,
    pub camera_target: Point3<f32>,
}

impl Settings {
    /// The orbit camera in its starting position
    pub fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::look_at(self.camera_eye, self.camera_target)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: (1600, 900),
            clipping: (0.5, 500.0),
            offscreen_size: 1024,
            thumbnail_size: 256.0,
            target_fps: 60,
            eye_path: EyePath::default(),
            camera_eye: Point3::new(-8.0, 10.0, 34.0),
            camera_target: Point3::new(0.75, -3.75, 0.0),
        }
    }
}
