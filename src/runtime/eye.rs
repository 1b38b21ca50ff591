use crate::windowed::PerspectiveCamera;
use nalgebra::{Point3, Vector3};
use std::time::Duration;
use winit::event::{ElementState, WindowEvent};

/// Where the eye looking through the portals comes from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EyeMode {
    /// Follows an [`EyePath`] over time
    Animated,
    /// Sits at the orbit camera's eye point
    UserControlled,
}

/// A Lissajous-like path bounded by a cube of half-size `amplitude` around the origin
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EyePath {
    pub amplitude: f32,
    /// Radians of path parameter per second
    pub speed: f32,
    /// Per-axis frequency multipliers
    pub frequencies: Vector3<f32>,
}

impl EyePath {
    pub fn eye_at(&self, elapsed: Duration) -> Point3<f32> {
        let t = elapsed.as_secs_f32() * self.speed;
        let f = self.frequencies;
        Point3::new(
            (t * f.x).sin(),
            (t * f.y).cos(),
            (t * f.z).sin(),
        ) * self.amplitude
    }
}

impl Default for EyePath {
    fn default() -> Self {
        Self {
            amplitude: 4.0,
            speed: 0.25,
            frequencies: Vector3::new(1.0, 1.7, 1.1),
        }
    }
}

/// Chooses the eye position each frame. Holding any key hands control to the orbit camera.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EyeDriver {
    mode: EyeMode,
    path: EyePath,
}

impl EyeDriver {
    pub fn new(path: EyePath) -> Self {
        Self {
            mode: EyeMode::Animated,
            path,
        }
    }

    pub fn mode(&self) -> EyeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EyeMode) {
        if mode != self.mode {
            log::debug!("Eye mode switched to {:?}", mode);
        }
        self.mode = mode;
    }

    pub fn handle_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { input, .. } = event {
            self.key(input.state);
        }
    }

    fn key(&mut self, state: ElementState) {
        self.set_mode(match state {
            ElementState::Pressed => EyeMode::UserControlled,
            ElementState::Released => EyeMode::Animated,
        });
    }

    /// The eye position for a frame starting `elapsed` after launch
    pub fn eye(&self, elapsed: Duration, camera: &PerspectiveCamera) -> Point3<f32> {
        match self.mode {
            EyeMode::Animated => self.path.eye_at(elapsed),
            EyeMode::UserControlled => camera.eye_point(),
        }
    }
}
