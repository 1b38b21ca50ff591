use nalgebra::{Matrix4, Point3, Vector3};

pub trait Camera {
    fn matrix(&self, width: u32, height: u32) -> Matrix4<f32>;
}

/// An arcball camera
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub pivot: Point3<f32>,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub clipping: (f32, f32),
}

impl Camera for PerspectiveCamera {
    /// Extract the camera matrix
    fn matrix(&self, width: u32, height: u32) -> Matrix4<f32> {
        let perspective = Matrix4::new_perspective(
            width as f32 / height.max(1) as f32,
            self.fov,
            self.clipping.0,
            self.clipping.1,
        );
        perspective * self.view()
    }
}

impl PerspectiveCamera {
    /// Orbit camera at `eye`, pivoting around `target`
    pub fn look_at(eye: Point3<f32>, target: Point3<f32>) -> Self {
        let offset = eye - target;
        let distance = offset.norm();
        let (yaw, pitch) = if distance > 0.0 {
            (offset.z.atan2(offset.x), (offset.y / distance).asin())
        } else {
            (0.0, 0.0)
        };
        Self {
            pivot: target,
            distance,
            yaw,
            pitch,
            ..Self::default()
        }
    }

    pub fn up() -> Vector3<f32> {
        Vector3::y()
    }

    /// View matrix
    pub fn view(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye_point(), &self.pivot, &Self::up())
    }

    /// Eye position relative to the pivot
    pub fn eye(&self) -> Vector3<f32> {
        Vector3::new(
            self.yaw.cos() * self.pitch.cos().abs(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos().abs(),
        ) * self.distance
    }

    /// Eye position in world space
    pub fn eye_point(&self) -> Point3<f32> {
        self.pivot + self.eye()
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            pivot: Point3::origin(),
            distance: 15.0,
            yaw: 1.0,
            pitch: 1.0,
            fov: 35.0f32.to_radians(),
            clipping: (0.1, 1000.0),
        }
    }
}
