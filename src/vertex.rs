use nalgebra::{Point2, Point3};

/// Colored vertex, used for line overlays
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

unsafe impl bytemuck::Zeroable for Vertex {}
unsafe impl bytemuck::Pod for Vertex {}

impl Vertex {
    pub fn new(pos: [f32; 3], color: [f32; 3]) -> Self {
        Self { pos, color }
    }

    pub fn from_nalgebra(pos: Point3<f32>, color: [f32; 3]) -> Self {
        Self {
            pos: *pos.coords.as_ref(),
            color,
        }
    }
}

/// Vertex carrying a texture coordinate, used to paste a portal's
/// off-screen image onto its quad
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TexturedVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

unsafe impl bytemuck::Zeroable for TexturedVertex {}
unsafe impl bytemuck::Pod for TexturedVertex {}

impl TexturedVertex {
    pub fn from_nalgebra(pos: Point3<f32>, uv: Point2<f32>) -> Self {
        Self {
            pos: *pos.coords.as_ref(),
            uv: *uv.coords.as_ref(),
        }
    }
}
