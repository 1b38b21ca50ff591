//! The demo scene: a handful of solids seen through three wall portals.
//!
//! Meshing is left to the renderer, so objects only describe which solid to
//! draw and where.

use crate::error::Result;
use crate::portal::Portal;
use nalgebra::{Matrix4, Point3, Vector3};

/// A solid, in its local space before the object transform
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned box centered on the origin
    Cube { size: Vector3<f32> },
    /// Unit sphere built by subdividing an icosahedron
    Icosphere { subdivisions: u32 },
    /// Capsule along the y-axis
    Capsule {
        length: f32,
        radius: f32,
        axis_subdivisions: u32,
        height_subdivisions: u32,
    },
    Teapot { subdivisions: u32 },
}

/// A single object in the scene
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Object {
    pub shape: Shape,
    /// Transformation applied to each vertex of this object
    pub transform: Matrix4<f32>,
}

/// Colors used to draw a portal in the main view
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PortalStyle {
    /// Rectangle outline and thumbnail border
    pub outline: [f32; 3],
    /// Lines from the eye to the corners
    pub frustum: [f32; 3],
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScenePortal {
    pub portal: Portal,
    pub style: PortalStyle,
}

pub fn demo_scene() -> Vec<Object> {
    let y_axis = Vector3::y_axis();
    vec![
        Object {
            shape: Shape::Cube {
                size: Vector3::repeat(5.0),
            },
            transform: Matrix4::new_translation(&Vector3::new(5.0, 0.0, -10.0))
                * Matrix4::from_axis_angle(&y_axis, 45f32.to_radians()),
        },
        Object {
            shape: Shape::Icosphere { subdivisions: 2 },
            transform: Matrix4::new_translation(&Vector3::new(-5.0, 0.0, -10.0))
                * Matrix4::new_scaling(2.5),
        },
        Object {
            shape: Shape::Capsule {
                length: 4.0,
                radius: 1.0,
                axis_subdivisions: 30,
                height_subdivisions: 10,
            },
            transform: Matrix4::new_translation(&Vector3::new(-10.0, 0.0, 0.0)),
        },
        Object {
            shape: Shape::Teapot { subdivisions: 6 },
            transform: Matrix4::new_translation(&Vector3::new(10.0, -2.0, 0.0))
                * Matrix4::from_axis_angle(&y_axis, 90f32.to_radians())
                * Matrix4::new_scaling(5.0),
        },
    ]
}

/// Left, front and right walls of a 10 unit box around the origin, all facing inward
pub fn demo_portals() -> Result<Vec<ScenePortal>> {
    let left = Portal::from_corners(
        Point3::new(-5.0, -5.0, 5.25),
        Point3::new(-5.0, -5.0, -4.75),
        Point3::new(-5.0, 5.0, 5.25),
    )?;
    let front = Portal::from_corners(
        Point3::new(-5.0, -5.0, -5.0),
        Point3::new(5.0, -5.0, -5.0),
        Point3::new(-5.0, 5.0, -5.0),
    )?;
    let right = Portal::from_corners(
        Point3::new(5.0, -5.0, -4.75),
        Point3::new(5.0, -5.0, 5.25),
        Point3::new(5.0, 5.0, -4.75),
    )?;

    Ok(vec![
        ScenePortal {
            portal: left,
            style: PortalStyle {
                outline: [1.0, 0.0, 0.0],
                frustum: [1.0, 0.7, 0.7],
            },
        },
        ScenePortal {
            portal: front,
            style: PortalStyle {
                outline: [0.0, 1.0, 0.0],
                frustum: [0.7, 1.0, 0.7],
            },
        },
        ScenePortal {
            portal: right,
            style: PortalStyle {
                outline: [0.0, 0.0, 1.0],
                frustum: [0.7, 0.7, 1.0],
            },
        },
    ])
}
