//! Geometry for drawing portals: outlines, frustum edges, and the textured
//! quad the off-screen view is pasted onto.
//!
//! Meshes are `(vertices, indices)` pairs. Line meshes are drawn as lines,
//! one segment per index pair.

use crate::portal::Portal;
use crate::vertex::{TexturedVertex, Vertex};
use anyhow::{bail, Result};
use nalgebra::{Point2, Point3};

/// Indices of the two triangles covering [`textured_quad`]
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

/// Closed outline `top left -> top right -> bottom right -> bottom left -> top left`
pub fn outline_mesh(portal: &Portal, color: [f32; 3]) -> (Vec<Vertex>, Vec<u16>) {
    let vertices = portal
        .corners()
        .iter()
        .map(|&corner| Vertex::from_nalgebra(corner, color))
        .collect();
    let indices = vec![0, 1, 1, 2, 2, 3, 3, 0];
    (vertices, indices)
}

/// Segments from `eye` to each corner (top left, top right, bottom right,
/// bottom left), then to the nearest point on the portal's plane.
pub fn frustum_mesh(portal: &Portal, eye: &Point3<f32>, color: [f32; 3]) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = vec![Vertex::from_nalgebra(*eye, color)];
    vertices.extend(
        portal
            .corners()
            .iter()
            .map(|&corner| Vertex::from_nalgebra(corner, color)),
    );
    vertices.push(Vertex::from_nalgebra(portal.nearest_point(eye), color));

    let indices = vec![0, 1, 0, 2, 0, 3, 0, 4, 0, 5];
    (vertices, indices)
}

/// Triangle strip `top left, top right, bottom left, bottom right`.
///
/// Texture coordinates assume a bottom-left texture origin, so the off-screen
/// image appears upright and unmirrored on the portal's front face.
pub fn textured_quad(portal: &Portal) -> [TexturedVertex; 4] {
    [
        TexturedVertex::from_nalgebra(portal.top_left(), Point2::new(0.0, 1.0)),
        TexturedVertex::from_nalgebra(portal.top_right(), Point2::new(1.0, 1.0)),
        TexturedVertex::from_nalgebra(portal.bottom_left(), Point2::new(0.0, 0.0)),
        TexturedVertex::from_nalgebra(portal.bottom_right(), Point2::new(1.0, 0.0)),
    ]
}

/// Accumulates line meshes into a single indexed mesh
#[derive(Debug, Default, Clone)]
pub struct LineBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mesh, rebasing its indices onto the vertices already present
    pub fn append(&mut self, (vertices, indices): (Vec<Vertex>, Vec<u16>)) -> Result<()> {
        let total = self.vertices.len() + vertices.len();
        if total > usize::from(u16::MAX) + 1 {
            bail!("Line batch of {} vertices exceeds the u16 index range", total);
        }
        let base = self.vertices.len() as u16;
        self.vertices.extend(vertices);
        self.indices.extend(indices.into_iter().map(|i| base + i));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn into_mesh(self) -> (Vec<Vertex>, Vec<u16>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wall() -> Portal {
        Portal::from_corners(
            Point3::new(-1.0, -1.0, -4.0),
            Point3::new(1.0, -1.0, -4.0),
            Point3::new(-1.0, 1.0, -4.0),
        )
        .unwrap()
    }

    fn segments(mesh: &(Vec<Vertex>, Vec<u16>)) -> Vec<([f32; 3], [f32; 3])> {
        let (vertices, indices) = mesh;
        indices
            .chunks(2)
            .map(|pair| (vertices[pair[0] as usize].pos, vertices[pair[1] as usize].pos))
            .collect()
    }

    #[test]
    fn outline_is_closed_loop_in_order() {
        let portal = wall();
        let mesh = outline_mesh(&portal, [1.0, 0.0, 0.0]);
        let tl = [-1.0, 1.0, -4.0];
        let tr = [1.0, 1.0, -4.0];
        let br = [1.0, -1.0, -4.0];
        let bl = [-1.0, -1.0, -4.0];
        assert_eq!(segments(&mesh), vec![(tl, tr), (tr, br), (br, bl), (bl, tl)]);
        assert!(mesh.0.iter().all(|v| v.color == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn frustum_lines_fan_out_from_eye() {
        let portal = wall();
        let eye = Point3::new(0.5, 0.25, 2.0);
        let mesh = frustum_mesh(&portal, &eye, [0.7, 1.0, 0.7]);
        let lines = segments(&mesh);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|(from, _)| *from == [0.5, 0.25, 2.0]));
        assert_eq!(lines[0].1, [-1.0, 1.0, -4.0]);
        assert_eq!(lines[2].1, [1.0, -1.0, -4.0]);

        let nearest = lines[4].1;
        assert_abs_diff_eq!(nearest[0], 0.5);
        assert_abs_diff_eq!(nearest[1], 0.25);
        assert_abs_diff_eq!(nearest[2], -4.0);
    }

    #[test]
    fn quad_strip_is_upright() {
        let portal = wall();
        let quad = textured_quad(&portal);
        assert_eq!(quad[0].pos, [-1.0, 1.0, -4.0]);
        assert_eq!(quad[0].uv, [0.0, 1.0]);
        assert_eq!(quad[1].uv, [1.0, 1.0]);
        assert_eq!(quad[2].pos, [-1.0, -1.0, -4.0]);
        assert_eq!(quad[2].uv, [0.0, 0.0]);
        assert_eq!(quad[3].uv, [1.0, 0.0]);

        // Both triangles share the strip's winding
        let facing: Vec<f32> = QUAD_INDICES
            .chunks(3)
            .map(|triangle| {
                let corner = |i: u16| {
                    let [x, y, z] = quad[i as usize].pos;
                    Point3::new(x, y, z)
                };
                let (a, b, c) = (corner(triangle[0]), corner(triangle[1]), corner(triangle[2]));
                portal.normal().dot(&(b - a).cross(&(c - a)))
            })
            .collect();
        assert_eq!(facing.len(), 2);
        assert!(facing[0] * facing[1] > 0.0);
    }

    #[test]
    fn batch_rebases_indices() {
        let portal = wall();
        let mut batch = LineBatch::new();
        assert!(batch.is_empty());
        batch.append(outline_mesh(&portal, [1.0; 3])).unwrap();
        batch
            .append(frustum_mesh(&portal, &Point3::new(0.0, 0.0, 1.0), [0.5; 3]))
            .unwrap();

        assert_eq!(batch.vertices().len(), 4 + 6);
        assert_eq!(&batch.indices()[..8], &[0, 1, 1, 2, 2, 3, 3, 0]);
        assert_eq!(&batch.indices()[8..], &[4, 5, 4, 6, 4, 7, 4, 8, 4, 9]);
    }
}
