use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Shape of a mesh or point cloud, in local space.
///
/// Sphere and ring are parametric, the host renderer tessellates them.
/// Rings lie in the local XY plane, like a flat disc facing +Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
    /// Raw vertex positions, used for point clouds.
    Buffer { positions: Vec<Vec3> },
}

impl Geometry {
    /// Sphere with the same segment count in both directions.
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> Self {
        Self::Ring {
            inner_radius,
            outer_radius,
            theta_segments,
        }
    }

    pub fn buffer(positions: Vec<Vec3>) -> Self {
        Self::Buffer { positions }
    }

    /// Vertex positions for buffer geometry, empty for parametric shapes.
    pub fn positions(&self) -> &[Vec3] {
        match self {
            Self::Buffer { positions } => positions,
            _ => &[],
        }
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` slice for the host.
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(self.positions())
    }

    /// Local-space bounding box. `None` for an empty buffer.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Self::Sphere { radius, .. } => {
                let r = radius.abs();
                Some(Aabb::new(Vec3::splat(-r), Vec3::splat(r)))
            }
            Self::Ring { inner_radius, outer_radius, .. } => {
                let r = inner_radius.abs().max(outer_radius.abs());
                Some(Aabb::new(Vec3::new(-r, -r, 0.0), Vec3::new(r, r, 0.0)))
            }
            Self::Buffer { positions } => Aabb::from_points(positions.iter().copied()),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::new(first, first);
        for p in iter {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Box enclosing all eight corners after `matrix` is applied.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let corners = (0..8).map(|i| {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            matrix.transform_point3(corner)
        });
        // Eight corners are always present.
        Aabb::from_points(corners).unwrap_or(*self)
    }
}
