/// Bounding volumes used for culling.
///
/// Local-space volumes are stored on each RenderInstance and moved into
/// world space with its world matrix at culling time.

use glam::{Mat4, Vec3};
use crate::camera::Frustum;

// ===== AABB =====

/// Axis-Aligned Bounding Box (component-wise `min <= max`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with half-size `half_extents`.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Tightest box around a point cloud. `None` if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// All eight corners.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            min,
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            max,
        ]
    }

    /// Transform this AABB by a matrix, returning the enclosing AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    /// Assumes an affine matrix.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Smallest sphere centered on the box that encloses it.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.extents().length())
    }
}

// ===== SPHERE =====

/// Bounding sphere (`radius >= 0`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Move the sphere by an affine matrix. The radius grows by the largest
    /// axis scale so non-uniform scaling stays conservative.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingSphere {
        let scale = matrix.x_axis.truncate().length()
            .max(matrix.y_axis.truncate().length())
            .max(matrix.z_axis.truncate().length());

        BoundingSphere {
            center: matrix.transform_point3(self.center),
            radius: self.radius * scale,
        }
    }
}

// ===== EITHER =====

/// A world-space volume ready for a frustum test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    Sphere(BoundingSphere),
    Aabb(AABB),
}

impl BoundingVolume {
    /// Conservative visibility against `frustum`.
    pub fn is_visible_in(&self, frustum: &Frustum) -> bool {
        match self {
            BoundingVolume::Sphere(sphere) => frustum.is_sphere_in_frustum(sphere.center, sphere.radius),
            BoundingVolume::Aabb(aabb) => frustum.is_aabb_in_frustum(aabb.min, aabb.max),
        }
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
