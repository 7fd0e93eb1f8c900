/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(N, P) + D >= 0 for all planes
///
/// Matrix convention: glam stores matrices column-major, so the rows the
/// Gribb & Hartmann extraction needs are read with `Mat4::row`. Clip depth
/// follows OpenGL (z in [-w, w]), which is what makes `row3 + row2` the
/// near plane.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::AABB;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// NDC cube corners, near face then far face, each counter-clockwise
/// from bottom-left.
const NDC_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Corner index pairs forming the 12 frustum edges (for wireframes).
pub const FRUSTUM_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Six frustum planes plus the eight world-space corners.
///
/// `Frustum::default()` is the uninitialized state: all planes are zero,
/// so every containment query answers `true` until `update` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    planes: [Vec4; 6],
    /// World-space corners, near face then far face
    corners: [Vec3; 8],
    /// Set by the first `update`
    valid: bool,
}

impl Frustum {
    /// Build a frustum from a combined view-projection matrix.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let mut frustum = Self::default();
        frustum.set_view_projection(vp);
        frustum
    }

    /// Rebuild planes and corners from the camera's matrices.
    ///
    /// Uses `projection * view`. Overwrites all previous state.
    pub fn update(&mut self, view: &Mat4, projection: &Mat4) {
        self.set_view_projection(&(*projection * *view));
    }

    /// Rebuild planes and corners from a combined view-projection matrix.
    pub fn set_view_projection(&mut self, vp: &Mat4) {
        let (r0, r1, r2, r3) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));

        self.planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        for plane in &mut self.planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        // f32 inversion of a near 0.1 / far 5000 projection pushes the far
        // corners units outside their own planes; unproject in f64.
        let inverse = vp.as_dmat4().inverse();
        for (corner, ndc) in self.corners.iter_mut().zip(NDC_CORNERS) {
            *corner = inverse.project_point3(ndc.as_dvec3()).as_vec3();
        }

        self.valid = true;
    }

    // ===== ACCESSORS =====

    /// `false` until the first `update`.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// Plane by index (`PLANE_LEFT`..`PLANE_FAR`).
    pub fn plane(&self, index: usize) -> Vec4 {
        self.planes[index]
    }

    /// World-space corners, near face then far face.
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Corner pairs for the 12 wireframe edges.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        FRUSTUM_EDGES
            .iter()
            .map(|&(a, b)| (self.corners[a], self.corners[b]))
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    // ===== CONTAINMENT =====

    /// Point test, boundary inclusive.
    pub fn is_point_in_frustum(&self, point: Vec3) -> bool {
        self.is_sphere_in_frustum(point, 0.0)
    }

    /// Conservative sphere test: rejected only when the sphere lies
    /// entirely outside at least one plane.
    pub fn is_sphere_in_frustum(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(center) + plane.w >= -radius)
    }

    /// AABB test using the "positive vertex": for each plane, only the
    /// corner furthest along the normal is tested. If that corner is
    /// outside, the whole box is.
    ///
    /// May return false positives (conservative), never false negatives.
    pub fn is_aabb_in_frustum(&self, min: Vec3, max: Vec3) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(positive_vertex(normal, min, max)) + plane.w >= 0.0
        })
    }

    /// `is_aabb_in_frustum` for an `AABB` value.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.is_aabb_in_frustum(aabb.min, aabb.max)
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(positive_vertex(normal, aabb.min, aabb.max)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            // n-vertex is the p-vertex with min/max swapped
            if normal.dot(positive_vertex(normal, aabb.max, aabb.min)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

/// Corner of [min, max] furthest along `normal`.
fn positive_vertex(normal: Vec3, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { max.x } else { min.x },
        if normal.y >= 0.0 { max.y } else { min.y },
        if normal.z >= 0.0 { max.z } else { min.z },
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
