//! Camera module: free-fly camera, input translation, frustum, and
//! render view.
//!
//! The camera and frustum are owned by a `RenderSession` (or any caller);
//! nothing here is global.

mod camera;
mod frustum;
mod input;
mod render_view;

pub use camera::{
    Camera, CameraConfig,
    PITCH_LIMIT, MIN_FOV, MAX_FOV, NEAR_PLANE, FAR_PLANE,
};
pub use frustum::{
    Frustum, FrustumTest, FRUSTUM_EDGES,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use input::{CameraMovement, MouseTracker};
pub use render_view::RenderView;
