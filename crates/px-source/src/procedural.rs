pub mod cube;

pub use cube::{Channel, CubeSlice, DEFAULT_RESOLUTION, FACE_INFO, Face, FaceInfo, axis_ramp, clamp_slice};
