use std::fmt;
use std::str::FromStr;

use px_core::error::CoreError;
use px_core::raster::Raster;
use px_core::traits::Generator;

/// Side length used when the caller has no preference.
pub const DEFAULT_RESOLUTION: u32 = 256;

/// One of the six orientations for cutting the RGB cube.
///
/// Faces come in complementary pairs (1/2, 3/4, 5/6) sharing the same
/// geometry; the even face reads the slice index from the opposite side.
///
/// # Example
/// ```
/// use px_source::Face;
/// let face = Face::from_index(2).unwrap();
/// assert_eq!(face.plane_value(10), 245);
/// assert!(Face::from_index(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// R-G plane, blue held at the slice index.
    F1 = 1,
    /// R-G plane, blue held at `255 - slice`.
    F2 = 2,
    /// G-B plane, red held at the slice index.
    F3 = 3,
    /// G-B plane, red held at `255 - slice`.
    F4 = 4,
    /// R-B plane, green held at the slice index.
    F5 = 5,
    /// R-B plane, green held at `255 - slice`.
    F6 = 6,
}

/// RGB channel position in a 3-channel raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Sample 0.
    Red = 0,
    /// Sample 1.
    Green = 1,
    /// Sample 2.
    Blue = 2,
}

/// Descriptive metadata shown in the menu.
#[derive(Clone, Copy, Debug)]
pub struct FaceInfo {
    /// Face this entry describes.
    pub face: Face,
    /// Nome exibido no menu.
    pub name: &'static str,
}

/// Tabela estática das faces, na ordem 1..=6.
pub static FACE_INFO: [FaceInfo; 6] = [
    FaceInfo {
        face: Face::F1,
        name: "Plano R-G (B constante)",
    },
    FaceInfo {
        face: Face::F2,
        name: "Plano R-G (B constante, oposto)",
    },
    FaceInfo {
        face: Face::F3,
        name: "Plano G-B (R constante)",
    },
    FaceInfo {
        face: Face::F4,
        name: "Plano G-B (R constante, oposto)",
    },
    FaceInfo {
        face: Face::F5,
        name: "Plano R-B (G constante)",
    },
    FaceInfo {
        face: Face::F6,
        name: "Plano R-B (G constante, oposto)",
    },
];

impl Face {
    /// All faces in menu order.
    pub const ALL: [Face; 6] = [Face::F1, Face::F2, Face::F3, Face::F4, Face::F5, Face::F6];

    /// # Errors
    /// Returns [`CoreError::InvalidFace`] outside 1..=6.
    pub fn from_index(index: i64) -> Result<Self, CoreError> {
        match index {
            1 => Ok(Face::F1),
            2 => Ok(Face::F2),
            3 => Ok(Face::F3),
            4 => Ok(Face::F4),
            5 => Ok(Face::F5),
            6 => Ok(Face::F6),
            other => Err(CoreError::InvalidFace(other)),
        }
    }

    /// Face number, 1..=6.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Menu label from [`FACE_INFO`].
    #[must_use]
    pub fn name(self) -> &'static str {
        FACE_INFO[usize::from(self.index() - 1)].name
    }

    /// Channel held constant across the slice.
    #[must_use]
    pub fn constant_channel(self) -> Channel {
        match self {
            Face::F1 | Face::F2 => Channel::Blue,
            Face::F3 | Face::F4 => Channel::Red,
            Face::F5 | Face::F6 => Channel::Green,
        }
    }

    /// Even faces measure the slice from the far side of the cube.
    #[must_use]
    pub fn is_opposite(self) -> bool {
        self.index() % 2 == 0
    }

    /// Value written into the constant channel for `slice_index`
    /// (clamped to [0, 255] first).
    #[must_use]
    pub fn plane_value(self, slice_index: i64) -> u8 {
        let s = clamp_slice(slice_index);
        if self.is_opposite() { 255 - s } else { s }
    }
}

impl TryFrom<i64> for Face {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Face::from_index(value)
    }
}

impl FromStr for Face {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::Config(format!("face ilegível: '{}'", s.trim())))?;
        Face::from_index(n)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Clamp a slice index into [0, 255].
///
/// # Example
/// ```
/// use px_source::procedural::clamp_slice;
/// assert_eq!(clamp_slice(-5), 0);
/// assert_eq!(clamp_slice(300), 255);
/// assert_eq!(clamp_slice(42), 42);
/// ```
#[must_use]
pub fn clamp_slice(slice_index: i64) -> u8 {
    slice_index.clamp(0, 255) as u8
}

/// `resolution` evenly spaced values from 0 to 255 inclusive, truncated to u8.
///
/// Step is `255 / (resolution - 1)`; the last value is pinned to 255 so
/// rounding in the step never loses the top of the cube.
///
/// # Example
/// ```
/// use px_source::procedural::axis_ramp;
/// assert_eq!(axis_ramp(4), vec![0, 85, 170, 255]);
/// assert_eq!(axis_ramp(3), vec![0, 127, 255]);
/// assert_eq!(axis_ramp(1), vec![0]);
/// ```
#[must_use]
pub fn axis_ramp(resolution: u32) -> Vec<u8> {
    match resolution {
        0 => Vec::new(),
        1 => vec![0],
        n => {
            let step = 255.0 / f64::from(n - 1);
            (0..n)
                .map(|i| if i == n - 1 { 255 } else { (f64::from(i) * step) as u8 })
                .collect()
        }
    }
}

/// Render one planar cross-section of the RGB cube.
///
/// Output is `resolution × resolution`, 3 channels. With `row` the ramp
/// value of the pixel's row and `col` that of its column:
///
/// | faces | red   | green | blue  |
/// |-------|-------|-------|-------|
/// | 1, 2  | col   | row   | plane |
/// | 3, 4  | plane | row   | col   |
/// | 5, 6  | col   | plane | col   |
///
/// `plane` is [`Face::plane_value`]. Out-of-range slice indices are clamped.
///
/// # Example
/// ```
/// use px_source::{Face, generate_slice};
/// let img = generate_slice(Face::F1, 0, 4);
/// assert_eq!(img.dimensions(), (4, 4));
/// assert_eq!(img.pixel(3, 1), &[255, 85, 0]);
/// ```
#[must_use]
pub fn generate_slice(face: Face, slice_index: i64, resolution: u32) -> Raster {
    let plane = face.plane_value(slice_index);
    let ramp = axis_ramp(resolution);
    log::debug!("fatia face={face} plano={plane} resolução={resolution}");

    let mut img = Raster::new(resolution, resolution, 3);
    if img.is_empty() {
        return img;
    }

    let stride = resolution as usize * 3;
    for (row_idx, row) in img.data.chunks_exact_mut(stride).enumerate() {
        let row_v = ramp[row_idx];
        for (px, &col_v) in row.chunks_exact_mut(3).zip(&ramp) {
            let rgb = match face {
                Face::F1 | Face::F2 => [col_v, row_v, plane],
                Face::F3 | Face::F4 => [plane, row_v, col_v],
                // Red and blue both follow the column.
                Face::F5 | Face::F6 => [col_v, plane, col_v],
            };
            px.copy_from_slice(&rgb);
        }
    }

    img
}

/// A fully specified slice request, usable wherever a [`Generator`] is.
///
/// # Example
/// ```
/// use px_core::traits::Generator;
/// use px_source::Face;
/// use px_source::procedural::CubeSlice;
/// let slice = CubeSlice::new(Face::F2, 300);
/// assert_eq!(slice.slice_index, 255);
/// assert_eq!(slice.generate().dimensions(), (256, 256));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeSlice {
    /// Orientation of the cut.
    pub face: Face,
    /// Slice index, already clamped.
    pub slice_index: u8,
    /// Output side length.
    pub resolution: u32,
}

impl CubeSlice {
    /// Slice at [`DEFAULT_RESOLUTION`]; `slice_index` is clamped.
    #[must_use]
    pub fn new(face: Face, slice_index: i64) -> Self {
        Self {
            face,
            slice_index: clamp_slice(slice_index),
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Same slice at another side length.
    #[must_use]
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }
}

impl Generator for CubeSlice {
    fn generate(&self) -> Raster {
        generate_slice(self.face, i64::from(self.slice_index), self.resolution)
    }

    fn native_size(&self) -> (u32, u32) {
        (self.resolution, self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_face1_slice0_res4() {
        let img = generate_slice(Face::F1, 0, 4);
        assert_eq!((img.width, img.height, img.channels), (4, 4, 3));
        assert!(img.channel(2).all(|b| b == 0));
        let ramp = [0, 85, 170, 255];
        for y in 0..4u32 {
            for x in 0..4u32 {
                assert_eq!(img.sample(x, y, 0), ramp[x as usize]);
                assert_eq!(img.sample(x, y, 1), ramp[y as usize]);
            }
        }
    }

    #[test]
    fn slice_index_is_clamped() {
        assert_eq!(generate_slice(Face::F1, -5, 8), generate_slice(Face::F1, 0, 8));
        assert_eq!(generate_slice(Face::F3, 300, 8), generate_slice(Face::F3, 255, 8));
        assert!(generate_slice(Face::F5, 1000, 8).channel(1).all(|g| g == 255));
    }

    #[test]
    fn complementary_faces_sum_to_255() {
        for s in [0, 1, 77, 128, 254, 255] {
            let a = generate_slice(Face::F1, s, 16);
            let b = generate_slice(Face::F2, s, 16);
            for (ba, bb) in a.channel(2).zip(b.channel(2)) {
                assert_eq!(u16::from(ba) + u16::from(bb), 255);
            }
            assert!(a.channel(0).eq(b.channel(0)));
            assert!(a.channel(1).eq(b.channel(1)));
        }
    }

    #[test]
    fn faces_3_4_hold_red() {
        let img = generate_slice(Face::F4, 55, 4);
        assert!(img.channel(0).all(|r| r == 200));
        assert_eq!(img.pixel(2, 1), &[200, 85, 170]);
    }

    #[test]
    fn faces_5_6_mirror_red_into_blue() {
        let img = generate_slice(Face::F6, 5, 4);
        assert!(img.channel(1).all(|g| g == 250));
        assert!(img.channel(0).eq(img.channel(2)));
        assert_eq!(img.pixel(1, 3), &[85, 250, 85]);
    }

    #[test]
    fn full_resolution_ramp_is_identity() {
        let ramp = axis_ramp(DEFAULT_RESOLUTION);
        assert!(ramp.iter().enumerate().all(|(i, &v)| usize::from(v) == i));
    }

    #[test]
    fn degenerate_resolutions() {
        assert!(generate_slice(Face::F1, 10, 0).is_empty());
        let one = generate_slice(Face::F3, 10, 1);
        assert_eq!(one.pixel(0, 0), &[10, 0, 0]);
    }

    #[test]
    fn face_table_and_parsing() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(usize::from(face.index()), i + 1);
            assert_eq!(FACE_INFO[i].face, *face);
        }
        assert_eq!("  3 ".parse::<Face>(), Ok(Face::F3));
        assert_eq!(Face::try_from(0), Err(CoreError::InvalidFace(0)));
        assert!("três".parse::<Face>().is_err());
        assert_eq!(Face::F5.name(), "Plano R-B (G constante)");
        assert_eq!(Face::F4.constant_channel(), Channel::Red);
    }

    #[test]
    fn cube_slice_generator_matches_function() {
        let slice = CubeSlice::new(Face::F5, 99).with_resolution(8);
        assert_eq!(slice.native_size(), (8, 8));
        assert_eq!(slice.generate(), generate_slice(Face::F5, 99, 8));
    }
}
