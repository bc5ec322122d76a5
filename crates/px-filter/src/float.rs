use px_core::raster::Raster;

/// `f64` twin of [`Raster`] for intermediate arithmetic.
///
/// Same layout: row-major, channels interleaved.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatRaster {
    /// Samples, unbounded.
    pub data: Vec<f64>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples per pixel.
    pub channels: u8,
}

impl FloatRaster {
    /// Zeroed buffer with the given shape.
    #[must_use]
    pub fn zeros(width: u32, height: u32, channels: u8) -> Self {
        Self {
            data: vec![0.0; width as usize * height as usize * usize::from(channels)],
            width,
            height,
            channels,
        }
    }

    /// Promote 8-bit samples to `f64` without changing their value.
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// use px_filter::float::FloatRaster;
    /// let f = FloatRaster::from_raster(&Raster::filled(2, 1, 1, 200));
    /// assert_eq!(f.data, vec![200.0, 200.0]);
    /// ```
    #[must_use]
    pub fn from_raster(raster: &Raster) -> Self {
        Self {
            data: raster.data.iter().map(|&v| f64::from(v)).collect(),
            width: raster.width,
            height: raster.height,
            channels: raster.channels,
        }
    }

    /// Clamp to [0, 255] then narrow to `u8` by truncation.
    ///
    /// # Example
    /// ```
    /// use px_filter::float::FloatRaster;
    /// let mut f = FloatRaster::zeros(4, 1, 1);
    /// f.data = vec![-3.0, 12.9, 254.99, 900.0];
    /// assert_eq!(f.to_raster().data, vec![0, 12, 254, 255]);
    /// ```
    #[must_use]
    pub fn to_raster(&self) -> Raster {
        Raster {
            data: self.data.iter().map(|&v| saturate(v)).collect(),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Offset of sample `c` of pixel (x, y).
    #[inline(always)]
    #[must_use]
    pub fn index(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.width as usize + x) * usize::from(self.channels) + c
    }
}

/// Clamp into the 8-bit range and truncate toward zero.
#[inline(always)]
#[must_use]
pub fn saturate(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
