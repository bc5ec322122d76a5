use crate::error::CoreError;

/// Dense 8-bit raster, row-major, channels interleaved.
///
/// One sample per channel per pixel: 1 channel for grayscale, 3 for RGB,
/// 4 for RGBA. The buffer is owned and sized exactly to
/// `width * height * channels`.
///
/// # Example
/// ```
/// use px_core::raster::Raster;
/// let r = Raster::new(10, 10, 3);
/// assert_eq!(r.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Samples, row-major, `channels` bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples per pixel.
    pub channels: u8,
}

impl Raster {
    /// Cria um raster preenchido com zeros.
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// let r = Raster::new(4, 2, 1);
    /// assert_eq!(r.dimensions(), (4, 2));
    /// assert!(r.data.iter().all(|&v| v == 0));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self::filled(width, height, channels, 0)
    }

    /// Raster with every sample set to `value`.
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// let r = Raster::filled(3, 3, 1, 128);
    /// assert_eq!(r.sample(2, 2, 0), 128);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        debug_assert!(matches!(channels, 1 | 3 | 4), "unsupported channel count");
        Self {
            data: vec![value; width as usize * height as usize * usize::from(channels)],
            width,
            height,
            channels,
        }
    }

    /// Wrap an existing sample buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedChannels`] for a channel count other
    /// than 1, 3 or 4, and [`CoreError::InvalidBuffer`] when `data` is not
    /// exactly `width * height * channels` long.
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// assert!(Raster::from_raw(2, 2, 1, vec![0; 4]).is_ok());
    /// assert!(Raster::from_raw(2, 2, 3, vec![0; 4]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, CoreError> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(CoreError::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * usize::from(channels);
        if data.len() != expected {
            return Err(CoreError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Offset of sample `c` of pixel (x, y) in `data`.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, x: u32, y: u32, c: u8) -> usize {
        (y as usize * self.width as usize + x as usize) * usize::from(self.channels) + usize::from(c)
    }

    /// Sample `c` of pixel (x, y). Reads past the end of the buffer yield 0.
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32, c: u8) -> u8 {
        self.data.get(self.index(x, y, c)).copied().unwrap_or(0)
    }

    /// Escreve a amostra `c` do pixel (x, y).
    #[inline(always)]
    pub fn set_sample(&mut self, x: u32, y: u32, c: u8, value: u8) {
        let idx = self.index(x, y, c);
        self.data[idx] = value;
    }

    /// All samples of pixel (x, y).
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// let mut r = Raster::new(2, 2, 3);
    /// r.set_sample(1, 0, 2, 9);
    /// assert_eq!(r.pixel(1, 0), &[0, 0, 9]);
    /// ```
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.index(x, y, 0);
        &self.data[start..start + usize::from(self.channels)]
    }

    /// Iterate over a single channel plane, row-major.
    pub fn channel(&self, c: u8) -> impl Iterator<Item = u8> + '_ {
        self.data
            .iter()
            .skip(usize::from(c))
            .step_by(usize::from(self.channels.max(1)))
            .copied()
    }

    /// `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples (not pixels).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-area raster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major_interleaved() {
        let r = Raster::new(4, 3, 3);
        assert_eq!(r.index(0, 0, 0), 0);
        assert_eq!(r.index(1, 0, 2), 5);
        assert_eq!(r.index(0, 1, 0), 12);
        assert_eq!(r.index(3, 2, 2), r.len() - 1);
    }

    #[test]
    fn channel_iterates_one_plane() {
        let mut r = Raster::new(2, 2, 3);
        for y in 0..2 {
            for x in 0..2 {
                r.set_sample(x, y, 1, (y * 2 + x) as u8);
            }
        }
        let green: Vec<u8> = r.channel(1).collect();
        assert_eq!(green, vec![0, 1, 2, 3]);
        assert!(r.channel(0).all(|v| v == 0));
    }

    #[test]
    fn from_raw_rejects_bad_input() {
        assert_eq!(
            Raster::from_raw(2, 2, 2, vec![0; 8]),
            Err(CoreError::UnsupportedChannels(2))
        );
        assert_eq!(
            Raster::from_raw(3, 2, 1, vec![0; 5]),
            Err(CoreError::InvalidBuffer {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn zero_area_is_empty() {
        let r = Raster::new(0, 0, 3);
        assert!(r.is_empty());
        assert_eq!(r.channel(0).count(), 0);
    }
}
