use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Smoothing window used by the blur stage. Both dimensions are positive
/// and odd; the only way to build one is through [`KernelSize::new`].
///
/// # Example
/// ```
/// use px_core::kernel::KernelSize;
/// let k = KernelSize::new(5, 3).unwrap();
/// assert_eq!((k.width(), k.height()), (5, 3));
/// assert!(KernelSize::new(4, 4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KernelSize {
    width: u32,
    height: u32,
}

impl KernelSize {
    /// 5×5 window.
    pub const DEFAULT: Self = Self {
        width: 5,
        height: 5,
    };

    /// # Errors
    /// Returns [`CoreError::InvalidKernel`] if either dimension is zero or even.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(CoreError::InvalidKernel { width, height });
        }
        Ok(Self { width, height })
    }

    /// Horizontal tap count.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Vertical tap count.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for KernelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `"WxH"` (case-insensitive `x`) or a single `"N"` for a square window.
impl FromStr for KernelSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| CoreError::Config(format!("tamanho de kernel ilegível: '{s}'")))
        };
        match s.split_once('x') {
            Some((w, h)) => Self::new(parse(w)?, parse(h)?),
            None => {
                let n = parse(&s)?;
                Self::new(n, n)
            }
        }
    }
}
