use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuração inválida: {0}")]
    Config(String),

    /// Sample buffer length does not match `width * height * channels`.
    #[error("Buffer inválido: {expected} amostras esperadas, {actual} recebidas")]
    InvalidBuffer {
        /// Length implied by the dimensions.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Channel count other than 1, 3 or 4.
    #[error("Número de canais não suportado: {0}")]
    UnsupportedChannels(u8),

    /// Smoothing window with a zero or even dimension.
    #[error("Kernel inválido: {width}×{height} (dimensões devem ser positivas e ímpares)")]
    InvalidKernel {
        /// Window width.
        width: u32,
        /// Window height.
        height: u32,
    },

    /// Face selector outside 1..=6.
    #[error("Face inválida: {0} (esperado um inteiro entre 1 e 6)")]
    InvalidFace(i64),
}
