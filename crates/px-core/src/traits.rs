use crate::raster::Raster;

/// Produz um raster só a partir de parâmetros, sem imagem de entrada.
///
/// Implemented by the procedural cube slices.
///
/// # Example
/// ```
/// use px_core::traits::Generator;
/// use px_core::raster::Raster;
///
/// struct Black;
/// impl Generator for Black {
///     fn generate(&self) -> Raster { Raster::new(2, 2, 3) }
///     fn native_size(&self) -> (u32, u32) { (2, 2) }
/// }
/// assert_eq!(Black.generate().len(), 12);
/// ```
pub trait Generator {
    /// Render a fresh raster.
    fn generate(&self) -> Raster;

    /// Dimensions of the raster [`Generator::generate`] returns.
    fn native_size(&self) -> (u32, u32);
}

/// Transforms one raster into another of the same dimensions.
///
/// # Example
/// ```
/// use px_core::traits::Filter;
/// use px_core::raster::Raster;
///
/// struct Identity;
/// impl Filter for Identity {
///     fn apply(&self, input: &Raster) -> Raster { input.clone() }
///     fn name(&self) -> &'static str { "identity" }
/// }
/// let r = Raster::filled(3, 3, 1, 7);
/// assert_eq!(Identity.apply(&r), r);
/// ```
pub trait Filter {
    /// CONTRATO: output has the input's width, height and channel count.
    fn apply(&self, input: &Raster) -> Raster;

    /// Nome legível para logs.
    fn name(&self) -> &'static str;
}
