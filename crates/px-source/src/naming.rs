use std::path::Path;

use crate::procedural::cube::Face;

/// `face{F}_fatia{SSS}.png`, slice index zero-padded to three digits.
///
/// # Example
/// ```
/// use px_source::Face;
/// use px_source::naming::slice_file_name;
/// assert_eq!(slice_file_name(Face::F3, 7), "face3_fatia007.png");
/// ```
#[must_use]
pub fn slice_file_name(face: Face, slice_index: u8) -> String {
    format!("face{}_fatia{slice_index:03}.png", face.index())
}

/// Boost factor rendered for a file name: the decimal point is always
/// present for finite values and is replaced by `p`.
///
/// # Example
/// ```
/// use px_source::naming::k_suffix;
/// assert_eq!(k_suffix(1.5), "1p5");
/// assert_eq!(k_suffix(2.0), "2p0");
/// assert_eq!(k_suffix(-0.25), "-0p25");
/// ```
#[must_use]
pub fn k_suffix(k: f64) -> String {
    // Debug keeps the ".0" on integral floats, Display drops it.
    format!("{k:?}").replace('.', "p")
}

/// `{stem}_k{suffix}.png` for an input image path.
///
/// # Example
/// ```
/// use px_source::naming::boosted_file_name;
/// use std::path::Path;
/// assert_eq!(boosted_file_name(Path::new("img/lena.jpg"), 2.0), "lena_k2p0.png");
/// ```
#[must_use]
pub fn boosted_file_name(input: &Path, k: f64) -> String {
    let stem = input
        .file_stem()
        .map_or_else(|| "imagem".into(), |s| s.to_string_lossy());
    format!("{stem}_k{}.png", k_suffix(k))
}
