use crate::im::{Lum8Im, MaskIm};

/// 50% of the 0..=255 intensity range.
pub const THRESHOLD_50_PCT: u8 = 128;

/// Binarize a luminance image. A pixel becomes foreground (255) iff its
/// intensity is strictly greater than `threshold`; a pixel equal to the
/// threshold is background.
pub fn im_threshold(src: &Lum8Im, threshold: u8) -> MaskIm {
    let mut dst = MaskIm::new(src.w, src.h);
    for (d, &v) in dst.arr.iter_mut().zip(&src.arr) {
        *d = if v > threshold { 255 } else { 0 };
    }
    dst
}
