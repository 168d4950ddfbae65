use crate::im::{Im, MaskIm};
use image::imageops::FilterType;

/// Midpoint used to re-binarize after bilinear interpolation: intensity at or
/// above this is foreground. Interpolation produces intermediate values, so
/// the two-level pixel classes must be restored afterwards.
pub const REBIN_MIDPOINT: u8 = 128;

/// Target dimensions for a resample, `round(dim * ratio)` per axis.
///
/// Returns None when either axis collapses to zero (including zero-sized
/// inputs and non-positive or non-finite ratios).
pub fn scaled_dims(w: usize, h: usize, ratio: f64) -> Option<(usize, usize)> {
    if w == 0 || h == 0 || !(ratio > 0.0) || !ratio.is_finite() {
        return None;
    }

    let tw = (w as f64 * ratio).round() as usize;
    let th = (h as f64 * ratio).round() as usize;
    if tw == 0 || th == 0 {
        return None;
    }
    Some((tw, th))
}

pub fn rebinarize_inplace(im: &mut MaskIm) {
    for v in &mut im.arr {
        *v = if *v >= REBIN_MIDPOINT { 255 } else { 0 };
    }
}

/// Resample a binary mask by `ratio` using bilinear interpolation, then
/// re-binarize at [`REBIN_MIDPOINT`].
///
/// A ratio that leaves both dimensions unchanged is the identity transform.
/// Returns None when the target size collapses (see [`scaled_dims`]).
pub fn im_resample(src: &MaskIm, ratio: f64) -> Option<MaskIm> {
    let (tw, th) = scaled_dims(src.w, src.h, ratio)?;

    if tw == src.w && th == src.h {
        return Some(src.clone());
    }

    let img = image::GrayImage::from_raw(src.w as u32, src.h as u32, src.arr.clone())?;
    let resized = image::imageops::resize(&img, tw as u32, th as u32, FilterType::Triangle);

    let mut out = Im {
        w: tw,
        h: th,
        s: tw,
        arr: resized.into_raw(),
    };
    rebinarize_inplace(&mut out);
    Some(out)
}
