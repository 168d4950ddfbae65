use std::path::Path;

use log::{debug, info};

use crate::desc::{JobDesc, Mode};
use crate::error::{ConvertError, Result};
use crate::im::{MaskIm, io as im_io};
use crate::resample_im::im_resample;
use crate::scanline::RunScanner;
use crate::svg::Drawing;
use crate::threshold_im::im_threshold;

#[cfg(feature = "im-label")]
use crate::im::label::{LabelInfo, label_im};

/// Summary of one completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub canvas_w: usize,
    pub canvas_h: usize,
    pub n_elements: usize,
}

/// Run a job in its configured mode. The pipeline is a strict linear sequence
/// of whole-raster transforms; each stage consumes its input and the first
/// failure aborts the run with nothing written at the output path.
pub fn run_job(desc: &JobDesc) -> Result<ConvertReport> {
    match desc.mode {
        Mode::Scanline => bitmap_to_svg(desc),
        #[cfg(feature = "im-label")]
        Mode::Regions => regions_to_svg(desc),
    }
}

/// Scanline mode: binarize, resample, then emit one filled rectangle per
/// maximal horizontal foreground run.
pub fn bitmap_to_svg(desc: &JobDesc) -> Result<ConvertReport> {
    let mask = load_mask(desc)?;
    let mask = resample_stage(desc, mask)?;

    info!("processing horizontal lines...");
    let drawing = runs_to_drawing(&mask);
    debug!("found {} lines to process", drawing.elements().len());

    finish(desc, &mask, &drawing)
}

/// Region mode: binarize, resample, then emit one scan-order pixel path per
/// 8-connected foreground region.
#[cfg(feature = "im-label")]
pub fn regions_to_svg(desc: &JobDesc) -> Result<ConvertReport> {
    let mask = load_mask(desc)?;
    let mask = resample_stage(desc, mask)?;

    info!("finding contiguous regions...");
    let drawing = regions_to_drawing(&mask);
    debug!("found {} regions", drawing.elements().len());

    finish(desc, &mask, &drawing)
}

// Stages
// -----------------------------------------------------------------------------

fn load_mask(desc: &JobDesc) -> Result<MaskIm> {
    let input = Path::new(&desc.input_path);
    info!("opening image file: {}", input.display());
    let lum = im_io::load_lum8(input).map_err(|e| ConvertError::from_image_err(input, e))?;

    info!("applying threshold filter...");
    let mask = im_threshold(&lum, desc.threshold);
    debug!("mask {}x{}, {} foreground px", mask.w, mask.h, mask.count_fg());
    Ok(mask)
}

fn resample_stage(desc: &JobDesc, mask: MaskIm) -> Result<MaskIm> {
    let ratio = desc.ratio();
    info!("resizing the image...");
    match im_resample(&mask, ratio) {
        Some(resized) => Ok(resized),
        None => Err(ConvertError::InvalidDimensions {
            path: Path::new(&desc.input_path).to_path_buf(),
            w: mask.w,
            h: mask.h,
            ratio,
        }),
    }
}

fn finish(desc: &JobDesc, mask: &MaskIm, drawing: &Drawing) -> Result<ConvertReport> {
    if let Some(p) = &desc.debug_mask_path {
        let p = Path::new(p);
        debug!("writing debug mask: {}", p.display());
        mask.save_png(p)
            .map_err(|e| ConvertError::from_image_err(p, e))?;
    }

    info!("saving SVG file: {}", desc.output_path);
    let out = Path::new(&desc.output_path);
    drawing.save(out).map_err(|source| ConvertError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    Ok(ConvertReport {
        canvas_w: drawing.w,
        canvas_h: drawing.h,
        n_elements: drawing.elements().len(),
    })
}

/// Rectangle-per-run drawing for a mask, canvas sized to the mask. Rects are
/// added in run order (row-major, left-to-right).
pub fn runs_to_drawing(mask: &MaskIm) -> Drawing {
    let mut drawing = Drawing::new(mask.w, mask.h);
    for run in RunScanner::new(mask) {
        drawing.add_rect(run.x, run.y, run.len, 1);
    }
    drawing
}

/// Path-per-region drawing for a mask, canvas sized to the mask.
#[cfg(feature = "im-label")]
pub fn regions_to_drawing(mask: &MaskIm) -> Drawing {
    let (_labels, infos) = label_im(mask);
    let mut drawing = Drawing::new(mask.w, mask.h);
    for (i, info) in infos.iter().enumerate().skip(1) {
        debug!(
            "region {i}: {} px in {}x{} bounds",
            info.size,
            info.roi.w(),
            info.roi.h()
        );
        if let Some(d) = region_path_d(info, mask.s) {
            drawing.add_path(d);
        }
    }
    drawing
}

/// Scan-order path through a region's pixels: M to the first, L to the rest,
/// then Z.
#[cfg(feature = "im-label")]
fn region_path_d(info: &LabelInfo, stride: usize) -> Option<String> {
    let mut iz = info.pixel_iz.iter();
    let &first = iz.next()?;

    let mut d = format!("M {},{}", first % stride, first / stride);
    for &i in iz {
        d.push_str(&format!(" L {},{}", i % stride, i / stride));
    }
    d.push_str(" Z");
    Some(d)
}

// Tests
// -----------------------------------------------------------------------------
