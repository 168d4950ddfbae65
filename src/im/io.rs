use super::core::{Im, Lum8Im};
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// Raster file I/O
// -----------------------------------------------------------------------------

/// Decode any raster format the codec supports (PNG, JPEG, ...) into a
/// single-channel luminance image. Multi-channel inputs are reduced with the
/// standard Rec.601 grayscale weights.
pub fn load_lum8<P: AsRef<Path>>(path: P) -> ImageResult<Lum8Im> {
    let img = image::open(path)?.into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let arr = img.into_raw();

    if arr.len() != w * h {
        return Err(dim_mismatch_err());
    }

    Ok(Im { w, h, s: w, arr })
}

impl Im<u8, 1> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let img = image::GrayImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips_lum8_pixels() {
        let mut im = Lum8Im::new(3, 2);
        im.arr.copy_from_slice(&[0, 51, 102, 153, 204, 255]);

        let path =
            std::env::temp_dir().join(format!("rscan_io_round_trip_{}.png", std::process::id()));
        im.save_png(&path).unwrap();

        let loaded = load_lum8(&path).unwrap();
        assert_eq!(loaded.w, 3);
        assert_eq!(loaded.h, 2);
        assert_eq!(loaded.arr, im.arr);

        let _ = std::fs::remove_file(&path);
    }
}
