use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can abort a conversion. Each variant names the stage and
/// carries the offending path; none are retried.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file exists but cannot be interpreted as image data.
    #[error("decoding {}: unsupported or corrupt image data: {source}", .path.display())]
    UnsupportedFormat {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Resampling collapsed a dimension to zero (or the input raster was
    /// already zero-sized).
    #[error("resampling {}: ratio {ratio} collapses {w}x{h} to a zero dimension", .path.display())]
    InvalidDimensions {
        path: PathBuf,
        w: usize,
        h: usize,
        ratio: f64,
    },

    /// Reading the input or writing an output failed at the filesystem level.
    #[error("file io on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Split an `image` crate error into the taxonomy: filesystem-level
    /// failures are `Io`, everything else means undecodable input data.
    pub fn from_image_err(path: &std::path::Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            source => Self::UnsupportedFormat {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn messages_name_the_stage_and_path() {
        let err = ConvertError::InvalidDimensions {
            path: PathBuf::from("in.png"),
            w: 4,
            h: 2,
            ratio: 0.01,
        };
        let msg = err.to_string();
        assert!(msg.contains("resampling"));
        assert!(msg.contains("in.png"));
        assert!(msg.contains("4x2"));
    }

    #[test]
    fn io_level_image_errors_map_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConvertError::from_image_err(
            Path::new("gone.png"),
            image::ImageError::IoError(io),
        );
        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(err.to_string().contains("gone.png"));
    }
}
