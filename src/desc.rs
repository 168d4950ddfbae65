use serde::Deserialize;

use crate::threshold_im::THRESHOLD_50_PCT;

/// Which conversion a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One filled rectangle per maximal horizontal foreground run.
    #[default]
    Scanline,
    /// One path per 8-connected foreground region, pixels in scan order.
    #[cfg(feature = "im-label")]
    Regions,
}

/// One conversion job. Every knob the pipeline honors arrives here; nothing
/// is read from process-wide state.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDesc {
    pub input_path: String,
    pub output_path: String,
    #[serde(default = "default_target_dpi")]
    pub target_dpi: f64,
    #[serde(default = "default_original_dpi")]
    pub original_dpi: f64,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// When set, the final binary mask is also written there as a PNG.
    #[serde(default)]
    pub debug_mask_path: Option<String>,
}

fn default_target_dpi() -> f64 {
    72.0
}

fn default_original_dpi() -> f64 {
    300.0
}

fn default_threshold() -> u8 {
    THRESHOLD_50_PCT
}

impl JobDesc {
    /// Scale ratio for resampling: target resolution over source resolution.
    /// Non-positive DPI values produce a non-positive ratio, which the
    /// resampler rejects as a collapsed size.
    pub fn ratio(&self) -> f64 {
        self.target_dpi / self.original_dpi
    }
}

pub fn parse_job_json(json_text: &str) -> Result<JobDesc, serde_json::Error> {
    serde_json::from_str(json_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_desc_applies_defaults() {
        let desc = parse_job_json(
            r#"{ "input_path": "in.png", "output_path": "out.svg" }"#,
        )
        .expect("minimal job json should deserialize");

        assert_eq!(desc.target_dpi, 72.0);
        assert_eq!(desc.original_dpi, 300.0);
        assert_eq!(desc.mode, Mode::Scanline);
        assert_eq!(desc.threshold, 128);
        assert!(desc.debug_mask_path.is_none());
        assert_eq!(desc.ratio(), 0.24);
    }

    #[test]
    fn job_desc_deserializes_all_fields() {
        let desc = parse_job_json(
            r#"
            {
                "input_path": "track.jpg",
                "output_path": "track.svg",
                "target_dpi": 300,
                "original_dpi": 300,
                "mode": "scanline",
                "threshold": 100,
                "debug_mask_path": "track_mask.png"
            }
            "#,
        )
        .expect("full job json should deserialize");

        assert_eq!(desc.ratio(), 1.0);
        assert_eq!(desc.threshold, 100);
        assert_eq!(desc.debug_mask_path.as_deref(), Some("track_mask.png"));
    }

    #[cfg(feature = "im-label")]
    #[test]
    fn job_desc_parses_regions_mode() {
        let desc = parse_job_json(
            r#"{ "input_path": "a.png", "output_path": "a.svg", "mode": "regions" }"#,
        )
        .expect("regions job json should deserialize");

        assert_eq!(desc.mode, Mode::Regions);
    }

    #[test]
    fn missing_required_path_is_an_error() {
        assert!(parse_job_json(r#"{ "output_path": "out.svg" }"#).is_err());
    }
}
