pub mod core;
#[allow(unused_imports)]
pub use self::core::{Im, Lum8Im, Lum16Im, MaskIm};

pub mod roi;
#[allow(unused_imports)]
pub use roi::ROI;

pub mod io;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-label")]
pub mod label;

#[cfg(feature = "im-label")]
#[allow(unused_imports)]
pub use label::{label_im, LabelInfo};
