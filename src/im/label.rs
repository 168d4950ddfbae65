use super::core::{Lum16Im, MaskIm};
use super::roi::ROI;

/// Flood-fill the 8-connected foreground component containing the start pixel,
/// writing `fill_val` into `dst_im`.
///
/// Iterative with an explicit stack; recursion would hit the call-stack depth
/// limit on large contiguous regions. `visited` is shared across calls so a
/// full labeling pass probes each pixel a bounded number of times.
fn flood_im(
    src_im: &MaskIm,
    dst_im: &mut Lum16Im,
    visited: &mut [u8],
    start_x: usize,
    start_y: usize,
    fill_val: u16,
) -> (usize, Vec<usize>, ROI) {
    assert_eq!(src_im.w, dst_im.w, "src/dst width mismatch");
    assert_eq!(src_im.h, dst_im.h, "src/dst height mismatch");

    let w = src_im.w;
    let h = src_im.h;
    assert!(start_x < w && start_y < h, "start coords out of bounds");
    assert_eq!(visited.len(), w * h);

    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(w * h / 10 + 1024);
    stack.push((start_x, start_y));

    let mut filled = 0usize;
    let mut pixel_iz: Vec<usize> = Vec::new();
    let mut roi = ROI {
        l: start_x,
        t: start_y,
        r: start_x + 1,
        b: start_y + 1,
    };
    while let Some((x, y)) = stack.pop() {
        let v_i = y * w + x;
        if visited[v_i] != 0 {
            continue;
        }
        visited[v_i] = 1;

        let px = unsafe { *src_im.get_unchecked(x, y, 0) };
        if px == 0 {
            continue;
        }

        unsafe {
            *dst_im.get_unchecked_mut(x, y, 0) = fill_val;
        }
        filled += 1;

        pixel_iz.push(y * src_im.s + x);
        roi.l = roi.l.min(x);
        roi.t = roi.t.min(y);
        roi.r = roi.r.max(x + 1);
        roi.b = roi.b.max(y + 1);

        // All 8 neighbors; diagonal contact joins components.
        let l = x.saturating_sub(1);
        let t = y.saturating_sub(1);
        let r = (x + 1).min(w - 1);
        let b = (y + 1).min(h - 1);
        for ny in t..=b {
            for nx in l..=r {
                if nx == x && ny == y {
                    continue;
                }
                if visited[ny * w + nx] == 0 {
                    stack.push((nx, ny));
                }
            }
        }
    }

    pixel_iz.sort_unstable();

    (filled, pixel_iz, roi)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelInfo {
    pub size: usize,
    pub start_x: usize,
    pub start_y: usize,
    pub roi: ROI,
    /// Flat pixel indices (`y * s + x`) of the component, ascending.
    pub pixel_iz: Vec<usize>,
}

/// Label a mask's 8-connected foreground components.
///
/// Components are numbered from 1 in row-major scan order of their first
/// pixel; 0 is background. The info table is indexed by label id (and [0] is
/// reserved, do not use it!).
pub fn label_im(src_im: &MaskIm) -> (Lum16Im, Vec<LabelInfo>) {
    let w = src_im.w;
    let h = src_im.h;

    let mut dst_im = Lum16Im::new(w, h);
    let mut visited: Vec<u8> = vec![0; w * h];

    let mut group_info: Vec<LabelInfo> = vec![LabelInfo::default()];

    let mut group_i: usize = 1;
    for y in 0..h {
        for x in 0..w {
            if src_im.arr[y * src_im.s + x] == 0 {
                // Background pixel
                continue;
            }
            if dst_im.arr[y * dst_im.s + x] != 0 {
                // Already labeled
                continue;
            }

            let label_val = u16::try_from(group_i)
                .unwrap_or_else(|_| panic!("label value overflow at group_i={group_i}"));

            let (filled, pixel_iz, roi) =
                flood_im(src_im, &mut dst_im, &mut visited, x, y, label_val);

            // Ensure our table stays aligned with group ids.
            debug_assert_eq!(group_info.len(), group_i);
            group_info.push(LabelInfo {
                size: filled,
                start_x: x,
                start_y: y,
                roi,
                pixel_iz,
            });

            group_i += 1;
        }
    }

    (dst_im, group_info)
}

// Tests
// -----------------------------------------------------------------------------
