use crate::im::MaskIm;

/// A maximal horizontal sequence of foreground pixels on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: usize,
    pub y: usize,
    pub len: usize,
}

/// Per-row extraction state. Open-run bookkeeping never survives a row
/// boundary; the scanner closes any open run at the row's right edge.
#[derive(Debug, Clone, Copy)]
enum RowState {
    Idle,
    InRun { start_x: usize },
}

/// Lazy row-major run extraction: rows top-to-bottom, columns left-to-right,
/// one pass over the mask, non-restartable.
///
/// A foreground pixel while idle opens a run; a background pixel while in a
/// run closes and emits it. Runs on a row are therefore maximal, disjoint,
/// and yielded in ascending start order.
pub struct RunScanner<'a> {
    im: &'a MaskIm,
    x: usize,
    y: usize,
    state: RowState,
}

impl<'a> RunScanner<'a> {
    pub fn new(im: &'a MaskIm) -> Self {
        Self {
            im,
            x: 0,
            y: 0,
            state: RowState::Idle,
        }
    }
}

impl Iterator for RunScanner<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        while self.y < self.im.h {
            while self.x < self.im.w {
                let x = self.x;
                self.x += 1;

                let fg = self.im.is_fg(x, self.y);
                match (self.state, fg) {
                    (RowState::Idle, true) => self.state = RowState::InRun { start_x: x },
                    (RowState::InRun { start_x }, false) => {
                        self.state = RowState::Idle;
                        return Some(Run {
                            x: start_x,
                            y: self.y,
                            len: x - start_x,
                        });
                    }
                    _ => {}
                }
            }

            // Row edge closes an open run at `width`.
            let closed = match self.state {
                RowState::InRun { start_x } => Some(Run {
                    x: start_x,
                    y: self.y,
                    len: self.im.w - start_x,
                }),
                RowState::Idle => None,
            };

            self.state = RowState::Idle;
            self.x = 0;
            self.y += 1;

            if closed.is_some() {
                return closed;
            }
        }
        None
    }
}

/// Eager convenience wrapper around [`RunScanner`].
pub fn extract_runs(im: &MaskIm) -> Vec<Run> {
    RunScanner::new(im).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{mask_from_ascii, mask_to_ascii};

    fn paint_runs(w: usize, h: usize, runs: &[Run]) -> MaskIm {
        let mut mask = MaskIm::new(w, h);
        for run in runs {
            for x in run.x..run.x + run.len {
                mask.arr[run.y * mask.s + x] = 255;
            }
        }
        mask
    }

    #[test]
    fn background_row_yields_no_runs_and_full_row_yields_one() {
        let mask = mask_from_ascii(
            r#"
                .....
                #####
            "#,
        );

        let runs = extract_runs(&mask);
        assert_eq!(runs, vec![Run { x: 0, y: 1, len: 5 }]);
    }

    #[test]
    fn two_row_scenario_emits_expected_runs() {
        let mask = mask_from_ascii(
            r#"
                .##.
                ####
            "#,
        );

        let runs = extract_runs(&mask);
        assert_eq!(
            runs,
            vec![Run { x: 1, y: 0, len: 2 }, Run { x: 0, y: 1, len: 4 }]
        );
    }

    #[test]
    fn open_run_state_does_not_leak_across_rows() {
        // Row 0 ends in-run; row 1 starts with background. A leaked open run
        // would merge them or emit a bogus run at x=0.
        let mask = mask_from_ascii(
            r#"
                ..##
                ....
                #...
            "#,
        );

        let runs = extract_runs(&mask);
        assert_eq!(
            runs,
            vec![Run { x: 2, y: 0, len: 2 }, Run { x: 0, y: 2, len: 1 }]
        );
    }

    #[test]
    fn runs_per_row_are_disjoint_and_ordered() {
        let mask = mask_from_ascii(
            r#"
                #.##.#
                ##.###
            "#,
        );

        let runs = extract_runs(&mask);
        for pair in runs.windows(2) {
            if pair[0].y == pair[1].y {
                assert!(pair[0].x + pair[0].len < pair[1].x + 1, "runs overlap or touch");
            } else {
                assert!(pair[0].y < pair[1].y, "rows out of order");
            }
        }
        assert_eq!(runs.len(), 5);
    }

    #[test]
    fn runs_reconstruct_the_foreground_mask_exactly() {
        let mask = mask_from_ascii(
            r#"
                #..##..#
                ........
                ########
                .#.#.#.#
            "#,
        );

        let runs = extract_runs(&mask);
        let rebuilt = paint_runs(mask.w, mask.h, &runs);
        assert_eq!(mask_to_ascii(&rebuilt), mask_to_ascii(&mask));
    }

    #[test]
    fn scanner_is_lazy_and_single_pass() {
        let mask = mask_from_ascii(
            r#"
                #.#
            "#,
        );

        let mut scanner = RunScanner::new(&mask);
        assert_eq!(scanner.next(), Some(Run { x: 0, y: 0, len: 1 }));
        assert_eq!(scanner.next(), Some(Run { x: 2, y: 0, len: 1 }));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }
}
