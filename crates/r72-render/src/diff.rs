#![forbid(unsafe_code)]

//! Change detection between two frames.
//!
//! The diff is a list of horizontal runs of changed cells. Runs separated
//! by a small gap of unchanged cells are coalesced: re-emitting a couple
//! of unchanged cells costs fewer bytes than the cursor reposition that a
//! separate run would need.

use crate::buffer::Buffer;

/// Unchanged-cell gap below which two runs on a row are merged.
const COALESCE_GAP: u16 = 4;

/// A horizontal run of cells to repaint: row `y`, columns `x..x + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    pub y: u16,
    pub x: u16,
    pub len: u16,
}

#[derive(Debug, Clone, Default)]
pub struct BufferDiff {
    runs: Vec<ChangeRun>,
}

impl BufferDiff {
    /// Compute the runs that must be repainted to turn `old` into `new`.
    ///
    /// A size mismatch repaints everything; the caller clears the
    /// terminal on resize anyway, so the previous content is gone.
    #[must_use]
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        if old.width() != new.width() || old.height() != new.height() {
            return Self::full(new);
        }

        let mut runs = Vec::new();
        for y in 0..new.height() {
            let mut run_start: Option<u16> = None;
            let mut run_end: u16 = 0;
            for x in 0..new.width() {
                let changed = old.get(x, y) != new.get(x, y);
                if changed {
                    match run_start {
                        None => {
                            run_start = Some(x);
                            run_end = x;
                        }
                        Some(start) => {
                            if x - run_end > COALESCE_GAP {
                                runs.push(ChangeRun {
                                    y,
                                    x: start,
                                    len: run_end - start + 1,
                                });
                                run_start = Some(x);
                            }
                            run_end = x;
                        }
                    }
                }
            }
            if let Some(start) = run_start {
                runs.push(ChangeRun {
                    y,
                    x: start,
                    len: run_end - start + 1,
                });
            }
        }
        Self { runs }
    }

    /// Every cell of `buffer` as one run per row.
    #[must_use]
    pub fn full(buffer: &Buffer) -> Self {
        let runs = (0..buffer.height())
            .filter(|_| buffer.width() > 0)
            .map(|y| ChangeRun {
                y,
                x: 0,
                len: buffer.width(),
            })
            .collect();
        Self { runs }
    }

    #[must_use]
    pub fn runs(&self) -> &[ChangeRun] {
        &self.runs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs (not cells).
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }
}
