//! Wheel arithmetic for the selected bigram.
//!
//! For a selected pair `(l1, l2)` with `diff = |l2 - l1|`, each anchor `a` is drawn with its two
//! reflected endpoints `a - diff` and `a + diff`, and the positions strictly between the anchor
//! and each endpoint, going the short way around, are active.

use serde::Serialize;

/// Display tags for one wheel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanCell {
    pub is_middle: bool,
    pub left_end: bool,
    pub right_end: bool,
    pub is_active: bool,
}

/// Tags for one anchor on a wheel of `n` positions.
pub fn anchor_cells(n: usize, anchor: usize, diff: usize) -> Vec<SpanCell> {
    let mut cells = vec![SpanCell::default(); n];
    if anchor >= n {
        return cells;
    }
    cells[anchor].is_middle = true;
    let diff = diff % n;
    if diff == 0 {
        return cells;
    }

    let wrap = |offset: i64| (anchor as i64 + offset).rem_euclid(n as i64) as usize;
    cells[wrap(-(diff as i64))].left_end = true;
    cells[wrap(diff as i64)].right_end = true;

    let reach = diff.min(n - diff);
    for k in 1..reach as i64 {
        cells[wrap(-k)].is_active = true;
        cells[wrap(k)].is_active = true;
    }
    cells
}

/// Both anchors of a selected bigram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BigramSpan {
    pub l1: usize,
    pub l2: usize,
    pub l1_cells: Vec<SpanCell>,
    pub l2_cells: Vec<SpanCell>,
}

impl BigramSpan {
    pub fn new(n: usize, l1: usize, l2: usize) -> Self {
        let diff = l1.abs_diff(l2);
        Self {
            l1,
            l2,
            l1_cells: anchor_cells(n, l1, diff),
            l2_cells: anchor_cells(n, l2, diff),
        }
    }

    /// Positions active around either anchor.
    pub fn active(&self) -> Vec<usize> {
        self.l1_cells
            .iter()
            .zip(&self.l2_cells)
            .enumerate()
            .filter(|(_, (a, b))| a.is_active || b.is_active)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(cells: &[SpanCell], pick: impl Fn(&SpanCell) -> bool) -> Vec<usize> {
        cells
            .iter()
            .enumerate()
            .filter(|(_, c)| pick(c))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_self_pair_marks_only_middle() {
        let span = BigramSpan::new(29, 4, 4);
        assert_eq!(tagged(&span.l1_cells, |c| c.is_middle), vec![4]);
        assert!(span.active().is_empty());
        assert!(span.l1_cells.iter().all(|c| !c.left_end && !c.right_end));
    }

    #[test]
    fn test_span_without_wrap() {
        let cells = anchor_cells(29, 10, 3);
        assert_eq!(tagged(&cells, |c| c.left_end), vec![7]);
        assert_eq!(tagged(&cells, |c| c.right_end), vec![13]);
        assert_eq!(tagged(&cells, |c| c.is_active), vec![8, 9, 11, 12]);
        assert!(!cells[10].is_active);
    }

    #[test]
    fn test_span_wraps_past_zero() {
        let cells = anchor_cells(29, 1, 3);
        assert_eq!(tagged(&cells, |c| c.left_end), vec![27]);
        assert_eq!(tagged(&cells, |c| c.is_active), vec![0, 2, 3, 28]);
    }

    #[test]
    fn test_long_diff_takes_short_way() {
        // diff 20 is the same reflection as diff 9 the other way round.
        let cells = anchor_cells(29, 0, 20);
        assert_eq!(tagged(&cells, |c| c.left_end), vec![9]);
        assert_eq!(tagged(&cells, |c| c.right_end), vec![20]);
        assert_eq!(tagged(&cells, |c| c.is_active).len(), 16);
        assert!(cells[1].is_active && cells[28].is_active);
        assert!(!cells[9].is_active && !cells[20].is_active);
    }

    #[test]
    fn test_symmetry() {
        let a = BigramSpan::new(29, 3, 11);
        let b = BigramSpan::new(29, 11, 3);
        assert_eq!(a.active(), b.active());
        assert_eq!(a.l1_cells, b.l2_cells);
    }
}
