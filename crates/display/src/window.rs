//! Address window cache.
//!
//! The controller keeps the last CASET/PASET ranges until told otherwise, so
//! a column or row range identical to the previous one does not need to be
//! sent again. Sequential plotting (a diagonal line, a text run) repeats one
//! of the two axes most of the time.

/// Last programmed column and page ranges; `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct AddressWindow {
    columns: Option<(u16, u16)>,
    pages: Option<(u16, u16)>,
}

impl AddressWindow {
    /// Empty cache: the next window programs both axes.
    pub(crate) const fn new() -> Self {
        Self {
            columns: None,
            pages: None,
        }
    }

    /// Forget both axes. Required after rotation, init, or any command that
    /// may have moved the controller's ranges behind the cache's back.
    pub(crate) fn invalidate(&mut self) {
        *self = Self::new();
    }

    /// Record a column range; `true` if it differs from the cached one and
    /// must be sent.
    pub(crate) fn update_columns(&mut self, x0: u16, x1: u16) -> bool {
        Self::update(&mut self.columns, (x0, x1))
    }

    /// Record a page range; `true` if it must be sent.
    pub(crate) fn update_pages(&mut self, y0: u16, y1: u16) -> bool {
        Self::update(&mut self.pages, (y0, y1))
    }

    fn update(slot: &mut Option<(u16, u16)>, range: (u16, u16)) -> bool {
        if *slot == Some(range) {
            false
        } else {
            *slot = Some(range);
            true
        }
    }
}

/// Encode a start/end pair as CASET/PASET parameters.
pub(crate) fn range_bytes(start: u16, end: u16) -> [u8; 4] {
    let [s0, s1] = start.to_be_bytes();
    let [e0, e1] = end.to_be_bytes();
    [s0, s1, e0, e1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_range_is_elided() {
        let mut w = AddressWindow::new();
        assert!(w.update_columns(3, 9));
        assert!(!w.update_columns(3, 9));
        assert!(w.update_columns(3, 10));
        assert!(w.update_pages(0, 0));
        assert!(!w.update_pages(0, 0));
    }

    #[test]
    fn invalidate_forces_both_axes() {
        let mut w = AddressWindow::new();
        w.update_columns(1, 1);
        w.update_pages(2, 2);
        w.invalidate();
        assert!(w.update_columns(1, 1));
        assert!(w.update_pages(2, 2));
    }

    #[test]
    fn range_bytes_are_big_endian() {
        assert_eq!(range_bytes(0x0102, 0x013F), [0x01, 0x02, 0x01, 0x3F]);
    }
}
