//! Popup placement: anchoring the calendar panel to the input row.
//!
//! The panel opens below or above its anchor, optionally flipping to the
//! other side when the preferred side has no room inside the host bounds.
//! Horizontally the panel hugs the anchor's left edge and is shifted back
//! into bounds when it would overflow.

use crate::geometry::{Region, Size};

/// Preferred vertical side for the calendar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarPlacement {
    Up,
    #[default]
    Down,
}

/// Compute the panel region for a popup anchored to `anchor`.
///
/// `Down` places the panel's top edge on the row below the anchor, `Up`
/// places its bottom edge on the row above. With `flip` enabled the
/// other side is used when the preferred side cannot hold the full panel
/// inside `bounds` but the other side can. The result is clipped to
/// `bounds`, so a panel taller than the host comes back cropped rather
/// than out of range.
pub fn place_popup(
    anchor: Region,
    panel: Size,
    placement: CalendarPlacement,
    flip: bool,
    bounds: Region,
) -> Region {
    let below_y = anchor.bottom();
    let above_y = anchor.y - panel.height;
    let fits_below = below_y + panel.height <= bounds.bottom();
    let fits_above = above_y >= bounds.y;

    let y = match placement {
        CalendarPlacement::Down => {
            if flip && !fits_below && fits_above {
                above_y
            } else {
                below_y
            }
        }
        CalendarPlacement::Up => {
            if flip && !fits_above && fits_below {
                below_y
            } else {
                above_y
            }
        }
    };

    let mut x = anchor.x;
    if x + panel.width > bounds.right() {
        x = bounds.right() - panel.width;
    }
    if x < bounds.x {
        x = bounds.x;
    }

    Region::new(x, y, panel.width, panel.height).intersection(bounds)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Size = Size::new(21, 8);

    fn bounds() -> Region {
        Region::new(0, 0, 80, 24)
    }

    #[test]
    fn down_opens_below_anchor() {
        let anchor = Region::new(2, 3, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, false, bounds());
        assert_eq!(region, Region::new(2, 4, 21, 8));
    }

    #[test]
    fn up_opens_above_anchor() {
        let anchor = Region::new(2, 12, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Up, false, bounds());
        assert_eq!(region, Region::new(2, 4, 21, 8));
    }

    #[test]
    fn down_flips_up_when_no_room_below() {
        // Anchor on row 20; 8 rows below would end at 29 > 24.
        let anchor = Region::new(2, 20, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, true, bounds());
        assert_eq!(region, Region::new(2, 12, 21, 8));
    }

    #[test]
    fn down_does_not_flip_when_flip_disabled() {
        let anchor = Region::new(2, 20, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, false, bounds());
        // Cropped to the bottom edge instead.
        assert_eq!(region, Region::new(2, 21, 21, 3));
    }

    #[test]
    fn up_flips_down_when_no_room_above() {
        let anchor = Region::new(2, 3, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Up, true, bounds());
        assert_eq!(region, Region::new(2, 4, 21, 8));
    }

    #[test]
    fn no_flip_when_neither_side_fits() {
        // 10-row host, anchor in the middle: neither side holds 8 rows.
        let tight = Region::new(0, 0, 80, 10);
        let anchor = Region::new(2, 5, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, true, tight);
        // Stays on the preferred side, cropped.
        assert_eq!(region, Region::new(2, 6, 21, 4));
    }

    #[test]
    fn shifts_left_at_right_edge() {
        let anchor = Region::new(70, 3, 10, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, false, bounds());
        assert_eq!(region.x, 80 - 21);
        assert_eq!(region.width, 21);
    }

    #[test]
    fn clamps_to_left_edge_when_host_narrower_than_panel() {
        let narrow = Region::new(0, 0, 15, 24);
        let anchor = Region::new(0, 3, 15, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Down, false, narrow);
        assert_eq!(region.x, 0);
        assert_eq!(region.width, 15);
    }

    #[test]
    fn up_against_top_without_flip_crops() {
        let anchor = Region::new(2, 3, 30, 1);
        let region = place_popup(anchor, PANEL, CalendarPlacement::Up, false, bounds());
        // Top 5 rows are above the host and get clipped away.
        assert_eq!(region, Region::new(2, 0, 21, 3));
    }
}
