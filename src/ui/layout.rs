//! Screen geometry for the selector card and mouse hit-testing.
//!
//! The renderer and the mouse handler both derive positions from
//! [`selector_layout`], so a click always lands on what was drawn there.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ All Accounts                $39,982.00 ⇅ │  header
//! └──────────────────────────────────────────┘
//! ┌──────────────────────────────────────────┐
//! │ ■  Checking · 5501            $32,402.19 │  one row per account
//! │ ■  Savings · 2399             $10,000.00 │
//! │ □  Credit · 1767              -$2,420.19 │
//! │ All accounts                  $39,982.00 │  summary
//! │        Add or manage connections         │  footer
//! └──────────────────────────────────────────┘
//! ```

use ratatui::layout::Rect;

/// Widest the card is drawn, in columns.
pub const CARD_MAX_WIDTH: u16 = 60;

/// Columns at the start of an account row that belong to the icon.
pub const ICON_WIDTH: u16 = 3;

const HEADER_HEIGHT: u16 = 3;

/// Where each part of the selector is drawn. Every rect is clipped to the
/// frame; parts that fall entirely outside it have zero area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLayout {
    pub header: Rect,
    /// Bordered block around rows, summary and footer. `None` when collapsed.
    pub list: Option<Rect>,
    pub rows: Vec<Rect>,
    pub summary: Option<Rect>,
    pub footer: Option<Rect>,
}

/// A clickable part of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Header,
    /// Icon of the account at this index
    Icon(usize),
    /// Any other cell of the account row at this index
    Row(usize),
    Summary,
    ManageConnections,
}

pub fn selector_layout(area: Rect, account_count: usize, expanded: bool) -> SelectorLayout {
    let card_width = area.width.saturating_sub(2).min(CARD_MAX_WIDTH);
    let x = area.x + area.width.saturating_sub(card_width) / 2;
    let y = area.y.saturating_add(1);

    let header = clip(Rect::new(x, y, card_width, HEADER_HEIGHT), area);

    if !expanded {
        return SelectorLayout {
            header,
            list: None,
            rows: Vec::new(),
            summary: None,
            footer: None,
        };
    }

    let count = u16::try_from(account_count).unwrap_or(u16::MAX);
    let list_y = y.saturating_add(HEADER_HEIGHT);
    let list_height = count.saturating_add(4);
    let list = clip(Rect::new(x, list_y, card_width, list_height), area);

    let inner_x = x.saturating_add(1);
    let inner_width = card_width.saturating_sub(2);
    let line = |offset: u16| {
        clip(
            Rect::new(inner_x, list_y.saturating_add(1).saturating_add(offset), inner_width, 1),
            area,
        )
    };

    let rows = (0..count).map(line).collect();

    SelectorLayout {
        header,
        list: Some(list),
        rows,
        summary: Some(line(count)),
        footer: Some(line(count.saturating_add(1))),
    }
}

/// Resolve a terminal cell to the part of the selector drawn there.
///
/// A click on an account's icon resolves to [`HitTarget::Icon`] only, never
/// also to the row beneath it.
pub fn hit_test(layout: &SelectorLayout, column: u16, row: u16) -> Option<HitTarget> {
    if contains(layout.header, column, row) {
        return Some(HitTarget::Header);
    }

    for (index, rect) in layout.rows.iter().enumerate() {
        if contains(*rect, column, row) {
            return if column < rect.x.saturating_add(ICON_WIDTH) {
                Some(HitTarget::Icon(index))
            } else {
                Some(HitTarget::Row(index))
            };
        }
    }

    if layout.summary.is_some_and(|r| contains(r, column, row)) {
        return Some(HitTarget::Summary);
    }
    if layout.footer.is_some_and(|r| contains(r, column, row)) {
        return Some(HitTarget::ManageConnections);
    }

    None
}

fn clip(rect: Rect, area: Rect) -> Rect {
    let clipped = rect.intersection(area);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::new(area.x, area.y, 0, 0)
    } else {
        clipped
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_collapsed_has_only_header() {
        let layout = selector_layout(area(), 3, false);
        assert_eq!(layout.header, Rect::new(10, 1, 60, 3));
        assert!(layout.list.is_none());
        assert!(layout.rows.is_empty());
    }

    #[test]
    fn test_expanded_positions() {
        let layout = selector_layout(area(), 3, true);
        assert_eq!(layout.list, Some(Rect::new(10, 4, 60, 7)));
        assert_eq!(layout.rows[0], Rect::new(11, 5, 58, 1));
        assert_eq!(layout.rows[2], Rect::new(11, 7, 58, 1));
        assert_eq!(layout.summary, Some(Rect::new(11, 8, 58, 1)));
        assert_eq!(layout.footer, Some(Rect::new(11, 9, 58, 1)));
    }

    #[test]
    fn test_narrow_terminal_shrinks_card() {
        let layout = selector_layout(Rect::new(0, 0, 30, 10), 1, false);
        assert_eq!(layout.header.width, 28);
        assert_eq!(layout.header.x, 1);
    }

    #[test]
    fn test_short_terminal_clips_rows() {
        let layout = selector_layout(Rect::new(0, 0, 80, 7), 5, true);
        assert_eq!(layout.rows[0].height, 1);
        assert_eq!(layout.rows[4].height, 0);
        assert_eq!(layout.footer.map(|r| r.height), Some(0));
    }

    #[test]
    fn test_hit_header() {
        let layout = selector_layout(area(), 3, false);
        assert_eq!(hit_test(&layout, 10, 1), Some(HitTarget::Header));
        assert_eq!(hit_test(&layout, 69, 3), Some(HitTarget::Header));
        assert_eq!(hit_test(&layout, 70, 3), None);
        assert_eq!(hit_test(&layout, 20, 5), None);
    }

    #[test]
    fn test_hit_icon_wins_over_row() {
        let layout = selector_layout(area(), 3, true);
        assert_eq!(hit_test(&layout, 11, 5), Some(HitTarget::Icon(0)));
        assert_eq!(hit_test(&layout, 13, 6), Some(HitTarget::Icon(1)));
        assert_eq!(hit_test(&layout, 14, 6), Some(HitTarget::Row(1)));
        assert_eq!(hit_test(&layout, 60, 7), Some(HitTarget::Row(2)));
    }

    #[test]
    fn test_hit_summary_and_footer() {
        let layout = selector_layout(area(), 3, true);
        assert_eq!(hit_test(&layout, 30, 8), Some(HitTarget::Summary));
        assert_eq!(hit_test(&layout, 30, 9), Some(HitTarget::ManageConnections));
        assert_eq!(hit_test(&layout, 10, 5), None);
    }
}
