//! Pointer-to-action hit-testing against the fixed board layout.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::layout::BoardLayout;

/// What a pointer click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The back button — navigate to the home page.
    Back,
    /// The restart button — navigate to a fresh game.
    Restart,
    /// A column band — play this column (`0..7`, left to right).
    Column(usize),
}

/// Resolve a surface-relative point to a click target, or `None` if it hits
/// nothing.
///
/// Regions are tested in priority order — back button, restart button, then
/// columns left to right — and the first containing region wins. Containment
/// is strict ([`crate::geom::Rect::contains`]): a point exactly on a region
/// boundary matches nothing.
#[must_use]
pub fn hit_test(pt: Point, layout: &BoardLayout) -> Option<ClickTarget> {
    if layout.back.contains(pt) {
        return Some(ClickTarget::Back);
    }
    if layout.restart.contains(pt) {
        return Some(ClickTarget::Restart);
    }
    layout
        .columns
        .iter()
        .position(|band| band.contains(pt))
        .map(ClickTarget::Column)
}
