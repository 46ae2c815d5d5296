//! Scroll-driven view state: navbar state and active-section tracking.
//!
//! Raw scroll events only record the new offset; the expensive pass over
//! the live layout runs at most once per engine tick, and only when the
//! offset actually changed.

use crate::constants::{
    ACTIVATION_MARGIN, ANCHOR_OFFSET, BACK_TO_TOP_THRESHOLD, NAVBAR_HIDE_THRESHOLD,
    NAVBAR_SCROLL_THRESHOLD, REVEAL_BOTTOM_MARGIN,
};
use crate::layout::SectionLayout;

/// Thresholds and margins for scroll-driven state, in document rows.
///
/// Defaults match the reference page; the terminal shell scales them
/// down to its much shorter documents.
#[derive(Debug, Clone)]
pub struct ViewPolicy {
    /// Margin subtracted from section boundaries before activation tests.
    pub activation_margin: u32,
    /// Offset above which the navbar is "scrolled" (exclusive boundary).
    pub navbar_threshold: u32,
    /// Offset past which scrolling down hides the navbar.
    pub hide_threshold: u32,
    /// Offset above which the back-to-top affordance shows.
    pub back_to_top_threshold: u32,
    /// Offset subtracted from a section top when jumping to it.
    pub anchor_offset: u32,
    /// Margin subtracted from the viewport bottom for reveal tests.
    pub reveal_margin: u32,
}

impl Default for ViewPolicy {
    fn default() -> Self {
        Self {
            activation_margin: ACTIVATION_MARGIN,
            navbar_threshold: NAVBAR_SCROLL_THRESHOLD,
            hide_threshold: NAVBAR_HIDE_THRESHOLD,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            anchor_offset: ANCHOR_OFFSET,
            reveal_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

impl ViewPolicy {
    /// A policy scaled for terminal documents, where a "page" is a few
    /// hundred rows rather than thousands of pixels.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            activation_margin: 4,
            navbar_threshold: 2,
            hide_threshold: 0, // never hide in the terminal shell
            back_to_top_threshold: 20,
            anchor_offset: 1,
            reveal_margin: 2,
        }
    }
}

/// Scroll-driven view state controller.
///
/// Owns the scroll offset, the navbar visual state, and the identity of
/// the active section. At most one section is active at any time; above
/// the first section's activation range, none is.
#[derive(Debug, Clone)]
pub struct ViewStateController {
    policy: ViewPolicy,
    scroll_offset: u32,
    /// Offset observed at the previous evaluation, for scroll direction.
    offset_at_last_eval: u32,
    dirty: bool,
    navbar_scrolled: bool,
    navbar_hidden: bool,
    back_to_top: bool,
    active_section: Option<String>,
}

impl ViewStateController {
    /// Create a controller with the given policy, at offset 0.
    #[must_use]
    pub fn new(policy: ViewPolicy) -> Self {
        Self {
            policy,
            scroll_offset: 0,
            offset_at_last_eval: 0,
            dirty: true,
            navbar_scrolled: false,
            navbar_hidden: false,
            back_to_top: false,
            active_section: None,
        }
    }

    /// Record a new scroll offset. Cheap; no layout work happens here.
    pub fn set_scroll(&mut self, offset: u32) {
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Whether the navbar is in its "scrolled" visual state.
    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    /// Whether the navbar is hidden (scrolling down past the threshold).
    #[must_use]
    pub fn navbar_hidden(&self) -> bool {
        self.navbar_hidden
    }

    /// Whether the back-to-top affordance is visible.
    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top
    }

    /// Identifier of the active section, if any.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// The policy in effect.
    #[must_use]
    pub fn policy(&self) -> &ViewPolicy {
        &self.policy
    }

    /// Activation range of a section: `[top - margin, bottom - margin)`.
    ///
    /// Computed in `i64` so sections near the document top keep a
    /// well-formed (possibly negative) lower bound.
    #[must_use]
    pub fn activation_range(&self, section: &SectionLayout) -> (i64, i64) {
        let margin = i64::from(self.policy.activation_margin);
        let top = i64::from(section.top);
        let bottom = i64::from(section.bottom());
        (top - margin, bottom - margin)
    }

    /// Re-derive all scroll-driven state from the live layout.
    ///
    /// Runs the layout pass only when the offset changed since the last
    /// evaluation (or on the first call). Sections are evaluated in
    /// document order and the first matching activation range wins.
    /// Returns true if any state changed.
    pub fn evaluate(&mut self, sections: &[SectionLayout]) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        let offset = self.scroll_offset;
        let scrolling_down = offset > self.offset_at_last_eval;
        self.offset_at_last_eval = offset;

        let scrolled = offset > self.policy.navbar_threshold;
        let hidden = self.policy.hide_threshold > 0
            && scrolling_down
            && offset > self.policy.hide_threshold;
        let back_to_top = offset > self.policy.back_to_top_threshold;

        let active = sections
            .iter()
            .find(|s| {
                let (lo, hi) = self.activation_range(s);
                let o = i64::from(offset);
                o >= lo && o < hi
            })
            .map(|s| s.id.clone());

        let changed = scrolled != self.navbar_scrolled
            || hidden != self.navbar_hidden
            || back_to_top != self.back_to_top
            || active != self.active_section;

        self.navbar_scrolled = scrolled;
        self.navbar_hidden = hidden;
        self.back_to_top = back_to_top;
        self.active_section = active;

        changed
    }

    /// Target scroll offset for jumping to a section.
    #[must_use]
    pub fn scroll_target(&self, section: &SectionLayout) -> u32 {
        section.top.saturating_sub(self.policy.anchor_offset)
    }

    /// Whether a section intersects the viewport `[offset, offset +
    /// viewport_height - reveal_margin)`. Used for the batched reveal
    /// pass; an empty intersection means not intersecting.
    #[must_use]
    pub fn section_in_viewport(&self, section: &SectionLayout, viewport_height: u32) -> bool {
        let view_top = self.scroll_offset;
        let view_bottom = self
            .scroll_offset
            .saturating_add(viewport_height)
            .saturating_sub(self.policy.reveal_margin);
        section.top < view_bottom && section.bottom() > view_top
    }
}

impl Default for ViewStateController {
    fn default() -> Self {
        Self::new(ViewPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<SectionLayout> {
        vec![
            SectionLayout::new("home", 0, 500),
            SectionLayout::new("about", 500, 500),
        ]
    }

    #[test]
    fn navbar_scrolled_boundary_exact() {
        let mut view = ViewStateController::default();
        let sections = two_sections();

        view.set_scroll(49);
        view.evaluate(&sections);
        assert!(!view.navbar_scrolled());

        view.set_scroll(50);
        view.evaluate(&sections);
        assert!(!view.navbar_scrolled());

        view.set_scroll(51);
        view.evaluate(&sections);
        assert!(view.navbar_scrolled());
    }

    #[test]
    fn offset_600_activates_about_only() {
        let mut view = ViewStateController::default();
        view.set_scroll(600);
        view.evaluate(&two_sections());
        assert_eq!(view.active_section(), Some("about"));
    }

    #[test]
    fn offset_inside_home_range_activates_home() {
        let mut view = ViewStateController::default();
        // home activation range is [-100, 400)
        view.set_scroll(399);
        view.evaluate(&two_sections());
        assert_eq!(view.active_section(), Some("home"));

        view.set_scroll(400);
        view.evaluate(&two_sections());
        assert_eq!(view.active_section(), Some("about"));
    }

    #[test]
    fn no_active_section_above_first_range() {
        let mut view = ViewStateController::default();
        let sections = vec![SectionLayout::new("about", 500, 500)];
        // about's activation range starts at 400
        view.set_scroll(100);
        view.evaluate(&sections);
        assert_eq!(view.active_section(), None);
    }

    #[test]
    fn no_sections_is_a_noop() {
        let mut view = ViewStateController::default();
        view.set_scroll(600);
        view.evaluate(&[]);
        assert_eq!(view.active_section(), None);
    }

    #[test]
    fn first_match_wins_for_overlapping_ranges() {
        // Two sections whose activation ranges overlap; document order
        // decides, not reverse iteration.
        let sections = vec![
            SectionLayout::new("one", 0, 500),
            SectionLayout::new("two", 300, 500),
        ];
        let mut view = ViewStateController::default();
        view.set_scroll(350);
        view.evaluate(&sections);
        assert_eq!(view.active_section(), Some("one"));
    }

    #[test]
    fn evaluate_skips_when_offset_unchanged() {
        let mut view = ViewStateController::default();
        let sections = two_sections();
        view.set_scroll(600);
        assert!(view.evaluate(&sections));
        // Same offset: no work, no change.
        assert!(!view.evaluate(&sections));
        // Re-setting the same offset does not dirty the controller.
        view.set_scroll(600);
        assert!(!view.evaluate(&sections));
    }

    #[test]
    fn navbar_hides_scrolling_down_and_shows_scrolling_up() {
        let mut view = ViewStateController::default();
        let sections = two_sections();

        view.set_scroll(300);
        view.evaluate(&sections);
        assert!(view.navbar_hidden());

        view.set_scroll(200);
        view.evaluate(&sections);
        assert!(!view.navbar_hidden());
    }

    #[test]
    fn navbar_not_hidden_below_threshold() {
        let mut view = ViewStateController::default();
        view.set_scroll(80);
        view.evaluate(&two_sections());
        assert!(!view.navbar_hidden());
    }

    #[test]
    fn back_to_top_threshold() {
        let mut view = ViewStateController::default();
        let sections = two_sections();

        view.set_scroll(300);
        view.evaluate(&sections);
        assert!(!view.back_to_top_visible());

        view.set_scroll(301);
        view.evaluate(&sections);
        assert!(view.back_to_top_visible());
    }

    #[test]
    fn scroll_target_applies_anchor_offset() {
        let view = ViewStateController::default();
        let section = SectionLayout::new("skills", 1000, 400);
        assert_eq!(view.scroll_target(&section), 920);

        let first = SectionLayout::new("home", 0, 400);
        assert_eq!(view.scroll_target(&first), 0);
    }

    #[test]
    fn section_in_viewport_respects_reveal_margin() {
        let view = ViewStateController::default();
        // Viewport [0, 200 - 50) = [0, 150)
        let visible = SectionLayout::new("a", 100, 50);
        assert!(view.section_in_viewport(&visible, 200));

        let below = SectionLayout::new("b", 150, 50);
        assert!(!view.section_in_viewport(&below, 200));
    }

    #[test]
    fn terminal_policy_disables_hiding() {
        let mut view = ViewStateController::new(ViewPolicy::terminal());
        view.set_scroll(500);
        view.evaluate(&two_sections());
        assert!(!view.navbar_hidden());
        assert!(view.navbar_scrolled());
    }
}
