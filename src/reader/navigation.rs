//! Position stepping for the reader.
//!
//! Step size and bounds depend on the layout mode. The irregular
//! duplicate-first-page mode (a singleton stop at position 0, spreads
//! advancing by two from position 1) is modeled as an explicit stop
//! machine instead of arithmetic clamping, so the non-uniform step near
//! the start stays in one place.
//!
//! Attempting to move past either boundary is a normal condition: the
//! position is left unchanged and no error is raised.

use tracing::trace;

use crate::models::GalleryState;

/// A navigation stop in two-side, duplicate-first mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// The duplicated first page, shown alone at position 0.
    DupFirst,
    /// A spread starting at this position (always >= 1 in this mode).
    Spread(usize),
}

impl Stop {
    fn of(index: usize) -> Self {
        if index == 0 {
            Self::DupFirst
        } else {
            Self::Spread(index)
        }
    }

    /// Forward position sequence: 0, 1, 3, 5, ...
    fn next(self, len: usize) -> Option<usize> {
        match self {
            Self::DupFirst if len > 1 => Some(1),
            Self::DupFirst => None,
            Self::Spread(i) if i + 2 < len => Some(i + 2),
            Self::Spread(_) => None,
        }
    }

    /// Backward mirror of `next`. The dup-first stop is only re-entered
    /// via the explicit step from position 1.
    fn prev(self) -> Option<usize> {
        match self {
            Self::DupFirst => None,
            Self::Spread(1) => Some(0),
            Self::Spread(i) => Some((i - 2).max(1)),
        }
    }
}

/// Advances to the next position. A no-op at the end of the sequence.
pub fn step_next(state: &mut GalleryState) {
    if let Some(next) = next_index(state) {
        trace!(from = state.current_index(), to = next, "step next");
        state.set_current_index(next);
    }
}

/// Steps back to the previous position. A no-op at the start.
pub fn step_prev(state: &mut GalleryState) {
    if let Some(prev) = prev_index(state) {
        trace!(from = state.current_index(), to = prev, "step prev");
        state.set_current_index(prev);
    }
}

fn next_index(state: &GalleryState) -> Option<usize> {
    let len = state.filtered_len();
    let index = state.current_index();

    if !state.two_side() {
        return (index + 1 < len).then_some(index + 1);
    }
    if state.dup_first() {
        return Stop::of(index).next(len);
    }

    // Paired stepping stays paired at the tail: the last start is len-2.
    if len < 2 {
        return None;
    }
    let next = (index + 2).min(len - 2);
    (next != index).then_some(next)
}

fn prev_index(state: &GalleryState) -> Option<usize> {
    let index = state.current_index();

    if !state.two_side() {
        return (index > 0).then(|| index - 1);
    }
    if state.dup_first() {
        return Stop::of(index).prev();
    }

    if state.filtered_len() < 2 {
        return None;
    }
    let prev = index.saturating_sub(2);
    (prev != index).then_some(prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRef, MediaKind, ModeFlag};

    fn gallery(count: usize) -> GalleryState {
        let mut state = GalleryState::new();
        state.load(
            (0..count)
                .map(|i| {
                    let name = format!("p{i:02}.png");
                    ImageRef::new(name.clone(), format!("/g/{name}"), MediaKind::Png)
                })
                .collect(),
        );
        state
    }

    fn walk_forward(state: &mut GalleryState) -> Vec<usize> {
        let mut visited = vec![state.current_index()];
        loop {
            let before = state.current_index();
            step_next(state);
            if state.current_index() == before {
                break;
            }
            visited.push(state.current_index());
        }
        visited
    }

    #[test]
    fn single_page_steps_by_one_with_boundary_noops() {
        let mut state = gallery(3);

        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);

        step_next(&mut state);
        step_next(&mut state);
        assert_eq!(state.current_index(), 2);
        step_next(&mut state);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn interior_next_then_prev_round_trips() {
        let mut state = gallery(6);
        state.set_current_index(2);
        step_next(&mut state);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 2);

        state.set_flag(ModeFlag::TwoSide, true);
        state.set_current_index(2);
        step_next(&mut state);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn two_side_five_images_visits_0_2_3_then_stops() {
        let mut state = gallery(5);
        state.set_flag(ModeFlag::TwoSide, true);

        assert_eq!(walk_forward(&mut state), [0, 2, 3]);
        // And the final step_next was the recorded no-op at len-2.
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn two_side_steps_back_by_two_to_zero() {
        let mut state = gallery(6);
        state.set_flag(ModeFlag::TwoSide, true);
        state.set_current_index(4);

        step_prev(&mut state);
        assert_eq!(state.current_index(), 2);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn two_side_needs_at_least_two_images() {
        let mut state = gallery(1);
        state.set_flag(ModeFlag::TwoSide, true);

        step_next(&mut state);
        assert_eq!(state.current_index(), 0);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn dup_first_walks_0_1_3_and_mirrors_back() {
        let mut state = gallery(4);
        state.set_flag(ModeFlag::TwoSide, true);
        state.set_flag(ModeFlag::DupFirst, true);

        assert_eq!(walk_forward(&mut state), [0, 1, 3]);

        step_prev(&mut state);
        assert_eq!(state.current_index(), 1);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);
        step_prev(&mut state);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn dup_first_prev_floor_is_position_one() {
        let mut state = gallery(8);
        state.set_flag(ModeFlag::TwoSide, true);
        state.set_flag(ModeFlag::DupFirst, true);
        state.set_current_index(2);

        // From an off-sequence position, stepping back clamps to 1, never 0.
        step_prev(&mut state);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn dup_first_next_does_not_clamp_at_tail() {
        let mut state = gallery(5);
        state.set_flag(ModeFlag::TwoSide, true);
        state.set_flag(ModeFlag::DupFirst, true);

        assert_eq!(walk_forward(&mut state), [0, 1, 3]);
        // 3 + 2 = 5 is out of range, so 3 is the final stop.
        step_next(&mut state);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn dup_first_single_image_has_nowhere_to_go() {
        let mut state = gallery(1);
        state.set_flag(ModeFlag::TwoSide, true);
        state.set_flag(ModeFlag::DupFirst, true);

        step_next(&mut state);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn empty_gallery_navigation_is_a_noop() {
        let mut state = GalleryState::new();
        state.load(Vec::new());

        for flag in [ModeFlag::TwoSide, ModeFlag::DupFirst] {
            state.set_flag(flag, true);
            step_next(&mut state);
            step_prev(&mut state);
            assert_eq!(state.current_index(), 0);
        }
    }
}
