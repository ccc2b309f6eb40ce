//! Pure display derivations for the reader: the filtered sequence, which
//! image(s) occupy the display slots at the current position, and the
//! label text for a displayed slot.
//!
//! Nothing here mutates gallery state or caches anything; everything is
//! re-derived from `GalleryState` on each call. An empty gallery degrades
//! to empty output, never an error.

use crate::models::{GalleryState, ImageRef};

/// The up-to-two images occupying the reader's display slots.
///
/// `slot_b` is unused in single-page mode and may be absent at the tail of
/// a two-side spread. `right_is_slot_a` tells the presentation layer which
/// slot takes the visually-right position; the engine itself does no
/// placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<'a> {
    pub slot_a: Option<&'a ImageRef>,
    pub slot_b: Option<&'a ImageRef>,
    pub right_is_slot_a: bool,
}

impl Slots<'_> {
    pub fn is_empty(&self) -> bool {
        self.slot_a.is_none() && self.slot_b.is_none()
    }
}

/// The images currently eligible for display, in display order.
pub fn filtered(state: &GalleryState) -> Vec<&ImageRef> {
    state.filtered().collect()
}

/// Resolves which image(s) occupy the display slots at the current
/// position under the active mode flags.
pub fn resolve_slots(state: &GalleryState) -> Slots<'_> {
    let images = filtered(state);
    let index = state.current_index();
    let right_is_slot_a = state.right_to_left();

    if images.is_empty() {
        return Slots {
            slot_a: None,
            slot_b: None,
            right_is_slot_a,
        };
    }

    // Position invariant: clamp rather than fail on a stale index.
    let index = index.min(images.len() - 1);

    if !state.two_side() {
        return Slots {
            slot_a: Some(images[index]),
            slot_b: None,
            right_is_slot_a,
        };
    }

    if state.dup_first() && index == 0 {
        // The duplicated first page: the only case where both slots hold
        // the same image.
        return Slots {
            slot_a: Some(images[0]),
            slot_b: Some(images[0]),
            right_is_slot_a,
        };
    }

    Slots {
        slot_a: Some(images[index]),
        slot_b: images.get(index + 1).copied(),
        right_is_slot_a,
    }
}

/// Display label for one slot: `"Page {n}"` (1-based position in the
/// filtered sequence) when page numbers are enabled, else the file name
/// with its extension stripped.
pub fn label(image: &ImageRef, index: usize, state: &GalleryState) -> String {
    if state.show_page_numbers() {
        format!("Page {}", index + 1)
    } else {
        image.stem().to_string()
    }
}
