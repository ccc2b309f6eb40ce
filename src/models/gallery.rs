//! Per-tab gallery state: the loaded image list, display-mode flags, and
//! the current navigation position.
//!
//! The gallery is the single source of truth for one reading session. The
//! image list is replaced wholesale on every load (never merged), sorted by
//! name in natural, case-insensitive order, and the position resets to the
//! start. The position is always interpreted against the *filtered*
//! sequence (GIF-only filter applied) and is kept in range whenever the
//! list or the filter changes.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::ImageRef;

/// One display-mode toggle on a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFlag {
    /// Restrict the filtered sequence to GIF images.
    ShowGifsOnly,
    /// Two-page spread layout instead of a single page.
    TwoSide,
    /// Right-to-left reading direction.
    RightToLeft,
    /// Show the first page alone, duplicated into both slots (two-side only).
    DupFirst,
    /// Label slots with page numbers instead of file names.
    ShowPageNumbers,
}

/// State of one open gallery tab.
#[derive(Debug, Clone)]
pub struct GalleryState {
    images: Vec<ImageRef>,
    current_index: usize,
    show_gifs_only: bool,
    two_side: bool,
    right_to_left: bool,
    dup_first: bool,
    show_page_numbers: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            current_index: 0,
            show_gifs_only: false,
            two_side: false,
            // Reading direction defaults to right-to-left.
            right_to_left: true,
            dup_first: false,
            show_page_numbers: false,
        }
    }

    /// Replaces the image list wholesale, re-sorts it by name, and resets
    /// the position to the start.
    ///
    /// Reset-on-load is intentional: reopening the same directory does not
    /// restore the previous position. An empty input yields an empty
    /// gallery on which display and navigation are no-ops.
    pub fn load(&mut self, mut images: Vec<ImageRef>) {
        images.sort_by(|a, b| compare_names(&a.name, &b.name));
        debug!(count = images.len(), "Loaded gallery images");
        self.images = images;
        self.current_index = 0;
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Current position into the filtered sequence.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Moves the position, clamped into the filtered range. Out-of-range
    /// requests clamp rather than fail.
    pub fn set_current_index(&mut self, index: usize) {
        let len = self.filtered_len();
        self.current_index = if len == 0 { 0 } else { index.min(len - 1) };
    }

    pub fn set_flag(&mut self, flag: ModeFlag, value: bool) {
        match flag {
            ModeFlag::ShowGifsOnly => {
                self.show_gifs_only = value;
                // The filtered sequence may have shrunk below the position.
                self.set_current_index(self.current_index);
            }
            ModeFlag::TwoSide => self.two_side = value,
            ModeFlag::RightToLeft => self.right_to_left = value,
            ModeFlag::DupFirst => self.dup_first = value,
            ModeFlag::ShowPageNumbers => self.show_page_numbers = value,
        }
    }

    pub fn toggle_flag(&mut self, flag: ModeFlag) {
        self.set_flag(flag, !self.flag(flag));
    }

    pub fn flag(&self, flag: ModeFlag) -> bool {
        match flag {
            ModeFlag::ShowGifsOnly => self.show_gifs_only,
            ModeFlag::TwoSide => self.two_side,
            ModeFlag::RightToLeft => self.right_to_left,
            ModeFlag::DupFirst => self.dup_first,
            ModeFlag::ShowPageNumbers => self.show_page_numbers,
        }
    }

    pub fn show_gifs_only(&self) -> bool {
        self.show_gifs_only
    }

    pub fn two_side(&self) -> bool {
        self.two_side
    }

    pub fn right_to_left(&self) -> bool {
        self.right_to_left
    }

    pub fn dup_first(&self) -> bool {
        self.dup_first
    }

    pub fn show_page_numbers(&self) -> bool {
        self.show_page_numbers
    }

    /// The images currently eligible for display, in display order.
    /// Derived on demand; never cached across mode changes.
    pub fn filtered(&self) -> impl Iterator<Item = &ImageRef> {
        self.images
            .iter()
            .filter(move |img| !self.show_gifs_only || img.kind.is_gif())
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Natural-order, case-insensitive name comparison used for the canonical
/// display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    natord::compare_ignore_case(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn img(name: &str, kind: MediaKind) -> ImageRef {
        ImageRef::new(name, format!("/g/{name}"), kind)
    }

    #[test]
    fn load_sorts_by_name_case_insensitively() {
        let mut state = GalleryState::new();
        state.load(vec![
            img("b.png", MediaKind::Png),
            img("A.png", MediaKind::Png),
            img("c.png", MediaKind::Png),
        ]);

        let names: Vec<_> = state.images().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A.png", "b.png", "c.png"]);
    }

    #[test]
    fn load_sorts_numbered_pages_naturally() {
        let mut state = GalleryState::new();
        state.load(vec![
            img("page10.png", MediaKind::Png),
            img("page2.png", MediaKind::Png),
            img("page1.png", MediaKind::Png),
        ]);

        let names: Vec<_> = state.images().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["page1.png", "page2.png", "page10.png"]);
    }

    #[test]
    fn load_resets_position() {
        let mut state = GalleryState::new();
        state.load(vec![img("a.png", MediaKind::Png), img("b.png", MediaKind::Png)]);
        state.set_current_index(1);

        state.load(vec![img("a.png", MediaKind::Png), img("b.png", MediaKind::Png)]);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn filtered_restricts_to_gifs() {
        let mut state = GalleryState::new();
        state.load(vec![
            img("a.gif", MediaKind::Gif),
            img("b.png", MediaKind::Png),
            img("c.gif", MediaKind::Gif),
        ]);

        assert_eq!(state.filtered_len(), 3);
        state.set_flag(ModeFlag::ShowGifsOnly, true);
        let names: Vec<_> = state.filtered().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a.gif", "c.gif"]);
    }

    #[test]
    fn gif_filter_clamps_position_into_new_range() {
        let mut state = GalleryState::new();
        // 6 images, 2 of them GIFs.
        state.load(vec![
            img("a.gif", MediaKind::Gif),
            img("b.png", MediaKind::Png),
            img("c.png", MediaKind::Png),
            img("d.gif", MediaKind::Gif),
            img("e.png", MediaKind::Png),
            img("f.png", MediaKind::Png),
        ]);
        state.set_current_index(5);

        state.set_flag(ModeFlag::ShowGifsOnly, true);
        assert_eq!(state.filtered_len(), 2);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn gif_filter_on_empty_match_resets_to_zero() {
        let mut state = GalleryState::new();
        state.load(vec![img("a.png", MediaKind::Png), img("b.png", MediaKind::Png)]);
        state.set_current_index(1);

        state.set_flag(ModeFlag::ShowGifsOnly, true);
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn set_current_index_clamps() {
        let mut state = GalleryState::new();
        state.set_current_index(7);
        assert_eq!(state.current_index(), 0);

        state.load(vec![img("a.png", MediaKind::Png), img("b.png", MediaKind::Png)]);
        state.set_current_index(7);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn toggle_flag_negates() {
        let mut state = GalleryState::new();
        assert!(state.right_to_left());
        state.toggle_flag(ModeFlag::RightToLeft);
        assert!(!state.right_to_left());
        state.toggle_flag(ModeFlag::RightToLeft);
        assert!(state.right_to_left());
    }
}
