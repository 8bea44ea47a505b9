//! Image carousel and AR visibility state for one product detail view.

/// Pointer into a product's ordered image sequence.
///
/// Invariant: `0 <= index < image_count` for the product currently shown.
/// The `image_count` passed to a transition must be the length of that
/// product's image set, which is non-empty by construction
/// (`showroom_catalog::ImageSet`). Switch products by starting from
/// `CarouselState::default()` again.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one image, wrapping past the end.
    #[must_use]
    pub fn next(self, image_count: usize) -> Self {
        debug_assert!(image_count > 0, "carousel over an empty image set");
        Self {
            index: (self.index + 1) % image_count,
        }
    }

    /// Step back one image, wrapping past the start.
    #[must_use]
    pub fn previous(self, image_count: usize) -> Self {
        debug_assert!(image_count > 0, "carousel over an empty image set");
        Self {
            index: (self.index + image_count - 1) % image_count,
        }
    }

    /// Jump to a thumbnail. An out-of-range `target` is a programming error
    /// in the caller, not a recoverable condition.
    #[must_use]
    pub fn select(self, target: usize, image_count: usize) -> Self {
        debug_assert!(
            target < image_count,
            "select target {target} out of range (count {image_count})"
        );
        Self { index: target }
    }
}

/// Client-side state of one product detail view: the carousel plus the
/// AR slot's visibility flag.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DetailViewState {
    pub carousel: CarouselState,
    pub ar_visible: bool,
}

impl DetailViewState {
    /// Fresh state for a newly selected product: index 0, AR hidden.
    pub fn for_new_product() -> Self {
        Self::default()
    }

    /// Flip the AR slot's visibility. Leaves the carousel untouched.
    #[must_use]
    pub fn toggle_ar(self) -> Self {
        Self {
            ar_visible: !self.ar_visible,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_at_the_end() {
        let s = CarouselState::default().select(2, 3).next(3);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn previous_wraps_at_the_start() {
        let s = CarouselState::default().previous(3);
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn select_produces_exact_index() {
        for target in 0..4 {
            let s = CarouselState::default().select(target, 4);
            assert_eq!(s.index(), target);
        }
    }

    #[test]
    fn single_image_carousel_is_a_fixed_point() {
        let s = CarouselState::default();
        assert_eq!(s.next(1), s);
        assert_eq!(s.previous(1), s);
    }

    #[test]
    fn toggle_ar_is_an_involution() {
        let s = DetailViewState::for_new_product();
        assert!(!s.ar_visible);
        let shown = s.toggle_ar();
        assert!(shown.ar_visible);
        assert_eq!(shown.toggle_ar(), s);
    }

    #[test]
    fn toggle_ar_does_not_move_the_carousel() {
        let mut s = DetailViewState::for_new_product();
        s.carousel = s.carousel.select(2, 3);
        let toggled = s.toggle_ar();
        assert_eq!(toggled.carousel.index(), 2);
    }

    #[test]
    fn new_product_resets_index_to_zero() {
        let s = DetailViewState::for_new_product();
        assert_eq!(s.carousel.index(), 0);
        assert!(!s.ar_visible);
    }

    proptest! {
        /// Cycle law: N steps forward over N images return to the start.
        #[test]
        fn next_cycles_after_image_count_steps(
            count in 1usize..32,
            start in 0usize..32,
        ) {
            let start = start % count;
            let mut s = CarouselState::default().select(start, count);
            for _ in 0..count {
                s = s.next(count);
            }
            prop_assert_eq!(s.index(), start);
        }

        /// Cycle law for the reverse direction.
        #[test]
        fn previous_cycles_after_image_count_steps(
            count in 1usize..32,
            start in 0usize..32,
        ) {
            let start = start % count;
            let mut s = CarouselState::default().select(start, count);
            for _ in 0..count {
                s = s.previous(count);
            }
            prop_assert_eq!(s.index(), start);
        }

        /// `previous` undoes `next`, so the invariant holds under any mix.
        #[test]
        fn previous_is_inverse_of_next(
            count in 1usize..32,
            start in 0usize..32,
        ) {
            let start = start % count;
            let s = CarouselState::default().select(start, count);
            prop_assert_eq!(s.next(count).previous(count), s);
            prop_assert_eq!(s.previous(count).next(count), s);
        }

        /// Index stays in range after an arbitrary transition sequence.
        #[test]
        fn index_stays_in_range(
            count in 1usize..16,
            steps in proptest::collection::vec(0u8..3, 0..64),
        ) {
            let mut s = CarouselState::default();
            for step in steps {
                s = match step {
                    0 => s.next(count),
                    1 => s.previous(count),
                    _ => s.select(s.index(), count),
                };
                prop_assert!(s.index() < count);
            }
        }
    }
}
