//! Index state for a full-screen lightbox over an ordered image sequence.
//!
//! The sequence length is captured when the carousel opens, so `next` and
//! `prev` always land on a valid index for that sequence.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Carousel {
    #[default]
    Closed,
    Open { index: usize, len: usize },
}

impl Carousel {
    /// Opens at `index`. Ignored when the index is outside a `len` long sequence.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            *self = Carousel::Open { index, len };
        }
    }

    pub fn close(&mut self) {
        *self = Carousel::Closed;
    }

    /// Moves one image forward, wrapping to the first.
    pub fn next(&mut self) {
        if let Carousel::Open { index, len } = self {
            *index = (*index + 1) % *len;
        }
    }

    /// Moves one image back, wrapping to the last.
    pub fn prev(&mut self) {
        if let Carousel::Open { index, len } = self {
            *index = (*index + *len - 1) % *len;
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Carousel::Open { index, .. } => Some(*index),
            Carousel::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Carousel::Open { .. })
    }

    /// Indices of the neighbours, `None` for a single image.
    pub fn neighbours(&self) -> Option<(usize, usize)> {
        match *self {
            Carousel::Open { index, len } if len > 1 => {
                Some(((index + len - 1) % len, (index + 1) % len))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_wraps_then_next_walks_forward() {
        let mut carousel = Carousel::default();
        carousel.open(0, 3);

        carousel.prev();
        assert_eq!(carousel.current_index(), Some(2));
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
        carousel.next();
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut forward = Carousel::default();
                forward.open(start, len);
                let mut backward = forward;
                for _ in 0..len {
                    forward.next();
                    backward.prev();
                }
                assert_eq!(forward.current_index(), Some(start));
                assert_eq!(backward.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn single_image_stays_put() {
        let mut carousel = Carousel::default();
        carousel.open(0, 1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.neighbours(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut carousel = Carousel::default();
        carousel.open(3, 3);
        assert!(!carousel.is_open());
        carousel.open(0, 0);
        assert!(!carousel.is_open());
    }

    #[test]
    fn close_forgets_position_and_navigation_is_inert() {
        let mut carousel = Carousel::default();
        carousel.open(2, 4);
        carousel.close();
        carousel.next();
        assert_eq!(carousel, Carousel::Closed);

        carousel.open(1, 4);
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.neighbours(), Some((0, 2)));
    }
}
