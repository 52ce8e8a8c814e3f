/// Position within an ordered set of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    len: usize,
    index: usize,
}

impl SlideCursor {
    /// `start` is clamped to the last slide. An empty set sits at 0.
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            len,
            index: start.min(len.saturating_sub(1)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    pub fn next(self) -> Self {
        if self.is_last() {
            self
        } else {
            Self {
                index: self.index + 1,
                ..self
            }
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn next_wrapping(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev_wrapping(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_clamped() {
        assert_eq!(SlideCursor::new(3, 1).index(), 1);
        assert_eq!(SlideCursor::new(3, 7).index(), 2);
        assert_eq!(SlideCursor::new(0, 4).index(), 0);
    }

    #[test]
    fn test_carousel_stops_at_ends() {
        let c = SlideCursor::new(3, 0);
        assert!(c.is_first());
        assert_eq!(c.prev().index(), 0);
        let c = c.next().next();
        assert!(c.is_last());
        assert_eq!(c.next().index(), 2);
    }

    #[test]
    fn test_lightbox_wraps() {
        let c = SlideCursor::new(3, 2);
        assert_eq!(c.next_wrapping().index(), 0);
        assert_eq!(c.next_wrapping().prev_wrapping().index(), 2);
        assert_eq!(SlideCursor::new(3, 0).prev_wrapping().index(), 2);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = SlideCursor::new(0, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.next_wrapping(), empty);
        assert_eq!(empty.prev_wrapping(), empty);

        let one = SlideCursor::new(1, 0);
        assert!(one.is_first() && one.is_last());
        assert_eq!(one.next_wrapping().index(), 0);
    }
}
