//! Index arithmetic for the home page highlights carousel.
//!
//! Slides wrap in both directions. The carousel is rendered as anchored
//! slides, so each slide links to its neighbours by index.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// `None` for an empty carousel, which is not rendered at all.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next_index(&self) -> usize {
        (self.active + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.active + self.len - 1) % self.len
    }

    /// Out-of-range indices wrap.
    fn go_to(&mut self, index: usize) {
        self.active = index % self.len;
    }

    /// The carousel positioned on each slide in turn, one per dot.
    pub fn positions(&self) -> impl Iterator<Item = Carousel> + use<> {
        let base = *self;
        (0..self.len).map(move |index| {
            let mut position = base;
            position.go_to(index);
            position
        })
    }
}
