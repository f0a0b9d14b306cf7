//! Staged reveal: declarative (delay, effect) steps.
//!
//! Each step becomes a CSS class plus an `animation-delay`. The keyframes
//! live in the stylesheet; nothing else depends on the timing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fade,
    Rise,
    Zoom,
}

impl Effect {
    pub fn class(&self) -> &'static str {
        match self {
            Effect::Fade => "reveal-fade",
            Effect::Rise => "reveal-rise",
            Effect::Zoom => "reveal-zoom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub delay_ms: u32,
    pub effect: Effect,
}

impl Step {
    pub const fn new(delay_ms: u32, effect: Effect) -> Self {
        Self { delay_ms, effect }
    }

    pub fn class(&self) -> String {
        format!("reveal {}", self.effect.class())
    }

    pub fn style(&self) -> String {
        format!("animation-delay: {}ms;", self.delay_ms)
    }

    pub fn after(&self, extra_ms: u32) -> Self {
        Self::new(self.delay_ms + extra_ms, self.effect)
    }
}

/// `count` steps of one effect, `gap_ms` apart, starting at `start_ms`.
pub fn stagger(start_ms: u32, gap_ms: u32, count: usize, effect: Effect) -> Vec<Step> {
    (0..count as u32)
        .map(|i| Step::new(start_ms + i * gap_ms, effect))
        .collect()
}
