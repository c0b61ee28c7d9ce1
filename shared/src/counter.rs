/// total run time of a hero stat counter
pub const COUNTER_DURATION_MS: u32 = 2000;
/// one animation frame at roughly 60fps
pub const COUNTER_FRAME_MS: u32 = 16;
/// fraction of the hero that has to be visible before counters start
pub const HERO_VISIBLE_THRESHOLD: f64 = 0.5;

/// Counts a hero stat up from zero to its target in equal frame steps.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u32) -> Self {
        let frames = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_FRAME_MS);

        Self {
            target,
            increment: f64::from(target) / frames,
            current: 0.0,
            done: false,
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one frame and returns the value to display.
    ///
    /// Once the target is reached every further call returns the target.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self) -> u32 {
        if self.done {
            return self.target;
        }

        self.current += self.increment;

        if self.current < f64::from(self.target) {
            // current is below target here, so it fits
            self.current.ceil() as u32
        } else {
            self.done = true;
            self.target
        }
    }
}

/// parse a `data-target` attribute, anything unparsable counts to zero
#[must_use]
pub fn parse_target(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
}
