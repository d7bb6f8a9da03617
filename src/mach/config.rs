use std::time::Duration;

/// ## Run configuration
///
/// Fixed for the lifetime of a run. With `step` set the machine pauses
/// for acknowledgment after every effectful instruction. A nonzero
/// `delay` pauses for that long instead of, or after, the acknowledgment.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    pub step: bool,
    pub delay: Duration,
}

impl Config {
    pub fn new(step: bool, delay_secs: f64) -> Config {
        // Negative, NaN and out of range delays mean no delay.
        let delay = Duration::try_from_secs_f64(delay_secs).unwrap_or_default();
        Config { step, delay }
    }
    pub fn pauses(&self) -> bool {
        self.step || self.delay > Duration::default()
    }
}
