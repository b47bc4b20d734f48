//! Progressive counter used by the stats strip.
//!
//! The engine is deliberately free of any browser types: it is fed
//! timestamps (milliseconds, `Date.now()`-style) by the component layer and
//! can therefore be driven by a fake clock in tests. One engine owns one
//! counter's state; nothing is shared between instances.

/// Counts from 0 up to `target` over a fixed duration once started.
///
/// The engine fires at most once: after the first [`start`](Self::start) the
/// animation runs to completion and later start signals are ignored. This
/// matches the page behavior where a stat that has finished counting stays
/// at its target even if the section scrolls out of and back into view.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterEngine {
    target: u64,
    duration_ms: f64,
    current: u64,
    started_at: Option<f64>,
    done: bool,
}

impl CounterEngine {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            current: 0,
            started_at: None,
            done: false,
        }
    }

    /// Records the animation start time. Only the first call has any effect.
    ///
    /// A zero target has nothing to animate and completes on the spot, so
    /// callers never need to schedule a frame for it.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_some() {
            return;
        }
        self.started_at = Some(now);
        if self.target == 0 {
            self.done = true;
        }
    }

    /// Advances the displayed value to match `now`. Returns `true` while
    /// another frame is wanted, `false` once the target has been reached.
    ///
    /// Calling before `start` is a no-op. The value is floored from linear
    /// progress and never moves backwards, so a late or out-of-order
    /// timestamp cannot make the display jump down.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(t0) = self.started_at else {
            return false;
        };
        if self.done {
            return false;
        }
        let progress = ((now - t0) / self.duration_ms).clamp(0.0, 1.0);
        let next = (progress * self.target as f64).floor() as u64;
        self.current = self.current.max(next.min(self.target));
        if progress >= 1.0 {
            self.current = self.target;
            self.done = true;
        }
        !self.done
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Jumps straight to the final value. Used when no frame scheduler is
    /// available so the stat never sits at 0 forever.
    pub fn finish(&mut self) {
        self.current = self.target;
        self.done = true;
        if self.started_at.is_none() {
            self.started_at = Some(0.0);
        }
    }
}

/// Formats `value` with comma thousands grouping and appends `suffix`
/// verbatim, e.g. `(2847, "+")` renders as `"2,847+"`.
pub fn format_count(value: u64, suffix: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + suffix.len());
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_finishes_exactly_on_target() {
        let mut engine = CounterEngine::new(2847, 2000.0);
        engine.start(1000.0);
        assert_eq!(engine.value(), 0);

        assert!(engine.tick(1000.0));
        assert_eq!(engine.value(), 0);

        assert!(engine.tick(2000.0));
        // halfway through: floor(0.5 * 2847)
        assert_eq!(engine.value(), 1423);

        assert!(!engine.tick(3000.0));
        assert_eq!(engine.value(), 2847);
        assert!(engine.is_done());
    }

    #[test]
    fn value_is_bounded_and_monotonic() {
        let mut engine = CounterEngine::new(997, 2000.0);
        engine.start(0.0);
        let mut last = 0;
        let mut t = 0.0;
        while t < 2500.0 {
            engine.tick(t);
            let v = engine.value();
            assert!(v <= 997);
            assert!(v >= last, "value went backwards: {} -> {}", last, v);
            last = v;
            t += 16.0;
        }
        assert_eq!(engine.value(), 997);
    }

    #[test]
    fn out_of_order_timestamp_does_not_move_value_down() {
        let mut engine = CounterEngine::new(100, 1000.0);
        engine.start(0.0);
        engine.tick(600.0);
        let v = engine.value();
        engine.tick(400.0);
        assert_eq!(engine.value(), v);
    }

    #[test]
    fn restart_signal_after_completion_is_ignored() {
        let mut engine = CounterEngine::new(47, 2000.0);
        engine.start(0.0);
        engine.tick(5000.0);
        assert_eq!(engine.value(), 47);

        // the section scrolled back into view
        engine.start(9000.0);
        assert!(!engine.tick(9001.0));
        assert_eq!(engine.value(), 47);
    }

    #[test]
    fn zero_target_completes_without_ticks() {
        let mut engine = CounterEngine::new(0, 2000.0);
        engine.start(0.0);
        assert!(engine.is_done());
        assert_eq!(engine.value(), 0);
    }

    #[test]
    fn tick_before_start_does_nothing() {
        let mut engine = CounterEngine::new(340, 2000.0);
        assert!(!engine.tick(123456.0));
        assert_eq!(engine.value(), 0);
        assert!(!engine.has_started());
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut engine = CounterEngine::new(127, 2000.0);
        engine.finish();
        assert_eq!(engine.value(), 127);
        assert!(engine.is_done());
    }

    #[test]
    fn suffix_is_appended_verbatim() {
        let mut engine = CounterEngine::new(47, 2000.0);
        engine.start(0.0);
        engine.tick(2000.0);
        assert_eq!(format_count(engine.value(), "x"), "47x");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_count(0, ""), "0");
        assert_eq!(format_count(340, ""), "340");
        assert_eq!(format_count(2847, ""), "2,847");
        assert_eq!(format_count(12000, "+"), "12,000+");
        assert_eq!(format_count(1234567, ""), "1,234,567");
    }
}
