//! Statistic counters that count up from zero when revealed

use crate::consts::COUNTER_STEPS;

/// Count from 0 to `target` in equal increments, one per tick
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    target: u64,
    steps: u32,
    step: u32,
}

impl CounterTween {
    /// Counter over the default 100 ticks. A zero target has nothing to
    /// animate and yields None.
    pub fn new(target: u64) -> Option<Self> {
        Self::with_steps(target, COUNTER_STEPS)
    }

    pub fn with_steps(target: u64, steps: u32) -> Option<Self> {
        if target == 0 || steps == 0 {
            return None;
        }
        Some(Self {
            target,
            steps,
            step: 0,
        })
    }

    /// Build from a `data-target` attribute. Leading digits are used, the
    /// rest ignored; no digits or a zero target yields None.
    pub fn parse(attr: &str) -> Option<Self> {
        let digits: String = attr
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        Self::new(digits.parse().ok()?)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one tick. Returns true while more ticks remain.
    pub fn tick(&mut self) -> bool {
        if !self.is_finished() {
            self.step += 1;
        }
        !self.is_finished()
    }

    /// Current value, floored
    pub fn value(&self) -> u64 {
        if self.is_finished() {
            return self.target;
        }
        (self.target as f64 * self.step as f64 / self.steps as f64).floor() as u64
    }

    /// Text for the element: thousands grouped once the target reaches 1000
    pub fn display(&self) -> String {
        let value = self.value();
        if self.target >= 1000 {
            group_thousands(value)
        } else {
            value.to_string()
        }
    }
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
