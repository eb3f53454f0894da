//! Frame-driven stat counters

use crate::constants::counters as defaults;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    count: f64,
    increment: f64,
    text: String,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_steps(target, defaults::STEPS)
    }

    pub fn with_steps(target: u64, steps: u32) -> Self {
        Self {
            target,
            count: 0.0,
            increment: target as f64 / f64::from(steps.max(1)),
            text: format_thousands(0),
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame. Returns false once the final value is displayed.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.count += self.increment;
        if self.count < self.target as f64 {
            self.text = format_thousands(self.count.round() as u64);
        } else {
            self.text = format_thousands(self.target);
            self.finished = true;
        }
        !self.finished
    }

    /// Run every remaining frame.
    pub fn finish(&mut self) {
        while self.tick() {}
    }
}

/// Group digits in threes with commas: `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
