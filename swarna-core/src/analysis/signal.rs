//! Investment signal taxonomy.
//!
//! | bucket         | percent delta p      |
//! |----------------|----------------------|
//! | StrongBullish  | p > strong           |
//! | Bullish        | mild <= p <= strong  |
//! | Stable         | -mild < p < mild     |
//! | Bearish        | -strong <= p <= -mild|
//! | StrongBearish  | p < -strong          |
//!
//! With the default thresholds (3 / 1) exactly 3.00 is Bullish, exactly 1.00
//! is Bullish, exactly -1.00 is Bearish and exactly -3.00 is Bearish.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    StrongBullish,
    Bullish,
    Stable,
    Bearish,
    StrongBearish,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::StrongBearish,
        Signal::Bearish,
        Signal::Stable,
        Signal::Bullish,
        Signal::StrongBullish,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Signal::StrongBullish => "Strong bullish",
            Signal::Bullish => "Bullish",
            Signal::Stable => "Stable",
            Signal::Bearish => "Bearish",
            Signal::StrongBearish => "Strong bearish",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Signal::StrongBullish => "Prices rising sharply: strong case to buy now",
            Signal::Bullish => "Prices expected to rise: consider investing",
            Signal::Stable => "Price stable: invest as needed",
            Signal::Bearish => "Prices expected to dip: better to wait",
            Signal::StrongBearish => "Prices falling sharply: hold off on buying",
        }
    }

    /// Ordinal from most bearish (0) to most bullish (4).
    pub fn rank(self) -> u8 {
        match self {
            Signal::StrongBearish => 0,
            Signal::Bearish => 1,
            Signal::Stable => 2,
            Signal::Bullish => 3,
            Signal::StrongBullish => 4,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold magnitudes in percent. Symmetric around zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    pub strong_pct: f64,
    pub mild_pct: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            strong_pct: 3.0,
            mild_pct: 1.0,
        }
    }
}

impl SignalThresholds {
    pub fn classify(&self, percent: f64) -> Signal {
        if percent.is_nan() {
            return Signal::Stable;
        }
        if percent > self.strong_pct {
            Signal::StrongBullish
        } else if percent >= self.mild_pct {
            Signal::Bullish
        } else if percent > -self.mild_pct {
            Signal::Stable
        } else if percent >= -self.strong_pct {
            Signal::Bearish
        } else {
            Signal::StrongBearish
        }
    }

    /// Thresholds must be non-negative with `strong_pct > mild_pct`.
    pub fn is_valid(&self) -> bool {
        self.mild_pct.is_finite()
            && self.strong_pct.is_finite()
            && self.mild_pct >= 0.0
            && self.strong_pct > self.mild_pct
    }
}

/// Classify with the default thresholds.
pub fn classify(percent: f64) -> Signal {
    SignalThresholds::default().classify(percent)
}
