//! Bounded energy redistribution between channels.
//!
//! Each round has two passes:
//!
//! - **Excess pass**: energy above 255 is moved into channels that still have
//!   headroom, in proportion to their weighted headroom.
//! - **Debt pass**: energy below 0 is borrowed from channels that still have
//!   energy to give, in proportion to their weighted energy.
//!
//! Both passes move weighted energy, so `wR*R + wG*G + wB*B` stays put (up to
//! rounding). The loop stops as soon as a round finds nothing to correct, or
//! after [`MAX_ROUNDS`] rounds; whatever is left over is cut off by the
//! quantizer.
//!
//! The over-full (or in-debt) channels are scaled by `distribute / excess`
//! (or `distribute / deficit`), not by `distribute / capacity`. Output pixels
//! depend on this.

use super::CHANNEL_MAX;
use crate::color::{Channel, LinearRgb, LuminanceWeights};

/// Upper bound on redistribution rounds.
pub const MAX_ROUNDS: usize = 3;

/// Result of [`redistribute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Redistribution {
    /// The balanced color; channels may still be slightly out of range when
    /// `settled` is false.
    pub color: LinearRgb,
    /// Rounds executed, `1..=MAX_ROUNDS`.
    pub rounds: usize,
    /// True when the last round found neither excess nor debt.
    pub settled: bool,
}

/// Push every channel toward `0..=255` while keeping the weighted sum.
///
/// Runs at most [`MAX_ROUNDS`] rounds. A round whose excess and debt are both
/// zero ends the loop early.
///
/// # Example
/// ```
/// use luma_clamp::{clamp::redistribute, LinearRgb, LuminanceWeights};
///
/// let w = LuminanceWeights::REC709;
/// let out = redistribute(LinearRgb::new(400.0, 0.0, 0.0), &w);
/// assert_eq!(out.color.r, 255.0);
/// assert!(out.color.g > 0.0 && out.color.b > 0.0);
/// assert!(out.settled);
/// ```
pub fn redistribute(color: LinearRgb, weights: &LuminanceWeights) -> Redistribution {
    let mut color = color;

    for round in 1..=MAX_ROUNDS {
        let excess = dissipate_excess(&mut color, weights);
        let debt = settle_debt(&mut color, weights);
        if excess == 0.0 && debt == 0.0 {
            return Redistribution {
                color,
                rounds: round,
                settled: true,
            };
        }
    }

    Redistribution {
        color,
        rounds: MAX_ROUNDS,
        settled: false,
    }
}

/// Weighted capacity of each channel, as `(channel, capacity)` pairs.
fn capacities(
    color: LinearRgb,
    weights: &LuminanceWeights,
    capacity_of: impl Fn(f64) -> f64,
) -> [(Channel, f64); 3] {
    Channel::ALL.map(|ch| (ch, capacity_of(color.get(ch)) * weights.get(ch)))
}

fn positive_total(caps: &[(Channel, f64); 3]) -> f64 {
    caps.iter().map(|&(_, cap)| cap.max(0.0)).sum()
}

/// Excess pass. Returns the weighted excess measured before the pass.
fn dissipate_excess(color: &mut LinearRgb, weights: &LuminanceWeights) -> f64 {
    let excess: f64 = Channel::ALL
        .iter()
        .map(|&ch| weights.get(ch) * (color.get(ch) - CHANNEL_MAX).max(0.0))
        .sum();
    if excess <= 0.0 {
        return excess;
    }

    // Headroom below the ceiling; negative for channels above it
    let caps = capacities(*color, weights, |c| CHANNEL_MAX - c);
    let capacity = positive_total(&caps);
    if capacity > 0.0 {
        let distribute = capacity.min(excess);

        let fill = distribute / capacity;
        for &(ch, cap) in caps.iter().filter(|(_, cap)| *cap > 0.0) {
            *color.channel_mut(ch) += cap * fill / weights.get(ch);
        }

        let drain = distribute / excess;
        for &(ch, cap) in caps.iter().filter(|(_, cap)| *cap < 0.0) {
            *color.channel_mut(ch) += cap * drain / weights.get(ch);
        }
    }
    excess
}

/// Debt pass. Returns the weighted debt (zero or negative) measured before
/// the pass.
fn settle_debt(color: &mut LinearRgb, weights: &LuminanceWeights) -> f64 {
    let debt: f64 = Channel::ALL
        .iter()
        .map(|&ch| weights.get(ch) * color.get(ch).min(0.0))
        .sum();
    if debt >= 0.0 {
        return debt;
    }
    let deficit = -debt;

    // Energy above zero; negative for channels in debt
    let caps = capacities(*color, weights, |c| c);
    let capacity = positive_total(&caps);
    if capacity > 0.0 {
        let distribute = capacity.min(deficit);

        let take = distribute / capacity;
        for &(ch, cap) in caps.iter().filter(|(_, cap)| *cap > 0.0) {
            *color.channel_mut(ch) -= cap * take / weights.get(ch);
        }

        let give = distribute / deficit;
        for &(ch, cap) in caps.iter().filter(|(_, cap)| *cap < 0.0) {
            *color.channel_mut(ch) -= cap * give / weights.get(ch);
        }
    }
    debt
}
