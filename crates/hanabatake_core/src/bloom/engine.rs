//! Bloom derivation engine.
//!
//! # Responsibility
//! - Map a completed task's effort descriptor to flower specs.
//! - Stay pure given the injected random source.
//!
//! # Invariants
//! - Priority completions yield exactly one spec.
//! - Quantity completions yield one spec per set, all sharing one magnitude
//!   computed once per event.
//! - Coordinates always land in `[0, GARDEN_EXTENT)`.

use crate::bloom::random::RandomSource;
use crate::model::flower::{FlowerSpec, FLOWER_COLORS, GARDEN_EXTENT};
use crate::model::task::{Effort, QuantityUnit};
use once_cell::sync::Lazy;
use regex::Regex;

/// Magnitude for a level-1 (most urgent) priority completion.
pub const GORGEOUS_MAGNITUDE: f64 = 48.0;
/// Magnitude for a level-2 priority completion.
pub const NICE_MAGNITUDE: f64 = 40.0;
/// Magnitude for every other priority level.
pub const NORMAL_MAGNITUDE: f64 = 32.0;

/// Smallest quantity-driven magnitude.
pub const MIN_MAGNITUDE: f64 = 20.0;
/// Largest quantity-driven magnitude, reached at the unit's cap.
pub const MAX_MAGNITUDE: f64 = 50.0;

/// Amount regarded as a full-size bloom for repetition-counted work.
const REPS_CAP: u32 = 30;
/// Amount regarded as a full-size bloom for duration-counted work.
const SECONDS_CAP: u32 = 60;

static FIRST_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Extracts the first run of decimal digits found anywhere in `text`.
///
/// Returns 1 when no digits exist or the run overflows. The result feeds a
/// cosmetic size calculation, so a usable default always beats an error.
pub fn first_integer(text: &str) -> u32 {
    FIRST_INTEGER
        .find(text)
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .unwrap_or(1)
}

/// Derives the flower specs spawned by one completion edge.
///
/// Color and position are drawn independently per spec from `random`.
pub fn derive(effort: &Effort, random: &mut dyn RandomSource) -> Vec<FlowerSpec> {
    match effort {
        Effort::Priority { level } => {
            let magnitude = match level {
                1 => GORGEOUS_MAGNITUDE,
                2 => NICE_MAGNITUDE,
                _ => NORMAL_MAGNITUDE,
            };
            vec![spawn(magnitude, random)]
        }
        Effort::Quantity {
            amount_text,
            unit,
            sets_text,
        } => {
            let sets = first_integer(sets_text);
            let magnitude = quantity_magnitude(first_integer(amount_text), *unit);
            (0..sets).map(|_| spawn(magnitude, random)).collect()
        }
    }
}

/// Scales the shared per-event magnitude from the extracted amount.
///
/// Linear between `MIN_MAGNITUDE` and `MAX_MAGNITUDE`, clamped at the
/// unit's cap.
fn quantity_magnitude(amount: u32, unit: QuantityUnit) -> f64 {
    let cap = match unit {
        QuantityUnit::Reps => REPS_CAP,
        QuantityUnit::Seconds => SECONDS_CAP,
    };
    let ratio = (f64::from(amount) / f64::from(cap)).min(1.0);
    MIN_MAGNITUDE + (MAX_MAGNITUDE - MIN_MAGNITUDE) * ratio
}

fn spawn(magnitude: f64, random: &mut dyn RandomSource) -> FlowerSpec {
    let index = ((random.unit() * FLOWER_COLORS.len() as f64) as usize)
        .min(FLOWER_COLORS.len() - 1);

    FlowerSpec {
        magnitude,
        color: FLOWER_COLORS[index].to_string(),
        x: random.unit() * GARDEN_EXTENT,
        y: random.unit() * GARDEN_EXTENT,
    }
}
