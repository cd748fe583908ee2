use hanabatake_core::{
    derive, Effort, QuantityUnit, RandomSource, ThreadRandomSource, FLOWER_COLORS, GARDEN_EXTENT,
};

/// Replays a fixed value sequence, cycling when exhausted.
struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

fn quantity(amount: &str, unit: QuantityUnit, sets: &str) -> Effort {
    Effort::Quantity {
        amount_text: amount.to_string(),
        unit,
        sets_text: sets.to_string(),
    }
}

fn quantity_magnitude(amount: &str, unit: QuantityUnit) -> f64 {
    let mut random = ScriptedRandom::new(&[0.5]);
    let specs = derive(&quantity(amount, unit, "1"), &mut random);
    assert_eq!(specs.len(), 1);
    specs[0].magnitude
}

#[test]
fn priority_levels_map_to_fixed_magnitude_tiers() {
    let mut random = ScriptedRandom::new(&[0.0]);

    let gorgeous = derive(&Effort::Priority { level: 1 }, &mut random);
    let nice = derive(&Effort::Priority { level: 2 }, &mut random);
    let normal = derive(&Effort::Priority { level: 3 }, &mut random);

    assert_eq!(gorgeous.len(), 1);
    assert_eq!(nice.len(), 1);
    assert_eq!(normal.len(), 1);
    assert_eq!(gorgeous[0].magnitude, 48.0);
    assert_eq!(nice[0].magnitude, 40.0);
    assert_eq!(normal[0].magnitude, 32.0);
}

#[test]
fn out_of_range_priority_levels_degrade_to_smallest_tier() {
    let mut random = ScriptedRandom::new(&[0.0]);

    for level in [0, 4, 255] {
        let specs = derive(&Effort::Priority { level }, &mut random);
        assert_eq!(specs[0].magnitude, 32.0);
    }
}

#[test]
fn quantity_event_spawns_one_flower_per_set_with_shared_magnitude() {
    // 20 reps of 30 cap → ratio 2/3 → magnitude 20 + 30 * 2/3 = 40.
    let mut random = ScriptedRandom::new(&[0.1, 0.4, 0.7, 0.2, 0.5, 0.8, 0.3, 0.6, 0.9]);
    let effort = quantity("20回", QuantityUnit::Reps, "3セット");

    let specs = derive(&effort, &mut random);

    assert_eq!(specs.len(), 3);
    for spec in &specs {
        assert!((spec.magnitude - 40.0).abs() < 1e-9);
    }
    // Color and position are drawn independently per flower.
    assert_ne!((specs[0].x, specs[0].y), (specs[1].x, specs[1].y));
    assert_ne!(specs[0].color, specs[1].color);
}

#[test]
fn quantity_magnitude_is_monotonic_up_to_the_cap_then_clamped() {
    let mut previous = f64::MIN;
    for amount in 0..=30 {
        let magnitude = quantity_magnitude(&format!("{amount}回"), QuantityUnit::Reps);
        assert!(magnitude >= previous);
        previous = magnitude;
    }

    for amount in [30, 31, 100, 10_000] {
        let magnitude = quantity_magnitude(&format!("{amount}回"), QuantityUnit::Reps);
        assert!((magnitude - 50.0).abs() < 1e-9);
    }
}

#[test]
fn seconds_use_the_sixty_second_cap() {
    let half = quantity_magnitude("30秒", QuantityUnit::Seconds);
    let full = quantity_magnitude("60秒", QuantityUnit::Seconds);
    let over = quantity_magnitude("90秒", QuantityUnit::Seconds);

    assert!((half - 35.0).abs() < 1e-9);
    assert!((full - 50.0).abs() < 1e-9);
    assert!((over - 50.0).abs() < 1e-9);
}

#[test]
fn unparsable_amount_and_sets_default_to_one() {
    let mut random = ScriptedRandom::new(&[0.5]);
    let effort = quantity("たくさん", QuantityUnit::Reps, "なし");

    let specs = derive(&effort, &mut random);

    assert_eq!(specs.len(), 1);
    // amount 1 of 30 cap → 20 + 30/30 = 21.
    assert!((specs[0].magnitude - 21.0).abs() < 1e-9);
}

#[test]
fn explicit_zero_sets_spawn_no_flowers() {
    let mut random = ScriptedRandom::new(&[0.5]);
    let effort = quantity("20回", QuantityUnit::Reps, "0セット");

    assert!(derive(&effort, &mut random).is_empty());
}

#[test]
fn colors_come_from_the_palette_and_positions_stay_in_bounds() {
    let mut random = ThreadRandomSource;

    for _ in 0..50 {
        let specs = derive(&Effort::Priority { level: 2 }, &mut random);
        let spec = &specs[0];
        assert!(FLOWER_COLORS.contains(&spec.color.as_str()));
        assert!((0.0..GARDEN_EXTENT).contains(&spec.x));
        assert!((0.0..GARDEN_EXTENT).contains(&spec.y));
    }
}

#[test]
fn random_values_near_one_still_index_the_palette() {
    let mut random = ScriptedRandom::new(&[0.999_999_9]);
    let specs = derive(&Effort::Priority { level: 1 }, &mut random);

    assert_eq!(specs[0].color, FLOWER_COLORS[FLOWER_COLORS.len() - 1]);
    assert!(specs[0].x < GARDEN_EXTENT);
}
