use ahash::AHashSet;

/// Escalation stops here: past f64's decimal significance another digit of
/// precision cannot separate values that still collide.
pub const MAX_PRECISION: u32 = 17;

pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Round every value to `precision` decimal places, escalating the precision
/// one digit at a time until rounding no longer collapses distinct values.
/// Collisions already present in the input are never broken. At
/// `MAX_PRECISION` the search gives up and returns the input unrounded.
pub fn round_to_distinct(values: &[f64], precision: u32) -> Vec<f64> {
    let original_distinct = distinct_count(values);
    let mut precision = precision;
    while precision <= MAX_PRECISION {
        let rounded: Vec<f64> = values.iter().map(|v| round_to(*v, precision)).collect();
        if distinct_count(&rounded) == original_distinct {
            return rounded;
        }
        precision += 1;
    }
    values.to_vec()
}

fn distinct_count(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| v.to_bits())
        .collect::<AHashSet<u64>>()
        .len()
}
