//! Canonical test fixtures.
//!
//! Unit tests, property tests, benches, and fuzz targets all exercise
//! the same three-type set so failures reproduce across harnesses.

crate::variant_set! {
    /// Three payload shapes with deliberately different footprints:
    /// a plain integer, a float, and a heap-owning string.
    pub enum Sample, columns = SampleColumns {
        Int(i64) => ints,
        Real(f64) => reals,
        Text(String) => texts,
    }
}

/// Deterministic mixed-type sequence: `Int`, `Real`, `Text`, repeating.
pub fn mixed_values(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| match i % 3 {
            0 => Sample::Int(i as i64),
            1 => Sample::Real(i as f64 * 0.5),
            _ => Sample::Text(format!("v{i}")),
        })
        .collect()
}
