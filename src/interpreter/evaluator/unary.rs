/// Negates a value.
///
/// Plain IEEE negation: `eval_negate(0.0)` is `-0.0`.
#[must_use]
pub const fn eval_negate(value: f64) -> f64 {
    -value
}
