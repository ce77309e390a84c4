/// Logistic sigmoid `σ(x) = 1 / (1 + e^-x)`.
///
/// The only activation used by the engine. Maps any finite input into
/// (0, 1), saturating at the f32 resolution limit for |x| beyond ~17.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_exactly_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_strictly_inside_the_unit_interval() {
        for &x in &[-10.0, -1.0, -0.001, 0.001, 1.0, 10.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn sigmoid_is_monotonic() {
        assert!(sigmoid(-1.0) < sigmoid(0.0));
        assert!(sigmoid(0.0) < sigmoid(1.0));
    }
}
