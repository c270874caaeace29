use std::hint::black_box;

use super::ITER_100K;
use crate::harness::time_secs;

/// Content shared by both operands.
pub const TEXT: &str = "this is a test of a string compare of two long strings";

/// Comparisons per outer iteration.
const COMPARES: usize = 10;

/// Two separately allocated strings with identical content.
pub fn operands() -> (String, String) {
    (String::from(TEXT), String::from(TEXT))
}

/// `String` equality checks length and then bytes. It never short-circuits on
/// identity, so distinct buffers always take the content path.
pub fn string_compare() -> f64 {
    let (s1, s2) = operands();

    time_secs(|| {
        for _ in 0..ITER_100K {
            for _ in 0..COMPARES {
                black_box(black_box(&s1) == black_box(&s2));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_distinct_but_equal() {
        let (s1, s2) = operands();
        assert!(!std::ptr::eq(s1.as_ptr(), s2.as_ptr()));
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_string_compare_duration_valid() {
        let secs = string_compare();
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}
