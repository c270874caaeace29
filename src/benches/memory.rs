use std::hint::black_box;

use super::ITER_100K;
use crate::harness::time_secs;

/// Length of every sequence the alloc kernel creates.
pub const SEQ_LEN: usize = 10;

/// Ten independent length-10 heap sequences per iteration, all freed at the
/// end of the iteration.
pub fn alloc() -> f64 {
    time_secs(|| {
        for _ in 0..ITER_100K {
            let _a = black_box(vec![0_u64; SEQ_LEN]);
            let _b = black_box(vec![0_u64; SEQ_LEN]);
            let _c = black_box(vec![0_u64; SEQ_LEN]);
            let _d = black_box(vec![0_u64; SEQ_LEN]);
            let _e = black_box(vec![0_u64; SEQ_LEN]);
            let _f = black_box(vec![0_u64; SEQ_LEN]);
            let _g = black_box(vec![0_u64; SEQ_LEN]);
            let _h = black_box(vec![0_u64; SEQ_LEN]);
            let _i = black_box(vec![0_u64; SEQ_LEN]);
            let _j = black_box(vec![0_u64; SEQ_LEN]);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_duration_valid() {
        let secs = alloc();
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}
