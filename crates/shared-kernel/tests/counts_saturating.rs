// crates/shared-kernel/tests/counts_saturating.rs
use quality_probe_shared_kernel::{CognitiveComplexity, Sloc};

#[test]
fn sloc_saturates_instead_of_wrapping() {
    let max = Sloc::from(usize::MAX);
    assert_eq!(max.saturating_add(1), max);
    assert_eq!(Sloc::from(5).saturating_add_count(max), max);
    assert_eq!(max + Sloc::from(1), max);
}

#[test]
fn complexity_saturates_instead_of_wrapping() {
    let max = CognitiveComplexity::from(usize::MAX);
    let total: CognitiveComplexity = [max, CognitiveComplexity::from(3)].into_iter().sum();
    assert_eq!(total, max);
}
