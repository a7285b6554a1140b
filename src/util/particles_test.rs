use super::*;

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_gives_the_same_layout() {
    assert_eq!(generate(PARTICLE_COUNT, 7), generate(PARTICLE_COUNT, 7));
}

#[test]
fn different_seeds_give_different_layouts() {
    assert_ne!(generate(10, 1), generate(10, 2));
}

#[test]
fn generates_the_requested_count() {
    assert_eq!(generate(0, 1).len(), 0);
    assert_eq!(generate(PARTICLE_COUNT, 1).len(), PARTICLE_COUNT);
}

// =============================================================
// Value ranges
// =============================================================

#[test]
fn placements_stay_inside_their_ranges() {
    for p in generate(200, 42) {
        assert!((0.0..=100.0).contains(&p.left_pct));
        assert!((0.0..=100.0).contains(&p.top_pct));
        assert!((2.0..=6.0).contains(&p.size_px));
        assert!((3.0..=7.0).contains(&p.drift_s));
        assert!((0.0..=5.0).contains(&p.delay_s));
        assert!((0.1..=0.4).contains(&p.opacity));
    }
}

#[test]
fn tints_come_from_the_palette() {
    for p in generate(100, 9) {
        assert!(TINTS.contains(&p.tint));
    }
}
