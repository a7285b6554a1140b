//! Deterministic placement for the decorative particle field.
//!
//! DESIGN
//! ======
//! A small LCG keeps the layout stable for a given seed without pulling in
//! an RNG crate for what is only set dressing. The generator is pure; the
//! hero component turns each placement into an absolutely positioned dot
//! whose drift runs as a CSS animation.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// How many dots the hero background renders.
pub const PARTICLE_COUNT: usize = 40;

/// Tint classes the generator draws from.
const TINTS: &[&str] = &[
    "particle--cyan",
    "particle--violet",
    "particle--teal",
    "particle--cyan-soft",
    "particle--violet-soft",
];

/// One decorative dot: where it sits and how it drifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub drift_s: f32,
    pub delay_s: f32,
    pub opacity: f32,
    pub tint: &'static str,
}

struct Lcg {
    seed: u64,
}

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        self.seed
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn next_f32(&mut self) -> f32 {
        let u = (self.next_u64() >> 40) as u32; // 24 bits
        (u as f32) / ((1u32 << 24) as f32)
    }
}

/// Generate `count` placements from `seed`. Same inputs, same layout.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Lcg { seed };
    (0..count)
        .map(|_| {
            let left_pct = rng.next_f32() * 100.0;
            let top_pct = rng.next_f32() * 100.0;
            let size_px = rng.next_f32() * 4.0 + 2.0;
            let drift_s = rng.next_f32() * 4.0 + 3.0;
            let delay_s = rng.next_f32() * 5.0;
            let tint = TINTS[(rng.next_u64() % TINTS.len() as u64) as usize];
            let opacity = rng.next_f32() * 0.3 + 0.1;
            Particle {
                left_pct,
                top_pct,
                size_px,
                drift_s,
                delay_s,
                opacity,
                tint,
            }
        })
        .collect()
}
