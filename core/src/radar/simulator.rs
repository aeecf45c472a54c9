use crate::radar::jitter::{JitterSource, SeededJitter};
use crate::radar::{
    normalized_radius, wrap_angle, ALPHA_DECAY, ALPHA_EPSILON, BLIP_TTL, JITTER_SPREAD, MAX_BLIPS,
    SWEEP_STEP,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ephemeral radar marker for one historical distance reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blip {
    /// Normalized radius in `[0, 1]`.
    pub radius: f64,
    pub angle: f64,
    pub alpha: f64,
    pub ttl: u32,
}

impl Blip {
    fn decay(&mut self) {
        self.alpha *= ALPHA_DECAY;
        self.ttl = self.ttl.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.ttl == 0 || self.alpha < ALPHA_EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SweepState {
    pub angle: f64,
}

impl SweepState {
    fn advance(&mut self, step: f64) {
        self.angle = wrap_angle(self.angle + step);
    }
}

/// Read-only copy of the radar for a render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarState {
    pub sweep: SweepState,
    pub blips: Vec<Blip>,
}

/// Time-stepped radar animation. Each [`tick`](RadarSimulator::tick) decays the
/// blip population and then advances the sweep; no display is required.
pub struct RadarSimulator {
    sweep: SweepState,
    blips: Vec<Blip>,
    jitter: Box<dyn JitterSource>,
    blip_ttl: u32,
}

impl RadarSimulator {
    pub fn new(jitter: Box<dyn JitterSource>) -> Self {
        Self {
            sweep: SweepState::default(),
            blips: Vec::new(),
            jitter,
            blip_ttl: BLIP_TTL,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededJitter::from_seed(seed)))
    }

    /// Overrides the lifetime given to blips added from now on.
    pub fn with_blip_ttl(mut self, ttl: u32) -> Self {
        self.blip_ttl = ttl;
        self
    }

    /// Places a blip for `distance_cm` near the current sweep angle.
    pub fn add_blip(&mut self, distance_cm: f64) {
        let radius = normalized_radius(distance_cm);
        let angle = wrap_angle(self.sweep.angle + self.jitter.offset(JITTER_SPREAD));
        if self.blips.len() >= MAX_BLIPS {
            self.blips.remove(0);
        }
        self.blips.push(Blip {
            radius,
            angle,
            alpha: 1.0,
            ttl: self.blip_ttl,
        });
    }

    pub fn tick(&mut self) {
        for blip in &mut self.blips {
            blip.decay();
        }
        self.blips.retain(|blip| !blip.is_expired());
        self.sweep.advance(SWEEP_STEP);
    }

    pub fn sweep(&self) -> SweepState {
        self.sweep
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub fn state(&self) -> RadarState {
        RadarState {
            sweep: self.sweep,
            blips: self.blips.clone(),
        }
    }
}

impl Default for RadarSimulator {
    fn default() -> Self {
        Self::new(Box::new(SeededJitter::from_entropy()))
    }
}

impl fmt::Debug for RadarSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarSimulator")
            .field("sweep", &self.sweep)
            .field("blips", &self.blips.len())
            .field("blip_ttl", &self.blip_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::jitter::FixedJitter;
    use std::f64::consts::TAU;

    fn fixed(offset: f64) -> RadarSimulator {
        RadarSimulator::new(Box::new(FixedJitter(offset)))
    }

    #[test]
    fn blip_lands_near_sweep_with_normalized_radius() {
        let mut radar = fixed(0.2);
        for _ in 0..10 {
            radar.tick();
        }
        radar.add_blip(50.0);
        let blip = radar.blips()[0];
        assert!((blip.radius - 0.25).abs() < 1e-12);
        assert!((blip.angle - (10.0 * SWEEP_STEP + 0.2)).abs() < 1e-9);
        assert_eq!(blip.alpha, 1.0);
        assert_eq!(blip.ttl, BLIP_TTL);
    }

    #[test]
    fn negative_jitter_at_origin_wraps_forward() {
        let mut radar = fixed(-0.3);
        radar.add_blip(500.0);
        let blip = radar.blips()[0];
        assert_eq!(blip.radius, 1.0);
        assert!((blip.angle - (TAU - 0.3)).abs() < 1e-9);
    }

    #[test]
    fn ttl_of_one_expires_after_one_tick() {
        let mut radar = fixed(0.0).with_blip_ttl(1);
        radar.add_blip(20.0);
        assert_eq!(radar.blips().len(), 1);
        radar.tick();
        assert!(radar.blips().is_empty());
    }

    #[test]
    fn blip_count_never_grows_between_ticks() {
        let mut radar = RadarSimulator::seeded(11);
        for distance in [10.0, 60.0, 120.0, 180.0] {
            radar.add_blip(distance);
        }
        let mut previous = radar.blips().len();
        for _ in 0..400 {
            radar.tick();
            assert!(radar.blips().len() <= previous);
            previous = radar.blips().len();
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn decay_shrinks_alpha_and_ttl() {
        let mut radar = fixed(0.0);
        radar.add_blip(30.0);
        radar.tick();
        let blip = radar.blips()[0];
        assert!((blip.alpha - ALPHA_DECAY).abs() < 1e-12);
        assert_eq!(blip.ttl, BLIP_TTL - 1);
    }

    #[test]
    fn faded_blips_are_removed_before_ttl_runs_out() {
        let mut radar = fixed(0.0).with_blip_ttl(u32::MAX);
        radar.add_blip(30.0);
        let mut ticks = 0;
        while !radar.blips().is_empty() {
            radar.tick();
            ticks += 1;
            assert!(ticks < 1_000);
        }
        // 0.985^n < 0.02 first holds at n = 259
        assert_eq!(ticks, 259);
    }

    #[test]
    fn sweep_wraps_at_full_turn() {
        let mut radar = fixed(0.0);
        for _ in 0..1_000 {
            radar.tick();
            let angle = radar.sweep().angle;
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn population_is_capped() {
        let mut radar = fixed(0.0);
        for i in 0..(MAX_BLIPS + 5) {
            radar.add_blip(i as f64);
        }
        assert_eq!(radar.blips().len(), MAX_BLIPS);
        assert!((radar.blips()[0].radius - crate::radar::normalized_radius(5.0)).abs() < 1e-12);
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let mut a = RadarSimulator::seeded(99);
        let mut b = RadarSimulator::seeded(99);
        for distance in [12.0, 48.0, 150.0] {
            a.add_blip(distance);
            b.add_blip(distance);
            a.tick();
            b.tick();
        }
        assert_eq!(a.state(), b.state());
    }
}
