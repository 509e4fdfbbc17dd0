use glam::DVec2;
use rand::Rng;

use crate::config::{Interval, RippleParams};

/// A single ripple wave: an epicenter plus its shape parameters.
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    pub center: DVec2,
    pub amplitude: f64,
    pub wavenumber: f64,
    pub decay_rate: f64,
}

/// Draw `count` epicenters, each coordinate independently uniform over the
/// domain interval. The random source is injected so callers can pin a seed.
pub fn sample_epicenters<R: Rng>(count: usize, domain: Interval, rng: &mut R) -> Vec<DVec2> {
    let mut centers = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen_range(domain.lo..=domain.hi);
        let y = rng.gen_range(domain.lo..=domain.hi);
        centers.push(DVec2::new(x, y));
    }
    centers
}

/// Sample epicenters and attach the shared shape parameters to each one.
///
/// Waves carry their own parameters, so a caller that wants them to differ
/// per wave can build the list directly instead.
pub fn generate_waves<R: Rng>(
    count: usize,
    domain: Interval,
    params: &RippleParams,
    rng: &mut R,
) -> Vec<Wave> {
    sample_epicenters(count, domain, rng)
        .into_iter()
        .map(|center| Wave {
            center,
            amplitude: params.amplitude,
            wavenumber: params.wavenumber,
            decay_rate: params.decay_rate,
        })
        .collect()
}
