use glam::DVec2;
use rayon::prelude::*;

use crate::config::{GridSpec, Interval};
use crate::epicenter::Wave;
use crate::error::RippleError;

/// Height contribution of a single decaying radial wave at point `p`.
///
/// At `r = 0` both the cosine and the exponential are 1, so the contribution
/// is exactly the wave amplitude, and it never exceeds the amplitude in
/// magnitude for any distance.
#[inline]
pub fn ripple_height(p: DVec2, wave: &Wave) -> f64 {
    let r = p.distance(wave.center);
    wave.amplitude * (wave.wavenumber * r).cos() * (-wave.decay_rate * r).exp()
}

/// Sampled height field over a regular grid.
///
/// Row-major: `values[row * width + col]` is the height at
/// `(xs[col], ys[row])`.
#[derive(Debug, Clone)]
pub struct HeightField {
    pub width: usize,
    pub height: usize,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub values: Vec<f64>,
}

impl HeightField {
    #[inline]
    pub fn value(&self, col: usize, row: usize) -> f64 {
        self.values[row * self.width + col]
    }
}

/// Evenly spaced coordinates over the interval, endpoints included.
/// A single-point axis sits at the lower bound.
fn linspace(interval: Interval, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![interval.lo];
    }
    let step = interval.span() / (n - 1) as f64;
    (0..n).map(|i| interval.lo + step * i as f64).collect()
}

/// Evaluate the superposition of all waves over the grid.
///
/// Rows are evaluated in parallel; within a point the waves are summed in
/// list order, so a given wave list always produces identical output.
pub fn synthesize_field(grid: &GridSpec, waves: &[Wave]) -> Result<HeightField, RippleError> {
    grid.validate()?;

    let xs = linspace(grid.domain, grid.width);
    let ys = linspace(grid.domain, grid.height);

    let mut values = vec![0.0f64; grid.width * grid.height];
    values
        .par_chunks_mut(grid.width)
        .enumerate()
        .for_each(|(row, out)| {
            let y = ys[row];
            for (col, slot) in out.iter_mut().enumerate() {
                let p = DVec2::new(xs[col], y);
                *slot = waves.iter().map(|wave| ripple_height(p, wave)).sum();
            }
        });

    Ok(HeightField {
        width: grid.width,
        height: grid.height,
        xs,
        ys,
        values,
    })
}
