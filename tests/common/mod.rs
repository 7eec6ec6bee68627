//! Synthetic particle images shared by integration tests.

#![allow(dead_code)]

use corrpiv::Frame;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Gaussian particle: center, peak intensity, standard deviation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub intensity: f64,
    pub sigma: f64,
}

/// Scatters particles over a margin-extended frame so content enters and
/// leaves the field of view when shifted.
pub fn scatter_particles(width: usize, height: usize, count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let margin = 8.0;
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(-margin..width as f64 + margin),
            y: rng.random_range(-margin..height as f64 + margin),
            intensity: rng.random_range(120.0..220.0),
            sigma: 1.3,
        })
        .collect()
}

/// Renders particles displaced by `(shift_x, shift_y)` pixels.
pub fn render(
    particles: &[Particle],
    width: usize,
    height: usize,
    shift_x: f64,
    shift_y: f64,
) -> Frame {
    let mut data = vec![0.0f32; width * height];
    for p in particles {
        let cx = p.x + shift_x;
        let cy = p.y + shift_y;
        let reach = 4.0 * p.sigma;
        let x0 = (cx - reach).floor().max(0.0) as usize;
        let y0 = (cy - reach).floor().max(0.0) as usize;
        let x1 = ((cx + reach).ceil().max(0.0) as usize).min(width);
        let y1 = ((cy + reach).ceil().max(0.0) as usize).min(height);
        let inv = 1.0 / (2.0 * p.sigma * p.sigma);
        for y in y0..y1 {
            for x in x0..x1 {
                let r2 = (x as f64 - cx).powi(2) + (y as f64 - cy).powi(2);
                data[y * width + x] += (p.intensity * (-r2 * inv).exp()) as f32;
            }
        }
    }
    Frame::new(data, width, height).unwrap()
}

/// A frame pair where the second frame is the first moved by `(dx, dy)`.
pub fn shifted_pair(width: usize, height: usize, dx: f64, dy: f64, seed: u64) -> (Frame, Frame) {
    let particles = scatter_particles(width, height, width * height / 20, seed);
    (
        render(&particles, width, height, 0.0, 0.0),
        render(&particles, width, height, dx, dy),
    )
}

fn wrap(d: f64, period: f64) -> f64 {
    let r = d.rem_euclid(period);
    if r >= period / 2.0 {
        r - period
    } else {
        r
    }
}

/// Renders a texture that repeats every `period` pixels on both axes,
/// displaced by `(shift_x, shift_y)`.
pub fn render_periodic(
    tile: &[Particle],
    period: usize,
    width: usize,
    height: usize,
    shift_x: f64,
    shift_y: f64,
) -> Frame {
    let p = period as f64;
    Frame::from_fn(width, height, |x, y| {
        tile.iter()
            .map(|q| {
                let dx = wrap(x as f64 - q.x - shift_x, p);
                let dy = wrap(y as f64 - q.y - shift_y, p);
                q.intensity * (-(dx * dx + dy * dy) / (2.0 * q.sigma * q.sigma)).exp()
            })
            .sum::<f64>() as f32
    })
    .unwrap()
}

/// Periodic frame pair; windows spanning whole periods see a symmetric
/// correlation lobe around the true displacement.
pub fn periodic_pair(
    period: usize,
    width: usize,
    height: usize,
    dx: f64,
    dy: f64,
    seed: u64,
) -> (Frame, Frame) {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = period as f64;
    let tile: Vec<Particle> = (0..4)
        .map(|_| Particle {
            x: rng.random_range(0.0..p),
            y: rng.random_range(0.0..p),
            intensity: rng.random_range(120.0..220.0),
            sigma: 1.3,
        })
        .collect();
    (
        render_periodic(&tile, period, width, height, 0.0, 0.0),
        render_periodic(&tile, period, width, height, dx, dy),
    )
}
