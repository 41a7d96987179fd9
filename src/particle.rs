// Simple particle struct to keep track of individual position, velocity, size and hue

use crate::color::Hue;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub hue: Hue,
}

impl Particle {
    pub const MAX_VELOCITY: f64 = 0.25;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, hue: Hue) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            hue,
        }
    }

    // Uniformly placed somewhere inside a width x height rectangle
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_VELOCITY;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_VELOCITY;
        let radius = rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS)
            + Particle::MIN_RADIUS;
        let hue = if rng.gen_bool(0.5) { Hue::Violet } else { Hue::Cyan };
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, hue)
    }

    // Moves by one step of velocity, then flips the velocity on any axis
    // that ended up outside [0, bound]. The position itself is left alone,
    // the flip only shows up on the next step.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
