// Ambient particle background.
// A fixed set of particles drifts across the surface, bouncing off its
// edges, and every pair closer than the connection distance is joined by a
// faint line whose opacity fades out with distance.

use crate::color::Hue;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub connection_distance: f64,
    pub particle_alpha: f64,
    pub connection_alpha: f64,
    pub connection_width: f64,
    pub connection_hue: Hue,
    pub resize_quiet_ms: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            connection_distance: 140.0,
            particle_alpha: 0.6,
            connection_alpha: 0.15,
            connection_width: 0.5,
            connection_hue: Hue::Violet,
            resize_quiet_ms: 200,
        }
    }
}

impl FieldConfig {
    // Line opacity for two particles `distance` apart, None when they are
    // too far apart to be connected at all
    pub fn connection_opacity(&self, distance: f64) -> Option<f64> {
        if distance < self.connection_distance {
            Some((1.0 - distance / self.connection_distance) * self.connection_alpha)
        } else {
            None
        }
    }
}

pub struct ParticleField<S: Surface> {
    surface: S,
    config: FieldConfig,
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl<S: Surface> ParticleField<S> {
    pub fn new(surface: S, config: FieldConfig) -> Self {
        ParticleField {
            surface,
            config,
            width: 0,
            height: 0,
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn measure(&mut self) {
        let (width, height) = self.surface.display_size();
        self.width = width;
        self.height = height;
        self.surface.set_backing_size(width, height);
    }

    pub fn seed(&mut self) {
        self.seed_with(&mut rand::thread_rng());
    }

    pub fn seed_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.width as f64, self.height as f64);
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
    }

    pub fn on_resize(&mut self) {
        self.measure();
        self.seed();
        debug!(width = self.width, height = self.height, "particle field reseeded");
    }

    // One animation step. Particles after `i` have not moved yet when the
    // connections from `i` are drawn, so lines use their previous positions.
    pub fn render_frame(&mut self) {
        let (width, height) = (self.width as f64, self.height as f64);
        self.surface.clear(width, height);

        for i in 0..self.particles.len() {
            self.particles[i].advance(width, height);
            let p = self.particles[i];
            let fill = p.hue.color().rgba(self.config.particle_alpha);
            self.surface.fill_circle(p.pos, p.radius, &fill);

            for other in &self.particles[i + 1..] {
                if let Some(opacity) = self.config.connection_opacity(p.distance_to(other)) {
                    let stroke = self.config.connection_hue.color().rgba(opacity);
                    self.surface
                        .stroke_line(p.pos, other.pos, &stroke, self.config.connection_width);
                }
            }
        }
    }
}
