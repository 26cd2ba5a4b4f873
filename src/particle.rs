// Simple particle struct to keep track of individual position, velocity, size and opacity

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    /// Drawn once at creation and never read by the update or draw passes.
    pub depth: f64,
    pub vel: [f64; 2],
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            depth: 0.0,
            vel: [vel_x, vel_y],
            radius,
            opacity,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let depth = rng.gen::<f64>() * config.max_depth;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let opacity = rng.gen::<f64>() * (config.max_opacity - config.min_opacity) + config.min_opacity;
        Particle {
            pos: [pos_x, pos_y],
            depth,
            vel: [vel_x, vel_y],
            radius,
            opacity,
        }
    }

    // Moves by one frame of velocity, then snaps to the opposite edge if it left the surface.
    // The overshoot is discarded: leaving past 0 lands exactly on `width`, not `width - overshoot`.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 {
            self.pos[0] = width;
        }
        if self.pos[0] > width {
            self.pos[0] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = height;
        }
        if self.pos[1] > height {
            self.pos[1] = 0.0;
        }
    }
}
