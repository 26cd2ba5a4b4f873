// The particle field: a fixed set of drifting particles drawn onto a
// `Surface`, with translucent links between every pair closer than
// `FieldConfig::link_distance`.
//
// The field is the single owner of its particles and surface. The page
// reaches it through two entry points, `resize` (viewport changes) and
// `step` (one display frame).

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use nalgebra_glm as glm;
use rand::Rng;

pub struct ParticleField<S: Surface> {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    surface: S,
    config: FieldConfig,
}

impl<S: Surface> ParticleField<S> {
    /// Builds a field of `count` random particles using the default look.
    pub fn initialize(surface: S, count: usize, width: u32, height: u32) -> Self {
        let config = FieldConfig {
            particle_count: count,
            ..FieldConfig::default()
        };
        Self::with_rng(surface, config, width, height, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        surface: S,
        config: FieldConfig,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::with_particles(surface, config, width, height, Vec::new());
        field.reset_with_rng(rng);
        field
    }

    /// Builds a field around an explicit particle set; the configured count is ignored.
    pub fn with_particles(
        mut surface: S,
        config: FieldConfig,
        width: u32,
        height: u32,
        particles: Vec<Particle>,
    ) -> Self {
        surface.set_size(width, height);
        ParticleField {
            width,
            height,
            particles,
            surface,
            config,
        }
    }

    /// Replaces every particle with a fresh random one.
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::thread_rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.width as f64, self.height as f64);
        let config = &self.config;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, height, config))
            .collect();
    }

    /// Only the surface dimensions change. Particles left outside the new bounds
    /// are pulled back by their own edge snapping on a later step.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.surface.set_size(width, height);
    }

    /// Advances and draws one frame.
    pub fn step(&mut self) {
        #[cfg(feature = "profile")]
        let _timer = crate::Timer::new("ParticleField::step");

        let (width, height) = (self.width as f64, self.height as f64);
        self.surface.clear(width, height);

        let color = self.config.particle_color;
        for particle in &mut self.particles {
            particle.advance(width, height);
            self.surface
                .fill_circle(particle.pos, particle.radius, color, particle.opacity);
        }

        self.draw_links();
    }

    fn draw_links(&mut self) {
        let link_distance = self.config.link_distance;
        for (i, j) in pair_indices(self.particles.len()) {
            let a = self.particles[i].pos;
            let b = self.particles[j].pos;
            let distance = glm::distance(&glm::vec2(a[0], a[1]), &glm::vec2(b[0], b[1]));
            if distance < link_distance {
                let alpha = self.config.link_alpha * (1.0 - distance / link_distance);
                self.surface.stroke_line(
                    a,
                    b,
                    self.config.link_color,
                    alpha,
                    self.config.link_width,
                );
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

// Every unordered pair (i, j) with i < j, in collection order.
pub(crate) fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}
