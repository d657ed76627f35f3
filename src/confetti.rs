//! Confetti burst
//!
//! Two emitters fire from the left and right edges every frame until a
//! deadline, then the remaining particles fall off the canvas. Particles live
//! on a virtual canvas (`CANVAS_WIDTH` x `CANVAS_HEIGHT`) and the UI scales
//! them onto whatever terminal area it has.

use ratatui::style::Color;
use std::time::{Duration, Instant};

pub const CANVAS_WIDTH: f32 = 1000.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

const START_VELOCITY: f32 = 45.0;
const DECAY: f32 = 0.9;
const GRAVITY: f32 = 1.0;
const LIFETIME_TICKS: u32 = 200;

/// Where on the canvas an emitter sits, as fractions of width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    pub particle_count: u32,
    pub angle: f32,  // degrees, 90 = straight up
    pub spread: f32, // degrees
    pub origin: Origin,
}

impl Emitter {
    /// Fires up and to the right from the left edge
    pub const LEFT: Emitter = Emitter {
        particle_count: 3,
        angle: 60.0,
        spread: 55.0,
        origin: Origin { x: 0.0, y: 0.5 },
    };

    /// Mirror of `LEFT`
    pub const RIGHT: Emitter = Emitter {
        particle_count: 3,
        angle: 120.0,
        spread: 55.0,
        origin: Origin { x: 1.0, y: 0.5 },
    };
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub glyph: usize,
    heading: f32, // radians, canvas space (y grows downward)
    velocity: f32,
    tick: u32,
}

impl Particle {
    /// 1.0 when fresh, 0.0 when about to expire
    pub fn life(&self) -> f32 {
        1.0 - self.tick as f32 / LIFETIME_TICKS as f32
    }

    fn step(&mut self) {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + GRAVITY * 3.0;
        self.velocity *= DECAY;
        self.tick += 1;
    }

    fn is_alive(&self) -> bool {
        self.tick < LIFETIME_TICKS
            && self.y < CANVAS_HEIGHT
            && self.x >= -CANVAS_WIDTH * 0.1
            && self.x <= CANVAS_WIDTH * 1.1
    }
}

pub struct Burst {
    emitters: Vec<Emitter>,
    colors: Vec<Color>,
    ends_at: Instant,
    particles: Vec<Particle>,
    rng: fastrand::Rng,
}

impl Burst {
    /// Start the standard two-sided burst
    pub fn start(now: Instant, duration: Duration, colors: Vec<Color>) -> Self {
        Self::with_rng(now, duration, colors, fastrand::Rng::new())
    }

    pub fn with_rng(now: Instant, duration: Duration, colors: Vec<Color>, rng: fastrand::Rng) -> Self {
        let colors = if colors.is_empty() { vec![Color::White] } else { colors };

        Self {
            emitters: vec![Emitter::LEFT, Emitter::RIGHT],
            colors,
            ends_at: now + duration,
            particles: Vec::new(),
            rng,
        }
    }

    /// Advance one animation frame: emit while the deadline hasn't passed,
    /// then move every particle and drop the dead ones
    pub fn frame(&mut self, now: Instant) {
        self.particles.iter_mut().for_each(Particle::step);
        self.particles.retain(Particle::is_alive);

        if self.is_emitting(now) {
            for i in 0..self.emitters.len() {
                let emitter = self.emitters[i];
                self.emit(&emitter);
            }
        }
    }

    fn emit(&mut self, emitter: &Emitter) {
        let spread = emitter.spread.to_radians();
        for _ in 0..emitter.particle_count {
            let heading = -emitter.angle.to_radians() + (0.5 * spread - self.rng.f32() * spread);
            let velocity = START_VELOCITY * 0.5 + self.rng.f32() * START_VELOCITY;

            self.particles.push(Particle {
                x: emitter.origin.x * CANVAS_WIDTH,
                y: emitter.origin.y * CANVAS_HEIGHT,
                color: self.colors[self.rng.usize(..self.colors.len())],
                glyph: self.rng.usize(..4),
                heading,
                velocity,
                tick: 0,
            });
        }
    }

    pub fn is_emitting(&self, now: Instant) -> bool {
        now < self.ends_at
    }

    /// Done once the emitters stopped and everything fell away
    pub fn is_finished(&self, now: Instant) -> bool {
        !self.is_emitting(now) && self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
