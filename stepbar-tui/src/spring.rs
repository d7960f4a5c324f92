use std::time::Duration;

/// Below this distance and speed a spring is considered at rest.
const REST_PRECISION: f32 = 0.01;

/// Integration step. Frame deltas are split into steps of this size.
const STEP: Duration = Duration::from_millis(1);

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    /// Critically damped, used for batch width.
    pub const DEFAULT: Self = Self::new(1.0, 170.0, 26.0);

    /// Heavy and slightly bouncy, used for the expand control's rotation.
    pub const CONTROL: Self = Self::new(5.0, 500.0, 80.0);

    pub const fn new(mass: f32, tension: f32, friction: f32) -> Self {
        Self {
            mass,
            tension,
            friction,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A value pulled towards a target by a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(from: f32, to: f32, config: SpringConfig) -> Self {
        Self {
            value: from,
            velocity: 0.0,
            target: to,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Change the target, keeping the current value and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() < REST_PRECISION && (self.target - self.value).abs() < REST_PRECISION
    }

    /// Advance the simulation by `dt`.
    pub fn step(&mut self, dt: Duration) {
        if self.is_at_rest() {
            self.finish();
            return;
        }

        let mass = self.config.mass.max(f32::EPSILON);
        let mut remaining = dt;
        while !remaining.is_zero() {
            let slice = remaining.min(STEP);
            remaining -= slice;
            let h = slice.as_secs_f32();

            let force = -self.config.tension * (self.value - self.target)
                - self.config.friction * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;

            if self.is_at_rest() {
                self.finish();
                break;
            }
        }
    }
}
