//! The animation engine the presentation layer drives.
//!
//! Presentation code only talks to the [`Animator`] trait. Each animated
//! number gets an [`AnimationHandle`]; the engine moves it towards its target
//! as time is fed in through [`Animator::advance`]. Nothing here reads the
//! clock, so tests can step time by hand.

use std::collections::HashMap;
use std::time::Duration;

use log::trace;

use crate::spring::{Spring, SpringConfig};

/// Identifies one animated value inside an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// An engine that interpolates numbers over time.
pub trait Animator {
    /// Start animating from `from` to `to`.
    fn animate(&mut self, from: f32, to: f32, config: SpringConfig) -> AnimationHandle;

    /// Point an animation at a new target, continuing from where it is now.
    fn retarget(&mut self, handle: AnimationHandle, to: f32);

    /// Current value, or `None` for an unknown handle.
    fn value(&self, handle: AnimationHandle) -> Option<f32>;

    /// True once the animation reached its target. Unknown handles are settled.
    fn is_settled(&self, handle: AnimationHandle) -> bool;

    /// Move every animation forward by `dt`.
    fn advance(&mut self, dt: Duration);

    /// Forget an animation.
    fn release(&mut self, handle: AnimationHandle);

    /// True while any animation is still moving.
    fn has_active(&self) -> bool;
}

/// Spring-physics [`Animator`].
#[derive(Debug, Default)]
pub struct SpringAnimator {
    springs: HashMap<AnimationHandle, Spring>,
    next_id: u64,
    /// Reduced motion flag - when true, animations land on their target instantly.
    reduced_motion: bool,
}

impl SpringAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            for spring in self.springs.values_mut() {
                spring.finish();
            }
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }
}

impl Animator for SpringAnimator {
    fn animate(&mut self, from: f32, to: f32, config: SpringConfig) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;

        let mut spring = Spring::new(from, to, config);
        if self.reduced_motion {
            spring.finish();
        }
        trace!("Animation {:?}: {} -> {}", handle, from, to);
        self.springs.insert(handle, spring);
        handle
    }

    fn retarget(&mut self, handle: AnimationHandle, to: f32) {
        let Some(spring) = self.springs.get_mut(&handle) else {
            return;
        };
        spring.set_target(to);
        if self.reduced_motion {
            spring.finish();
        }
    }

    fn value(&self, handle: AnimationHandle) -> Option<f32> {
        self.springs.get(&handle).map(Spring::value)
    }

    fn is_settled(&self, handle: AnimationHandle) -> bool {
        self.springs
            .get(&handle)
            .is_none_or(|spring| spring.value() == spring.target() && spring.is_at_rest())
    }

    fn advance(&mut self, dt: Duration) {
        for spring in self.springs.values_mut() {
            spring.step(dt);
        }
    }

    fn release(&mut self, handle: AnimationHandle) {
        self.springs.remove(&handle);
    }

    fn has_active(&self) -> bool {
        self.springs.keys().any(|handle| !self.is_settled(*handle))
    }
}
