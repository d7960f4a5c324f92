use crate::animation::{AnimationHandle, Animator};
use crate::spring::SpringConfig;

/// Rotation of the expand control, in degrees. 0 points right, 180 is
/// flipped to point left.
#[derive(Debug)]
pub struct ControlRotation {
    handle: Option<AnimationHandle>,
    spring: SpringConfig,
}

impl ControlRotation {
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            handle: None,
            spring,
        }
    }

    fn angle_for(flipped: bool) -> f32 {
        if flipped { 180.0 } else { 0.0 }
    }

    /// Follow the control's flipped flag. `None` means the control is not
    /// rendered and its animation is released.
    pub fn sync(&mut self, flipped: Option<bool>, animator: &mut impl Animator) {
        match (flipped, self.handle) {
            (Some(flipped), Some(handle)) => animator.retarget(handle, Self::angle_for(flipped)),
            (Some(flipped), None) => {
                let angle = Self::angle_for(flipped);
                self.handle = Some(animator.animate(angle, angle, self.spring));
            }
            (None, Some(handle)) => {
                animator.release(handle);
                self.handle = None;
            }
            (None, None) => {}
        }
    }

    /// Current angle, `None` when the control is not rendered.
    pub fn angle(&self, animator: &impl Animator) -> Option<f32> {
        self.handle.and_then(|handle| animator.value(handle))
    }

    pub fn is_animating(&self, animator: &impl Animator) -> bool {
        self.handle.is_some_and(|handle| !animator.is_settled(handle))
    }

    pub fn unmount(&mut self, animator: &mut impl Animator) {
        self.sync(None, animator);
    }
}
