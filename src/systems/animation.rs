use crate::components::Animation;
use crate::consts::FRAMES_PER_SECOND;

const FRAME_DURATION: f32 = 1.0 / FRAMES_PER_SECOND;

impl Animation {
    /// Accumulate `delta_time`; once more than one frame's worth has passed,
    /// step to the next cell of the current sequence (wrapping) and start
    /// counting again. Sequences with no frames never advance.
    pub fn advance(&mut self, delta_time: f32) {
        let frames = self.frame_count();
        if frames == 0 {
            return;
        }
        self.elapsed += delta_time;
        if self.elapsed > FRAME_DURATION {
            self.frame = (self.frame + 1) % frames;
            self.elapsed = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AnimationSet, Facing};

    fn flying() -> Animation {
        let set = AnimationSet::new()
            .with(Facing::Up, [0, 1, 2])
            .with(Facing::Right, [3, 4, 5])
            .with(Facing::Down, [6, 7, 8])
            .with(Facing::Left, [9, 10, 11]);
        Animation::new(set, Facing::Down)
    }

    #[test]
    fn test_frame_advances_after_frame_duration() {
        let mut anim = flying();
        anim.advance(0.2);
        assert_eq!(anim.current_cell(), 6);
        anim.advance(0.1);
        assert_eq!(anim.current_cell(), 7);
        assert_eq!(anim.elapsed, 0.0);
    }

    #[test]
    fn test_frame_wraps_around_sequence() {
        let mut anim = flying();
        for _ in 0..3 {
            anim.advance(0.3);
        }
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.current_cell(), 6);
    }

    #[test]
    fn test_zero_time_never_advances() {
        let mut anim = flying();
        for _ in 0..100 {
            anim.advance(0.0);
        }
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_still_animation_ignores_time() {
        let mut anim = Animation::still();
        anim.advance(10.0);
        assert_eq!(anim.elapsed, 0.0);
        assert_eq!(anim.current_cell(), 0);
    }
}
