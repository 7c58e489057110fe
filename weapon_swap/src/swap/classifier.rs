/// Per-frame swing classification.
///
/// Two signals, in priority order:
/// - A: some trail/line effect under the weapon is enabled (computed by the caller)
/// - B: mass-anchor speed since the previous frame reaches the threshold

use glam::Vec3;

/// Lower bound on the frame delta used for speed estimation
pub const MIN_FRAME_DELTA: f32 = 0.0001;

/// Result of classifying one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingState {
    pub swinging: bool,
    /// Signal A fired
    pub effect_driven: bool,
    /// Mass-anchor speed, when measured this frame (never on effect frames)
    pub speed: Option<f32>,
    /// Position sampled this frame, kept for the next one
    pub last_position: Option<Vec3>,
    /// Frame delta the speed was computed over
    pub elapsed: f32,
}

/// Motion classifier. Carries only the last sampled position across frames.
#[derive(Debug, Clone)]
pub struct SwingClassifier {
    threshold: f32,
    last_position: Option<Vec3>,
}

impl SwingClassifier {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last_position: None,
        }
    }

    pub fn last_position(&self) -> Option<Vec3> {
        self.last_position
    }

    /// Forget motion history and start from `position`
    pub fn reset(&mut self, position: Option<Vec3>) {
        self.last_position = position;
    }

    /// Classify one frame.
    ///
    /// Effect frames decide on their own and leave the motion sample alone,
    /// so the first motion frame afterwards measures from the last motion
    /// frame. A missing position (anchor gone) keeps the previous sample.
    pub fn classify(&mut self, effects_active: bool, position: Option<Vec3>, dt: f32) -> SwingState {
        let elapsed = dt.max(MIN_FRAME_DELTA);
        if effects_active {
            return SwingState {
                swinging: true,
                effect_driven: true,
                speed: None,
                last_position: self.last_position,
                elapsed,
            };
        }

        let speed = match (self.last_position, position) {
            (Some(last), Some(current)) => Some(current.distance(last) / elapsed),
            _ => None,
        };
        if position.is_some() {
            self.last_position = position;
        }

        SwingState {
            swinging: speed.is_some_and(|s| s >= self.threshold),
            effect_driven: false,
            speed,
            last_position: self.last_position,
            elapsed,
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
