//! The one-shot strike: the cue pushes forward and back, then the ball rolls away.
//!
//! Everything here is a pure function of elapsed time in seconds. Nothing is scheduled.

/// A linear interpolation of one scalar from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Delay before the tween starts, relative to when it was started.
    pub begin: f64,
    pub duration: f64,
    /// Play back to `from` after reaching `to`, doubling the active time.
    pub auto_reverse: bool,
}

impl Tween {
    /// Time from start until the tween settles.
    #[inline]
    pub fn end(&self) -> f64 {
        self.begin + self.duration * if self.auto_reverse { 2.0 } else { 1.0 }
    }

    /// Value at `t` seconds after the tween was started. Before `begin` this is `from`; after
    /// [end](Tween::end) the final value is held.
    pub fn sample(&self, t: f64) -> f64 {
        let local = t - self.begin;
        let progress = if local <= 0.0 {
            0.0
        } else if local < self.duration {
            local / self.duration
        } else if self.auto_reverse && local < 2.0 * self.duration {
            2.0 - local / self.duration
        } else if self.auto_reverse {
            0.0
        } else {
            1.0
        };
        self.from + (self.to - self.from) * progress
    }
}

/// Z offsets of the scene's moving parts at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub cue_z: f64,
    pub ball_z: f64,
}

/// The cue tween, followed (once it settles) by the ball tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub cue: Tween,
    pub ball: Tween,
}

impl Default for Strike {
    fn default() -> Self {
        Self {
            cue: Tween {
                from: 0.0,
                to: 1.0,
                begin: 0.0,
                duration: 1.0,
                auto_reverse: true,
            },
            ball: Tween {
                from: 0.0,
                to: 2.0,
                begin: 1.0,
                duration: 1.0,
                auto_reverse: false,
            },
        }
    }
}

impl Strike {
    /// When the ball tween is started, in timeline seconds.
    #[inline]
    pub fn ball_start(&self) -> f64 {
        self.cue.end()
    }

    /// When everything has settled.
    #[inline]
    pub fn end(&self) -> f64 {
        self.ball_start() + self.ball.end()
    }

    pub fn sample(&self, time: f64) -> Frame {
        Frame {
            time,
            cue_z: self.cue.sample(time),
            ball_z: self.ball.sample(time - self.ball_start()),
        }
    }

    /// `steps + 1` frames evenly spaced from `0` to [end](Strike::end), inclusive.
    pub fn frames(&self, steps: u32) -> impl Iterator<Item = Frame> + '_ {
        let steps = steps.max(1);
        let dt = self.end() / f64::from(steps);
        (0..=steps).map(move |n| self.sample(f64::from(n) * dt))
    }
}
