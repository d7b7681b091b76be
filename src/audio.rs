//! Audible feedback
//!
//! Every cue is a square-wave period handed to the buzzer driver. The game
//! only names the cue; the driver decides how to make noise.

/// Feedback cues emitted by the collision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// A paddle bounced off the field fence
    FenceBounce,
    /// Ball hit the left paddle
    Paddle1Hit,
    /// Ball hit the right paddle
    Paddle2Hit,
    /// Ball crossed a goal line
    Goal,
    /// Ball bounced off the top or bottom wall
    WallBounce,
}

impl Tone {
    /// Buzzer period in timer ticks
    pub fn period(self) -> u16 {
        match self {
            Tone::FenceBounce => 100,
            Tone::Paddle1Hit => 200,
            Tone::Paddle2Hit => 2000,
            Tone::Goal => 500,
            Tone::WallBounce => 400,
        }
    }
}

/// Tone generator driver
pub trait Buzzer {
    /// Start a square wave with the given period (0 silences)
    fn set_tone_period(&mut self, period: u16);

    /// Play a named cue
    fn play(&mut self, tone: Tone) {
        log::trace!("tone {:?} ({})", tone, tone.period());
        self.set_tone_period(tone.period());
    }
}

/// Buzzer that remembers every period it was given
#[derive(Debug, Clone, Default)]
pub struct ToneLog {
    pub periods: Vec<u16>,
}

impl ToneLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `tone` was played at least once
    pub fn played(&self, tone: Tone) -> bool {
        self.periods.contains(&tone.period())
    }

    /// How many times `tone` was played
    pub fn count(&self, tone: Tone) -> usize {
        self.periods.iter().filter(|&&p| p == tone.period()).count()
    }
}

impl Buzzer for ToneLog {
    fn set_tone_period(&mut self, period: u16) {
        self.periods.push(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones_are_distinct() {
        let tones = [
            Tone::FenceBounce,
            Tone::Paddle1Hit,
            Tone::Paddle2Hit,
            Tone::Goal,
            Tone::WallBounce,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a.period(), b.period());
            }
        }
    }

    #[test]
    fn test_tone_log() {
        let mut log = ToneLog::new();
        log.play(Tone::Goal);
        log.play(Tone::Goal);
        log.play(Tone::WallBounce);
        assert!(log.played(Tone::Goal));
        assert_eq!(log.count(Tone::Goal), 2);
        assert!(!log.played(Tone::Paddle1Hit));
    }
}
