use crate::error::AnimationError;
use crate::geometry::AngleRange;
use std::time::Duration;

/// Delay between two animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Percent swept per tick.
pub const STEP_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    Idle,
    /// `slice` is growing and has swept `swept` percent so far.
    Animating { slice: usize, swept: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished,
}

/// Sweeps slices into view one after the other.
///
/// The animator only tracks progress; a timer calls [`Animator::tick`] and the renderer
/// asks [`Animator::visible_range`] how much of each slice to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    percents: Vec<f64>,
    state: AnimationState,
    /// Number of leading slices that are fully drawn.
    revealed: usize,
}

impl Animator {
    pub fn new(percents: Vec<f64>) -> Self {
        Self {
            percents,
            state: AnimationState::Idle,
            revealed: 0,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.percents.len()
    }

    /// Starts sweeping from the first slice. Fails while a sweep is in progress.
    pub fn start(&mut self) -> Result<(), AnimationError> {
        if self.is_running() {
            return Err(AnimationError::AlreadyRunning);
        }
        self.revealed = 0;
        self.state = if self.percents.is_empty() {
            AnimationState::Idle
        } else {
            AnimationState::Animating {
                slice: 0,
                swept: 0.0,
            }
        };
        Ok(())
    }

    /// Advances the current slice by one step.
    pub fn tick(&mut self) -> TickOutcome {
        let AnimationState::Animating { slice, swept } = self.state else {
            return TickOutcome::Finished;
        };

        let target = self.percents[slice];
        let swept = (swept + STEP_PERCENT).min(target);
        if swept < target {
            self.state = AnimationState::Animating { slice, swept };
            return TickOutcome::Continue;
        }

        self.revealed = slice + 1;
        if self.revealed < self.percents.len() {
            self.state = AnimationState::Animating {
                slice: self.revealed,
                swept: 0.0,
            };
            TickOutcome::Continue
        } else {
            self.state = AnimationState::Idle;
            TickOutcome::Finished
        }
    }

    /// Stops any sweep in progress and shows every slice in full.
    pub fn finish(&mut self) {
        self.state = AnimationState::Idle;
        self.revealed = self.percents.len();
    }

    /// Percent of slice `index` currently drawn.
    pub fn swept(&self, index: usize) -> f64 {
        match self.state {
            _ if index < self.revealed => self.percents[index],
            AnimationState::Animating { slice, swept } if slice == index => swept,
            _ => 0.0,
        }
    }

    /// The arc to draw for slice `index`, or `None` if nothing of it is visible yet.
    pub fn visible_range(&self, index: usize) -> Option<AngleRange> {
        let swept = self.swept(index);
        (swept > 0.0).then(|| {
            let start: f64 = self.percents[..index].iter().sum();
            AngleRange::from_percent(start, swept)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut Animator) -> usize {
        let mut ticks = 0;
        while animator.tick() == TickOutcome::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "animation never finished");
        }
        ticks + 1
    }

    #[test]
    fn test_nothing_visible_before_start() {
        let animator = Animator::new(vec![20.0, 80.0]);
        assert_eq!(animator.state(), AnimationState::Idle);
        assert!(!animator.is_complete());
        assert_eq!(animator.visible_range(0), None);
        assert_eq!(animator.visible_range(1), None);
    }

    #[test]
    fn test_slices_sweep_sequentially() {
        let mut animator = Animator::new(vec![3.0, 2.0]);
        animator.start().unwrap();

        let mut trace = Vec::new();
        loop {
            let outcome = animator.tick();
            trace.push((animator.swept(0), animator.swept(1)));
            if outcome == TickOutcome::Finished {
                break;
            }
        }

        assert_eq!(
            trace,
            vec![(1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (3.0, 2.0)]
        );
        assert_eq!(animator.state(), AnimationState::Idle);
        assert!(animator.is_complete());
    }

    #[test]
    fn test_fractional_percent_does_not_overshoot() {
        let mut animator = Animator::new(vec![2.5, 97.5]);
        animator.start().unwrap();
        animator.tick();
        animator.tick();
        assert_eq!(animator.swept(0), 2.0);
        animator.tick();
        assert_eq!(animator.swept(0), 2.5);
        assert_eq!(
            animator.state(),
            AnimationState::Animating {
                slice: 1,
                swept: 0.0
            }
        );
    }

    #[test]
    fn test_total_ticks() {
        let mut animator = Animator::new(vec![20.0, 55.0, 25.0]);
        animator.start().unwrap();
        assert_eq!(run_to_end(&mut animator), 100);
    }

    #[test]
    fn test_zero_percent_slice_is_skipped_in_one_tick() {
        let mut animator = Animator::new(vec![1.0, 0.0, 1.0]);
        animator.start().unwrap();
        assert_eq!(run_to_end(&mut animator), 3);
        assert_eq!(animator.visible_range(1), None);
    }

    #[test]
    fn test_restart_is_rejected_while_running() {
        let mut animator = Animator::new(vec![50.0, 50.0]);
        animator.start().unwrap();
        animator.tick();
        assert_eq!(animator.start(), Err(AnimationError::AlreadyRunning));
        assert_eq!(animator.swept(0), 1.0);
    }

    #[test]
    fn test_finish_reveals_everything() {
        let mut animator = Animator::new(vec![20.0, 55.0, 25.0]);
        animator.start().unwrap();
        animator.tick();
        animator.finish();

        assert!(!animator.is_running());
        assert!(animator.is_complete());
        assert_eq!(animator.tick(), TickOutcome::Finished);

        let range = animator.visible_range(1).unwrap();
        let expected = AngleRange::from_percent(20.0, 55.0);
        assert_eq!(range, expected);
    }

    #[test]
    fn test_visible_range_grows_from_cumulative_start() {
        let mut animator = Animator::new(vec![20.0, 80.0]);
        animator.start().unwrap();
        for _ in 0..23 {
            animator.tick();
        }
        assert_eq!(animator.visible_range(0), Some(AngleRange::from_percent(0.0, 20.0)));
        assert_eq!(animator.visible_range(1), Some(AngleRange::from_percent(20.0, 3.0)));
    }
}
