use wedge::{Animator, Chart, Hover, Point};

pub struct State {
    pub chart: Chart,
    pub animator: Animator,
    pub hover_index: Option<usize>,
}

impl State {
    pub fn new(chart: Chart) -> Self {
        let animator = chart.animator();
        Self {
            chart,
            animator,
            hover_index: None,
        }
    }

    /// A state with every slice already drawn.
    pub fn settled(chart: Chart) -> Self {
        let mut state = Self::new(chart);
        state.animator.finish();
        state
    }

    pub fn update_cursor(&mut self, cursor: Point) -> CursorAction {
        let hover = self.chart.hover(cursor);
        let new_idx = hover.index();
        let changed = self.hover_index != new_idx;

        if changed {
            match new_idx.and_then(|i| self.chart.slices().get(i)) {
                Some(slice) => log::debug!("Hovering {}", slice),
                None => log::debug!("Hover cleared"),
            }
        }
        self.hover_index = new_idx;

        CursorAction::new(changed, hover)
    }

    pub fn clear_hover(&mut self) -> CursorAction {
        let changed = self.hover_index.is_some();
        self.hover_index = None;
        CursorAction::new(changed, Hover::Hide)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorAction {
    pub changed: bool,
    pub hover: Hover,
}

impl CursorAction {
    pub fn new(changed: bool, hover: Hover) -> Self {
        Self { changed, hover }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_cursor_tracking() {
        let mut state = State::new(Config::demo().build_chart().unwrap());

        let action = state.update_cursor(Point::new(100.0, 250.0));
        assert!(action.changed);
        assert_eq!(action.hover.index(), Some(1));

        let action = state.update_cursor(Point::new(101.0, 251.0));
        assert!(!action.changed);
        assert_eq!(state.hover_index, Some(1));

        let action = state.update_cursor(Point::new(250.0, 250.0));
        assert!(action.changed);
        assert_eq!(action.hover, Hover::Hide);

        state.update_cursor(Point::new(100.0, 250.0));
        let action = state.clear_hover();
        assert!(action.changed);
        assert_eq!(state.hover_index, None);
    }

    #[test]
    fn test_settled_state_is_complete() {
        let state = State::settled(Config::demo().build_chart().unwrap());
        assert!(state.animator.is_complete());
        assert!(!state.animator.is_running());
    }
}
