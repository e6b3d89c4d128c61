use super::chart::State;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wedge::animation::TICK_INTERVAL;
use wedge::{AnimationError, TickOutcome};

/// The sweep-in animation running on the GTK main loop.
///
/// Dropping the task or calling [`AnimationTask::stop`] removes the timer.
pub struct AnimationTask {
    source: Rc<Cell<Option<glib::SourceId>>>,
    state: Rc<RefCell<State>>,
}

impl AnimationTask {
    /// Starts ticking `state`'s animator and redrawing `area`. Fails if that animator is
    /// already running.
    pub fn start(
        state: Rc<RefCell<State>>,
        area: &gtk::DrawingArea,
    ) -> Result<Self, AnimationError> {
        state.borrow_mut().animator.start()?;

        let source = Rc::new(Cell::new(None));
        let (tick_state, tick_source, area) = (state.clone(), source.clone(), area.clone());
        let id = glib::timeout_add_local(TICK_INTERVAL, move || {
            let outcome = tick_state.borrow_mut().animator.tick();
            area.queue_draw();
            match outcome {
                TickOutcome::Continue => glib::ControlFlow::Continue,
                TickOutcome::Finished => {
                    log::debug!("Chart animation finished");
                    // glib drops the source once we break
                    let _ = tick_source.take();
                    glib::ControlFlow::Break
                }
            }
        });
        source.set(Some(id));

        Ok(Self { source, state })
    }

    /// Removes the timer and settles the chart at its final frame. Returns `false` if the
    /// animation had already finished.
    pub fn stop(&self) -> bool {
        match self.source.take() {
            Some(id) => {
                id.remove();
                self.state.borrow_mut().animator.finish();
                log::debug!("Chart animation stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        if let Some(id) = self.source.take() {
            id.remove();
        }
    }
}
