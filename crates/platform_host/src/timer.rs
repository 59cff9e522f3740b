//! One-shot deferred task contracts.

use std::{cell::RefCell, rc::Rc, time::Duration};

/// Work handed to [`TimerService::set_timeout_once`]. Runs at most once, on the UI thread.
pub type DeferredTask = Box<dyn FnOnce() + 'static>;

/// Host service for scheduling one-shot deferred tasks.
///
/// Scheduling returns no handle: a task, once accepted, cannot be cancelled.
pub trait TimerService {
    /// Runs `task` once after `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refused to schedule the task; the task is dropped.
    fn set_timeout_once(&self, delay: Duration, task: DeferredTask) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer service that accepts and silently drops every task.
pub struct NoopTimerService;

impl TimerService for NoopTimerService {
    fn set_timeout_once(&self, _delay: Duration, _task: DeferredTask) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Default)]
struct ManualTimerQueue {
    pending: Vec<(Duration, DeferredTask)>,
}

#[derive(Clone, Default)]
/// Timer service driven by hand, for tests.
///
/// Tasks queue up until [`ManualTimerService::fire_all`] runs them in scheduling order. Clones
/// share the same queue.
pub struct ManualTimerService {
    queue: Rc<RefCell<ManualTimerQueue>>,
}

impl std::fmt::Debug for ManualTimerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualTimerService")
            .field("pending", &self.pending_delays())
            .finish()
    }
}

impl ManualTimerService {
    /// Returns the delays of every task still waiting to fire, in scheduling order.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.queue
            .borrow()
            .pending
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Number of tasks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Runs every queued task in scheduling order and returns how many ran.
    ///
    /// Tasks scheduled while firing are left queued for the next call.
    pub fn fire_all(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, task) in due {
            task();
        }
        count
    }
}

impl TimerService for ManualTimerService {
    fn set_timeout_once(&self, delay: Duration, task: DeferredTask) -> Result<(), String> {
        self.queue.borrow_mut().pending.push((delay, task));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn manual_timer_fires_each_task_once_in_order() {
        let timers = ManualTimerService::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second"] {
            let order = Rc::clone(&order);
            timers
                .set_timeout_once(
                    Duration::from_millis(700),
                    Box::new(move || order.borrow_mut().push(label)),
                )
                .expect("schedule");
        }

        assert_eq!(timers.pending_count(), 2);
        assert_eq!(timers.fire_all(), 2);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
        assert_eq!(timers.fire_all(), 0);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn tasks_scheduled_while_firing_wait_for_next_round() {
        let timers = ManualTimerService::default();
        let ran = Rc::new(Cell::new(0));

        let inner_timers = timers.clone();
        let inner_ran = Rc::clone(&ran);
        timers
            .set_timeout_once(
                Duration::ZERO,
                Box::new(move || {
                    inner_ran.set(inner_ran.get() + 1);
                    let again = Rc::clone(&inner_ran);
                    let _ = inner_timers.set_timeout_once(
                        Duration::ZERO,
                        Box::new(move || again.set(again.get() + 1)),
                    );
                }),
            )
            .expect("schedule");

        assert_eq!(timers.fire_all(), 1);
        assert_eq!(ran.get(), 1);
        assert_eq!(timers.pending_count(), 1);
        assert_eq!(timers.fire_all(), 1);
        assert_eq!(ran.get(), 2);
    }

    #[test]
    fn noop_timer_drops_tasks() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        NoopTimerService
            .set_timeout_once(Duration::ZERO, Box::new(move || flag.set(true)))
            .expect("schedule");
        assert!(!ran.get());
    }
}
