//! Repeating task scheduler driven by frame ticks
//!
//! The scheduler does not run callbacks itself. [`Scheduler::advance`] moves
//! the clock forward and reports which tasks came due (in time order); the
//! owner dispatches them. Cancelling is explicit through a [`TaskHandle`] and
//! is idempotent.

/// Handle to a scheduled repeating task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u32);

#[derive(Debug, Clone)]
struct Task {
    handle: TaskHandle,
    interval_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u32,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a task that first fires after `delay_ms` and then every `interval_ms`.
    ///
    /// An interval of zero is treated as one millisecond.
    pub fn schedule_repeating(&mut self, delay_ms: u32, interval_ms: u32) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push(Task {
            handle,
            interval_ms: interval_ms.max(1) as u64,
            next_due_ms: self.now_ms + delay_ms as u64,
        });
        handle
    }

    /// Stop a task. Returns `false` if it was not scheduled (already cancelled).
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advance the clock by `elapsed_ms` and append every due firing to `fired`.
    ///
    /// A task whose period fits several times in the step fires several times.
    /// Firings are ordered by due time, ties by scheduling order.
    pub fn advance(&mut self, elapsed_ms: u32, fired: &mut Vec<TaskHandle>) {
        let target = self.now_ms + elapsed_ms as u64;

        // Repeatedly take the earliest due task; `min_by_key` keeps the first on ties.
        while let Some(task) = self
            .tasks
            .iter_mut()
            .filter(|t| t.next_due_ms <= target)
            .min_by_key(|t| t.next_due_ms)
        {
            fired.push(task.handle);
            task.next_due_ms += task.interval_ms;
        }
        self.now_ms = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_fires_on_first_advance() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(0, 10);
        let mut fired = Vec::new();
        s.advance(0, &mut fired);
        assert_eq!(fired, vec![h]);
    }

    #[test]
    fn fires_once_per_elapsed_interval() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(0, 10);
        let mut fired = Vec::new();
        s.advance(35, &mut fired);
        // t = 0, 10, 20, 30
        assert_eq!(fired, vec![h; 4]);

        fired.clear();
        s.advance(5, &mut fired);
        // t = 40
        assert_eq!(fired, vec![h]);
        assert_eq!(s.now_ms(), 40);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(0, 10);
        assert!(s.is_scheduled(h));
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert!(!s.is_scheduled(h));

        let mut fired = Vec::new();
        s.advance(100, &mut fired);
        assert!(fired.is_empty());
    }

    #[test]
    fn firings_interleave_by_due_time() {
        let mut s = Scheduler::new();
        let slow = s.schedule_repeating(5, 20);
        let fast = s.schedule_repeating(0, 10);
        let mut fired = Vec::new();
        s.advance(25, &mut fired);
        // fast@0, slow@5, fast@10, fast@20, slow@25
        assert_eq!(fired, vec![fast, slow, fast, fast, slow]);
    }

    #[test]
    fn same_due_time_keeps_scheduling_order() {
        let mut s = Scheduler::new();
        let a = s.schedule_repeating(10, 10);
        let b = s.schedule_repeating(0, 5);
        let mut fired = Vec::with_capacity(8);
        s.advance(10, &mut fired);
        // b@0, b@5, a@10 and b@10 tie: a was scheduled first
        assert_eq!(fired, vec![b, b, a, b]);
        assert_eq!(fired.capacity(), 8);
    }

    #[test]
    fn handles_are_unique() {
        let mut s = Scheduler::new();
        let a = s.schedule_repeating(0, 1);
        s.cancel(a);
        let b = s.schedule_repeating(0, 1);
        assert_ne!(a, b);
        assert_eq!(s.task_count(), 1);
    }
}
