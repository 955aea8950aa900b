//! Single-threaded recurring task scheduler.
//!
//! The front-end loop polls with the current `Instant`; due tasks come back in
//! registration order and the caller runs each one to completion before the
//! next. A task is armed on the first poll after it is scheduled, so
//! scheduling never needs a clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Autosave,
    EnergyRegen,
    AutoAttack,
}

#[derive(Debug, Clone)]
struct RecurringTask {
    kind: TaskKind,
    period: Duration,
    next_due: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Vec<RecurringTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recurring task. Returns false if `kind` was already scheduled.
    pub fn schedule(&mut self, kind: TaskKind, period: Duration) -> bool {
        if self.is_scheduled(kind) {
            return false;
        }
        self.tasks.push(RecurringTask {
            kind,
            period,
            next_due: None,
        });
        true
    }

    pub fn is_scheduled(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn period(&self, kind: TaskKind) -> Option<Duration> {
        self.tasks.iter().find(|t| t.kind == kind).map(|t| t.period)
    }

    /// Changes a task's period. Takes effect after its next firing.
    pub fn set_period(&mut self, kind: TaskKind, period: Duration) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.kind == kind) {
            task.period = period;
        }
    }

    /// Returns the tasks due at `now`, each at most once per poll.
    ///
    /// A task that fell several periods behind fires once and is
    /// rescheduled from `now`, so a stalled loop does not replay a burst.
    pub fn poll(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due = Vec::new();

        for task in &mut self.tasks {
            let Some(next_due) = task.next_due else {
                task.next_due = Some(now + task.period);
                continue;
            };

            if now >= next_due {
                due.push(task.kind);
                let following = next_due + task.period;
                task.next_due = Some(if following <= now {
                    now + task.period
                } else {
                    following
                });
            }
        }

        due
    }
}
