//! Periodic reminder scan with idempotent notification suppression.
//!
//! # Responsibility
//! - Find open tasks whose due instant has entered the firing window and
//!   alert each occurrence exactly once.
//!
//! # Invariants
//! - A fired occurrence is stamped on the task before the next scan can see
//!   it; edits and occurrence advances clear the stamp and re-arm the task.
//! - Alert delivery is fire-and-forget; sink implementations must not panic
//!   or block, and a sink failure never reaches the scan loop.
//!
//! The host shell owns the ticker loop (and its shutdown), driving [`tick`]
//! every [`SCAN_PERIOD`]. A firing window narrower than that cadence can
//! close between two ticks; such an occurrence is skipped, not fired late.
//!
//! [`tick`]: ReminderScheduler::tick

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::store::BlobStore;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use std::time::Duration as StdDuration;

/// Cadence the host shell should drive [`ReminderScheduler::tick`] on.
pub const SCAN_PERIOD: StdDuration = StdDuration::from_secs(30);

/// Half-width of the default firing window around a due instant.
const FIRE_WINDOW_SECS: i64 = 60;

/// Time source for the scan. Injectable so tests advance virtual time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`].
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Alert delivery seam.
///
/// Implementations must not panic and must not block the scan on delivery
/// failure; a failed delivery is dropped.
pub trait AlertSink {
    fn notify(&self, task: &Task);
}

/// [`AlertSink`] that records the reminder in the log. Default delivery when
/// no host sink is wired up.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn notify(&self, task: &Task) {
        info!(
            "event=reminder_fired module=reminder task={} due={}",
            task.id,
            task.occurrence_key()
        );
    }
}

/// Recurring scan over the task collection.
pub struct ReminderScheduler<C: Clock, A: AlertSink> {
    clock: C,
    sink: A,
    window: Duration,
}

impl<C: Clock, A: AlertSink> ReminderScheduler<C, A> {
    /// Creates a scheduler with the default 60-second firing window.
    pub fn new(clock: C, sink: A) -> Self {
        Self::with_window(clock, sink, Duration::seconds(FIRE_WINDOW_SECS))
    }

    /// Creates a scheduler with a caller-tuned firing window.
    pub fn with_window(clock: C, sink: A, window: Duration) -> Self {
        Self {
            clock,
            sink,
            window,
        }
    }

    /// Runs one scan and returns the number of alerts fired.
    ///
    /// A task fires when it is open, `|when - now|` is within the firing
    /// window, and its current occurrence key has not been stamped yet. The
    /// stamp is written through the repository, so delivery stays idempotent
    /// per occurrence.
    pub fn tick<S: BlobStore>(&self, repo: &mut TaskRepository<'_, S>) -> usize {
        let now = self.clock.now();
        let due: Vec<(TaskId, String)> = repo
            .all()
            .iter()
            .filter(|task| task.is_open())
            .filter_map(|task| {
                let key = task.occurrence_key();
                let in_window = (task.when - now).abs() <= self.window;
                (in_window && task.notified_at.as_deref() != Some(key.as_str()))
                    .then(|| (task.id, key))
            })
            .collect();

        for (id, key) in &due {
            if let Some(task) = repo.get(*id) {
                self.sink.notify(task);
            }
            repo.mark_notified(*id, key.clone());
        }

        debug!(
            "event=reminder_scan module=reminder status=ok fired={}",
            due.len()
        );
        due.len()
    }
}
