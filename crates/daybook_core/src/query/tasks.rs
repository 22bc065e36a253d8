//! Task list pipeline and calendar/dashboard aggregations.
//!
//! # Responsibility
//! - Apply the composite filter/sort pipeline behind the task list.
//! - Aggregate per-day due counts and the dashboard summary.
//!
//! # Invariants
//! - Pipeline stage order is fixed: deleted, day, status, repeat, search,
//!   sort. Search applies to the already type-filtered subset.
//! - Sorts are stable; equal priorities keep the ascending-date tiebreak.

use crate::model::task::{Repeat, Task};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Maximum entries in the dashboard's upcoming list.
pub const UPCOMING_LIMIT: usize = 7;

/// Status facet of the task list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Completed,
    /// Not completed and due strictly before the current time.
    Overdue,
}

/// Repeat-type facet of the task list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatFilter {
    #[default]
    All,
    None,
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl RepeatFilter {
    fn matches(self, repeat: Repeat) -> bool {
        match self {
            Self::All => true,
            Self::None => repeat == Repeat::None,
            Self::Daily => repeat == Repeat::Daily,
            Self::Weekly => repeat == Repeat::Weekly,
            Self::Monthly => repeat == Repeat::Monthly,
            Self::Custom => matches!(repeat, Repeat::Custom { .. }),
        }
    }
}

/// Sort key for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by due timestamp.
    #[default]
    Date,
    /// High before medium before low, due timestamp ascending as tiebreak.
    Priority,
    /// Lexicographic ascending by title.
    Title,
}

/// Ephemeral filter/sort criteria for [`task_view`]. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct TaskViewQuery {
    /// Exact-day filter used by calendar drill-down, in the view's timezone.
    pub day: Option<NaiveDate>,
    pub status: StatusFilter,
    pub repeat: RepeatFilter,
    /// Case-insensitive substring over title and description.
    pub search: String,
    pub sort: SortKey,
}

/// Produces the ordered task list view.
///
/// `tz` is the timezone calendar days are evaluated in; tests pass `Utc`,
/// an interactive shell passes `chrono::Local`.
pub fn task_view<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    query: &TaskViewQuery,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<&'a Task> {
    let mut items: Vec<&Task> = tasks.iter().filter(|task| task.is_active()).collect();

    if let Some(day) = query.day {
        items.retain(|task| task.when.with_timezone(tz).date_naive() == day);
    }

    match query.status {
        StatusFilter::All => {}
        StatusFilter::Open => items.retain(|task| !task.completed),
        StatusFilter::Completed => items.retain(|task| task.completed),
        StatusFilter::Overdue => items.retain(|task| !task.completed && task.when < now),
    }

    if query.repeat != RepeatFilter::All {
        items.retain(|task| query.repeat.matches(task.repeat));
    }

    let needle = query.search.to_lowercase();
    if !needle.is_empty() {
        items.retain(|task| {
            task.title.to_lowercase().contains(&needle)
                || task
                    .description
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
        });
    }

    match query.sort {
        SortKey::Date => items.sort_by_key(|task| task.when),
        SortKey::Priority => items.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.when.cmp(&b.when))
        }),
        SortKey::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    items
}

/// Number of open tasks due on `day`, independent of all other filters.
pub fn due_count_on<Tz: TimeZone>(tasks: &[Task], day: NaiveDate, tz: &Tz) -> usize {
    tasks
        .iter()
        .filter(|task| task.is_open() && task.when.with_timezone(tz).date_naive() == day)
        .count()
}

/// Dashboard summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub open: usize,
    pub overdue: usize,
    pub completed: usize,
}

/// Open/overdue/completed counts over the active (non-trashed) tasks.
pub fn dashboard_counts(tasks: &[Task], now: DateTime<Utc>) -> DashboardCounts {
    let mut counts = DashboardCounts::default();
    for task in tasks.iter().filter(|task| task.is_active()) {
        if task.completed {
            counts.completed += 1;
        } else {
            counts.open += 1;
            if task.when < now {
                counts.overdue += 1;
            }
        }
    }
    counts
}

/// The nearest open tasks due at or after `now`, ascending, capped to
/// [`UPCOMING_LIMIT`].
pub fn upcoming(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    let mut items: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.is_open() && task.when >= now)
        .collect();
    items.sort_by_key(|task| task.when);
    items.truncate(UPCOMING_LIMIT);
    items
}

/// Trashed tasks, most recently deleted first.
pub fn trashed_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut items: Vec<&Task> = tasks.iter().filter(|task| task.deleted).collect();
    items.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
    items
}
