//! Per-tab session state.
//!
//! Everything here is transient: the active map context, the per-date cache
//! of assembled daily schedules, and the auto-pick busy flag. The cache has
//! no eviction beyond a full clear, which happens whenever the sharing id
//! changes — a coarse but sufficient invalidation boundary.
//!
//! The session runs on one logical thread (UI events and awaited fetches
//! interleave, never race), so plain fields are enough; no locking.

use std::collections::HashMap;

use roomgrid_engine::schedule::DailySchedule;

use crate::provider::MapContext;

/// Mutable per-tab state owned by the orchestrating layer.
#[derive(Debug, Default)]
pub struct Session {
    sharing_map_id: Option<String>,
    context: Option<MapContext>,
    schedule_cache: HashMap<String, DailySchedule>,
    auto_picking: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active map context, if one has been resolved.
    pub fn context(&self) -> Option<&MapContext> {
        self.context.as_ref()
    }

    /// Activates a resolved context. A different sharing id than the current
    /// one clears the schedule cache; re-activating the same id keeps it.
    pub fn activate_context(&mut self, sharing_map_id: &str, context: MapContext) {
        if self.sharing_map_id.as_deref() != Some(sharing_map_id) {
            self.schedule_cache.clear();
        }
        self.sharing_map_id = Some(sharing_map_id.to_string());
        self.context = Some(context);
    }

    /// The cached schedule for a date, if any.
    pub fn cached_schedule(&self, date: &str) -> Option<&DailySchedule> {
        self.schedule_cache.get(date)
    }

    /// Stores an assembled schedule under its date.
    pub fn store_schedule(&mut self, schedule: DailySchedule) {
        self.schedule_cache.insert(schedule.date.clone(), schedule);
    }

    /// Drops every cached schedule; the next request refetches.
    pub fn invalidate_schedules(&mut self) {
        self.schedule_cache.clear();
    }

    /// Tries to start an auto-pick flow. Returns false while one is already
    /// in progress, making a second click a no-op.
    pub fn begin_auto_pick(&mut self) -> bool {
        if self.auto_picking {
            return false;
        }
        self.auto_picking = true;
        true
    }

    /// Ends the auto-pick flow started by [`Session::begin_auto_pick`].
    pub fn end_auto_pick(&mut self) {
        self.auto_picking = false;
    }
}
