/// Pre-toggle values kept for exact rollback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    flag: bool,
    count: Option<i64>,
}

/// Optimistic boolean state with an optional dependent counter.
///
/// Lifecycle per toggle: `begin` flips the flag provisionally (and moves the
/// counter with it), the caller dispatches the matching request, then exactly
/// one of `confirm`, `reconcile`, or `rollback` closes the attempt. While an
/// attempt is open, `begin` refuses re-entrant triggers for the same entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    flag: bool,
    count: Option<i64>,
    pending: Option<Snapshot>,
}

impl ToggleState {
    /// Flag-only state (save, block, mute)
    pub fn new(flag: bool) -> Self {
        Self {
            flag,
            count: None,
            pending: None,
        }
    }

    /// Flag plus dependent counter (like + likes count, follow + followers)
    pub fn with_count(flag: bool, count: i64) -> Self {
        Self {
            flag,
            count: Some(count),
            pending: None,
        }
    }

    pub fn flag(&self) -> bool {
        self.flag
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Whether a toggle attempt is in flight
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a toggle attempt: snapshot, flip the flag, move the counter.
    ///
    /// Returns `false` (and changes nothing) while a previous attempt is
    /// still open; the caller must not dispatch in that case. After a `true`
    /// return, `flag()` is the provisional value to request from the server.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.pending.is_some() {
            log::debug!("toggle already pending, ignoring trigger");
            return false;
        }
        self.pending = Some(Snapshot {
            flag: self.flag,
            count: self.count,
        });
        self.flag = !self.flag;
        if let Some(count) = self.count.as_mut() {
            *count += if self.flag { 1 } else { -1 };
        }
        true
    }

    /// Server accepted and returned no authoritative payload: the
    /// provisional values stand.
    pub fn confirm(&mut self) {
        self.pending = None;
    }

    /// Server accepted and returned authoritative values; they overwrite
    /// the provisional guess (the server may disagree with it).
    ///
    /// `count` of `None` means the response carried no counter, so the
    /// provisional counter stands.
    pub fn reconcile(&mut self, flag: bool, count: Option<i64>) {
        self.flag = flag;
        if let Some(count) = count {
            self.count = Some(count);
        }
        self.pending = None;
    }

    /// Request failed: restore the pre-toggle flag and counter exactly.
    pub fn rollback(&mut self) {
        if let Some(snapshot) = self.pending.take() {
            self.flag = snapshot.flag;
            self.count = snapshot.count;
        }
    }

    /// Overwrite from a fresh server load (page refresh). Any open attempt
    /// is forgotten; its late response will find nothing pending.
    pub fn hydrate(&mut self, flag: bool, count: Option<i64>) {
        self.flag = flag;
        self.count = count;
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "toggle_state_tests.rs"]
mod toggle_state_tests;
