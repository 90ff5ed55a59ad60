//! Per-vertex routing eligibility.

/// Whether a vertex may take part in a route.
///
/// | State      | Effect                                               |
/// |------------|------------------------------------------------------|
/// | `Blocked`  | Never relaxed from or into by the engine.            |
/// | `Normal`   | Default.                                             |
/// | `Required` | Waypoint; enforced by the planner, not the engine.   |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Availability {
    Blocked,
    #[default]
    Normal,
    Required,
}

impl Availability {
    #[inline]
    pub fn is_blocked(self) -> bool {
        matches!(self, Availability::Blocked)
    }
}
