//! Travel mode selecting which edge weight the shortest-path engine reads.

/// The weight field consulted during relaxation.
///
/// Every edge carries one weight per mode; a mode-specific weight may be
/// impassable independently of the other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
}

impl TravelMode {
    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
