//! Unit tests for cr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CoreError, EdgeIdx, VertexId, VertexIdx};

    #[test]
    fn slot_index() {
        assert_eq!(VertexIdx(42).index(), 42);
        assert_eq!(EdgeIdx(0).index(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(VertexIdx(7).to_string(), "v#7");
        assert_eq!(EdgeIdx(3).to_string(), "e#3");
        // External ids print bare so routes read "1,2,3".
        assert_eq!(VertexId(7).to_string(), "7");
    }

    #[test]
    fn vertex_id_parse_trims() {
        assert_eq!(" 12 ".parse::<VertexId>().unwrap(), VertexId(12));
        assert_eq!(
            "x".parse::<VertexId>(),
            Err(CoreError::InvalidVertexId("x".into()))
        );
        assert!("-3".parse::<VertexId>().is_err());
    }
}

#[cfg(test)]
mod mode {
    use crate::TravelMode;

    #[test]
    fn default_is_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TravelMode::Walking.to_string(), "walking");
        assert_eq!(TravelMode::Driving.as_str(), "driving");
    }
}

#[cfg(test)]
mod availability {
    use crate::Availability;

    #[test]
    fn only_blocked_is_blocked() {
        assert!(Availability::Blocked.is_blocked());
        assert!(!Availability::Required.is_blocked());
        assert_eq!(Availability::default(), Availability::Normal);
    }
}
