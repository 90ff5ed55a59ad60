//! Tests for batch parsing and report formatting.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use cr_graph::{CityGraph, load_graph_readers};
    use cr_plan::{PlanConfig, RoutePlanner};

    use crate::report::write_report;

    pub const LOCATIONS: &str = "\
Location,Id,Code,Parking
Harbour,1,HB,0
Market,2,MK,0
Garage,3,GA,1
Museum,4,MU,0
";

    // Driving 1→2→3 costs 7; Garage→Museum is walk-only.
    pub const DISTANCES: &str = "\
Location1,Location2,Driving,Walking
HB,MK,4,20
MK,GA,3,15
GA,MU,X,6
MK,MU,10,30
";

    pub fn city() -> CityGraph {
        load_graph_readers(Cursor::new(LOCATIONS), Cursor::new(DISTANCES)).unwrap()
    }

    /// Plan on a fresh graph and render the report.
    pub fn render(config: &PlanConfig) -> String {
        let mut g = city();
        let report = RoutePlanner::new(&mut g).execute(config).unwrap();
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}

// ── Batch files ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use std::io::Cursor;

    use cr_core::VertexId;
    use cr_plan::{PlanConfig, PlanMode};

    use crate::batch::{read_batch, read_batch_path};

    fn parse(text: &str) -> anyhow::Result<PlanConfig> {
        read_batch(Cursor::new(text))
    }

    #[test]
    fn plain_driving() {
        let cfg = parse("Mode:driving\nSource:1\nDestination:4\n").unwrap();
        assert_eq!(cfg, PlanConfig::driving(VertexId(1), VertexId(4)));
        assert!(cfg.restrictions.is_empty());
    }

    #[test]
    fn restricted_driving_with_blank_keys() {
        let cfg = parse(
            "Mode:Driving\nSource:5\nDestination:4\nAvoidNodes:2\nAvoidSegments:(4,7)\nIncludeNode:\n",
        )
        .unwrap();
        assert_eq!(cfg.mode, PlanMode::Driving);
        assert_eq!(cfg.restrictions.avoid_vertices, vec![VertexId(2)]);
        assert_eq!(cfg.restrictions.avoid_segments, vec![(VertexId(4), VertexId(7))]);
        assert_eq!(cfg.restrictions.include_vertex, None);
    }

    #[test]
    fn driving_walking_any_key_order() {
        let cfg = parse(
            "Mode:driving-walking\nMaxWalkTime:18\nDestination:5\nSource:8\nAvoidNodes:\nAvoidSegments:(3,9),(2,3)\n",
        )
        .unwrap();
        assert_eq!(cfg.mode, PlanMode::DrivingWalking);
        assert_eq!(cfg.source, VertexId(8));
        assert_eq!(cfg.destination, VertexId(5));
        assert_eq!(cfg.max_walk_time, Some(18));
        assert_eq!(cfg.restrictions.avoid_segments.len(), 2);
    }

    #[test]
    fn include_node_dropped_for_driving_walking() {
        let cfg =
            parse("Mode:driving-walking\nSource:1\nDestination:4\nMaxWalkTime:5\nIncludeNode:2\n")
                .unwrap();
        assert_eq!(cfg.restrictions.include_vertex, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = parse("Mode:driving\nSource:1\nColour:blue\nDestination:4\n").unwrap();
        assert_eq!(cfg.destination, VertexId(4));
    }

    #[test]
    fn missing_fields() {
        assert!(parse("Source:1\nDestination:4\n").is_err());
        assert!(parse("Mode:driving\nDestination:4\n").is_err());
        assert!(parse("Mode:driving-walking\nSource:1\nDestination:4\n").is_err());
    }

    #[test]
    fn malformed_lines() {
        assert!(parse("Mode:driving\nSource 1\nDestination:4\n").is_err());
        assert!(parse("Mode:cycling\nSource:1\nDestination:4\n").is_err());
        assert!(parse("Mode:driving\nSource:1,2\nDestination:4\n").is_err());
        assert!(parse("Mode:driving-walking\nSource:1\nDestination:4\nMaxWalkTime:ten\n").is_err());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Mode:driving\nSource:2\nDestination:3\n").unwrap();
        assert_eq!(read_batch_path(&path).unwrap().source, VertexId(2));
        assert!(read_batch_path(&dir.path().join("missing.txt")).is_err());
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use cr_core::VertexId;
    use cr_plan::{PlanConfig, Restrictions, Route};

    use super::helpers::render;
    use crate::report::route_text;

    fn v(n: u32) -> VertexId {
        VertexId(n)
    }

    #[test]
    fn route_rendering() {
        assert_eq!(route_text(&Route::from_parts(vec![v(1), v(2), v(3)], Some(10))), "1,2,3(10)");
        assert_eq!(route_text(&Route::from_parts(vec![v(5)], Some(0))), "5(0)");
        assert_eq!(route_text(&Route::none()), "None");
    }

    #[test]
    fn plain_driving() {
        assert_eq!(
            render(&PlanConfig::driving(v(1), v(4))),
            "Source:1\nDestination:4\nBestDrivingRoute:1,2,4(14)\nAlternativeDrivingRoute:None\n"
        );
    }

    #[test]
    fn restricted_driving() {
        let cfg = PlanConfig::driving(v(1), v(4)).with_restrictions(Restrictions {
            avoid_segments: vec![(v(2), v(4))],
            ..Default::default()
        });
        assert_eq!(render(&cfg), "Source:1\nDestination:4\nRestrictedDrivingRoute:None\n");

        let cfg = PlanConfig::driving(v(1), v(3)).with_restrictions(Restrictions {
            include_vertex: Some(v(2)),
            ..Default::default()
        });
        assert_eq!(render(&cfg), "Source:1\nDestination:3\nRestrictedDrivingRoute:1,2,3(7)\n");
    }

    #[test]
    fn park_and_walk_found() {
        assert_eq!(
            render(&PlanConfig::driving_walking(v(1), v(4), 15)),
            "Source:1\nDestination:4\n\
             DrivingRoute:1,2,3(7)\nParkingNode:3\nWalkingRoute:3,4(6)\nTotalTime:13\n"
        );
    }

    #[test]
    fn park_and_walk_over_budget() {
        assert_eq!(
            render(&PlanConfig::driving_walking(v(1), v(4), 5)),
            "Source:1\nDestination:4\n\
             DrivingRoute:\nParkingNode:\nWalkingRoute:\nTotalTime:\n\
             Message:No possible route with max. walking time of 5 minutes.\n\
             DrivingRoute1:1,2,3(7)\nParkingNode1:3\nWalkingRoute1:3,4(6)\nTotalTime1:13\n"
        );
    }

    #[test]
    fn park_and_walk_rejected() {
        assert_eq!(
            render(&PlanConfig::driving_walking(v(2), v(4), 15)),
            "Source:2\nDestination:4\nMessage:Source and destination cannot be adjacent nodes.\n"
        );
        assert_eq!(
            render(&PlanConfig::driving_walking(v(1), v(3), 15)),
            "Source:1\nDestination:3\nMessage:Source or destination cannot be parking nodes.\n"
        );
    }
}
