//! Integration tests for mr-sim.

use std::io::Cursor;

use mr_core::{StationId, Turn, VehicleId};
use mr_network::{NetworkGraph, load_network_reader};

use crate::{SimObserver, TurnSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load(text: &str) -> NetworkGraph {
    load_network_reader(Cursor::new(text)).expect("valid network")
}

fn at(g: &NetworkGraph, label: &str) -> StationId {
    g.lookup(label).expect(label)
}

const RED: &str = "#Red\n0:R0\n1:R1\n2:R2\n3:R3\n4:R4\nSTART=R0\nEND=R4\nTRAINS=2\n";

/// Two 3-hop branches from `S` to `E`.
const TWO_BRANCH: &str =
    "#Loop\n1:S\n2:A1\n3:A2\n4:E\n5:B2\n6:B1\n7:S\nSTART=Loop:1\nEND=Loop:4\nTRAINS=4\n";

/// 3-hop and 5-hop sides of a ring.
const RING: &str =
    "#Ring\n1:A\n2:B\n3:C\n4:D\n5:E\n6:F\n7:G\n8:H\n9:A\nSTART=Ring:4\nEND=Ring:9\nTRAINS=4\n";

const CROSS: &str = "\
#Blue
1:B1
2:X:Conn: Green
3:B3
#Green
1:G1
2:X:Conn: Blue
3:G3
START=Blue:1
END=Green:3
TRAINS=3
";

/// Records every snapshot and the reported total.
#[derive(Default)]
struct Recorder {
    starts:    usize,
    snapshots: Vec<TurnSnapshot>,
    total:     Option<Turn>,
}

impl SimObserver for Recorder {
    fn on_start(&mut self, snapshot: &TurnSnapshot) {
        self.starts += 1;
        self.snapshots.push(snapshot.clone());
    }

    fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_finish(&mut self, total: Turn) {
        self.total = Some(total);
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy {
    use crate::{SimError, Strategy};

    #[test]
    fn algo_switch_values() {
        assert_eq!(Strategy::try_from(1u8), Ok(Strategy::SingleSharedPath));
        assert_eq!(Strategy::try_from(2u8), Ok(Strategy::MultiPath));
        assert_eq!(Strategy::try_from(3u8), Err(SimError::UnknownStrategy(3)));
        assert_eq!(Strategy::default(), Strategy::MultiPath);
    }

    #[test]
    fn planner_names() {
        assert_eq!(Strategy::SingleSharedPath.planner().name(), "single");
        assert_eq!(Strategy::MultiPath.planner().name(), "multi");
        assert_eq!(Strategy::MultiPath.to_string(), "multi");
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;
    use crate::{SimBuilder, Strategy};

    #[test]
    fn lower_id_claims_first() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).strategy(Strategy::SingleSharedPath).build().unwrap();
        sim.step();
        let snap = sim.snapshot();
        assert_eq!(snap.position_of(VehicleId(1)), Some(at(&g, "R1")));
        assert_eq!(snap.position_of(VehicleId(2)), Some(at(&g, "R0")));
    }

    #[test]
    fn followers_keep_one_station_gap() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let mut trail = Vec::new();
        for _ in 0..6 {
            sim.step();
            let s = sim.snapshot();
            trail.push((s.position_of(VehicleId(1)), s.position_of(VehicleId(2))));
        }
        let expected = [
            ("R1", "R0"),
            ("R2", "R0"),
            ("R3", "R1"),
            ("R4", "R2"),
            ("R4", "R3"),
            ("R4", "R4"),
        ];
        for (got, (a, b)) in trail.iter().zip(expected) {
            assert_eq!(*got, (Some(at(&g, a)), Some(at(&g, b))));
        }
    }

    #[test]
    fn busy_set_ignores_vehicles_bound_for_end() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        for _ in 0..4 {
            sim.step();
        }
        let path = &sim.paths()[0];
        let busy = crate::MovementSimulator::new(g.end()).busy_stations(path);
        assert!(!busy.contains(&g.end()));
        assert!(busy.contains(&at(&g, "R2")));
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;
    use crate::{NoopObserver, SimBuilder, SimError, Strategy, run_multi_path, run_single_shared_path};

    #[test]
    fn single_line_two_vehicles() {
        let g = load(RED);
        let mut rec = Recorder::default();
        let total = run_single_shared_path(&g, &mut rec).unwrap();
        assert_eq!(total, Turn(6));
        assert_eq!(rec.total, Some(Turn(6)));
        assert_eq!(rec.starts, 1);
        // Initial placement plus one snapshot per turn.
        assert_eq!(rec.snapshots.len(), 7);
        assert_eq!(rec.snapshots[0].at_start(), vec![VehicleId(1), VehicleId(2)]);
    }

    #[test]
    fn two_branches_split_two_and_two() {
        let g = load(TWO_BRANCH);
        let mut sim = SimBuilder::new(&g).strategy(Strategy::MultiPath).build().unwrap();
        assert_eq!(sim.paths().iter().map(|p| p.assigned).collect::<Vec<_>>(), vec![2, 2]);
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), Turn(5));
    }

    #[test]
    fn multi_path_beats_single_path() {
        let g = load(TWO_BRANCH);
        let single = run_single_shared_path(&g, &mut NoopObserver).unwrap();
        let multi  = run_multi_path(&g, &mut NoopObserver).unwrap();
        // Four vehicles on one 3-hop route: 3 + 2 × 3.
        assert_eq!(single, Turn(9));
        assert_eq!(multi, Turn(5));
    }

    #[test]
    fn slowest_path_sets_the_total() {
        // Short side carries three vehicles (3 + 2 × 2), long side one (5).
        let g = load(RING);
        assert_eq!(run_multi_path(&g, &mut NoopObserver).unwrap(), Turn(7));
    }

    #[test]
    fn crossing_route_runs_to_completion() {
        let g = load(CROSS);
        assert_eq!(run_multi_path(&g, &mut NoopObserver).unwrap(), Turn(3 + 2 * 2));
    }

    #[test]
    fn arrived_fleet_stays_put() {
        let g = load(TWO_BRANCH);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let before = sim.snapshot().positions;
        let turn = sim.step();
        assert_eq!(turn, Turn(6));
        assert_eq!(sim.snapshot().positions, before);
        assert!(sim.all_arrived());
    }

    #[test]
    fn turn_limit_reports_stall() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).max_turns(2).build().unwrap();
        assert_eq!(sim.run(&mut NoopObserver), Err(SimError::Stalled { limit: Turn(2) }));
    }

    #[test]
    fn default_limit_covers_the_run() {
        let g = load(RED);
        let sim = SimBuilder::new(&g).build().unwrap();
        assert_eq!(sim.limit(), Turn(4 + 2 * 2 + 1));
    }

    #[test]
    fn vehicle_override_and_custom_planner() {
        let g = load(TWO_BRANCH);
        let mut sim = SimBuilder::new(&g)
            .planner(mr_route::SharedPathPlanner)
            .vehicles(1)
            .build()
            .unwrap();
        assert_eq!(sim.vehicle_count(), 1);
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), Turn(3));
    }

    #[test]
    fn unreachable_end_is_a_route_error() {
        let g = load("#L1\n1:a\n2:b\n#L2\n1:c\n2:d\nSTART=a\nEND=d\nTRAINS=1\n");
        let err = run_multi_path(&g, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Route(mr_route::RouteError::Unreachable { .. })));
    }
}

// ── Snapshots and invariants ──────────────────────────────────────────────────

#[cfg(test)]
mod snapshots {
    use super::*;
    use crate::{SimBuilder, run_multi_path};

    #[test]
    fn buckets_after_first_turn() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        sim.step();
        let s = sim.snapshot();
        assert_eq!(s.turn, Turn(1));
        assert_eq!(s.at_start(), vec![VehicleId(2)]);
        assert_eq!(s.in_transit(), vec![(VehicleId(1), at(&g, "R1"))]);
        assert!(s.at_end().is_empty());
        assert!(!s.all_arrived());
    }

    /// Fails the test on any shared interior station.
    struct NoCollision {
        start: StationId,
        end:   StationId,
    }

    impl SimObserver for NoCollision {
        fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
            let mut seen = mr_network::StationSet::default();
            for &(id, s) in &snapshot.positions {
                if s != self.start && s != self.end {
                    assert!(seen.insert(s), "{id} collides at turn {}", snapshot.turn);
                }
            }
        }
    }

    #[test]
    fn no_two_vehicles_share_an_interior_station() {
        for text in [RED, TWO_BRANCH, RING, CROSS] {
            let g = load(text);
            let mut check = NoCollision { start: g.start(), end: g.end() };
            run_multi_path(&g, &mut check).unwrap();
        }
        let g = load(RING);
        let mut check = NoCollision { start: g.start(), end: g.end() };
        SimBuilder::new(&g).vehicles(11).build().unwrap().run(&mut check).unwrap();
    }
}
