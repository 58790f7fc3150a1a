//! Unit tests for mr-output.

use std::io::Cursor;

use mr_network::{NetworkGraph, load_network_reader};

fn load(text: &str) -> NetworkGraph {
    load_network_reader(Cursor::new(text)).expect("valid network")
}

const RED: &str = "#Red\n0:R0\n1:R1\n2:R2\n3:R3\n4:R4\nSTART=R0\nEND=R4\nTRAINS=2\n";

const RING: &str =
    "#Ring\n1:A\n2:B\n3:C\n4:D\n5:E\n6:F\n7:G\n8:H\n9:A\nSTART=Ring:4\nEND=Ring:9\nTRAINS=1\n";

// ── Text report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use mr_sim::{SimBuilder, Strategy};

    use super::*;
    use crate::{TextReporter, render_turn};

    #[test]
    fn first_turn_line() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        sim.step();
        assert_eq!(render_turn(&g, &sim.snapshot()), "R0(Red:0)-T2|R1(Red:1)-T1");
    }

    #[test]
    fn transit_highest_id_first_then_end() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(render_turn(&g, &sim.snapshot()), "R1(Red:1)-T2|R3(Red:3)-T1");
        sim.step();
        sim.step();
        assert_eq!(render_turn(&g, &sim.snapshot()), "R3(Red:3)-T2|R4(Red:4)-T1");
        sim.step();
        assert_eq!(render_turn(&g, &sim.snapshot()), "R4(Red:4)-T1,T2");
    }

    #[test]
    fn aliased_end_label() {
        let g = load(RING);
        let mut sim = SimBuilder::new(&g).strategy(Strategy::SingleSharedPath).build().unwrap();
        while !sim.all_arrived() {
            sim.step();
        }
        assert_eq!(render_turn(&g, &sim.snapshot()), "A(Ring:9&1)-T1");
    }

    #[test]
    fn full_report() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let mut reporter = TextReporter::new(&g, Vec::new());
        sim.run(&mut reporter).unwrap();
        assert!(reporter.take_error().is_none());

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.starts_with("Turn: 1\nR0(Red:0)-T2|R1(Red:1)-T1\n\nTurn: 2\n"));
        assert!(out.ends_with("Turn: 6\nR4(Red:4)-T1,T2\n\nTotal turn: 6\n"));
        assert_eq!(out.matches("Turn: ").count(), 6);
    }

    #[test]
    fn quiet_prints_only_total() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let mut reporter = TextReporter::new(&g, Vec::new()).quiet(true);
        sim.run(&mut reporter).unwrap();
        assert_eq!(reporter.into_inner(), b"Total turn: 6\n");
    }

    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_error_is_kept_not_raised() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let mut reporter = TextReporter::new(&g, Broken);
        assert!(sim.run(&mut reporter).is_ok());
        assert!(matches!(reporter.take_error(), Some(crate::OutputError::Io(_))));
        assert!(reporter.take_error().is_none());
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use mr_sim::SimBuilder;
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{SNAPSHOTS_FILE, SUMMARY_FILE};
    use crate::{CsvWriter, OutputWriter, ReportObserver, RunInfo};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_and_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(
            headers(dir.path().join(SNAPSHOTS_FILE)),
            ["turn", "vehicle", "station", "line", "index", "bucket"]
        );
        assert_eq!(headers(dir.path().join(SUMMARY_FILE)), ["strategy", "paths", "vehicles", "turns"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run1");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOTS_FILE).exists());
    }

    #[test]
    fn run_writes_every_snapshot_and_summary() {
        let dir = tmp();
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let info = RunInfo { strategy: "multi".into(), paths: sim.paths().len(), vehicles: sim.vehicle_count() };
        let mut obs = ReportObserver::new(&g, CsvWriter::new(dir.path()).unwrap(), info);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        // Two vehicles, turn 0 through turn 6.
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "1", "R0", "Red", "0", "start"]);
        assert_eq!(rows[2].iter().collect::<Vec<_>>(), ["1", "1", "R1", "Red", "1", "transit"]);
        assert_eq!(rows[13].iter().collect::<Vec<_>>(), ["6", "2", "R4", "Red", "4", "end"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let summary: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].iter().collect::<Vec<_>>(), ["multi", "1", "2", "6"]);
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use mr_sim::SimBuilder;

    use super::*;
    use crate::{OutputError, OutputResult, OutputWriter, PositionRow, ReportObserver, RunInfo, RunSummaryRow};

    #[derive(Default)]
    struct Failing {
        calls: usize,
    }

    impl OutputWriter for Failing {
        fn write_positions(&mut self, _: &[PositionRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }

        fn write_summary(&mut self, _: &RunSummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        let info = RunInfo { strategy: "multi".into(), paths: 1, vehicles: 2 };
        let mut obs = ReportObserver::new(&g, Failing::default(), info);
        sim.run(&mut obs).unwrap();
        let err = obs.take_error().expect("stored error");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 7);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn every_write_failure_is_logged() {
        let g = load(RED);
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();

        let mut obs = tracing::subscriber::with_default(subscriber, || {
            let mut sim = SimBuilder::new(&g).build().unwrap();
            let info = RunInfo { strategy: "multi".into(), paths: 1, vehicles: 2 };
            let mut obs = ReportObserver::new(&g, Failing::default(), info);
            sim.run(&mut obs).unwrap();
            obs
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("report row write failed").count(), 7);
        assert!(logs.contains("write 7"));
        assert_eq!(obs.take_error().unwrap().to_string(), "I/O error: write 1");
    }

    #[test]
    fn buckets_follow_endpoints() {
        let g = load(RED);
        let mut sim = SimBuilder::new(&g).build().unwrap();
        sim.step();
        let info = RunInfo { strategy: "single".into(), paths: 1, vehicles: 2 };
        let obs = ReportObserver::new(&g, Failing::default(), info);
        let rows = obs.rows_for(&sim.snapshot());
        assert_eq!(rows[0].bucket, crate::Bucket::Transit);
        assert_eq!(rows[1].bucket, crate::Bucket::Start);
        assert_eq!(rows[1].station, "R0");
    }
}
