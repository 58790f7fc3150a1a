//! Tests for the metro-rush binary.

use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use crate::args::Args;

const RED: &str = "#Red\n0:R0\n1:R1\n2:R2\n3:R3\n4:R4\nSTART=R0\nEND=R4\nTRAINS=2\n";

const TWO_BRANCH: &str =
    "#Loop\n1:S\n2:A1\n3:A2\n4:E\n5:B2\n6:B1\n7:S\nSTART=Loop:1\nEND=Loop:4\nTRAINS=4\n";

fn write_network(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("network.txt");
    std::fs::write(&path, text).expect("write network");
    path
}

fn args_for(path: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["metro-rush"];
    argv.extend_from_slice(extra);
    let path = path.to_str().expect("utf-8 path");
    argv.push(path);
    Args::try_parse_from(argv).expect("valid arguments")
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["metro-rush", "net.txt"]).unwrap();
        assert_eq!(args.filename, PathBuf::from("net.txt"));
        assert_eq!(args.algo, 2);
        assert_eq!(args.csv, None);
        assert_eq!(args.max_turns, None);
        assert!(!args.quiet);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "metro-rush", "--algo", "1", "--csv", "out", "--max-turns", "40", "-q", "net.txt",
        ])
        .unwrap();
        assert_eq!(args.algo, 1);
        assert_eq!(args.csv, Some(PathBuf::from("out")));
        assert_eq!(args.max_turns, Some(40));
        assert!(args.quiet);
    }

    #[test]
    fn rejects_unknown_algo() {
        assert!(Args::try_parse_from(["metro-rush", "--algo", "3", "net.txt"]).is_err());
        assert!(Args::try_parse_from(["metro-rush", "--algo", "x", "net.txt"]).is_err());
    }

    #[test]
    fn filename_is_required() {
        assert!(Args::try_parse_from(["metro-rush"]).is_err());
    }
}

#[cfg(test)]
mod driver_tests {
    use mr_core::Turn;

    use super::*;
    use crate::driver;

    #[test]
    fn prints_turns_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&write_network(&dir, RED), &[]);
        let mut out = Vec::new();
        assert_eq!(driver::run(&args, &mut out).unwrap(), Turn(6));
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Turn: 1\n"));
        assert!(out.ends_with("Total turn: 6\n"));
    }

    #[test]
    fn algo_switch_changes_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_network(&dir, TWO_BRANCH);
        let single = driver::run(&args_for(&path, &["--algo", "1", "-q"]), Vec::new()).unwrap();
        let multi  = driver::run(&args_for(&path, &["--algo", "2", "-q"]), Vec::new()).unwrap();
        assert_eq!(single, Turn(9));
        assert_eq!(multi, Turn(5));
    }

    #[test]
    fn csv_output_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_network(&dir, RED);
        let out_dir = dir.path().join("csv");
        let csv_arg = out_dir.to_str().unwrap().to_owned();
        driver::run(&args_for(&path, &["--csv", &csv_arg, "-q"]), Vec::new()).unwrap();
        assert!(out_dir.join("turn_snapshots.csv").exists());
        let summary = std::fs::read_to_string(out_dir.join("run_summary.csv")).unwrap();
        assert_eq!(summary, "strategy,paths,vehicles,turns\nmulti,1,2,6\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&dir.path().join("absent.txt"), &[]);
        let err = driver::run(&args, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("cannot load network"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_network(&dir, "#Red\n0:R0\n1:R1\nSTART=R0\nEND=R0\nTRAINS=1\n");
        assert!(driver::run(&args_for(&path, &[]), Vec::new()).is_err());
    }

    #[test]
    fn tight_turn_limit_stalls() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_network(&dir, RED);
        let err = driver::run(&args_for(&path, &["--max-turns", "3", "-q"]), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("within 3 turns"));
    }
}
