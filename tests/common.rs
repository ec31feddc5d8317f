#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three laps of a race as exported by FastF1 (`laps.to_csv()`), pandas index included.
/// HAM retires after lap 1: lap 2 has no position and no timing.
pub const RACE_CSV: &str = "\
,Driver,DriverNumber,Team,LapNumber,Position,LapStartTime,LapTime,Sector1Time,Sector2Time,Sector3Time,PitInTime,PitOutTime,Stint,Compound,TrackStatus,SpeedST
0,VER,1,Red Bull Racing,1.0,1.0,0 days 00:57:00.000000,0 days 00:01:36.000000,0 days 00:00:30.000000,0 days 00:00:35.000000,0 days 00:00:31.000000,NaT,NaT,1.0,MEDIUM,1,320.5
1,VER,1,Red Bull Racing,2.0,1.0,0 days 00:58:36.000000,0 days 00:01:34.000000,0 days 00:00:29.800000,0 days 00:00:34.500000,0 days 00:00:29.700000,NaT,NaT,1.0,MEDIUM,1,322.0
2,VER,1,Red Bull Racing,3.0,1.0,0 days 01:00:10.000000,0 days 00:01:33.500000,0 days 00:00:29.900000,0 days 00:00:34.300000,0 days 00:00:29.300000,NaT,NaT,1.0,MEDIUM,1,321.0
3,NOR,4,McLaren,1.0,2.0,0 days 00:57:00.800000,0 days 00:01:36.200000,0 days 00:00:30.100000,0 days 00:00:35.000000,0 days 00:00:31.100000,NaT,NaT,1.0,MEDIUM,1,323.0
4,NOR,4,McLaren,2.0,2.0,0 days 00:58:37.000000,0 days 00:01:34.500000,0 days 00:00:29.900000,0 days 00:00:34.600000,0 days 00:00:30.000000,0 days 00:59:50.000000,NaT,1.0,MEDIUM,1,324.1
5,NOR,4,McLaren,3.0,2.0,0 days 01:00:11.500000,0 days 00:01:33.600000,0 days 00:00:29.700000,0 days 00:00:34.500000,0 days 00:00:29.400000,NaT,0 days 01:00:12.000000,2.0,SOFT,1,319.9
6,HAM,44,Ferrari,1.0,3.0,0 days 00:57:01.500000,0 days 00:01:36.900000,0 days 00:00:30.400000,0 days 00:00:35.200000,0 days 00:00:31.300000,NaT,NaT,1.0,HARD,1,318.0
7,HAM,44,Ferrari,2.0,NaN,0 days 00:58:40.000000,NaT,NaT,NaT,NaT,NaT,NaT,1.0,HARD,4,
";

/// Header only: a session with no laps recorded.
pub const EMPTY_CSV: &str = "Driver,DriverNumber,Team,LapNumber,Position,LapStartTime,LapTimeInSeconds,S1InSeconds,S2InSeconds,S3InSeconds,SpeedST\n";

pub fn rld() -> Command {
    cargo_bin_cmd!("rlapdelta")
}

/// Scratch directory for one test; dropped (and removed) with the returned guard.
pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// A config path that does not exist, so every run uses the defaults.
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn s(p: &Path) -> String {
    p.to_string_lossy().to_string()
}
