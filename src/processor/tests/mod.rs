//! Integration tests for the processor module
//!
//! Tests the complete ingest pipeline against LAS files written to
//! temporary directories.


use std::fs;
use std::path::{Path, PathBuf};

/// A small, valid LAS 2.0 file
pub const VALID_LAS: &str = "~VERSION INFORMATION
 VERS.   2.0 : CWLS LOG ASCII STANDARD - VERSION 2.0
 WRAP.   NO  : ONE LINE PER DEPTH STEP
~WELL INFORMATION
 STRT.M   1670.0 : START DEPTH
 STOP.M   1670.5 : STOP DEPTH
 STEP.M   0.25   : STEP
 NULL.   -999.25 : NULL VALUE
 WELL.   ANY-WELL : WELL
~CURVE INFORMATION
 DEPT.M      : 1  DEPTH
 DT.US/M     : 2  SONIC TRANSIT TIME
 RHOB.K/M3   : 3  BULK DENSITY
~PARAMETER INFORMATION
 BHT .DEGC   35.5 : BOTTOM HOLE TEMPERATURE
~ASCII LOG DATA
1670.000   123.450 2550.000
1670.250   123.450 2550.000
1670.500   -999.25 2550.000
";

/// Write a file under `dir`, creating parent directories
pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
