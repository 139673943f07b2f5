//! Test utilities for LAS parser testing
//!
//! Shared fixtures used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod data_tests;
mod parser_tests;

/// The minimal synthetic file from the format notes
pub fn create_minimal_las() -> String {
    r#"~VERSION
VERS. 2.0 : LAS format version
~WELL
WELL.    WELLX : Well name
STRT.ft  100.0 : start depth
STOP.ft  102.0 : stop depth
STEP.ft  1.0   : step
NULL.    -999.25 : null value
~CURVE
DEPT.ft  : Depth
GR.api   : Gamma ray
~ASCII
100.0  50.2
101.0  52.1
102.0  -999.25"#
        .to_string()
}

/// A fuller LAS 2.0 file with comments, parameters and an odd data line
pub fn create_sample_las() -> String {
    r#"# LAS file exported for testing
~Version Information
 VERS.                  2.0 :   CWLS LOG ASCII STANDARD -VERSION 2.0
 WRAP.                  NO  :   ONE LINE PER DEPTH STEP
~Well Information Block
#MNEM.UNIT       Data Type    Information
 STRT.M          1670.000000 : First Index Value
 STOP.M          1669.750000 : Last Index Value
 STEP.M          -0.125000   : STEP
 NULL.           -999.25     : NULL VALUE
 COMP.           ANY OIL COMPANY INC. : COMPANY
 WELL.           AAAAA_2     : WELL
 FLD .           WILDCAT     : FIELD
 LOC .           12-34-12-34W5M : LOCATION
 DATE.           13-DEC-86   : LOG DATE: 13-DEC-86
 UWI .           100123401234W500 : UNIQUE WELL ID
~Curve Information Block
#MNEM.UNIT       API CODE     Curve Description
 DEPT.M                      :  1  DEPTH
 DT  .US/M      60 520 32 00 :  2  SONIC TRANSIT TIME
 RHOB.K/M3      45 350 01 00 :  3  BULK DENSITY
 NPHI.V/V       42 890 00 00 :  4  NEUTRON POROSITY
~Parameter Information Block
 BHT .DEGC                35.5000 : BOTTOM HOLE TEMPERATURE
 BS  .MM                 200.0000 : BIT SIZE
~ASCII Log Data Section
 1670.000   123.450 2550.000    0.450
 1669.875   123.450 2550.000    0.450
# interrupted run
 1669.750   -999.25 2550.000    bad
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
