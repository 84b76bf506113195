// ABOUTME: End-to-end smoke test for the vecdump export lifecycle.
// ABOUTME: Converts host-style arguments, runs both exporters against one file, and replays it.

use std::fs;

use vecdump_core::{InputError, length_from_host, step_from_host};
use vecdump_store::{AppendFile, ExportConfig, ExportError, export_all, export_sampled};

fn quiet() -> ExportConfig {
    ExportConfig {
        progress: false,
        sync: false,
        create_dirs: false,
    }
}

#[test]
fn smoke_test_full_lifecycle() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("trace.txt");
    let config = quiet();

    // 1. Full export of the first four values, length passed as a float
    let values = [1.0, 0.0, 2.0, 3.0, 4.0];
    let length = length_from_host(4.0).unwrap();
    let report = export_all(&values, length, &path, &config).unwrap();
    assert_eq!(report.written, 4);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n0\n2\n3\n");

    // 2. Sampled export of all five values appends after the first block
    let step = step_from_host(1.0).unwrap();
    let report = export_sampled(&values, values.len(), &path, step, &config).unwrap();
    assert_eq!(report.written, 3);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1\n0\n2\n3\n2\n3\n4\n"
    );

    // 3. A rejected call leaves the file exactly as it was
    let err = export_all(&values, 6, &path, &config).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Input(InputError::LengthExceedsBuffer { .. })
    ));

    // 4. Replay sees every line in order
    let back = AppendFile::replay(&path).unwrap();
    assert_eq!(back, vec![1.0, 0.0, 2.0, 3.0, 2.0, 3.0, 4.0]);
}

#[test]
fn smoke_test_long_signal_decimation() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("signal.txt");

    // A spike train: every fourth sample is silent.
    let values: Vec<f64> = (0..400)
        .map(|i| if i % 4 == 0 { 0.0 } else { f64::from(i) * 0.25 })
        .collect();
    let nonzero = values.iter().filter(|v| **v != 0.0).count();
    assert_eq!(nonzero, 300);

    let step = 10;
    let report = export_sampled(&values, values.len(), &path, step, &quiet()).unwrap();

    // First write at the 11th nonzero value, then every 10th: 11, 21, ..., 291
    assert_eq!(report.written, 29);
    let back = AppendFile::replay(&path).unwrap();
    assert_eq!(back.len(), 29);
    assert!(back.iter().all(|v| *v != 0.0));
}

#[test]
fn smoke_test_host_arguments_are_validated() {
    assert!(matches!(
        length_from_host(-2.0),
        Err(InputError::NegativeLength(_))
    ));
    assert!(matches!(
        step_from_host(f64::NAN),
        Err(InputError::NonFiniteStep(_))
    ));
}
