use ndarray::{array, Array2};
use vvtable::log::create_logger;
use vvtable::signal::{apply_bandpass_filter, energy, normalize, DEFAULT_FILTER_ORDER};
use vvtable::{EcgTable, EegTable, EmotivConfig, Table, TableError, TableOptions};

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn recording() -> Table {
    let data = array![
        [0.0, 10.0],
        [1.0, 20.0],
        [2.0, 30.0],
        [3.0, 40.0],
        [4.0, 50.0],
        [5.0, 60.0],
    ];
    Table::with_options(
        header(&["Timestamp", "data"]),
        data,
        TableOptions {
            file_path: "recording.csv".to_string(),
            logger: Some(create_logger("table_queries")),
            ..TableOptions::default()
        },
    )
}

#[test]
fn lookups_on_reference_recording() {
    let table = recording();

    assert_eq!(table.get_column("data", 1, None, Some(2)).unwrap(), array![20.0, 30.0]);
    assert_eq!(table.get_time_index(2.5).unwrap(), 3);
    assert_eq!(table.get_column_by_time("data", 1.0, 3.0).unwrap().unwrap(), array![20.0, 30.0]);
    assert_eq!(table.get_column_by_time("data", 3.0, 1.0).unwrap().unwrap(), array![20.0, 30.0]);
}

#[test]
fn out_of_range_times_fail() {
    let table = recording();
    assert!(matches!(table.get_time_index(-1.0), Err(TableError::TimeOutOfRange { .. })));
    assert!(matches!(table.get_time_index(6.0), Err(TableError::TimeOutOfRange { .. })));

    let message = table.get_time_index(6.0).unwrap_err().to_string();
    assert!(message.contains('6'), "{message}");
}

#[test]
fn duration_and_sampling_rate() {
    let table = recording();
    let duration = table.get_end_time().unwrap() - table.get_start_time().unwrap();
    assert_eq!(table.get_duration().unwrap(), duration);
    assert_eq!(table.get_sampling_rate(), table.get_value_count() as f64 / duration);

    let flat = Table::new(header(&["Timestamp", "data"]), Array2::zeros((3, 2)));
    assert_eq!(flat.get_sampling_rate(), 0.0);
}

#[test]
fn stacked_columns_match_single_columns() {
    let table = recording();
    let stacked = table.get_columns(&["Timestamp", "data"]).unwrap();
    assert_eq!(stacked.row(0), table.column("Timestamp").unwrap());
    assert_eq!(stacked.row(1), table.column("data").unwrap());

    let swapped = table.get_columns(&["data", "Timestamp"]).unwrap();
    assert_eq!(swapped.row(0), stacked.row(1));
    assert_eq!(swapped.row(1), stacked.row(0));
}

#[test]
fn absent_column_never_fails() {
    let table = recording();
    assert!(table.column("nope").is_none());
    assert!(table.get_column_by_time("nope", 0.0, 5.0).unwrap().is_none());
}

#[test]
fn eeg_recording_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emotiv.json");
    std::fs::write(&path, r#"{"eegFields": ["F3", "F4"]}"#).unwrap();
    let config = EmotivConfig::from_json_file(&path).unwrap();

    let data = array![
        [0.0, 2.0, -4.0, 1.0, 0.0],
        [0.5, 1.0, -2.0, 1.0, 1.0],
        [1.0, 0.0, 0.0, 0.0, 1.0],
    ];
    let table = EegTable::from_config(
        Table::new(header(&["Timestamp", "F3", "F4", "QF3", "QF4"]), data),
        &config,
    );

    let eeg = table.get_eeg_data().unwrap();
    assert_eq!(eeg.dim(), (2, 3));

    let f4 = normalize(eeg.row(1)).unwrap();
    assert_eq!(f4, array![-1.0, -0.5, 0.0]);
    assert_eq!(energy(eeg.row(0)), 5.0);

    let quality = table.get_quality_data().unwrap();
    assert_eq!(quality.row(1), table.get_quality("QF4").unwrap());
}

#[test]
fn ecg_channel_through_bandpass() {
    let fs = 256.0;
    let len = 1024;
    let data = Array2::from_shape_fn((len, 2), |(row, col)| match col {
        0 => row as f64 / fs,
        _ => 100.0 + (2.0 * std::f64::consts::PI * 10.0 * row as f64 / fs).sin(),
    });
    let table = EcgTable::new(Table::new(header(&["Timestamp", "ECG"]), data));
    assert_eq!(table.get_ecg_header(), Some("ECG"));

    let ecg = table.get_ecg_data().unwrap();
    let filtered = apply_bandpass_filter(
        ecg.row(0),
        5.0,
        40.0,
        table.get_sampling_rate(),
        DEFAULT_FILTER_ORDER,
    )
    .unwrap();
    assert_eq!(filtered.len(), len);

    // the constant offset is removed once the high-pass has settled
    let tail = filtered.slice(ndarray::s![len - 256..]);
    let mean = tail.sum() / tail.len() as f64;
    assert!(mean.abs() < 0.1, "residual offset {mean}");
}
