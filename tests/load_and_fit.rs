use std::{fs, path::PathBuf};

use scatterfit::{
    lin_reg::{self, Segment},
    Dataset, Error,
};

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scatterfit-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn hours_against_score() {
    let path = write_fixture(
        "hours.csv",
        "Hours,Score\n1.0,50.0\n2.0,60.0\n3.0,70.0\n",
    );
    let dataset = Dataset::from_path(&path).unwrap();
    assert_eq!(dataset.x_label, "Hours");
    assert_eq!(dataset.y_label, "Score");
    assert_eq!(dataset.len(), 3);

    assert_eq!(lin_reg::regression_slope(&dataset.points).unwrap(), 10.0);
    assert_eq!(
        lin_reg::fitted_line(&dataset.points).unwrap(),
        Segment {
            start: [0.0, 40.0],
            end: [3.0, 70.0],
        }
    );
}

#[test]
fn malformed_file_aborts_load() {
    let path = write_fixture("short.csv", "Hours,Score\n1.0,50.0\n1.0\n3.0,70.0\n");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Format { line: 3, .. }));
    assert_eq!(
        err.to_string(),
        "line 3: expected two comma separated fields, found \"1.0\""
    );

    let path = write_fixture("text.csv", "Hours,Score\nabc,60.0\n");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Value { line: 2, .. }));
}

#[test]
fn vertical_data_has_no_slope() {
    let path = write_fixture("vertical.csv", "x,y\n4,1\n4,2\n4,3\n");
    let dataset = Dataset::from_path(&path).unwrap();
    let err = lin_reg::regression_slope(&dataset.points).unwrap_err();
    assert_eq!(err.to_string(), "vertical or empty dataset; slope undefined");
}
