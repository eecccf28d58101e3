use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::info;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl From<DataPoint> for [f64; 2] {
    fn from(point: DataPoint) -> Self {
        [point.x, point.y]
    }
}

/// Labelled two column data, in the order it was read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<DataPoint>,
}

impl Dataset {
    /// Reads a `x_label,y_label` header followed by one `x,y` pair per line.
    ///
    /// The first malformed line aborts the read, nothing is returned for the
    /// lines before it.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let (x_label, y_label) = split_pair(header.trim_start_matches('\u{feff}'), 1)?;

        let mut points = Vec::new();
        for (index, line) in lines.enumerate() {
            let line_number = index + 2;
            let line = line?;
            let (x, y) = split_pair(&line, line_number)?;
            points.push(DataPoint {
                x: parse_value(x, line_number)?,
                y: parse_value(y, line_number)?,
            });
        }

        Ok(Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            points,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dataset = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            "read {} points from {:?} ({} against {})",
            dataset.points.len(),
            path,
            dataset.y_label,
            dataset.x_label
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

fn split_pair(line: &str, line_number: usize) -> Result<(&str, &str)> {
    let mut fields = line.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Ok((first.trim(), second.trim())),
        _ => Err(Error::Format {
            line: line_number,
            content: line.to_string(),
        }),
    }
}

fn parse_value(token: &str, line_number: usize) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Value {
            line: line_number,
            token: token.to_string(),
        }),
    }
}
