use std::fmt;

use log::info;
use serde::Serialize;

use crate::{
    dataset::Dataset,
    lin_reg::{self, Segment},
    options::OutputFormat,
    Result,
};

/// Everything headless mode reports about one dataset.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub x_label: String,
    pub y_label: String,
    pub points: usize,
    pub slope: f64,
    pub intercept: f64,
    pub x_mean: f64,
    pub y_mean: f64,
    pub line: Segment,
}

impl Summary {
    pub fn new(dataset: &Dataset) -> Result<Self> {
        let (regression, line) = lin_reg::fit_with_line(&dataset.points)?;
        info!("Regression Slope: {}", regression.slope);
        Ok(Self {
            x_label: dataset.x_label.clone(),
            y_label: dataset.y_label.clone(),
            points: dataset.len(),
            slope: regression.slope,
            intercept: regression.intercept(),
            x_mean: regression.x_mean,
            y_mean: regression.y_mean,
            line,
        })
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regression Slope: {}", self.slope)?;
        writeln!(f, "Intercept: {}", self.intercept)?;
        writeln!(f, "Points: {}", self.points)?;
        writeln!(f, "Mean {}: {}", self.x_label, self.x_mean)?;
        writeln!(f, "Mean {}: {}", self.y_label, self.y_mean)?;
        write!(
            f,
            "Line: ({}, {}) to ({}, {})",
            self.line.start[0], self.line.start[1], self.line.end[0], self.line.end[1]
        )
    }
}
