use serde::Serialize;

use crate::{dataset::DataPoint, Error, Result};

/// Arithmetic mean of `values`.
///
/// An empty slice has a mean of `0.0`. This is a convention callers may rely
/// on, not an error being swallowed.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Splits points into their x and y coordinates, keeping the order.
pub fn separate(points: &[DataPoint]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|point| (point.x, point.y)).unzip()
}

/// Least squares slope of y against x.
///
/// Uses the raw sum form `(Σxy - n·x̄·ȳ) / (Σx² - n·x̄²)` so the data is only
/// walked once after the means are known. Fails with [`Error::Degenerate`]
/// when the points are empty or every x is the same, and with
/// [`Error::Overflow`] when the sums or the quotient are not finite.
pub fn regression_slope(points: &[DataPoint]) -> Result<f64> {
    let (xs, ys) = separate(points);
    slope_of(&xs, &ys, mean(&xs), mean(&ys))
}

fn slope_of(xs: &[f64], ys: &[f64], mean_x: f64, mean_y: f64) -> Result<f64> {
    // identical x values need not cancel to exactly zero in floating point
    let vertical = xs.windows(2).all(|pair| pair[0] == pair[1]);
    if xs.is_empty() || vertical {
        return Err(Error::Degenerate);
    }

    let n = xs.len() as f64;
    let (xy_sum, x2_sum) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(xy, x2), (x, y)| (xy + x * y, x2 + x * x));

    let numerator = xy_sum - n * mean_x * mean_y;
    let denominator = x2_sum - n * mean_x * mean_x;
    if !numerator.is_finite() || !denominator.is_finite() {
        return Err(Error::Overflow);
    }
    if denominator == 0.0 {
        return Err(Error::Degenerate);
    }
    let slope = numerator / denominator;
    if slope.is_finite() {
        Ok(slope)
    } else {
        Err(Error::Overflow)
    }
}

/// A fitted line, stored as its slope through the mean point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub x_mean: f64,
    pub y_mean: f64,
}

impl Regression {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.y_mean + self.slope * (x - self.x_mean)
    }

    pub fn intercept(&self) -> f64 {
        self.evaluate(0.0)
    }
}

pub fn fit(points: &[DataPoint]) -> Result<Regression> {
    let (xs, ys) = separate(points);
    let x_mean = mean(&xs);
    let y_mean = mean(&ys);
    let slope = slope_of(&xs, &ys, x_mean, y_mean)?;
    Ok(Regression {
        slope,
        x_mean,
        y_mean,
    })
}

/// Two endpoints of a straight line in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// The fitted line from `x = 0` to the largest x in `points`.
///
/// The left end is always `x = 0`, not the smallest x of the data, so the
/// segment may extend past the data on the left or stop short of it.
pub fn fitted_line(points: &[DataPoint]) -> Result<Segment> {
    fit_with_line(points).map(|(_, segment)| segment)
}

/// [`fit`] and [`fitted_line`] in one pass over the data.
pub fn fit_with_line(points: &[DataPoint]) -> Result<(Regression, Segment)> {
    let max_x = points
        .iter()
        .map(|point| point.x)
        .reduce(f64::max)
        .ok_or(Error::Empty)?;
    let regression = fit(points)?;
    Ok((regression, regression.segment(0.0, max_x)))
}

impl Regression {
    pub fn segment(&self, from: f64, to: f64) -> Segment {
        Segment {
            start: [from, self.evaluate(from)],
            end: [to, self.evaluate(to)],
        }
    }
}
