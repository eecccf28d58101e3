use egui::{
    plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points},
    Color32, Ui,
};
use itertools::Itertools;
use log::info;

use crate::{
    dataset::{DataPoint, Dataset},
    lin_reg::{self, Regression, Segment},
    Result,
};

/// Something that can draw a scatter plot with a straight line on top.
pub trait RenderSink {
    fn axis_labels(&mut self, x_label: &str, y_label: &str);
    fn scatter(&mut self, points: &[DataPoint]);
    fn segment(&mut self, segment: Segment);
}

/// Hands the labels and the raw points to `sink`.
pub fn plot_data(dataset: &Dataset, sink: &mut impl RenderSink) {
    sink.axis_labels(&dataset.x_label, &dataset.y_label);
    sink.scatter(&dataset.points);
}

/// Fits `points` and hands the fitted line to `sink`.
pub fn plot_regression(points: &[DataPoint], sink: &mut impl RenderSink) -> Result<Regression> {
    let (regression, segment) = lin_reg::fit_with_line(points)?;
    info!("Regression Slope: {}", regression.slope);
    sink.segment(segment);
    Ok(regression)
}

const SCATTER_RADIUS: f32 = 3.0;
const SCATTER_COLOR: Color32 = Color32::LIGHT_BLUE;
const LINE_COLOR: Color32 = Color32::RED;
const LINE_WIDTH: f32 = 2.0;

/// Retained plot contents, drawn with egui every frame.
#[derive(Default)]
pub struct Figure {
    x_label: String,
    y_label: String,
    scatter: Vec<[f64; 2]>,
    segment: Option<Segment>,
}

impl RenderSink for Figure {
    fn axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
    }

    fn scatter(&mut self, points: &[DataPoint]) {
        self.scatter = points.iter().copied().map_into::<[f64; 2]>().collect_vec();
    }

    fn segment(&mut self, segment: Segment) {
        self.segment = Some(segment);
    }
}

impl Figure {
    pub fn is_empty(&self) -> bool {
        self.scatter.is_empty() && self.segment.is_none()
    }

    pub fn show(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.strong(self.y_label.as_str());
            ui.label("against");
            ui.strong(self.x_label.as_str());
        });

        let x_label = self.x_label.clone();
        let y_label = self.y_label.clone();
        let points = Points::new(self.scatter.iter().copied().collect::<PlotPoints>())
            .radius(SCATTER_RADIUS)
            .color(SCATTER_COLOR)
            .name("data");
        let line = self.segment.map(|segment| {
            Line::new([segment.start, segment.end].into_iter().collect::<PlotPoints>())
                .color(LINE_COLOR)
                .width(LINE_WIDTH)
                .name("least squares fit")
        });

        Plot::new("scatter plot")
            .legend(Legend::default())
            .include_x(0.0)
            .label_formatter(move |_name, value: &PlotPoint| {
                format!("{}: {:.3}\n{}: {:.3}", x_label, value.x, y_label, value.y)
            })
            .show(ui, |plot_ui| {
                plot_ui.points(points);
                if let Some(line) = line {
                    plot_ui.line(line);
                }
            });
    }
}
