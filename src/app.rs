use std::path::PathBuf;

use egui::{Context, Ui};
use log::{error, warn};
use native_dialog::FileDialog;

use crate::{
    dataset::Dataset,
    figure::{plot_data, plot_regression, Figure},
    lin_reg::Regression,
};

#[derive(Default)]
pub struct ScatterApp {
    filename: String,
    figure: Figure,
    regression: Option<Regression>,
    points: usize,
    message: Option<String>,
}

impl ScatterApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, file: Option<PathBuf>) -> Self {
        let mut app = Self::default();
        if let Some(file) = file {
            app.filename = file.display().to_string();
            app.load();
        }
        app
    }

    /// Reads `filename` and replaces whatever is plotted.
    fn load(&mut self) {
        self.figure = Figure::default();
        self.regression = None;
        self.points = 0;
        self.message = None;

        let dataset = match Dataset::from_path(self.filename.trim()) {
            Ok(dataset) => dataset,
            Err(err) => {
                error!("failed to load {:?}, Error: {}", self.filename, err);
                self.message = Some(format!("could not load file: {}", err));
                return;
            }
        };
        self.points = dataset.len();
        plot_data(&dataset, &mut self.figure);
        match plot_regression(&dataset.points, &mut self.figure) {
            Ok(regression) => self.regression = Some(regression),
            Err(err) => {
                warn!("no regression for {:?}: {}", self.filename, err);
                self.message = Some(err.to_string());
            }
        }
    }

    fn browse(&mut self) {
        let dialog = FileDialog::new().add_filter("CSV", &["csv"]);
        let dialog_result = match home::home_dir() {
            Some(home) => dialog.set_location(&home).show_open_single_file(),
            None => dialog.show_open_single_file(),
        };
        match dialog_result {
            Ok(Some(path)) => {
                self.filename = path.display().to_string();
                self.load();
            }
            Ok(None) => warn!("no path was returned"),
            Err(err) => error!("could not get location, Error: {}", err),
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("file").show(ctx, |ui| self.file_bar(ui));
        egui::SidePanel::right("fit").show(ctx, |ui| self.side_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.figure.is_empty() {
                ui.vertical_centered(|ui| ui.heading("No data loaded"));
            } else {
                self.figure.show(ui);
            }
        });
    }
}

impl ScatterApp {
    fn file_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Enter the name of the csv data file:");
            let response = ui.text_edit_singleline(&mut self.filename);
            let submitted = response.lost_focus() && ui.input().key_pressed(egui::Key::Enter);
            if ui.button("Load").clicked() || submitted {
                self.load();
            }
            if ui.button("Browse…").clicked() {
                self.browse();
            }
        });
    }

    fn side_panel(&mut self, ui: &mut Ui) {
        ui.heading("Least squares fit");
        ui.label(format!("There are {} points.", self.points));
        if let Some(regression) = self.regression.as_ref() {
            egui::Grid::new("fit values").num_columns(2).show(ui, |ui| {
                ui.label("slope");
                ui.monospace(format!("{:.6}", regression.slope));
                ui.end_row();
                ui.label("intercept");
                ui.monospace(format!("{:.6}", regression.intercept()));
                ui.end_row();
                ui.label("mean x");
                ui.monospace(format!("{:.6}", regression.x_mean));
                ui.end_row();
                ui.label("mean y");
                ui.monospace(format!("{:.6}", regression.y_mean));
                ui.end_row();
            });
        }
        if let Some(message) = self.message.as_ref() {
            ui.colored_label(egui::Color32::RED, message.as_str());
        }
    }
}
