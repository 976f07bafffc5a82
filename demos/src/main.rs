#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use eframe::egui;
use egui::{emath, Color32, Frame, Pos2, Rect, Sense, Stroke, Ui};
use stroke_recognizer::{
    error::RecognizerError,
    library::GestureLibrary,
    normalizer::Parameters,
    point::Point,
    recognizer,
};

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Gesture Recognizer",
        options,
        Box::new(|_| Ok(Box::<DemoApp>::default())),
    )
}

/// Drops consecutive duplicate pointer samples before normalization.
/// Injected through `Parameters::filter`.
fn drop_duplicate_points(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if out.last() != Some(p) {
            out.push(*p);
        }
    }
    out
}

struct DemoApp {
    /// current stroke, in 0-1 normalized canvas coordinates
    line: Vec<Pos2>,
    stroke: Stroke,
    grid: bool,
    library: GestureLibrary,
    gesture_name: String,
    status: String,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            line: Vec::new(),
            stroke: Stroke::new(1.5, Color32::from_rgb(20, 255, 190)),
            grid: true,
            library: GestureLibrary::with_parameters(Parameters {
                filter: Some(drop_duplicate_points),
                ..Parameters::default()
            }),
            gesture_name: String::new(),
            status: String::from("___"),
        }
    }
}

fn line_to_points(line: &[Pos2]) -> Vec<Point> {
    line.iter().map(|p| Point::new(p.x, p.y)).collect()
}

impl DemoApp {
    fn add_gesture(&mut self) {
        let name = self.gesture_name.trim().to_owned();
        match self.library.add(&name, line_to_points(&self.line)) {
            Ok(()) => {
                self.status = format!("Stored gesture {name:?}");
                self.line.clear();
            }
            Err(e) => self.status = describe(&e),
        }
    }

    fn recognize_gesture(&mut self) {
        match recognizer::classify(&line_to_points(&self.line), &self.library) {
            Ok(m) => self.status = format!("{} (distance: {:.3})", m.name, m.distance),
            Err(e) => self.status = describe(&e),
        }
    }

    pub fn ui_control(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label("Gesture:");
            ui.text_edit_singleline(&mut self.gesture_name);
            if ui.button("Add").clicked() {
                self.add_gesture();
            }

            let mut selected = self.gesture_name.clone();
            egui::ComboBox::from_id_salt("gesture_list")
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for name in self.library.names() {
                        ui.selectable_value(&mut selected, name.to_owned(), name);
                    }
                });
            self.gesture_name = selected;

            ui.separator();
            if ui.button("Recognize").clicked() {
                self.recognize_gesture();
            }
            if ui.button("Clear Drawing").clicked() {
                self.line.clear();
            }
            ui.checkbox(&mut self.grid, "Grid");
            ui.label(format!("Last recognized gesture: {}", self.status));
        })
        .response
    }

    pub fn ui_content(&mut self, ui: &mut Ui) -> egui::Response {
        let (mut response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::drag());

        let to_screen = emath::RectTransform::from_to(
            Rect::from_min_size(Pos2::ZERO, response.rect.square_proportions()),
            response.rect,
        );
        let from_screen = to_screen.inverse();

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                self.line.clear();
            }
            let canvas_pos = from_screen * pointer_pos;
            if self.line.last() != Some(&canvas_pos) {
                self.line.push(canvas_pos);
                response.mark_changed();
            }
        }

        if self.grid {
            let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 100, 100, 20));
            let rect = response.rect;
            let mut x = rect.left();
            while x < rect.right() {
                painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid_stroke);
                x += 20.0;
            }
            let mut y = rect.top();
            while y < rect.bottom() {
                painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid_stroke);
                y += 20.0;
            }
        }

        if self.line.len() >= 2 {
            let points: Vec<Pos2> = self.line.iter().map(|p| to_screen * *p).collect();
            painter.add(egui::Shape::line(points, self.stroke));
        }

        response
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("gestures").show(ctx, |ui| {
            ui.label("Gestures:");
            for template in self.library.templates() {
                ui.group(|ui| {
                    ui.label(&template.name);
                    let desired_size = egui::vec2(80.0, 60.0);
                    let (response, painter) = ui.allocate_painter(desired_size, Sense::hover());

                    // fit the raw stroke into the preview rect
                    let mut min = Pos2::new(f32::MAX, f32::MAX);
                    let mut max = Pos2::new(f32::MIN, f32::MIN);
                    for p in &template.points {
                        min.x = min.x.min(p.x);
                        min.y = min.y.min(p.y);
                        max.x = max.x.max(p.x);
                        max.y = max.y.max(p.y);
                    }
                    let bounds = Rect::from_min_max(min, max);
                    let transform = emath::RectTransform::from_to(bounds, response.rect);

                    let points: Vec<Pos2> = template
                        .points
                        .iter()
                        .map(|p| transform * Pos2::new(p.x, p.y))
                        .collect();
                    if points.len() >= 2 {
                        painter.add(egui::Shape::line(points, self.stroke));
                    }
                });
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_control(ui);
            ui.label("Paint with your mouse/touch!");
            Frame::canvas(ui.style()).show(ui, |ui| {
                self.ui_content(ui);
            });
        });
    }
}

/// User-facing wording for the recoverable recognizer errors.
fn describe(e: &RecognizerError) -> String {
    match e {
        RecognizerError::EmptySample | RecognizerError::DegenerateStroke => {
            "Please draw a gesture first".to_owned()
        }
        RecognizerError::EmptyLibrary => "No gestures initialized yet".to_owned(),
        other => other.to_string(),
    }
}
