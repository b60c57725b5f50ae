use eframe::egui::{self, Color32, RichText};

use rootscope_plot::{EguiSurface, Surface, render};
use rootscope_solvers::equation::bisection::Number;

use crate::form::{Form, FormError, Run};

const CANVAS_SIZE: [f32; 2] = [600.0, 400.0];
const ERROR_COLOR: Color32 = Color32::from_rgb(0xc0, 0x39, 0x2b);

/// Form, trace table, narrative, and canvas for one bisection run.
pub(crate) struct RootscopeApp {
    form: Form,
    outcome: Option<Result<Run, FormError>>,
    verbose: bool,
}

impl RootscopeApp {
    #[must_use]
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            form: Form::default(),
            outcome: None,
            verbose,
        }
    }

    fn solve(&mut self) {
        self.outcome = Some(self.form.submit(self.verbose));
    }

    fn inputs(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("f(x) =");
                ui.text_edit_singleline(&mut self.form.function);
                ui.end_row();

                ui.label("a");
                ui.text_edit_singleline(&mut self.form.a);
                ui.end_row();

                ui.label("b");
                ui.text_edit_singleline(&mut self.form.b);
                ui.end_row();

                ui.label("Tolerance");
                ui.text_edit_singleline(&mut self.form.tolerance);
                ui.end_row();

                ui.label("Max iterations");
                ui.text_edit_singleline(&mut self.form.max_iters);
                ui.end_row();
            });

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Solve").clicked() || enter {
            self.solve();
        }
    }

    fn results(&self, ui: &mut egui::Ui) {
        match &self.outcome {
            None => {}
            Some(Err(err)) => {
                ui.label(RichText::new(format!("Error: {err}")).color(ERROR_COLOR));
            }
            Some(Ok(run)) => {
                history_table(ui, run);
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_salt("narrative")
                    .show(ui, |ui| {
                        for line in run.solution.narrative() {
                            ui.monospace(line);
                        }
                    });
            }
        }
    }

    fn canvas(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(CANVAS_SIZE.into(), egui::Sense::hover());
        let mut surface = EguiSurface::new(&painter, response.rect);

        match &self.outcome {
            Some(Ok(run)) => render(
                &mut surface,
                &run.formula,
                run.bracket,
                &run.solution.history,
                run.solution.root,
            ),
            _ => surface.clear(),
        }
    }
}

fn history_table(ui: &mut egui::Ui, run: &Run) {
    egui::ScrollArea::vertical()
        .id_salt("history")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new("history")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    for header in ["Iteration", "a", "b", "m", "f(m)"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for record in &run.solution.history {
                        ui.label(record.iter.to_string());
                        for value in [record.a, record.b, record.midpoint, record.value] {
                            ui.monospace(Number(value).to_string());
                        }
                        ui.end_row();
                    }
                });
        });
}

impl eframe::App for RootscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Bisection method");
                ui.add_space(8.0);
                self.inputs(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
            ui.add_space(8.0);
            self.results(ui);
        });
    }
}
