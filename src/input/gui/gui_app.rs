use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::export::ExportAction;
use crate::controllers::preview::PreviewController;
use crate::core::data::parameter_id::ParameterId;
use crate::core::linked_pair::{ControlEndpoint, DisplayValue, LinkedControlPair};
use crate::core::model::ParameterModel;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::GuiPresenterPort;
use crate::input::gui::ui_state::GuiAppState;

/// The editor window: control panel on top of the preview framebuffer.
pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    controller: PreviewController,
    export: ExportAction,
    state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: PreviewController,
        export: ExportAction,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            export,
            state: GuiAppState::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Submits a preview refresh if the model drifted since the last one.
    /// Called once per frame, after the control panel has settled its
    /// edits into the model.
    pub fn submit_refresh_if_needed(&mut self) {
        if self.state.should_submit() {
            self.controller.submit_refresh(&self.state.model);
            self.state.record_submission();
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let renderer_status = self.presenter.status_message();
        let render_duration = self.presenter.last_render_duration();

        let state = &mut self.state;
        let export = &self.export;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fretboard Layout")
                .default_pos([10.0, 10.0])
                .default_size([340.0, 300.0])
                .show(ctx, |ui| {
                    linked_parameter_row(ui, &mut state.model, &mut state.scale_pair);

                    ui.horizontal(|ui| {
                        let mut enabled = state.model.multiscale_enabled();
                        if ui.checkbox(&mut enabled, "Multiscale").changed() {
                            state.model.set_multiscale_enabled(enabled);
                        }
                    });
                    ui.add_enabled_ui(state.model.multiscale_enabled(), |ui| {
                        linked_parameter_row(ui, &mut state.model, &mut state.multiscale_pair);
                    });

                    ui.separator();

                    for id in [
                        ParameterId::FretCount,
                        ParameterId::PerpendicularFret,
                        ParameterId::NutWidth,
                        ParameterId::BridgeSpacing,
                        ParameterId::Border,
                    ] {
                        parameter_stepper(ui, &mut state.model, id);
                    }

                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Output file:");
                        if ui.text_edit_singleline(&mut state.save_path_input).changed() {
                            state.model.set_save_path(state.save_path_input.clone());
                        }
                    });

                    ui.horizontal(|ui| {
                        let mut use_viewer = state.model.use_viewer();
                        if ui.checkbox(&mut use_viewer, "Open with:").changed() {
                            state.model.set_use_viewer(use_viewer);
                        }
                        if ui.text_edit_singleline(&mut state.viewer_input).changed() {
                            state.model.set_viewer_command(state.viewer_input.clone());
                        }
                    });

                    if ui.button("Save").clicked() {
                        state.status_line = match export.save(&state.model) {
                            Ok(destination) => {
                                Some(format!("Saved {}", destination.display()))
                            }
                            Err(error) => Some(error.to_string()),
                        };
                    }

                    ui.separator();
                    if let Some(duration) = render_duration {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }
                    if let Some(message) = &renderer_status {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    if let Some(message) = &state.status_line {
                        ui.label(message);
                    }
                });
        })
    }

    /// Forwards a window event to egui; returns (consumed, repaint).
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn linked_parameter_row(
    ui: &mut egui::Ui,
    model: &mut ParameterModel,
    pair: &mut LinkedControlPair<DisplayValue, DisplayValue>,
) {
    let (label, min, max, step, precision) = {
        let parameter = model.parameter(pair.id());
        (
            parameter.id().display_name(),
            parameter.min(),
            parameter.max(),
            parameter.step(),
            parameter.precision(),
        )
    };

    ui.horizontal(|ui| {
        ui.label(label);

        let coarse = ui.add(
            egui::Slider::new(&mut pair.coarse_mut().value, min..=max).show_value(false),
        );
        if coarse.changed() {
            let value = pair.coarse().displayed();
            pair.on_coarse_changed(model, value);
        }

        let fine = ui.add(
            egui::DragValue::new(&mut pair.fine_mut().value)
                .clamp_range(min..=max)
                .speed(step)
                .fixed_decimals(usize::from(precision)),
        );
        if fine.changed() {
            let value = pair.fine().displayed();
            pair.on_fine_changed(model, value);
        }
    });
}

fn parameter_stepper(ui: &mut egui::Ui, model: &mut ParameterModel, id: ParameterId) {
    let (min, max, step, precision) = {
        let parameter = model.parameter(id);
        (
            parameter.min(),
            parameter.max(),
            parameter.step(),
            parameter.precision(),
        )
    };

    let mut value = model.get(id);
    ui.horizontal(|ui| {
        ui.label(id.display_name());
        let response = ui.add(
            egui::DragValue::new(&mut value)
                .clamp_range(min..=max)
                .speed(step)
                .fixed_decimals(usize::from(precision)),
        );
        if response.changed() {
            model.set(id, value);
        }
    });
}
