//! Interactive viewer for the simulation.
//!
//! Draws bodies and their trails, exposes every simulation setting as a
//! slider, and creates a body when the user drags on the canvas: the drag
//! start is the position, half the drag vector is the velocity.

use eframe::egui;
use nbody_core::{Body, BodyId, Color, Preset, Vector2, World};
use std::collections::HashMap;

const PALETTE: [u32; 8] = [
    0x1D5CFE, 0x479D2D, 0xC32121, 0x188A79, 0xF0C400, 0xB04FD8, 0xFF7F0E, 0x9EDAE5,
];

pub fn run(preset: &str) -> Result<(), Box<dyn std::error::Error>> {
    let preset: Preset = preset.parse()?;
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "nbody",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewApp::new(preset)) as Box<dyn eframe::App>)),
    )?;
    Ok(())
}

/// Per-body drawing data, attached when a body appears and released when it
/// is cleared
struct Visual {
    fill: egui::Color32,
}

impl Visual {
    fn for_body(body: &Body) -> Self {
        let (r, g, b) = body.color.rgb();
        Self {
            fill: egui::Color32::from_rgb(r, g, b),
        }
    }
}

/// Maps between world units and screen pixels: the shorter side of the
/// canvas spans [-1, 1] at zoom 1
struct Camera {
    zoom: f32,
    center: egui::Pos2,
    scale: f32,
}

impl Camera {
    fn new(zoom: f32) -> Self {
        Self {
            zoom,
            center: egui::Pos2::ZERO,
            scale: 1.0,
        }
    }

    fn fit(&mut self, rect: egui::Rect) {
        self.center = rect.center();
        self.scale = rect.width().min(rect.height()) * 0.5 * self.zoom;
    }

    fn to_screen(&self, p: Vector2) -> egui::Pos2 {
        self.center + egui::vec2(p.x as f32 * self.scale, -p.y as f32 * self.scale)
    }

    fn to_world(&self, p: egui::Pos2) -> Vector2 {
        let d = p - self.center;
        Vector2::new((d.x / self.scale) as f64, (-d.y / self.scale) as f64)
    }
}

pub struct ViewApp {
    world: World,
    visuals: HashMap<BodyId, Visual>,
    camera: Camera,
    paused: bool,
    drag_start: Option<egui::Pos2>,
    next_color: usize,
}

impl ViewApp {
    pub fn new(preset: Preset) -> Self {
        let mut app = Self {
            world: World::new(),
            visuals: HashMap::new(),
            camera: Camera::new(1.0),
            paused: false,
            drag_start: None,
            next_color: 0,
        };
        app.load(preset);
        app
    }

    fn load(&mut self, preset: Preset) {
        let removed = self.world.clear();
        self.release(&removed);
        let ids = self.world.load_preset(preset);
        self.attach(&ids);
    }

    fn attach(&mut self, ids: &[BodyId]) {
        for id in ids {
            if let Some(body) = self.world.body(*id) {
                self.visuals.insert(*id, Visual::for_body(body));
            }
        }
    }

    fn release(&mut self, removed: &[Body]) {
        for body in removed {
            if let Some(id) = body.id() {
                self.visuals.remove(&id);
            }
        }
    }

    fn spawn_body(&mut self, start: egui::Pos2, end: egui::Pos2) {
        let begin = self.camera.to_world(start);
        let velocity = (self.camera.to_world(end) - begin) * 0.5;
        let color = Color(PALETTE[self.next_color % PALETTE.len()]);
        self.next_color += 1;

        match self.world.add_default_body(begin, velocity, color) {
            Ok(id) => self.attach(&[id]),
            Err(e) => log::warn!("could not add body: {}", e),
        }
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        let config = self.world.config_mut();

        ui.heading("Body Settings");
        let mut mass = config.new_body_mass();
        if ui.add(egui::Slider::new(&mut mass, 0.0..=2.0).text("Mass")).changed() {
            if let Err(e) = config.set_new_body_mass(mass) {
                log::warn!("{}", e);
            }
        }
        let mut radius = config.new_body_radius();
        if ui.add(egui::Slider::new(&mut radius, 0.0..=0.5).text("Radius")).changed() {
            if let Err(e) = config.set_new_body_radius(radius) {
                log::warn!("{}", e);
            }
        }

        ui.separator();
        ui.heading("Simulation Settings");
        let mut k = config.gravitational_constant();
        if ui.add(egui::Slider::new(&mut k, 0.0..=0.06).text("G Constant")).changed() {
            if let Err(e) = config.set_gravitational_constant(k) {
                log::warn!("{}", e);
            }
        }
        let mut softening = config.softening();
        if ui
            .add(egui::Slider::new(&mut softening, 0.0..=0.05).text("Softening"))
            .changed()
        {
            if let Err(e) = config.set_softening(softening) {
                log::warn!("{}", e);
            }
        }
        let mut dt = config.time_step();
        if ui.add(egui::Slider::new(&mut dt, 0.0..=0.05).text("Time Per Step")).changed() {
            if let Err(e) = config.set_time_step(dt) {
                log::warn!("{}", e);
            }
        }
        let mut steps = config.steps_per_frame();
        if ui.add(egui::Slider::new(&mut steps, 0..=10).text("Steps Per Frame")).changed() {
            config.set_steps_per_frame(steps);
        }
        let mut trail = config.trail_capacity();
        if ui.add(egui::Slider::new(&mut trail, 0..=1000).text("Trail Length")).changed() {
            config.set_trail_capacity(trail);
        }

        ui.separator();
        ui.heading("Presets");
        for preset in Preset::ALL {
            if ui.button(preset.title()).clicked() {
                self.load(preset);
            }
        }
    }

    fn draw_world(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let response = ui.allocate_rect(rect, egui::Sense::drag());

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 && response.hovered() {
            self.camera.zoom = (self.camera.zoom * (1.0 + scroll * 0.001)).clamp(0.1, 10.0);
        }
        self.camera.fit(rect);

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.drag_start = response.interact_pointer_pos();
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            let end = response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.latest_pos()));
            if let (Some(start), Some(end)) = (self.drag_start.take(), end) {
                self.spawn_body(start, end);
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(2, 2, 2));

        for body in self.world.bodies() {
            let Some(visual) = body.id().and_then(|id| self.visuals.get(&id)) else {
                continue;
            };

            let points: Vec<egui::Pos2> = body
                .trail_positions()
                .map(|p| self.camera.to_screen(p))
                .collect();
            if points.len() > 1 {
                painter.add(egui::Shape::line(points, egui::Stroke::new(1.0, visual.fill)));
            }

            let radius = (body.radius as f32 * self.camera.scale).max(1.5);
            painter.circle_filled(self.camera.to_screen(body.position), radius, visual.fill);
        }

        // Velocity arrow while dragging out a new body
        if let (Some(start), Some(pos)) = (self.drag_start, response.interact_pointer_pos()) {
            painter.arrow(start, pos - start, egui::Stroke::new(1.5, egui::Color32::WHITE));
        }
    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.paused { "▶ Play" } else { "⏸ Pause" }).clicked() {
                    self.paused = !self.paused;
                }
                if ui.button("⏭ Step").clicked() {
                    self.world.step();
                }
                if ui.button("Clear").clicked() {
                    let removed = self.world.clear();
                    self.release(&removed);
                }

                ui.separator();
                ui.label(format!("Bodies: {}", self.world.len()));
                ui.label(format!("Step: {}", self.world.step_count()));
            });
        });

        egui::SidePanel::right("settings").show(ctx, |ui| {
            self.settings_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_world(ui);
        });

        // Simulation stepping
        if !self.paused {
            self.world.advance_frame();
        }

        // Request repaint for animation
        ctx.request_repaint();
    }
}
