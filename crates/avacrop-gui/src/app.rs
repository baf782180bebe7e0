use avacrop_core::config::CropConfig;
use avacrop_core::consts::MAX_ZOOM_FACTOR;
use avacrop_core::drag::{DragTracker, PointerPos};
use avacrop_core::io::{load_source, save_png};
use avacrop_core::session::CropSession;

use crate::convert::rgb_to_color_image;

pub struct CropApp {
    session: CropSession,
    drag: DragTracker,
    preview: Option<egui::TextureHandle>,
    /// Session state changed since the preview texture was last rendered.
    preview_dirty: bool,
    status: String,
}

impl CropApp {
    pub fn new(config: CropConfig) -> Self {
        Self {
            session: CropSession::new(config),
            drag: DragTracker::default(),
            preview: None,
            preview_dirty: false,
            status: "Open an image to start".to_string(),
        }
    }

    fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
            .pick_file()
        else {
            return;
        };

        self.session.begin_load();
        let result = load_source(&path).and_then(|img| self.session.source_ready(img));
        match result {
            Ok(()) => {
                self.preview_dirty = true;
                self.status = format!("Loaded {}", path.display());
            }
            Err(e) => {
                self.session.clear();
                self.preview = None;
                self.status = format!("ERROR: {e}");
            }
        }
    }

    fn export_image(&mut self) {
        let Some(export) = self.session.export() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("avatar.png")
            .save_file()
        else {
            return;
        };

        match save_png(&export, &path) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(e) => self.status = format!("ERROR: {e}"),
        }
    }

    /// Re-render the preview texture, but only when the state changed.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        if !self.preview_dirty {
            return;
        }
        self.preview_dirty = false;

        match self.session.preview() {
            Some(img) => {
                let image = rgb_to_color_image(&img);
                self.preview =
                    Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
            }
            None => self.preview = None,
        }
    }

    fn show_viewport(&mut self, ui: &mut egui::Ui) {
        let side = self.session.viewport_size() as f32;
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::drag());

        ui.painter()
            .rect_filled(rect, 2.0, egui::Color32::from_gray(30));

        let Some(texture) = self.preview.as_ref() else {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No image",
                egui::FontId::proportional(13.0),
                egui::Color32::from_gray(140),
            );
            return;
        };

        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Pan gesture: anchor on press, candidate offset per move, clamped
        // by the session.
        if response.drag_started() {
            if let (Some(pos), Some(offset)) =
                (response.interact_pointer_pos(), self.session.offset())
            {
                self.drag
                    .begin(PointerPos::new(pos.x as f64, pos.y as f64), offset);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(candidate) =
                    self.drag.update(PointerPos::new(pos.x as f64, pos.y as f64))
                {
                    self.session.pan_to(candidate);
                    self.preview_dirty = true;
                }
            }
        }
        if response.drag_stopped() {
            self.drag.end();
        }
    }

    fn show_zoom_slider(&mut self, ui: &mut egui::Ui) {
        let (Some(min), Some(scale)) = (self.session.min_scale(), self.session.scale()) else {
            return;
        };

        let mut value = scale;
        ui.add_space(8.0);
        if ui
            .add(egui::Slider::new(&mut value, min..=min * MAX_ZOOM_FACTOR).text("Zoom"))
            .changed()
        {
            self.session.set_scale(value);
            self.preview_dirty = true;
        }
    }
}

impl eframe::App for CropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_preview(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open\u{2026}").clicked() {
                    self.open_image();
                }
                let loaded = self.session.phase().is_some();
                if ui
                    .add_enabled(loaded, egui::Button::new("Export\u{2026}"))
                    .clicked()
                {
                    self.export_image();
                }
                if ui.add_enabled(loaded, egui::Button::new("Clear")).clicked() {
                    self.session.clear();
                    self.preview = None;
                    self.status = "Cleared".to_string();
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                self.show_viewport(ui);
                self.show_zoom_slider(ui);
            });
        });

        // A texture update requested by a gesture this frame should be
        // visible next frame.
        if self.preview_dirty {
            ctx.request_repaint();
        }
    }
}
