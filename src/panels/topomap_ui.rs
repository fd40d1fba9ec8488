//! Scalp topography panel: interpolated field, head outline, clickable markers.

use egui::{
    pos2, vec2, Align2, Color32, ColorImage, FontId, Pos2, Rect, Sense, Shape, Stroke,
    TextureHandle, TextureOptions, Ui,
};

use super::panel_trait::{Panel, PanelState};
use crate::config::{FeatureFlags, TopomapSettings};
use crate::data::dataset::Dataset;
use crate::data::topomap::{interpolate_field, nearest_marker, Colormap, HeadGeometry, TopoField};
use crate::events::ViewerEvent;
use crate::render::{RenderCommand, RenderSurface};

const COLORBAR_WIDTH: f32 = 14.0;
const COLORBAR_GAP: f32 = 48.0;
const COLORBAR_STEPS: usize = 64;
/// Share of the half-side used by the head disk; the rest leaves room for nose and ears.
const HEAD_FILL: f32 = 0.82;

pub struct TopomapPanel {
    state: PanelState,
    names: Vec<String>,
    positions: Vec<[f64; 2]>,
    geometry: HeadGeometry,
    vlim: f64,
    colormap: Colormap,
    settings: TopomapSettings,
    show_colorbar: bool,
    show_labels: bool,
    outline: Color32,

    field: Option<TopoField>,
    field_index: Option<usize>,
    time: f64,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    marker_colors: Vec<Color32>,
    hovered: Option<usize>,
}

impl TopomapPanel {
    pub fn new(
        dataset: &Dataset,
        settings: TopomapSettings,
        features: &FeatureFlags,
        outline: Color32,
    ) -> Self {
        let positions = dataset.positions();
        let (_, vlim) = dataset.value_range();
        Self {
            state: PanelState::default(),
            names: dataset.channels().iter().map(|c| c.name.clone()).collect(),
            geometry: HeadGeometry::from_positions(&positions),
            positions,
            vlim,
            colormap: Colormap::default(),
            settings,
            show_colorbar: features.colorbar,
            show_labels: features.marker_labels,
            outline,
            field: None,
            field_index: None,
            time: 0.0,
            texture: None,
            texture_dirty: false,
            marker_colors: Vec::new(),
            hovered: None,
        }
    }

    pub fn set_outline_color(&mut self, color: Color32) {
        self.outline = color;
    }

    /// Time slice currently interpolated, if any.
    pub fn field_index(&self) -> Option<usize> {
        self.field_index
    }

    fn upload_texture(&mut self, ui: &Ui) {
        if !self.texture_dirty {
            return;
        }
        let Some(field) = self.field.as_ref() else {
            return;
        };
        let rgba = field.to_rgba(self.colormap, self.vlim);
        let image = ColorImage::from_rgba_unmultiplied([field.resolution, field.resolution], &rgba);
        match self.texture.as_mut() {
            Some(tex) => tex.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ui.ctx().load_texture(
                    "topomap_field",
                    image,
                    TextureOptions::LINEAR,
                ))
            }
        }
        self.texture_dirty = false;
    }

    fn to_screen(&self, center: Pos2, scale: f32, p: [f64; 2]) -> Pos2 {
        let dx = ((p[0] - self.geometry.center[0]) / self.geometry.radius) as f32;
        let dy = ((p[1] - self.geometry.center[1]) / self.geometry.radius) as f32;
        pos2(center.x + dx * scale, center.y - dy * scale)
    }

    fn from_screen(&self, center: Pos2, scale: f32, pos: Pos2) -> [f64; 2] {
        let dx = ((pos.x - center.x) / scale) as f64;
        let dy = ((center.y - pos.y) / scale) as f64;
        [
            self.geometry.center[0] + dx * self.geometry.radius,
            self.geometry.center[1] + dy * self.geometry.radius,
        ]
    }

    fn paint_head(&self, painter: &egui::Painter, center: Pos2, scale: f32) {
        let stroke = Stroke::new(2.0, self.outline);
        painter.circle_stroke(center, scale, stroke);

        // nose
        let nose = vec![
            pos2(center.x - 0.09 * scale, center.y - 0.995 * scale),
            pos2(center.x, center.y - 1.12 * scale),
            pos2(center.x + 0.09 * scale, center.y - 0.995 * scale),
        ];
        painter.add(Shape::line(nose, stroke));

        // ears
        for side in [-1.0f32, 1.0] {
            let ear: Vec<Pos2> = (0..=16)
                .map(|i| {
                    let a = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * i as f32 / 16.0;
                    pos2(
                        center.x + side * (scale + 0.07 * scale * a.cos()),
                        center.y + 0.16 * scale * a.sin(),
                    )
                })
                .collect();
            painter.add(Shape::line(ear, stroke));
        }
    }

    fn paint_colorbar(&self, painter: &egui::Painter, rect: Rect, text_color: Color32) {
        let step_h = rect.height() / COLORBAR_STEPS as f32;
        for i in 0..COLORBAR_STEPS {
            // bottom is -vlim
            let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            let y1 = rect.bottom() - i as f32 * step_h;
            let slice = Rect::from_min_max(pos2(rect.left(), y1 - step_h), pos2(rect.right(), y1));
            painter.rect_filled(slice, 0.0, self.colormap.sample(t));
        }
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(1.0, self.outline),
            egui::StrokeKind::Outside,
        );
        let font = FontId::proportional(11.0);
        for (y, v) in [
            (rect.top(), self.vlim),
            (rect.center().y, 0.0),
            (rect.bottom(), -self.vlim),
        ] {
            painter.text(
                pos2(rect.right() + 4.0, y),
                Align2::LEFT_CENTER,
                format!("{v:.1}"),
                font.clone(),
                text_color,
            );
        }
    }
}

impl RenderSurface for TopomapPanel {
    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::SpatialField(frame) => {
                self.time = frame.time;
                if self.field_index != Some(frame.time_index) {
                    self.field = Some(interpolate_field(
                        &self.positions,
                        &frame.values,
                        self.geometry,
                        self.settings.resolution,
                    ));
                    self.field_index = Some(frame.time_index);
                    self.texture_dirty = true;
                }
            }
            RenderCommand::MarkerColors(colors) => self.marker_colors = colors.clone(),
            _ => {}
        }
    }
}

impl Panel for TopomapPanel {
    fn name(&self) -> &'static str {
        "Topomap"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, events: &mut Vec<ViewerEvent>) {
        self.upload_texture(ui);
        let text_color = ui.visuals().text_color();

        ui.label(format!("Topomap at {:.3} s", self.time));
        let avail = ui.available_size();
        let bar_space = if self.show_colorbar {
            COLORBAR_WIDTH + COLORBAR_GAP
        } else {
            0.0
        };
        let side = (avail.x - bar_space).min(avail.y).max(80.0);
        let (rect, response) = ui.allocate_exact_size(vec2(side + bar_space, side), Sense::click());
        let painter = ui.painter_at(rect);

        let center = pos2(rect.left() + side / 2.0, rect.center().y);
        let scale = side / 2.0 * HEAD_FILL;

        if let Some(tex) = self.texture.as_ref() {
            let field_rect = Rect::from_center_size(center, vec2(2.0 * scale, 2.0 * scale));
            painter.image(
                tex.id(),
                field_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        self.paint_head(&painter, center, scale);

        // Pick tolerance in position units
        let tolerance = self.settings.marker_radius as f64 / scale as f64 * self.geometry.radius;
        self.hovered = response
            .hover_pos()
            .and_then(|p| nearest_marker(&self.positions, self.from_screen(center, scale, p), tolerance));

        let r = self.settings.marker_radius;
        for (i, p) in self.positions.iter().enumerate() {
            let pos = self.to_screen(center, scale, *p);
            let c = self
                .marker_colors
                .get(i)
                .copied()
                .unwrap_or(crate::color_scheme::UNSELECTED_COLOR);
            let fill = Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), self.settings.marker_alpha);
            painter.circle_filled(pos, r, fill);
            let ring = if self.hovered == Some(i) {
                Stroke::new(2.0, text_color)
            } else {
                Stroke::new(1.0, Color32::BLACK)
            };
            painter.circle_stroke(pos, r, ring);
            if self.show_labels {
                painter.text(
                    pos2(pos.x, pos.y + r + 1.0),
                    Align2::CENTER_TOP,
                    &self.names[i],
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        }

        if self.show_colorbar {
            let bar = Rect::from_min_size(
                pos2(rect.left() + side + 8.0, center.y - scale),
                vec2(COLORBAR_WIDTH, 2.0 * scale),
            );
            self.paint_colorbar(&painter, bar, text_color);
        }

        if self.hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = self.from_screen(center, scale, pos);
                if let Some(i) = nearest_marker(&self.positions, p, tolerance) {
                    events.push(ViewerEvent::MarkerPicked(i));
                }
            }
        }
    }
}
