//! Table of what the selected electrode sites are associated with.

use std::collections::HashMap;

use egui::{Color32, Ui};
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use super::panel_trait::{Panel, PanelState};
use crate::data::descriptions::DescriptionRow;
use crate::events::ViewerEvent;
use crate::render::{RenderCommand, RenderSurface};

/// One table line. The channel name is only set on the first line of a channel.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    channel: Option<String>,
    text: String,
}

fn flatten(rows: &[DescriptionRow]) -> Vec<Line> {
    let mut out = Vec::new();
    for row in rows {
        for (i, text) in row.text.lines().enumerate() {
            out.push(Line {
                channel: (i == 0).then(|| row.channel.clone()),
                text: text.to_string(),
            });
        }
    }
    out
}

pub struct DescriptionsPanel {
    state: PanelState,
    rows: Vec<DescriptionRow>,
    lines: Vec<Line>,
    colors: HashMap<String, Color32>,
}

impl DescriptionsPanel {
    /// `colors` maps channel names to their selection color.
    pub fn new(colors: HashMap<String, Color32>) -> Self {
        Self {
            state: PanelState::default(),
            rows: Vec::new(),
            lines: Vec::new(),
            colors,
        }
    }

    pub fn rows(&self) -> &[DescriptionRow] {
        &self.rows
    }
}

impl RenderSurface for DescriptionsPanel {
    fn apply(&mut self, command: &RenderCommand) {
        if let RenderCommand::Descriptions(rows) = command {
            self.rows = rows.clone();
            self.lines = flatten(rows);
        }
    }
}

impl Panel for DescriptionsPanel {
    fn name(&self) -> &'static str {
        "Descriptions"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, _events: &mut Vec<ViewerEvent>) {
        ui.strong("Electrode descriptions");
        if self.lines.is_empty() {
            ui.weak("Select electrodes on the topomap to see their descriptions.");
            return;
        }

        struct DescriptionsDelegate<'a> {
            lines: &'a [Line],
            colors: &'a HashMap<String, Color32>,
        }
        impl<'a> TableDelegate for DescriptionsDelegate<'a> {
            fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
                let text = match cell.col_range.start {
                    0 => "Electrode",
                    _ => "Description",
                };
                ui.add_space(4.0);
                ui.strong(text);
            }
            fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
                let Some(line) = self.lines.get(cell.row_nr as usize) else {
                    return;
                };
                ui.add_space(4.0);
                match cell.col_nr {
                    0 => {
                        if let Some(name) = line.channel.as_deref() {
                            let color = self.colors.get(name).copied().unwrap_or(Color32::GRAY);
                            ui.colored_label(color, egui::RichText::new(name).strong());
                        }
                    }
                    _ => {
                        ui.add(egui::Label::new(line.text.as_str()).truncate())
                            .on_hover_text(line.text.as_str());
                    }
                }
            }
        }

        let mut delegate = DescriptionsDelegate {
            lines: &self.lines,
            colors: &self.colors,
        };
        let desc_w = (ui.available_width() - 90.0).max(160.0);
        let cols = vec![egui_table::Column::new(90.0), egui_table::Column::new(desc_w)];
        Table::new()
            .id_salt("electrode_descriptions_table")
            .num_rows(self.lines.len() as u64)
            .columns(cols)
            .headers(vec![EgHeaderRow::new(24.0)])
            .show(ui, &mut delegate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_name_only_on_first_line() {
        let rows = vec![
            DescriptionRow {
                channel: "Fp1".into(),
                text: "• Attention\n• Working memory".into(),
            },
            DescriptionRow {
                channel: "Cz".into(),
                text: "• Movement".into(),
            },
        ];
        let lines = flatten(&rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].channel.as_deref(), Some("Fp1"));
        assert_eq!(lines[1].channel, None);
        assert_eq!(lines[1].text, "• Working memory");
        assert_eq!(lines[2].channel.as_deref(), Some("Cz"));
    }
}
