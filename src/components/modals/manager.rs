use crate::app::state::ShellState;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::api_credentials::ApiCredentialsBody;
use super::bulk_review::BulkReviewBody;
use super::command_palette::CommandPaletteModal;
use super::dialog::Dialog;
use super::edit_docs::EditDocsBody;
use super::help::HelpBody;
use super::helpers::dim_area;
use super::import::ImportBody;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub shell: &'a ShellState,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        if self.shell.has_overlay() {
            dim_area(buf, area);
        }

        // --- Dialogs ---
        Dialog {
            modal: &self.shell.help_modal,
            theme: self.theme,
            body: HelpBody { theme: self.theme },
        }
        .render(area, buf);

        Dialog {
            modal: &self.shell.api_modal,
            theme: self.theme,
            body: ApiCredentialsBody { theme: self.theme },
        }
        .render(area, buf);

        Dialog {
            modal: &self.shell.import_modal,
            theme: self.theme,
            body: ImportBody {
                theme: self.theme,
                explorer: &self.shell.explorer,
            },
        }
        .render(area, buf);

        Dialog {
            modal: &self.shell.docs_modal,
            theme: self.theme,
            body: EditDocsBody {
                theme: self.theme,
                explorer: &self.shell.explorer,
            },
        }
        .render(area, buf);

        Dialog {
            modal: &self.shell.bulk_modal,
            theme: self.theme,
            body: BulkReviewBody {
                theme: self.theme,
                pulls: &self.shell.pulls,
            },
        }
        .render(area, buf);

        // --- Command Palette ---
        if let Some(cp) = &self.shell.command_palette {
            CommandPaletteModal {
                theme: self.theme,
                state: cp,
            }
            .render(area, buf);
        }
    }
}
