use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LOGO: [&str; 4] = [
    r"  ___ ___  ___  ___   _____  _____ _    ___  ___ ___ ___ ",
    r" / __/ _ \|   \| __| | __\ \/ / _ \ |  / _ \| _ \ __| _ \",
    r"| (_| (_) | |) | _|  | _| >  <|  _/ |_| (_) |   / _||   /",
    r" \___\___/|___/|___| |___/_/\_\_| |____\___/|_|_\___|_|_\",
];

/// Shown before sign-in, and again after signing out.
pub struct Landing<'a> {
    pub theme: &'a Theme,
    pub status: Option<&'a str>,
}

impl Widget for Landing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.header_active)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" CODE EXPLORER ", self.theme.header_logo),
            Span::raw(" - Understand any codebase with AI"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", self.theme.footer_segment_key),
            Span::raw(" to sign in"),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Forgot your password? Press "),
            Span::styled("f", self.theme.footer_segment_key),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("q", self.theme.footer_segment_key),
            Span::raw(" or "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" to quit"),
        ]));

        if let Some(status) = self.status {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(status, self.theme.status_warn)));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

        let logo_height = 14;
        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(logo_height / 2),
            width: area.width,
            height: logo_height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            paragraph.render(centered_area, buf);
        }
    }
}
