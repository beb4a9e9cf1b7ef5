use ratatui::style::{Color, Modifier, Style};

const PRIMARY: Color = Color::Rgb(0, 255, 255);
const SECONDARY: Color = Color::Rgb(255, 0, 255);
const ACCENT: Color = Color::Rgb(0, 255, 136);
const DARK: Color = Color::Rgb(1, 1, 15);
const SURFACE: Color = Color::Rgb(18, 18, 36);
const MUTED: Color = Color::Rgb(140, 140, 160);
const WARN: Color = Color::Rgb(250, 204, 21);

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_active: Style,
    pub header_item: Style,

    pub sidebar_active: Style,
    pub sidebar_item: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub toggle_on: Style,
    pub toggle_off: Style,
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(40, 70, 80)),
            border_focus: Style::default().fg(PRIMARY),

            header_logo: Style::default()
                .bg(PRIMARY)
                .fg(DARK)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(SURFACE).fg(Color::White),
            header_active: Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            header_item: Style::default().fg(MUTED),

            sidebar_active: Style::default()
                .fg(PRIMARY)
                .bg(Color::Rgb(0, 50, 60))
                .add_modifier(Modifier::BOLD),
            sidebar_item: Style::default().fg(MUTED),

            footer: Style::default().bg(SURFACE).fg(MUTED),
            footer_segment_key: Style::default().fg(WARN).add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().fg(Color::White),

            status_ready: Style::default().bg(ACCENT).fg(DARK).add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(ACCENT),
            status_warn: Style::default().fg(WARN),

            list_selected: Style::default()
                .fg(PRIMARY)
                .bg(Color::Rgb(0, 40, 50))
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(Color::Rgb(210, 210, 220)),
            toggle_on: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            toggle_off: Style::default().fg(SECONDARY),
            dimmed: Style::default().fg(MUTED).add_modifier(Modifier::DIM),
        }
    }
}
