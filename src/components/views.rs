//! Bodies of the six dashboard views.

use crate::app::state::chat::QUICK_QUESTIONS;
use crate::app::state::explorer::TREE;
use crate::app::state::pulls::{PullStatus, PULL_REQUESTS};
use crate::app::state::{ChatState, ExplorerState, PullsState, SettingsRow, SettingsState, ShellState};
use crate::domain::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Number of body lines for the active route. Bounds the content scroll.
#[must_use]
pub fn body_len(shell: &ShellState) -> usize {
    body_lines(shell, &Theme::default()).len()
}

pub struct MainView<'a> {
    pub shell: &'a ShellState,
    pub theme: &'a Theme,
}

impl Widget for MainView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let route = self.shell.route;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} {} ", route.glyph(), route.title()), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        Paragraph::new(body_lines(self.shell, self.theme))
            .block(block)
            .scroll((self.shell.content_scroll, 0))
            .render(area, buf);
    }
}

fn body_lines(shell: &ShellState, theme: &Theme) -> Vec<Line<'static>> {
    match shell.route {
        Route::Dashboard => dashboard(theme),
        Route::Explorer => explorer(&shell.explorer, theme),
        Route::Search => search(&shell.chat, theme),
        Route::Map => map(theme),
        Route::Pulls => pulls(&shell.pulls, theme),
        Route::Settings => settings(&shell.settings, theme),
    }
}

fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), theme.header_active))
}

fn plain(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(format!("   {text}"), theme.list_item))
}

fn muted(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(format!("   {text}"), theme.dimmed))
}

fn stat(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {label:<16}"), theme.header_item),
        Span::styled(value.to_string(), theme.toggle_on),
    ])
}

fn dashboard(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading("Overview", theme),
        stat("Repositories", "3", theme),
        stat("Embeddings", "1,247", theme),
        stat("Queries", "89", theme),
        stat("Pull Requests", "7", theme),
        Line::from(""),
        heading("Quick Actions", theme),
        muted("Ctrl+K  open the command palette", theme),
        muted("/       search the codebase", theme),
        Line::from(""),
        heading("Recent Activity", theme),
    ];
    for (what, detail, when) in [
        ("Repository indexed", "frontend-app", "2 minutes ago"),
        ("Query processed", "How does authentication work?", "15 minutes ago"),
        ("PR analyzed", "#42 Add new authentication system", "1 hour ago"),
        ("Documentation generated", "src/components", "3 hours ago"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("   {what:<26}"), theme.list_item),
            Span::styled(format!("{detail:<36}"), theme.header_item),
            Span::styled(when.to_string(), theme.dimmed),
        ]));
    }
    lines
}

fn explorer(state: &ExplorerState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), heading("Repositories", theme)];
    for repo in &state.repositories {
        lines.push(plain(repo, theme));
    }
    lines.extend([Line::from(""), heading("Files", theme)]);
    let selected = state.selected_file();
    for entry in &TREE {
        let indent = "  ".repeat(entry.depth);
        let line = if entry.is_dir {
            plain(&format!("{indent}{}/", entry.name), theme)
        } else if entry.name == selected {
            Line::from(Span::styled(
                format!(" > {indent}{}", entry.name),
                theme.list_selected,
            ))
        } else {
            plain(&format!("{indent}{}", entry.name), theme)
        };
        lines.push(line);
    }
    lines.extend([
        Line::from(""),
        heading(&format!("Documentation: {selected}"), theme),
        match state.doc(selected) {
            Some(doc) => plain(doc, theme),
            None => muted("No documentation yet. Press g to generate it.", theme),
        },
        Line::from(""),
        muted("i import repository   e edit documentation   g generate documentation", theme),
    ]);
    lines
}

fn search(chat: &ChatState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), heading("Ask about your codebase", theme)];
    if chat.messages.is_empty() {
        lines.push(muted("Start a conversation. Press / to type a question.", theme));
    }
    for message in &chat.messages {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("   > ", theme.footer_segment_key),
            Span::styled(message.question.clone(), theme.list_item),
            Span::styled(format!("  {}", message.timestamp), theme.dimmed),
        ]));
        match &message.answer {
            Some(answer) => lines.push(Line::from(vec![
                Span::styled("   \u{2022} ", theme.toggle_on),
                Span::styled(answer.clone(), theme.header_item),
            ])),
            None => lines.push(muted("AI is thinking...", theme)),
        }
    }
    lines.push(Line::from(""));
    lines.push(heading("Quick questions", theme));
    for question in QUICK_QUESTIONS {
        lines.push(plain(question, theme));
    }
    lines
}

fn map(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), heading("Project Module Map", theme)];
    for (module, files, deps) in [
        ("Authentication", 8, "User Management, API Layer"),
        ("User Management", 12, "Database"),
        ("API Layer", 15, "Services, Database"),
        ("Database", 6, "-"),
        ("Services", 10, "Utilities"),
        ("Utilities", 9, "-"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("   \u{25c8} {module:<18}"), theme.list_item),
            Span::styled(format!("{files:>3} files  "), theme.header_item),
            Span::styled(format!("\u{2192} {deps}"), theme.dimmed),
        ]));
    }
    lines
}

fn pulls(state: &PullsState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading("Pull Requests", theme),
        muted("Review and manage pull requests with AI assistance", theme),
        Line::from(""),
    ];
    for (i, pr) in PULL_REQUESTS.iter().enumerate() {
        let selected = state.selected == Some(i);
        let marker = if selected { " > " } else { "   " };
        let title_style = if selected {
            theme.list_selected
        } else {
            theme.list_item
        };
        lines.push(Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(format!("#{:<4}", pr.number), theme.footer_segment_key),
            Span::styled(format!("{:<32}", pr.title), title_style),
            Span::styled(format!("{:<8}", pr.status), status_style(pr.status, theme)),
            Span::styled(
                format!("{} \u{00b7} {} \u{00b7} {} comments", pr.author, pr.created, pr.comments),
                theme.dimmed,
            ),
        ]));
    }
    lines.push(Line::from(""));

    let Some(pr) = state.selected_pull() else {
        lines.push(muted("Select a pull request to view details (j/k)", theme));
        return lines;
    };
    lines.extend([
        heading(&format!("Changes  #{}", pr.number), theme),
        Line::from(vec![
            Span::styled(format!("   +{}", pr.additions), theme.toggle_on),
            Span::styled(format!("  -{}", pr.deletions), theme.toggle_off),
        ]),
    ]);
    for diff in DIFF {
        let style = match diff.chars().next() {
            Some('+') => theme.toggle_on,
            Some('-') => theme.toggle_off,
            _ => theme.dimmed,
        };
        lines.push(Line::from(Span::styled(format!("   {diff}"), style)));
    }
    lines.extend([
        Line::from(""),
        heading("AI Analysis", theme),
        plain("Summary", theme),
        muted(
            "This PR updates the import path for the Button component to use the new UI component structure.",
            theme,
        ),
        plain("Suggestions", theme),
        muted("\u{2022} Consider updating other components to use the same import pattern", theme),
        muted("\u{2022} Add tests to verify the component still works correctly", theme),
        muted("\u{2022} Update documentation to reflect the new import structure", theme),
        Line::from(vec![
            Span::styled("   Risk Assessment  ", theme.header_item),
            Span::styled("Low Risk", theme.toggle_on),
        ]),
    ]);
    lines
}

const DIFF: [&str; 11] = [
    "@@ -1,7 +1,7 @@",
    " import React from 'react';",
    "-import { Button } from './Button';",
    "+import { Button } from '@/components/ui/button';",
    " ",
    " export function LoginForm() {",
    "   return (",
    "     <form>",
    "-      <Button type=\"submit\">Login</Button>",
    "+      <Button type=\"submit\" variant=\"primary\">Login</Button>",
    "     </form>",
];

fn status_style(status: PullStatus, theme: &Theme) -> Style {
    match status {
        PullStatus::Open => theme.status_warn,
        PullStatus::Merged => theme.toggle_on,
        PullStatus::Closed => theme.toggle_off,
    }
}

fn settings(state: &SettingsState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading("Configure your AI codebase explorer", theme),
        Line::from(""),
    ];
    for (i, row) in SettingsRow::ALL.into_iter().enumerate() {
        let selected = i == state.selected;
        let label_style = if selected {
            theme.list_selected
        } else {
            theme.list_item
        };
        let marker = if selected { " > " } else { "   " };
        let value = match row {
            SettingsRow::SimilarityThreshold => Span::styled(
                format!("\u{25c2} {:.1} \u{25b8}", state.similarity_threshold()),
                theme.footer_segment_key,
            ),
            SettingsRow::ApiCredentials => Span::styled("[ manage ]", theme.header_item),
            _ => toggle_span(state.toggle_value(row).unwrap_or(false), theme),
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<24}", row.label()), label_style),
            value,
        ]));
    }
    lines.extend([
        Line::from(""),
        heading("Usage", theme),
        stat("API calls", "2,847  (68% of monthly limit)", theme),
        stat("Storage", "1.2 GB  (24% of 5GB limit)", theme),
        stat("Embeddings", "15,432  (89% efficiency rate)", theme),
    ]);
    lines
}

fn toggle_span(on: bool, theme: &Theme) -> Span<'static> {
    if on {
        Span::styled("[ on  ]", theme.toggle_on)
    } else {
        Span::styled("[ off ]", theme.toggle_off)
    }
}
