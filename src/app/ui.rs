use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::landing::Landing;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::reset_password::ResetPasswordBody;
use crate::components::modals::{Dialog, ModalManager};
use crate::components::navbar::{self, Navbar};
use crate::components::sidebar::{self, Sidebar};
use crate::components::views::MainView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub body: Rect,
    pub footer: Rect,
    pub sidebar: Rect,
    pub navbar: Rect,
    pub content: Rect,
}

pub fn get_layout(area: Rect, sidebar_collapsed: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar::width(sidebar_collapsed)),
            Constraint::Min(0),
        ])
        .split(main[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(navbar::HEIGHT), Constraint::Min(0)])
        .split(body[1]);

    AppLayout {
        body: main[0],
        footer: main[1],
        sidebar: body[0],
        navbar: right[0],
        content: right[1],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app_state.theme;

    let Some(shell) = &app_state.shell else {
        let layout = get_layout(area, false);
        f.render_widget(
            Landing {
                theme,
                status: app_state.status_message.as_deref(),
            },
            layout.body,
        );
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
        let landing = &app_state.landing;
        if landing.forgot_modal.is_open() {
            dim_area(f.buffer_mut(), area);
            f.render_widget(
                Dialog {
                    modal: &landing.forgot_modal,
                    theme,
                    body: ResetPasswordBody { theme, landing },
                },
                area,
            );
        }
        return;
    };

    let layout = get_layout(area, shell.sidebar_collapsed);

    f.render_widget(
        Sidebar {
            active: shell.route,
            collapsed: shell.sidebar_collapsed,
            theme,
        },
        layout.sidebar,
    );
    f.render_widget(Navbar { shell, theme }, layout.navbar);
    f.render_widget(MainView { shell, theme }, layout.content);
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // Overlays cover the whole screen, footer included.
    f.render_widget(ModalManager { theme, shell }, area);
}
