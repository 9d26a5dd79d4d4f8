use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct OverlayComponent;

impl Component for OverlayComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(index) = state.gallery.overlays().attached() else {
            return;
        };
        let Some(entry) = state.gallery.overlays().get(index) else {
            return;
        };
        let nav = state.gallery.overlays().nav();

        let popup = centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(entry.panel.email.clone()),
            Line::from(entry.panel.city.clone()),
            Line::styled("─".repeat(24), Style::default().fg(Color::DarkGray)),
            Line::from(entry.panel.phone.clone()),
            Line::from(entry.panel.address.clone()),
            Line::from(format!("Birthday: {}", entry.panel.birthday)),
            Line::from(""),
            Line::styled(
                entry.panel.picture_url.clone(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];

        // Inert controls stay on screen, dimmed, so the user can see
        // there is nothing further in that direction.
        if let Some(nav) = nav {
            lines.push(Line::from(vec![
                nav_span("← Prev", nav.prev.is_some()),
                Span::raw("     "),
                nav_span("Next →", nav.next.is_some()),
            ]));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", entry.panel.name))
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            );
        f.render_widget(widget, popup);
    }
}

fn nav_span(label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            label.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray))
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
