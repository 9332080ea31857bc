use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
};

use crate::bootstrap::{DependencyPolicy, DependencyStatus};
use crate::utils::display::{first_line, status_indicator, truncate_path_for_display};

use super::{StartupView, UiContext};

/// Widest path shown before truncation kicks in.
const MAX_PATH_WIDTH: usize = 60;

/// Renders the startup screen: dependency table plus key help.
pub fn ui(frame: &mut Frame, view: &StartupView<'_>, ctx: &UiContext) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // ----- Header -----
    let ready = view.statuses.iter().filter(|s| s.is_ready()).count();
    let policy = match view.policy {
        DependencyPolicy::Strict => "strict",
        DependencyPolicy::Lenient => "lenient",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled("VidForge", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  -  {}/{} tools ready  -  dependency policy: {}",
            ready,
            view.statuses.len(),
            policy
        )),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, main_layout[0]);

    // ----- Dependencies -----
    let rows: Vec<Row> = view
        .statuses
        .iter()
        .map(|status| dependency_row(status, view.use_ascii))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["", "Tool", "Source", "Path"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Dependencies").borders(Borders::ALL));
    frame.render_widget(table, main_layout[1]);

    // ----- Help text (keyboard shortcuts) -----
    let help = Paragraph::new("Keys: [F1] Help | [q] Quit")
        .block(
            Block::default()
                .title("Keyboard Controls")
                .borders(Borders::ALL),
        )
        .alignment(Alignment::Center);
    frame.render_widget(help, main_layout[2]);

    if ctx.show_help {
        render_help_overlay(frame);
    }
}

fn dependency_row(status: &DependencyStatus, use_ascii: bool) -> Row<'static> {
    let indicator = status_indicator(status.is_ready(), use_ascii);

    match &status.outcome {
        Ok(resolved) => Row::new(vec![
            indicator.to_string(),
            status.tool.clone(),
            resolved.location.to_string(),
            truncate_path_for_display(&resolved.path.to_string_lossy(), MAX_PATH_WIDTH),
        ])
        .style(Style::default().fg(Color::Green)),
        Err(message) => Row::new(vec![
            indicator.to_string(),
            status.tool.clone(),
            "missing".to_string(),
            first_line(message).to_string(),
        ])
        .style(Style::default().fg(Color::Red)),
    }
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_width = 44.min(area.width);
    let popup_height = 10.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from(Span::styled(
            "APPLICATION",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  F1    Toggle this help"),
        Line::from("  q     Quit"),
        Line::from(""),
        Line::from("  Missing tools are looked up again on"),
        Line::from("  the next start."),
        Line::from(""),
        Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_widget = Paragraph::new(help_lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help_widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::resolver::{Location, Resolved};
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;

    fn statuses() -> Vec<DependencyStatus> {
        vec![
            DependencyStatus {
                tool: "yt-dlp".to_string(),
                outcome: Ok(Resolved {
                    path: PathBuf::from("/usr/bin/yt-dlp"),
                    location: Location::SystemPath,
                }),
            },
            DependencyStatus {
                tool: "ffmpeg".to_string(),
                outcome: Err(
                    "ffmpeg not found. Please install it:\n  macOS: brew install ffmpeg".to_string(),
                ),
            },
        ]
    }

    fn render(view: &StartupView<'_>, ctx: &UiContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 14)).unwrap();
        terminal.draw(|f| ui(f, view, ctx)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_each_dependency() {
        let statuses = statuses();
        let view = StartupView {
            statuses: &statuses,
            policy: DependencyPolicy::Lenient,
            use_ascii: true,
        };

        let screen = render(&view, &UiContext::default());

        assert!(screen.contains("1/2 tools ready"));
        assert!(screen.contains("dependency policy: lenient"));
        assert!(screen.contains("[OK]"));
        assert!(screen.contains("/usr/bin/yt-dlp"));
        assert!(screen.contains("PATH"));
        assert!(screen.contains("[!!]"));
        assert!(screen.contains("ffmpeg not found. Please install it:"));
        // Only the first line of a failure fits in a row
        assert!(!screen.contains("brew install ffmpeg"));
    }

    #[test]
    fn test_help_overlay_is_drawn_on_request() {
        let statuses = statuses();
        let view = StartupView {
            statuses: &statuses,
            policy: DependencyPolicy::Strict,
            use_ascii: true,
        };

        let screen = render(&view, &UiContext::default());
        assert!(!screen.contains("Toggle this help"));

        let screen = render(&view, &UiContext { show_help: true });
        assert!(screen.contains("Toggle this help"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let statuses = statuses();
        let view = StartupView {
            statuses: &statuses,
            policy: DependencyPolicy::Strict,
            use_ascii: false,
        };

        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| ui(f, &view, &UiContext { show_help: true }))
            .unwrap();
    }
}
