//! Parameter bar and status line

use am_scope::ModulationParams;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::{Field, Mode, Status};

/// Render the five parameters with the selected one highlighted, plus N and Nyquist.
pub fn render_params(
    frame: &mut Frame,
    area: Rect,
    params: &ModulationParams,
    samples: usize,
    selected: Field,
    mode: &Mode,
) {
    let block = Block::default().title(" amscope ").borders(Borders::ALL);

    let mut spans = Vec::with_capacity(Field::ALL.len() + 3);
    for field in Field::ALL {
        let text = match mode {
            Mode::Edit(buffer) if field == selected => {
                format!(" {}: {}_ ", field.label(), buffer)
            }
            _ => format!(" {}: {} {} ", field.label(), field.get(params), field.unit()),
        };
        let style = if field == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!(" N: {}  Nyquist: {} Hz ", samples, params.nyquist()),
        Style::default().fg(Color::DarkGray),
    ));
    if params.is_aliased() {
        spans.push(Span::styled(
            " ALIASED ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the status message, or the key help when there is none.
pub fn render_status(frame: &mut Frame, area: Rect, status: &Status, mode: &Mode) {
    let (text, style) = if !status.message.is_empty() {
        let color = if status.is_error { Color::Red } else { Color::Green };
        (format!(" {}", status.message), Style::default().fg(color))
    } else {
        let help = match mode {
            Mode::Browse => {
                " [Tab/↑↓] Select  [←→/+-] Adjust  [E/Enter] Edit  [R] Reset  [Q] Quit"
            }
            Mode::Edit(_) => " [Enter] Apply  [Esc] Cancel",
        };
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
