//! Help overlay listing the key bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme::accent_bold())),
        Line::from(""),
    ];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:>16}  "), theme::accent()),
            Span::styled(desc, theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc or ? to close",
        theme::muted(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(Span::styled(" Help ", theme::panel_title(true)));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
