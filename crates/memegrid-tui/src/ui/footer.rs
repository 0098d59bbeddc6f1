use memegrid_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, detail_open: bool) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Tile));

    let inner_area = footer_block.inner(area);

    let content = if detail_open {
        Line::from(vec![
            Span::raw("[ESC]"),
            Span::styled(" Back to grid", theme.muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("[←↑↓→]"),
            Span::styled(" Move", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[ENTER]"),
            Span::styled(" Open", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[R]"),
            Span::styled("eload", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[T]"),
            Span::styled("heme", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[Q]"),
            Span::styled("uit", theme.muted_style()),
        ])
    }
    .alignment(Alignment::Center);

    let footer_paragraph = Paragraph::new(content).style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
