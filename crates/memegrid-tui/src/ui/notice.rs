use super::{modal_area, ModalSize};
use memegrid_core::{
    presenter::Notice,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
};

const NOTICE_SIZE: ModalSize = ModalSize {
    width_ratio: 0.5,
    height_ratio: 0.25,
    min_width: 30,
    min_height: 6,
    max_width: 60,
    max_height: 8,
};

/// The dismissible load-failure alert.
pub fn render_notice(frame: &mut Frame, notice: Notice, theme: &Theme) {
    let area = modal_area(frame.size(), NOTICE_SIZE);
    frame.render_widget(Clear, area);

    let block = Block::new()
        .title(
            Title::from(Span::styled(
                format!(" {} ", notice.title),
                theme.ratatui_style(Element::Error),
            ))
            .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Error));

    let lines = vec![
        Line::from(Span::styled(notice.message, theme.text_style())),
        Line::default(),
        Line::from(Span::styled("[ENTER] OK", theme.muted_style())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
