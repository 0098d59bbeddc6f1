use super::{modal_area, ModalSize};
use memegrid_core::{
    models::MemeRecord,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
};

const DETAIL_SIZE: ModalSize = ModalSize {
    width_ratio: 0.8,
    height_ratio: 0.5,
    min_width: 30,
    min_height: 10,
    max_width: 90,
    max_height: 14,
};

pub fn render_detail_modal(frame: &mut Frame, meme: &MemeRecord, theme: &Theme) {
    let area = modal_area(frame.size(), DETAIL_SIZE);
    frame.render_widget(Clear, area);

    let block = Block::new()
        .title(
            Title::from(Span::styled(format!(" {} ", meme.name), theme.title_style()))
                .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Modal));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Action Text
        ])
        .split(inner_area);

    let field = |label: &str, value: String, style| {
        Line::from(vec![
            Span::styled(
                format!("{:<12}", label),
                theme.ratatui_style(Element::Modal).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, style),
        ])
    };

    let lines = vec![
        field("Name:", meme.name.clone(), theme.text_style()),
        field("Image:", meme.image_url.clone(), theme.text_style()),
        field("Size:", meme.dimensions(), theme.text_style()),
        field("Text boxes:", meme.box_count.to_string(), theme.text_style()),
        field("Id:", meme.id.clone(), theme.muted_style()),
    ];
    let fields = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(fields, chunks[0]);

    let action_paragraph = Paragraph::new("[ESC] Close")
        .alignment(Alignment::Center)
        .style(theme.muted_style());
    frame.render_widget(action_paragraph, chunks[1]);
}
