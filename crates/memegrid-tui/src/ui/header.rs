use chrono::{DateTime, Local};
use memegrid_core::{
    presenter::{Phase, SCREEN_TITLE},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub struct HeaderParams<'a> {
    pub theme: &'a Theme,
    pub phase: Phase,
    pub count: usize,
    pub loaded_at: Option<DateTime<Local>>,
    pub endpoint: &'a str,
}

pub fn render_header(frame: &mut Frame, area: Rect, params: HeaderParams) {
    let title = Title::from(Span::styled(
        format!(" {} ", SCREEN_TITLE),
        params.theme.title_style(),
    ))
    .alignment(Alignment::Left);

    let (status_text, element) = build_status(params.phase, params.count, params.loaded_at);

    let line = Line::from(vec![
        Span::styled(status_text, params.theme.ratatui_style(element)),
        Span::styled(format!("  {}", params.endpoint), params.theme.muted_style()),
    ]);

    let header_paragraph = Paragraph::new(line)
        .style(params.theme.text_style())
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(params.theme.ratatui_style(Element::Tile)),
        );

    frame.render_widget(header_paragraph, area);
}

fn build_status(
    phase: Phase,
    count: usize,
    loaded_at: Option<DateTime<Local>>,
) -> (String, Element) {
    match phase {
        Phase::Loading => ("Loading...".to_string(), Element::Pending),
        Phase::Failed => ("Loading failed".to_string(), Element::Error),
        Phase::Loaded | Phase::DetailShown => {
            let noun = if count == 1 { "meme" } else { "memes" };
            let text = match loaded_at {
                Some(at) => format!("{} {} :: loaded {}", count, noun, at.format("%H:%M:%S")),
                None => format!("{} {}", count, noun),
            };
            (text, Element::Ready)
        }
    }
}
