use memegrid_core::{
    models::MemeRecord,
    presenter::Phase,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Narrowest a tile may get before the grid drops a column.
pub const MIN_TILE_WIDTH: u16 = 24;
/// Border plus two caption lines.
pub const TILE_HEIGHT: u16 = 4;
const CAPTION_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
}

/// As many columns as fit at [`MIN_TILE_WIDTH`], but always at least one.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / MIN_TILE_WIDTH).max(1))
}

/// Move the cursor within a grid of `len` items laid out in `columns` columns.
pub fn move_cursor(cursor: usize, len: usize, columns: usize, step: Step) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let cursor = cursor.min(len - 1);

    match step {
        Step::Left => cursor.saturating_sub(1),
        Step::Right => (cursor + 1).min(len - 1),
        Step::Up => cursor.checked_sub(columns).unwrap_or(cursor),
        Step::Down => {
            let below = cursor + columns;
            if below < len {
                below
            } else {
                cursor
            }
        }
    }
}

/// Wrap a meme name to at most two lines of `width` cells, ending in `…` when cut.
pub fn caption_lines(name: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(name, width);
    let truncated = wrapped.len() > CAPTION_LINES;

    let mut lines: Vec<String> = wrapped
        .into_iter()
        .take(CAPTION_LINES)
        .map(|line| line.into_owned())
        .collect();

    if truncated {
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }
    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// First grid row to draw so that the cursor row stays on screen.
fn first_visible_row(cursor: usize, columns: usize, visible_rows: usize) -> usize {
    let cursor_row = cursor / columns.max(1);
    (cursor_row + 1).saturating_sub(visible_rows.max(1))
}

pub struct GridParams<'a> {
    pub theme: &'a Theme,
    pub phase: Phase,
    pub memes: &'a [MemeRecord],
    pub cursor: usize,
}

/// Draw the grid and return the column count used, for cursor navigation.
pub fn render_grid(frame: &mut Frame, area: Rect, params: GridParams) -> usize {
    let columns = grid_columns(area.width);

    if params.memes.is_empty() {
        let (text, element) = match params.phase {
            Phase::Loading => ("Loading memes...", Element::Pending),
            Phase::Failed => ("Nothing to show. Press [R] to reload.", Element::Muted),
            Phase::Loaded | Phase::DetailShown => ("No memes today.", Element::Muted),
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(params.theme.ratatui_style(element));
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
        frame.render_widget(paragraph, middle);
        return columns;
    }

    let tile_width = area.width / columns as u16;
    let visible_rows = usize::from((area.height / TILE_HEIGHT).max(1));
    let top = first_visible_row(params.cursor, columns, visible_rows);

    for (index, meme) in params
        .memes
        .iter()
        .enumerate()
        .skip(top * columns)
        .take(visible_rows * columns)
    {
        let row = (index / columns - top) as u16;
        let col = (index % columns) as u16;
        let tile = Rect::new(
            area.x + col * tile_width,
            area.y + row * TILE_HEIGHT,
            tile_width,
            TILE_HEIGHT,
        )
        .intersection(area);
        if tile.height < TILE_HEIGHT {
            continue;
        }

        let focused = index == params.cursor;
        let style = if focused {
            params.theme.ratatui_style(Element::TileFocused)
        } else {
            params.theme.ratatui_style(Element::Tile)
        };
        let block = Block::new().borders(Borders::ALL).style(style);
        let inner = block.inner(tile);

        let caption: Vec<Line> = caption_lines(&meme.name, usize::from(inner.width))
            .into_iter()
            .map(Line::from)
            .collect();
        let text_style = if focused {
            style
        } else {
            params.theme.text_style()
        };
        let paragraph = Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(text_style);

        frame.render_widget(block, tile);
        frame.render_widget(paragraph, inner);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn columns_adapt_to_width() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(23), 1);
        assert_eq!(grid_columns(48), 2);
        assert_eq!(grid_columns(120), 5);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        // 7 items in 3 columns:
        // 0 1 2
        // 3 4 5
        // 6
        assert_eq!(move_cursor(0, 7, 3, Step::Left), 0);
        assert_eq!(move_cursor(2, 7, 3, Step::Right), 3);
        assert_eq!(move_cursor(6, 7, 3, Step::Right), 6);
        assert_eq!(move_cursor(1, 7, 3, Step::Up), 1);
        assert_eq!(move_cursor(4, 7, 3, Step::Up), 1);
        assert_eq!(move_cursor(3, 7, 3, Step::Down), 6);
        assert_eq!(move_cursor(4, 7, 3, Step::Down), 4);
        assert_eq!(move_cursor(0, 0, 3, Step::Down), 0);
    }

    #[test]
    fn short_caption_is_untouched() {
        assert_eq!(caption_lines("Two Buttons", 20), vec!["Two Buttons"]);
    }

    #[test]
    fn long_caption_is_cut_to_two_lines() {
        let lines = caption_lines("Distracted Boyfriend Looking At Another Girl", 12);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Distracted");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 12);
    }

    #[test]
    fn visible_row_follows_cursor() {
        assert_eq!(first_visible_row(0, 4, 3), 0);
        assert_eq!(first_visible_row(11, 4, 3), 0);
        assert_eq!(first_visible_row(12, 4, 3), 1);
        assert_eq!(first_visible_row(30, 4, 3), 5);
    }
}
