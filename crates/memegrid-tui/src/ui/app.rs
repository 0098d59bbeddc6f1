use super::{
    detail_modal::render_detail_modal,
    footer::render_footer,
    grid::{move_cursor, render_grid, GridParams, Step},
    header::{render_header, HeaderParams},
    notice::render_notice,
};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use memegrid_core::{
    error::LoadError,
    fetch::{load_memes, HttpFetcher},
    models::MemeRecord,
    presenter::{Phase, Presenter},
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Terminal},
    widgets::{Block, Borders},
};
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, info, warn};

type LoadResult = Result<Vec<MemeRecord>, LoadError>;

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    presenter: Presenter,
    cursor: usize,
    columns: usize,
    loaded_at: Option<DateTime<Local>>,
    // One receiver per mount; replacing it drops any stale result.
    pending: Option<mpsc::UnboundedReceiver<LoadResult>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let theme = Theme::new(settings.theme);
        Self {
            should_quit: false,
            theme,
            settings,
            presenter: Presenter::new(),
            cursor: 0,
            columns: 1,
            loaded_at: None,
            pending: None,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.mount();
        while !self.should_quit {
            self.drain_pending();
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Fresh screen: new presenter, one fetch in the background.
    fn mount(&mut self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = HttpFetcher::new(self.settings.endpoint.clone());
        info!(endpoint = %fetcher.endpoint(), "mounting meme grid");

        tokio::spawn(async move {
            let result = load_memes(&fetcher).await;
            if tx.send(result).is_err() {
                debug!("screen was remounted, discarding stale load result");
            }
        });

        self.attach(rx);
    }

    /// Reset the screen and listen on `rx` only. Dropping the old receiver
    /// makes any earlier load's send fail.
    fn attach(&mut self, rx: mpsc::UnboundedReceiver<LoadResult>) {
        self.presenter = Presenter::new();
        self.cursor = 0;
        self.loaded_at = None;
        self.pending = Some(rx);
    }

    fn drain_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.apply(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("load task ended without sending a result");
                self.pending = None;
                self.apply(Err(LoadError::Interrupted));
            }
        }
    }

    fn apply(&mut self, result: LoadResult) {
        let succeeded = result.is_ok();
        self.presenter.settle(result);
        if succeeded {
            self.loaded_at = Some(Local::now());
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut columns = self.columns;

        terminal.draw(|frame| {
            let background = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));

            let area = frame.size();
            frame.render_widget(background, area);

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                HeaderParams {
                    theme: &self.theme,
                    phase: self.presenter.phase(),
                    count: self.presenter.memes().len(),
                    loaded_at: self.loaded_at,
                    endpoint: &self.settings.endpoint,
                },
            );

            columns = render_grid(
                frame,
                app_chunks[1],
                GridParams {
                    theme: &self.theme,
                    phase: self.presenter.phase(),
                    memes: self.presenter.memes(),
                    cursor: self.cursor,
                },
            );

            render_footer(
                frame,
                app_chunks[2],
                &self.theme,
                self.presenter.detail().is_some(),
            );

            if let Some(meme) = self.presenter.detail() {
                render_detail_modal(frame, meme, &self.theme);
            }
            if let Some(notice) = self.presenter.notice() {
                render_notice(frame, notice, &self.theme);
            }
        })?;

        self.columns = columns;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.presenter.notice().is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.presenter.acknowledge_error(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.presenter.phase() == Phase::DetailShown {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.presenter.dismiss_detail();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => {
                if self.presenter.phase() != Phase::Loading {
                    self.mount();
                }
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                if let Err(err) = self.settings.save_theme() {
                    warn!(error = %err, "could not persist theme");
                }
            }
            KeyCode::Enter => {
                if let Some(meme) = self.presenter.select(self.cursor) {
                    debug!(id = %meme.id, "opened meme detail");
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.step(Step::Left),
            KeyCode::Right | KeyCode::Char('l') => self.step(Step::Right),
            KeyCode::Up | KeyCode::Char('k') => self.step(Step::Up),
            KeyCode::Down | KeyCode::Char('j') => self.step(Step::Down),
            _ => {}
        }
    }

    fn step(&mut self, step: Step) {
        self.cursor = move_cursor(
            self.cursor,
            self.presenter.memes().len(),
            self.columns,
            step,
        );
    }
}
