//! Screen state for the meme grid.
//!
//! The presenter owns the displayed list and the small amount of UI state
//! around it. It only changes through the named events below, so the
//! front-end can be as dumb as it likes.

use crate::error::LoadError;
use crate::fetch::{load_memes, MemeSource};
use crate::models::MemeRecord;
use tracing::{info, warn};

pub const SCREEN_TITLE: &str = "Epic Memes";
pub const NOTICE_TITLE: &str = "Loading Error";
pub const NOTICE_MESSAGE: &str = "There was a problem loading the Epic Meme data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Loaded,
    DetailShown,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub error_flag: bool,
    pub selected: Option<MemeRecord>,
    pub detail_visible: bool,
}

/// The generic alert shown for any load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Default)]
pub struct Presenter {
    phase: Phase,
    memes: Vec<MemeRecord>,
    ui: UiState,
}

impl Presenter {
    /// A freshly mounted screen, waiting on its one fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the mount-time load against `source` and settle with its outcome.
    pub async fn mount(&mut self, source: &dyn MemeSource) {
        let result = load_memes(source).await;
        self.settle(result);
    }

    /// The fetch has settled. Only the first settle of a mount counts.
    pub fn settle(&mut self, result: Result<Vec<MemeRecord>, LoadError>) {
        if self.phase != Phase::Loading {
            warn!(phase = ?self.phase, "ignoring settle outside of Loading");
            return;
        }

        match result {
            Ok(memes) => {
                info!(count = memes.len(), "meme grid loaded");
                self.memes = memes;
                self.phase = Phase::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "loading memes failed");
                self.memes.clear();
                self.ui.error_flag = true;
                self.phase = Phase::Failed;
            }
        }
    }

    /// Open the detail view for the meme at `index`.
    pub fn select(&mut self, index: usize) -> Option<&MemeRecord> {
        if self.phase != Phase::Loaded {
            return None;
        }
        let meme = self.memes.get(index)?.clone();

        self.ui.selected = Some(meme);
        self.ui.detail_visible = true;
        self.phase = Phase::DetailShown;
        self.ui.selected.as_ref()
    }

    pub fn dismiss_detail(&mut self) {
        if self.phase == Phase::DetailShown {
            self.ui.detail_visible = false;
            self.phase = Phase::Loaded;
        }
    }

    /// Clear the one-shot notice. Does not retry.
    pub fn acknowledge_error(&mut self) {
        self.ui.error_flag = false;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn memes(&self) -> &[MemeRecord] {
        &self.memes
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    /// The meme shown in the detail view, if it is open.
    pub fn detail(&self) -> Option<&MemeRecord> {
        if self.ui.detail_visible {
            self.ui.selected.as_ref()
        } else {
            None
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        self.ui.error_flag.then_some(Notice {
            title: NOTICE_TITLE,
            message: NOTICE_MESSAGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, FetchError};
    use async_trait::async_trait;

    struct StaticSource(&'static str);

    #[async_trait]
    impl MemeSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl MemeSource for BrokenSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::InvalidEndpoint {
                endpoint: "::".to_string(),
                reason: "test".to_string(),
            })
        }
    }

    fn meme(id: &str) -> MemeRecord {
        MemeRecord {
            id: id.to_string(),
            name: format!("Meme {id}"),
            image_url: format!("https://i.imgflip.com/{id}.jpg"),
            width: 600,
            height: 400,
            box_count: 2,
        }
    }

    fn loaded(ids: &[&str]) -> Presenter {
        let mut presenter = Presenter::new();
        presenter.settle(Ok(ids.iter().map(|id| meme(id)).collect()));
        presenter
    }

    #[test]
    fn starts_loading_and_empty() {
        let presenter = Presenter::new();
        assert_eq!(presenter.phase(), Phase::Loading);
        assert!(presenter.memes().is_empty());
        assert_eq!(presenter.ui_state(), &UiState::default());
        assert!(presenter.notice().is_none());
    }

    #[test]
    fn success_replaces_list() {
        let presenter = loaded(&["a", "b"]);
        assert_eq!(presenter.phase(), Phase::Loaded);
        assert_eq!(presenter.memes(), &[meme("a"), meme("b")]);
        assert!(!presenter.ui_state().error_flag);
    }

    #[test]
    fn failure_sets_flag_and_keeps_list_empty() {
        let mut presenter = Presenter::new();
        presenter.settle(Err(LoadError::Decode(DecodeError {
            message: "expected value".to_string(),
            line: 1,
            column: 1,
        })));

        assert_eq!(presenter.phase(), Phase::Failed);
        assert!(presenter.memes().is_empty());
        assert!(presenter.ui_state().error_flag);
        assert_eq!(
            presenter.notice(),
            Some(Notice {
                title: "Loading Error",
                message: "There was a problem loading the Epic Meme data",
            })
        );
    }

    #[test]
    fn second_settle_is_ignored() {
        let mut presenter = loaded(&["a"]);
        presenter.settle(Ok(vec![meme("x"), meme("y")]));
        assert_eq!(presenter.memes(), &[meme("a")]);

        let mut failed = Presenter::new();
        failed.settle(Err(LoadError::Fetch(FetchError::InvalidEndpoint {
            endpoint: String::new(),
            reason: String::new(),
        })));
        failed.settle(Ok(vec![meme("late")]));
        assert_eq!(failed.phase(), Phase::Failed);
        assert!(failed.memes().is_empty());
    }

    #[test]
    fn select_then_dismiss() {
        let mut presenter = loaded(&["a", "b", "c"]);

        let picked = presenter.select(1).cloned();
        assert_eq!(picked, Some(meme("b")));
        assert_eq!(presenter.phase(), Phase::DetailShown);
        assert_eq!(presenter.detail(), Some(&meme("b")));
        assert!(presenter.ui_state().detail_visible);

        presenter.dismiss_detail();
        assert_eq!(presenter.phase(), Phase::Loaded);
        assert!(presenter.detail().is_none());
        assert_eq!(presenter.memes(), &[meme("a"), meme("b"), meme("c")]);
    }

    #[test]
    fn select_is_rejected_out_of_range_or_phase() {
        let mut presenter = loaded(&["a"]);
        assert!(presenter.select(5).is_none());
        assert_eq!(presenter.phase(), Phase::Loaded);

        presenter.select(0);
        // Already showing a detail; a second tap does nothing.
        assert!(presenter.select(0).is_none());

        let mut loading = Presenter::new();
        assert!(loading.select(0).is_none());
        assert_eq!(loading.phase(), Phase::Loading);
    }

    #[test]
    fn dismiss_outside_detail_is_noop() {
        let mut presenter = loaded(&["a"]);
        presenter.dismiss_detail();
        assert_eq!(presenter.phase(), Phase::Loaded);
    }

    #[test]
    fn acknowledge_does_not_retry() {
        let mut presenter = Presenter::new();
        presenter.settle(Err(LoadError::Fetch(FetchError::InvalidEndpoint {
            endpoint: String::new(),
            reason: String::new(),
        })));
        presenter.acknowledge_error();

        assert!(!presenter.ui_state().error_flag);
        assert!(presenter.notice().is_none());
        assert_eq!(presenter.phase(), Phase::Failed);
        assert!(presenter.memes().is_empty());
    }

    #[tokio::test]
    async fn mount_with_empty_list_shows_empty_grid() {
        let mut presenter = Presenter::new();
        presenter
            .mount(&StaticSource(r#"{"success":true,"data":{"memes":[]}}"#))
            .await;

        assert_eq!(presenter.phase(), Phase::Loaded);
        assert!(presenter.memes().is_empty());
        assert!(presenter.notice().is_none());
    }

    #[tokio::test]
    async fn mount_with_malformed_bytes_raises_flag() {
        let mut presenter = Presenter::new();
        presenter.mount(&StaticSource("{not json")).await;

        assert_eq!(presenter.phase(), Phase::Failed);
        assert!(presenter.ui_state().error_flag);
    }

    #[tokio::test]
    async fn mount_with_failed_fetch_raises_flag() {
        let mut presenter = Presenter::new();
        presenter.mount(&BrokenSource).await;

        assert_eq!(presenter.phase(), Phase::Failed);
        assert!(presenter.memes().is_empty());
        assert!(presenter.ui_state().error_flag);
    }
}
