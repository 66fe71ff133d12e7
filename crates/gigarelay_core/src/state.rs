use crate::clipboard::CopyIndicator;
use crate::endpoints::Endpoints;
use crate::locale::LocaleState;
use crate::proxy_link::ProxyLinkController;
use crate::session::{SessionEvent, TransferId, UploadSession};

/// Which of the two pages the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Upload,
    Proxy,
}

/// Single owned application state: locale plus both pages.
///
/// Mutated only through [`crate::update`]; views read it through
/// [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) page: Page,
    pub(crate) locale: LocaleState,
    pub(crate) endpoints: Endpoints,
    pub(crate) session: UploadSession,
    pub(crate) proxy: ProxyLinkController,
    pub(crate) copy_indicator: CopyIndicator,
    next_transfer_id: TransferId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LocaleState::default(), Endpoints::default())
    }
}

impl AppState {
    pub fn new(locale: LocaleState, endpoints: Endpoints) -> Self {
        Self {
            page: Page::default(),
            locale,
            endpoints,
            session: UploadSession::new(),
            proxy: ProxyLinkController::new(),
            copy_indicator: CopyIndicator::default(),
            next_transfer_id: 1,
            dirty: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn locale(&self) -> &LocaleState {
        &self.locale
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn proxy(&self) -> &ProxyLinkController {
        &self.proxy
    }

    pub fn copy_indicator(&self) -> &CopyIndicator {
        &self.copy_indicator
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn drain_session_events(&mut self) -> Vec<SessionEvent> {
        self.session.drain_events()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn peek_transfer_id(&self) -> TransferId {
        self.next_transfer_id
    }

    pub(crate) fn commit_transfer_id(&mut self) {
        self.next_transfer_id += 1;
    }
}
