// Request lifecycle state.
// Tracks the single in-flight analysis request.

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Lifecycle of the analysis request. At most one may be in flight.
#[derive(Debug, Default)]
pub struct RequestState {
    state: LoadingState<()>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started. Returns false if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.state.is_loading() {
            return false;
        }
        self.state = LoadingState::Loading;
        true
    }

    pub fn finish_ok(&mut self) {
        self.state = LoadingState::Loaded(());
    }

    pub fn finish_err(&mut self, message: impl Into<String>) {
        self.state = LoadingState::Error(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the analyze control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading()
    }

    pub fn state(&self) -> &LoadingState<()> {
        &self.state
    }
}
