// Results state management.
// Stores the last analysis result and the active category tab per keyword section.

use crate::api::{AnalysisResult, KNOWN_CATEGORIES, KeywordKind};

/// A category filter tab in a keyword section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeywordTab {
    #[default]
    All,
    Category(String),
}

impl KeywordTab {
    pub fn category(name: impl Into<String>) -> Self {
        KeywordTab::Category(name.into())
    }

    /// Display title (e.g., "Languages").
    pub fn title(&self) -> String {
        match self {
            KeywordTab::All => "All".to_string(),
            KeywordTab::Category(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// State for the results view.
#[derive(Debug, Default)]
pub struct ResultsState {
    result: Option<AnalysisResult>,
    matched_tab: KeywordTab,
    missing_tab: KeywordTab,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn has_results(&self) -> bool {
        self.result.is_some()
    }

    /// Store a new result and reset both sections to the "All" tab.
    pub fn set_results(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.matched_tab = KeywordTab::All;
        self.missing_tab = KeywordTab::All;
    }

    pub fn active_tab(&self, kind: KeywordKind) -> &KeywordTab {
        match kind {
            KeywordKind::Matched => &self.matched_tab,
            KeywordKind::Missing => &self.missing_tab,
        }
    }

    fn active_tab_mut(&mut self, kind: KeywordKind) -> &mut KeywordTab {
        match kind {
            KeywordKind::Matched => &mut self.matched_tab,
            KeywordKind::Missing => &mut self.missing_tab,
        }
    }

    /// Tabs for a section: "All", the known categories, then any extra
    /// categories present in the response.
    pub fn tabs(&self, kind: KeywordKind) -> Vec<KeywordTab> {
        let mut tabs = vec![KeywordTab::All];
        tabs.extend(KNOWN_CATEGORIES.iter().map(|c| KeywordTab::category(*c)));

        if let Some(result) = &self.result {
            tabs.extend(
                result
                    .categories(kind)
                    .keys()
                    .filter(|name| !KNOWN_CATEGORIES.contains(&name.as_str()))
                    .map(|name| KeywordTab::category(name.clone())),
            );
        }
        tabs
    }

    pub fn switch_tab(&mut self, kind: KeywordKind, tab: KeywordTab) {
        *self.active_tab_mut(kind) = tab;
    }

    /// Move to the next tab, wrapping around.
    pub fn next_tab(&mut self, kind: KeywordKind) {
        let tabs = self.tabs(kind);
        let index = self.tab_index(kind, &tabs);
        let next = tabs[(index + 1) % tabs.len()].clone();
        self.switch_tab(kind, next);
    }

    /// Move to the previous tab, wrapping around.
    pub fn prev_tab(&mut self, kind: KeywordKind) {
        let tabs = self.tabs(kind);
        let index = self.tab_index(kind, &tabs);
        let prev = tabs[(index + tabs.len() - 1) % tabs.len()].clone();
        self.switch_tab(kind, prev);
    }

    /// Index of the active tab within `tabs`.
    pub fn tab_index(&self, kind: KeywordKind, tabs: &[KeywordTab]) -> usize {
        let active = self.active_tab(kind);
        tabs.iter().position(|t| t == active).unwrap_or(0)
    }

    /// Keywords shown for the active tab of a section.
    pub fn visible_keywords(&self, kind: KeywordKind) -> &[String] {
        let Some(result) = &self.result else {
            return &[];
        };

        match self.active_tab(kind) {
            KeywordTab::All => result.keywords(kind),
            KeywordTab::Category(name) => result
                .categories(kind)
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}
