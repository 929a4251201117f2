// App state and main event loop.
// Manages panel focus, keyboard and paste input, and the analysis request.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::api::{AnalysisResult, AnalyzeClient, KeywordKind};
use crate::config::Config;
use crate::error::Result;
use crate::intake::format_file_size;
use crate::report;
use crate::state::{FormState, Notice, RequestState, ResultsState};
use crate::ui;

/// Panel that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    JobDescription,
    Resume,
    Matched,
    Missing,
}

impl Focus {
    pub const ALL: [Focus; 4] = [
        Focus::JobDescription,
        Focus::Resume,
        Focus::Matched,
        Focus::Missing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Focus::JobDescription => "Job Description",
            Focus::Resume => "Resume",
            Focus::Matched => "Matched",
            Focus::Missing => "Missing",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Focus::JobDescription => Focus::Resume,
            Focus::Resume => Focus::Matched,
            Focus::Matched => Focus::Missing,
            Focus::Missing => Focus::JobDescription,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::JobDescription => Focus::Missing,
            Focus::Resume => Focus::JobDescription,
            Focus::Matched => Focus::Resume,
            Focus::Missing => Focus::Matched,
        }
    }

    /// Keyword section shown by this panel, if any.
    pub fn keyword_kind(&self) -> Option<KeywordKind> {
        match self {
            Focus::Matched => Some(KeywordKind::Matched),
            Focus::Missing => Some(KeywordKind::Missing),
            _ => None,
        }
    }
}

/// Main application state.
pub struct App {
    pub config: Config,
    client: AnalyzeClient,
    /// Panel receiving input.
    pub focus: Focus,
    /// Job description and selected resume.
    pub form: FormState,
    /// In-flight request tracking.
    pub request: RequestState,
    /// Last analysis result and tab selection.
    pub results: ResultsState,
    /// Transient error banner.
    pub notice: Notice,
    /// Informational status line (e.g., where a report was saved).
    pub status: Option<String>,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    outcome_tx: UnboundedSender<Result<AnalysisResult>>,
    outcome_rx: UnboundedReceiver<Result<AnalysisResult>>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = AnalyzeClient::new(&config.server_url, config.timeout)?
            .with_max_upload_bytes(config.max_upload_bytes);
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Ok(Self {
            form: FormState::new(config.max_upload_bytes),
            notice: Notice::new(config.notice_ttl),
            config,
            client,
            focus: Focus::default(),
            request: RequestState::new(),
            results: ResultsState::new(),
            status: None,
            show_help: false,
            should_quit: false,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.poll_outcome();
            self.notice.expire(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard and paste events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // AltGr arrives as Ctrl+Alt and must still type characters
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) => self.show_help = false,
                KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.submit(),
                KeyCode::Char('s') => self.save_report(),
                KeyCode::Char('x') => self.clear_file(),
                KeyCode::Char('u') => self.clear_focused_input(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc => self.notice.dismiss(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            code => self.handle_panel_key(code),
        }
    }

    /// Keys that depend on the focused panel.
    fn handle_panel_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::JobDescription => match code {
                KeyCode::Char(c) => self.form.insert_char(c),
                KeyCode::Enter => self.form.newline(),
                KeyCode::Backspace => self.form.backspace(),
                _ => {}
            },
            Focus::Resume => match code {
                KeyCode::Char(c) => self.form.path_push(c),
                KeyCode::Backspace => self.form.path_backspace(),
                KeyCode::Enter => {
                    let selected = self.form.select_typed_path().map(describe_file);
                    self.report_selection(selected);
                }
                _ => {}
            },
            Focus::Matched | Focus::Missing => {
                let Some(kind) = self.focus.keyword_kind() else {
                    return;
                };
                match code {
                    KeyCode::Left | KeyCode::Char('h') => self.results.prev_tab(kind),
                    KeyCode::Right | KeyCode::Char('l') => self.results.next_tab(kind),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if let Some(tab) = self.results.tabs(kind).get(index).cloned() {
                            self.results.switch_tab(kind, tab);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Pasted text goes into the editor; anywhere else it is a file drop.
    pub fn handle_paste(&mut self, text: &str) {
        if self.show_help {
            return;
        }
        if self.focus == Focus::JobDescription {
            self.form.insert_str(text);
        } else {
            let selected = self.form.drop_text(text).map(describe_file);
            self.report_selection(selected);
        }
    }

    fn report_selection(&mut self, selected: Result<String>) {
        match selected {
            Ok(description) => {
                info!(file = %description, "Resume selected");
                self.status = Some(format!("Selected {}", description));
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    fn clear_file(&mut self) {
        if self.form.selected_file().is_some() {
            self.form.clear_file();
            self.status = Some("Resume removed".to_string());
        }
    }

    fn clear_focused_input(&mut self) {
        match self.focus {
            Focus::JobDescription => self.form.job_desc.clear(),
            Focus::Resume => self.form.path_input.clear(),
            Focus::Matched | Focus::Missing => {}
        }
    }

    /// Validate the form and start the analysis request.
    pub fn submit(&mut self) {
        if !self.request.can_submit() {
            debug!("Analysis already in flight; ignoring submit");
            return;
        }

        let submission = match self.form.submission() {
            Ok(submission) => submission,
            Err(e) => {
                self.show_error(e.to_string());
                return;
            }
        };

        self.request.begin();
        self.notice.dismiss();
        self.status = None;

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.analyze(&submission.job_desc, &submission.file).await;
            // Receiver is gone only when the app has quit
            let _ = tx.send(outcome);
        });
    }

    /// Apply a finished request if one is waiting. Returns true if applied.
    pub fn poll_outcome(&mut self) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            Err(_) => false,
        }
    }

    /// Record the result of an analysis request.
    pub fn apply_outcome(&mut self, outcome: Result<AnalysisResult>) {
        match outcome {
            Ok(result) => {
                self.request.finish_ok();
                self.results.set_results(result);
                self.focus = Focus::Matched;
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                let message = e.to_string();
                self.request.finish_err(message.clone());
                self.show_error(message);
            }
        }
    }

    /// Save the text report for the last result.
    pub fn save_report(&mut self) {
        let Some(result) = self.results.result() else {
            self.status = Some("No results to save yet".to_string());
            return;
        };

        match report::save_report(&self.config.report_dir, result) {
            Ok(path) => self.status = Some(format!("Report saved to {}", path.display())),
            Err(e) => self.show_error(format!("Could not save report: {}", e)),
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notice.show(message, Instant::now());
    }
}

fn describe_file(file: &crate::intake::ResumeFile) -> String {
    format!("{} ({})", file.name, format_file_size(file.size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    use crate::state::KeywordTab;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn current_notice(app: &App) -> Option<String> {
        app.notice
            .current(Instant::now())
            .map(|n| n.message.clone())
    }

    fn sample() -> AnalysisResult {
        let mut matched_categories = BTreeMap::new();
        matched_categories.insert("languages".to_string(), vec!["rust".to_string()]);
        AnalysisResult {
            score: 40.0,
            matched: vec!["rust".to_string(), "git".to_string()],
            missing: vec!["go".to_string()],
            matched_categories,
            missing_categories: BTreeMap::new(),
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Resume);
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Missing);
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut app = app();
        for c in "Go dev".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.job_desc, "Go dev\n");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.form.path_input, "x");
        assert_eq!(app.form.job_desc, "Go dev\n");
    }

    #[test]
    fn test_submit_without_inputs_shows_error_and_stays_idle() {
        let mut app = app();
        app.handle_key(ctrl('r'));

        assert_eq!(
            current_notice(&app).as_deref(),
            Some("Please enter a job description")
        );
        assert!(app.request.can_submit());
    }

    #[test]
    fn test_dropping_non_pdf_shows_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.docx");
        fs::write(&path, b"doc").unwrap();

        let mut app = app();
        app.focus = Focus::Resume;
        app.handle_paste(&path.display().to_string());

        assert_eq!(current_notice(&app).as_deref(), Some("File must be a PDF"));
        assert!(app.form.selected_file().is_none());
    }

    #[test]
    fn test_paste_into_editor_is_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let mut app = app();
        app.handle_paste(&path.display().to_string());
        assert!(app.form.selected_file().is_none());
        assert_eq!(app.form.job_desc, path.display().to_string());

        app.focus = Focus::Matched;
        app.handle_paste(&path.display().to_string());
        assert_eq!(app.form.selected_file().unwrap().name, "cv.pdf");
        assert!(app.status.as_deref().unwrap().starts_with("Selected cv.pdf"));
    }

    #[test]
    fn test_successful_outcome_resets_tabs_and_focuses_results() {
        let mut app = app();
        app.request.begin();
        app.results.set_results(sample());
        app.results
            .switch_tab(KeywordKind::Matched, KeywordTab::category("languages"));

        app.apply_outcome(Ok(sample()));
        assert!(app.request.can_submit());
        assert_eq!(app.focus, Focus::Matched);
        assert_eq!(app.results.active_tab(KeywordKind::Matched), &KeywordTab::All);
    }

    #[test]
    fn test_failed_outcome_shows_server_message() {
        let mut app = app();
        app.request.begin();
        app.apply_outcome(Err(crate::error::MatchError::Server {
            status: 400,
            message: "No text in PDF".to_string(),
        }));

        assert!(app.request.can_submit());
        assert_eq!(current_notice(&app).as_deref(), Some("No text in PDF"));
    }

    #[test]
    fn test_tab_keys_in_keyword_panels() {
        let mut app = app();
        app.results.set_results(sample());
        app.focus = Focus::Matched;

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.results.visible_keywords(KeywordKind::Matched), ["rust"]);

        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.results.visible_keywords(KeywordKind::Matched).len(), 2);

        app.focus = Focus::Missing;
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(
            app.results.active_tab(KeywordKind::Missing),
            &KeywordTab::category("frameworks")
        );
        assert!(app.results.visible_keywords(KeywordKind::Missing).is_empty());
    }

    #[test]
    fn test_save_report() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Config {
            report_dir: dir.path().to_path_buf(),
            ..Config::default()
        })
        .unwrap();

        app.handle_key(ctrl('s'));
        assert_eq!(app.status.as_deref(), Some("No results to save yet"));

        app.results.set_results(sample());
        app.handle_key(ctrl('s'));
        assert!(dir.path().join(report::REPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(1)));
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.form.job_desc.is_empty());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_help_overlay_blocks_ctrl_actions() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("cv.pdf");
        fs::write(&pdf, b"%PDF-1.4").unwrap();

        let mut app = App::new(Config {
            report_dir: dir.path().to_path_buf(),
            ..Config::default()
        })
        .unwrap();
        app.form.select_path(&pdf).unwrap();
        app.results.set_results(sample());

        app.handle_key(key(KeyCode::F(1)));
        app.handle_key(ctrl('x'));
        app.handle_key(ctrl('s'));
        app.handle_key(ctrl('r'));

        assert!(app.form.selected_file().is_some());
        assert!(!dir.path().join(report::REPORT_FILE_NAME).exists());
        assert!(app.request.can_submit());
        assert!(current_notice(&app).is_none());

        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let mut app = app();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        app.handle_key(KeyEvent::new(KeyCode::Char('{'), altgr));
        assert_eq!(app.form.job_desc, "@{");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }
}
