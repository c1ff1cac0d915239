use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::controller::InputController;
use crate::search_sink::SearchLog;
use crate::suggestions::ReferenceData;
use crate::suggestions::suggestion_render::PopupRegion;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    ResultsPane,
}

/// Screen areas from the last render, used to route mouse clicks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub results: Rect,
    pub input: Rect,
    pub popup: Option<PopupRegion>,
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub controller: InputController,
    pub refs: ReferenceData,
    pub search_log: SearchLog,
    pub focus: Focus,
    pub layout: LayoutRegions,
    pub should_quit: bool,
}

fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Search files, people, or type a filter like type:");
    textarea
}

impl App {
    /// Create the app with the search input focused
    pub fn new(config: &Config) -> Self {
        let refs = ReferenceData::from_config(&config.reference);
        let mut controller = InputController::new(&config.suggestions);
        controller.focus(&refs);

        Self {
            input: create_input_textarea(),
            controller,
            refs,
            search_log: SearchLog::new(),
            focus: Focus::SearchInput,
            layout: LayoutRegions::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the input widget
    pub fn input_text(&self) -> &str {
        self.input.lines().first().map(|s| s.as_str()).unwrap_or("")
    }

    /// Overwrite the input widget's text, leaving the cursor at the end
    pub fn replace_input_text(&mut self, text: &str) {
        self.input.delete_line_by_head();
        self.input.delete_line_by_end();
        self.input.insert_str(text);
    }
}
