use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app_state::{App, Focus, LayoutRegions};
use crate::suggestions::suggestion_render;

const INPUT_HEIGHT: u16 = 3;
const TIME_FORMAT: &str = "%H:%M:%S";
const KEY_HINTS: &str = " Enter: search  ↑↓: select  Esc: dismiss  Tab: switch pane  Ctrl+C: quit ";

impl App {
    /// Render the UI and record component regions for mouse routing
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)])
            .split(frame.area());

        let results_area = chunks[0];
        let input_area = chunks[1];

        self.render_results(frame, results_area);
        self.render_input(frame, input_area);

        // stays up during the blur delay so a click can still land on it
        let popup = suggestion_render::render_popup(&self.controller, frame, input_area);

        self.layout = LayoutRegions {
            results: results_area,
            input: input_area,
            popup,
        };
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SearchInput {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::ResultsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Searches ({}) ", self.search_log.len()))
            .title_bottom(Line::from(KEY_HINTS).style(Style::default().fg(Color::DarkGray)))
            .border_style(Style::default().fg(border_color));

        if self.search_log.is_empty() {
            let hint = Paragraph::new("No searches yet. Type a query and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        // newest first
        let items: Vec<ListItem> = self
            .search_log
            .entries()
            .iter()
            .rev()
            .map(|search| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        search.submitted_at.format(TIME_FORMAT).to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        search.query.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
