//! Suggestion popup rendering
//!
//! Draws the controller's list directly above the search input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::{Suggestion, SuggestionKind};
use crate::controller::InputController;
use crate::widgets::popup;

const MAX_POPUP_WIDTH: usize = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const COLUMN_SPACING: usize = 2;

fn kind_color(kind: SuggestionKind) -> Color {
    match kind {
        SuggestionKind::FilterToken => Color::Yellow,
        SuggestionKind::RecentQuery => Color::Cyan,
        SuggestionKind::Person => Color::Magenta,
        SuggestionKind::RecentFile => Color::Green,
    }
}

fn kind_label(kind: SuggestionKind) -> String {
    format!("[{}]", kind)
}

fn row_width(suggestion: &Suggestion, label_width: usize) -> usize {
    // marker + label column + description + kind tag
    2 + label_width
        + COLUMN_SPACING
        + suggestion.description().width()
        + COLUMN_SPACING
        + kind_label(suggestion.kind).width()
}

/// Where the popup was drawn and which suggestion its first inner row shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupRegion {
    pub area: Rect,
    pub first_row: usize,
}

impl PopupRegion {
    /// Suggestion index under a screen position, counting rows scrolled off
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        row_at(self.area, column, row).map(|inner| self.first_row + inner)
    }
}

/// Render the popup above `input_area`
///
/// Returns the region drawn so mouse clicks can be mapped back to suggestions.
/// Nothing is drawn while the input is unfocused or the list is empty. When
/// fewer rows fit than there are suggestions the list scrolls to keep the
/// selected one visible.
pub fn render_popup(
    controller: &InputController,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PopupRegion> {
    let suggestions = controller.suggestions();
    if !controller.is_focused() || suggestions.is_empty() {
        return None;
    }

    let label_width = suggestions
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);

    let content_width = suggestions
        .iter()
        .map(|s| row_width(s, label_width))
        .max()
        .unwrap_or(20)
        .min(MAX_POPUP_WIDTH);

    let popup_height = u16::try_from(suggestions.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);
    let popup_width = content_width as u16 + POPUP_PADDING;
    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let selected = controller.selected_index();
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let padding = " ".repeat(label_width.saturating_sub(suggestion.label.width()));
            let is_selected = selected == Some(i);

            let (marker, base) = if is_selected {
                (
                    "► ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White).bg(Color::Black))
            };
            let tag_style = if is_selected {
                base
            } else {
                base.fg(kind_color(suggestion.kind))
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}{}", marker, suggestion.label, padding), base),
                Span::styled(
                    format!("  {}", suggestion.description()),
                    base.fg(if is_selected { Color::Black } else { Color::DarkGray }),
                ),
                Span::styled(format!("  {}", kind_label(suggestion.kind)), tag_style),
            ]))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, popup_area, &mut state);

    Some(PopupRegion {
        area: popup_area,
        first_row: state.offset(),
    })
}

/// Inner row under a screen position inside a popup drawn at `popup_area`
fn row_at(popup_area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner_top = popup_area.y + 1;
    let inner_bottom = popup_area.y + popup_area.height.saturating_sub(1);
    let inside_x = column > popup_area.x && column < popup_area.x + popup_area.width.saturating_sub(1);

    if inside_x && row >= inner_top && row < inner_bottom {
        Some((row - inner_top) as usize)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
