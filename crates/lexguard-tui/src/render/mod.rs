//! Main render/view function (View in TEA pattern)


use std::ops::Range;

use lexguard_app::presenter;
use lexguard_app::state::{AppState, Focus, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the editor's scroll offset is written back to the state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(state.phase())
        .document(state.workflow.document())
        .frame(state.animation_frame);
    frame.render_widget(header, areas.header);

    if state.shows_analysis() {
        render_analysis(frame, areas.body, state);
    } else {
        frame.render_widget(widgets::InputPanel::new(state), areas.body);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Library => {
            frame.render_widget(widgets::LibraryModal::new(&state.library), area);
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
    }
}

fn render_analysis(frame: &mut Frame, body: Rect, state: &mut AppState) {
    let Some(results) = state.results_view() else {
        return;
    };
    let areas = layout::split_analysis(body);
    let highlight = selected_clause(state);
    let show_count = state.settings.ui.show_char_count;
    let focus = state.focus;

    let panel = widgets::ResultsPanel::new(&results, state.workflow.active_tab())
        .focused(focus == Focus::Results)
        .cursor(state.risk_cursor);
    frame.render_widget(panel, areas.results);

    if let Some(doc) = state.workflow.document_mut() {
        let editor = widgets::EditorPanel::new(focus == Focus::Editor)
            .highlight(highlight)
            .show_char_count(show_count);
        frame.render_stateful_widget(editor, areas.editor, &mut doc.editor);
    }
}

/// Char range of the expanded risk's clause in the edited text
fn selected_clause(state: &AppState) -> Option<Range<usize>> {
    let doc = state.workflow.document()?;
    let id = state.workflow.selected_risk_id()?;
    let risk = doc.risks().iter().find(|r| r.id == id)?;
    presenter::clause_span(doc.original_text(), doc.edited_text(), risk)
}
