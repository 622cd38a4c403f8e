use crate::ui::state::AppState;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render the scrollable record list with a scrollbar on the right border
pub fn render_record_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .title(" States ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Inside height minus top and bottom border
    state.set_page_size(area.height.saturating_sub(2));

    let items: Vec<ListItem> = state.labels().into_iter().map(ListItem::new).collect();
    let total = items.len();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state.list_state);

    let mut scrollbar_state = ScrollbarState::new(total).position(state.selected().unwrap_or(0));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));

    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}
