use crate::domain::StatRecord;
use log::debug;
use ratatui::widgets::ListState;

/// Formatter turning a record into its list label
pub type LabelFn = fn(&StatRecord) -> String;

/// Fallback page size until the list has been drawn once
const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub title: String,
    pub records: Vec<StatRecord>,
    pub list_state: ListState,
    pub should_quit: bool,
    label: LabelFn,
    page_size: usize,
}

impl AppState {
    pub fn new(title: impl Into<String>, records: Vec<StatRecord>, label: LabelFn) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };

        Self {
            title: title.into(),
            records,
            list_state: ListState::default().with_selected(selected),
            should_quit: false,
            label,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(self.label).collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Number of entries the list shows at once (list height minus borders)
    pub fn set_page_size(&mut self, rows: u16) {
        self.page_size = (rows as usize).max(1);
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_previous(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        self.move_by(self.page_size as isize);
    }

    pub fn page_up(&mut self) {
        self.move_by(-(self.page_size as isize));
    }

    pub fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.select(0);
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.records.len().checked_sub(1) {
            self.select(last);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn move_by(&mut self, delta: isize) {
        let Some(last) = self.records.len().checked_sub(1) else {
            return;
        };
        let current = self.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, last as isize) as usize;
        self.select(target);
    }

    fn select(&mut self, index: usize) {
        if self.selected() == Some(index) {
            return;
        }
        self.list_state.select(Some(index));
        self.on_selection(index);
    }

    // Selection hook; entries have no detail view yet
    fn on_selection(&self, index: usize) {
        if let Some(record) = self.records.get(index) {
            debug!("Selected entry {}: {}", index, record.name);
        }
    }
}
