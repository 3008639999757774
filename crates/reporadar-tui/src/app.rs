// TUI application state - wraps the controller with input and list widgets
use ratatui::widgets::ListState;
use reporadar_core::SearchController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating results
    Searching, // Typing in the language box
}

pub struct App {
    pub controller: SearchController,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub search_input: String,
    pub highlighted: usize,
    pub list_state: ListState,
}

impl App {
    pub fn new(controller: SearchController) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            controller,
            should_quit: false,
            input_mode: InputMode::Searching,
            search_input: String::new(),
            highlighted: 0,
            list_state,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Whether the detail view is currently open.
    pub fn detail_open(&self) -> bool {
        self.controller.state().selected.is_some()
    }

    pub fn next_result(&mut self) {
        let len = self.controller.state().repositories.len();
        if len > 0 {
            self.highlighted = (self.highlighted + 1).min(len - 1);
            self.list_state.select(Some(self.highlighted));
        }
    }

    pub fn previous_result(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
            self.list_state.select(Some(self.highlighted));
        }
    }

    /// Drill into the highlighted row. Does nothing on an empty list.
    pub fn open_highlighted(&mut self) {
        self.controller.select(self.highlighted);
    }

    pub fn close_detail(&mut self) {
        self.controller.back();
    }

    /// A fresh result list always starts highlighted at the top.
    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
        self.list_state.select(Some(0));
    }
}
