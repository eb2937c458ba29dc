use crate::library::{Playlist, SortField, search};

/// The main content views the sidebar switches between.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Search,
    Library,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Library => "Your Library",
        }
    }

    pub const ALL: [View; 3] = [View::Home, View::Search, View::Library];
}

/// UI-side application state: which view is active, where the cursor is,
/// what the search query says and how the library view is sorted.
///
/// None of this touches playback; the render layer combines it with the
/// playback snapshot when drawing.
pub struct App {
    pub view: View,
    /// Cursor position within the visible list of the active view.
    pub cursor: usize,
    pub search_query: String,
    /// Whether keystrokes currently edit the search query.
    pub search_input: bool,
    pub sort_field: SortField,
}

impl App {
    pub fn new(initial_view: View) -> Self {
        Self {
            view: initial_view,
            cursor: 0,
            search_query: String::new(),
            search_input: false,
            sort_field: SortField::Title,
        }
    }

    /// Switch the main pane. The cursor resets; search input mode only
    /// survives inside the search view.
    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.cursor = 0;
        }
        if view != View::Search {
            self.search_input = false;
        }
    }

    /// Track indices visible in the active view, in display order.
    ///
    /// Home browses in playlist order, Search shows substring matches
    /// (none for an empty query; the browse hint renders instead), Library
    /// is sorted by the active sort field.
    pub fn visible_indices(&self, playlist: &Playlist) -> Vec<usize> {
        match self.view {
            View::Home => (0..playlist.len()).collect(),
            View::Search => search(playlist, &self.search_query),
            View::Library => playlist.sorted_by(self.sort_field),
        }
    }

    /// The playlist index under the cursor, if the visible list is
    /// non-empty.
    pub fn selected_index(&self, playlist: &Playlist) -> Option<usize> {
        let visible = self.visible_indices(playlist);
        visible.get(self.cursor.min(visible.len().saturating_sub(1))).copied()
    }

    pub fn cursor_down(&mut self, playlist: &Playlist) {
        let len = self.visible_indices(playlist).len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Clamp the cursor after the visible list changed underneath it.
    pub fn clamp_cursor(&mut self, playlist: &Playlist) {
        let len = self.visible_indices(playlist).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn enter_search_input(&mut self) {
        self.view = View::Search;
        self.search_input = true;
    }

    pub fn exit_search_input(&mut self) {
        self.search_input = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.cursor = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_input = false;
        self.cursor = 0;
    }

    /// Cycle the library sort field and keep the cursor in range.
    pub fn cycle_sort_field(&mut self, playlist: &Playlist) {
        self.sort_field = self.sort_field.next();
        self.clamp_cursor(playlist);
    }
}
