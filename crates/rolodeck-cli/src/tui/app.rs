use rolodeck_engine::{Gallery, NavDirection};

pub(crate) const GRID_COLUMNS: usize = 3;

pub(crate) struct AppState {
    pub gallery: Gallery,
    /// Static message shown in the gallery area when the fetch failed.
    pub notice: Option<String>,
    /// Cursor position within the visible card list, not the full one.
    pub cursor: usize,
    /// First grid row currently on screen; adjusted during render so
    /// the cursor always stays in view.
    pub scroll_row: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(gallery: Gallery, notice: Option<String>) -> Self {
        Self {
            gallery,
            notice,
            cursor: 0,
            scroll_row: 0,
            should_quit: false,
        }
    }

    pub fn visible(&self) -> Vec<usize> {
        self.gallery.cards().visible_indices()
    }

    pub fn overlay_open(&self) -> bool {
        self.gallery.overlays().attached().is_some()
    }

    pub fn filter_push(&mut self, c: char) {
        let mut text = self.gallery.filter_text().to_string();
        text.push(c);
        self.gallery.set_filter_text(text);
        self.clamp_cursor();
    }

    pub fn filter_backspace(&mut self) {
        let mut text = self.gallery.filter_text().to_string();
        if text.pop().is_some() {
            self.gallery.set_filter_text(text);
            self.clamp_cursor();
        }
    }

    /// Esc clears the filter first; a second Esc quits.
    pub fn on_escape(&mut self) {
        if self.gallery.filter_text().is_empty() {
            self.should_quit = true;
        } else {
            self.gallery.set_filter_text("");
            self.clamp_cursor();
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.gallery.cards().visible_count();
        if count == 0 {
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, count as isize - 1) as usize;
    }

    pub fn open_selected(&mut self) {
        if let Some(&index) = self.visible().get(self.cursor) {
            self.gallery.show_overlay(index);
        }
    }

    pub fn close_overlay(&mut self) {
        self.gallery.close_overlay();
    }

    pub fn step_overlay(&mut self, direction: NavDirection) {
        if self.gallery.step_overlay(direction).is_some() {
            self.sync_cursor_to_overlay();
        }
    }

    /// Keep the grid selection on the profile whose overlay is up, so
    /// closing it leaves the cursor where the user was looking.
    fn sync_cursor_to_overlay(&mut self) {
        if let Some(attached) = self.gallery.overlays().attached()
            && let Some(pos) = self.visible().iter().position(|&i| i == attached)
        {
            self.cursor = pos;
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.gallery.cards().visible_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}
