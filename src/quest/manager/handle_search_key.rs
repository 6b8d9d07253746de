use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::QuestManager;

impl QuestManager {
    pub(super) fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.search_focused = false,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.search.push(c);
                self.selected = 0;
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.selected = 0;
            }
            _ => {}
        }
    }
}
