use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{FormField, QuestManager, StoreRequest};

impl QuestManager {
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Option<StoreRequest> {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.submit();
        }

        let form = self.modal.as_mut()?;
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focus = form.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = form.focus.prev();
                None
            }
            KeyCode::Enter => match form.focus {
                FormField::Submit => self.submit(),
                FormField::Cancel => {
                    self.close_modal();
                    None
                }
                _ => {
                    form.focus = form.focus.next();
                    None
                }
            },
            KeyCode::Left if form.focus == FormField::Difficulty => {
                form.difficulty = form.difficulty.prev();
                None
            }
            KeyCode::Right | KeyCode::Char(' ') if form.focus == FormField::Difficulty => {
                form.difficulty = form.difficulty.next();
                None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                form.push_char(c);
                None
            }
            KeyCode::Backspace => {
                form.pop_char();
                None
            }
            _ => None,
        }
    }
}
