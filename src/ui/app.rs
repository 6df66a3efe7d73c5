use crate::selector::AccountSelector;
use crate::ui::layout::{hit_test, selector_layout, HitTarget};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

pub struct App {
    pub selector: AccountSelector,
    /// Index of the account row under the keyboard cursor
    pub cursor: usize,
    pub should_quit: bool,
    pub show_info: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(selector: AccountSelector, theme: Theme) -> Self {
        Self {
            selector,
            cursor: 0,
            should_quit: false,
            show_info: false,
            theme,
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        debug!(theme = self.theme.name, "switched theme");
    }

    /// Open or close the list. Opening puts the cursor on the focused account.
    pub fn toggle_expansion(&mut self) {
        self.selector.toggle_expansion();
        if self.selector.is_expanded() {
            self.cursor = self
                .selector
                .focused_account()
                .and_then(|focused| {
                    self.selector
                        .accounts()
                        .iter()
                        .position(|a| a.id == focused.id)
                })
                .unwrap_or(0);
        }
    }

    pub fn next(&mut self) {
        let count = self.selector.accounts().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.selector.accounts().len();
        if count > 0 {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else {
                self.cursor = count - 1;
            }
        }
    }

    /// Icon interaction on the account at `index` (multi-select)
    pub fn toggle_account_at(&mut self, index: usize) {
        if let Some(id) = self.account_id_at(index) {
            self.selector.toggle_account_selection(&id);
        }
    }

    /// Row interaction on the account at `index` (single-select)
    pub fn select_account_at(&mut self, index: usize) {
        if let Some(id) = self.account_id_at(index) {
            self.cursor = index;
            self.selector.select_single_account(&id);
        }
    }

    pub fn manage_connections(&mut self) {
        debug!("manage connections requested");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_info {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Esc) {
                self.toggle_info();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('i') => self.toggle_info(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ if self.selector.is_expanded() => self.handle_list_key(key.code),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_expansion(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char(' ') => self.toggle_account_at(self.cursor),
            KeyCode::Enter => self.select_account_at(self.cursor),
            KeyCode::Char('m') => self.manage_connections(),
            KeyCode::Esc => self.toggle_expansion(),
            _ => {}
        }
    }

    /// Handle a mouse event against the layout drawn into `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if self.show_info || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = selector_layout(
            area,
            self.selector.accounts().len(),
            self.selector.is_expanded(),
        );

        match hit_test(&layout, mouse.column, mouse.row) {
            Some(HitTarget::Header) => self.toggle_expansion(),
            Some(HitTarget::Icon(index)) => {
                self.cursor = index;
                self.toggle_account_at(index);
            }
            Some(HitTarget::Row(index)) => self.select_account_at(index),
            Some(HitTarget::ManageConnections) => self.manage_connections(),
            Some(HitTarget::Summary) | None => {}
        }
    }

    fn account_id_at(&self, index: usize) -> Option<String> {
        self.selector.accounts().get(index).map(|a| a.id.clone())
    }
}
