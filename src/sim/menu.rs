//! Menus shown outside active play

use serde::{Deserialize, Serialize};

use super::state::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    Start,
    Resume,
    Restart,
    Exit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::Resume => "Resume",
            MenuOption::Restart => "Restart",
            MenuOption::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    phase: GamePhase,
    options: Vec<MenuOption>,
    selected: usize,
}

impl Menu {
    /// Menu for the phase that asked for it; Exit is always last
    pub fn for_phase(phase: GamePhase) -> Self {
        let mut options = match phase {
            GamePhase::PreGame => vec![MenuOption::Start],
            GamePhase::PauseGame => vec![MenuOption::Resume, MenuOption::Restart],
            GamePhase::PostGame => vec![MenuOption::Restart],
            GamePhase::InGame => Vec::new(),
        };
        options.push(MenuOption::Exit);
        Self {
            phase,
            options,
            selected: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn title(&self) -> &'static str {
        match self.phase {
            GamePhase::PreGame => "Welcome to Asteroid Drift!",
            GamePhase::PauseGame => "Paused",
            GamePhase::PostGame => "Game over!",
            GamePhase::InGame => "",
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> MenuOption {
        self.options[self.selected]
    }

    pub fn cursor_down(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn cursor_up(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }
}
