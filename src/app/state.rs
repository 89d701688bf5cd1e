// src/app/state.rs
//! Application state management.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    widgets::{ListState, Paragraph},
};

use crate::{
    browse::{Browser, NavRequest, Notice},
    config::Config,
    fs::LocalDriver,
    tag::ActiveTag,
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::compute_layout,
        widgets::{render_file_list, render_menu, render_tag_panel},
    },
};

/// One level of the host navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    MainMenu,
    CardMenu,
    FileBrowser,
}

const HELP_LINE: &str = " up/down move  enter select  left back  q quit";

/// Main application state.
pub struct App {
    /// Scene stack; the last element is the active scene
    scenes: Vec<Scene>,
    /// Browsing screen core
    browser: Browser<LocalDriver>,
    /// Currently emulated card
    tag: ActiveTag,
    /// Selected index in the active scene's list
    selected: usize,
    /// List widget state
    state: ListState,
    /// Last user-visible notice, shown on the status line
    status: Option<Notice>,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.dump_root)?;
        let mut state = ListState::default();
        state.select(Some(0));

        Ok(Self {
            scenes: vec![Scene::MainMenu],
            browser: Browser::new(LocalDriver::new(config.dump_root)),
            tag: ActiveTag::new(config.tag_type),
            selected: 0,
            state,
            status: None,
        })
    }

    fn scene(&self) -> Scene {
        self.scenes.last().copied().unwrap_or(Scene::MainMenu)
    }

    fn item_count(&self) -> usize {
        match self.scene() {
            Scene::MainMenu => 3,
            Scene::CardMenu => 2,
            Scene::FileBrowser => self.browser.listing().len(),
        }
    }

    fn push_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
        self.selected = 0;
    }

    /// Pop up to `levels` scenes, keeping the main menu as the floor.
    fn pop_scenes(&mut self, levels: usize) {
        for _ in 0..levels {
            if self.scenes.len() > 1 {
                self.scenes.pop();
            }
        }
        self.selected = 0;
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.item_count() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            NavigationAction::Enter => {
                if self.activate() {
                    return true;
                }
            }
            NavigationAction::Back => {
                if self.scene() == Scene::FileBrowser {
                    self.browser.exit();
                }
                self.pop_scenes(1);
            }
            NavigationAction::Quit => return true,
            NavigationAction::None => {}
        }
        self.state.select(Some(self.selected));
        false
    }

    /// Act on the selected item. Returns true when the app should quit.
    fn activate(&mut self) -> bool {
        match self.scene() {
            Scene::MainMenu => match self.selected {
                0 => self.push_scene(Scene::CardMenu),
                1 => self.tag.cycle_type(),
                _ => return true,
            },
            Scene::CardMenu => match self.selected {
                0 => {
                    self.push_scene(Scene::FileBrowser);
                    self.status = self.browser.enter();
                }
                _ => self.pop_scenes(1),
            },
            Scene::FileBrowser => {
                let location = self.browser.location().to_string();
                let (nav, notice) = self.browser.select(self.selected, &mut self.tag);
                if notice.is_some() {
                    self.status = notice;
                }
                match nav {
                    NavRequest::Stay => {
                        if self.browser.location() != location {
                            self.selected = 0;
                        } else if self.selected >= self.browser.listing().len() {
                            self.selected = self.browser.listing().len().saturating_sub(1);
                        }
                    }
                    NavRequest::Back(levels) => {
                        self.browser.exit();
                        self.pop_scenes(levels);
                    }
                }
            }
        }
        false
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        match self.scene() {
            Scene::MainMenu => {
                let items = vec![
                    "Card data".to_string(),
                    format!("Tag type: {}", self.tag.tag_type().name()),
                    "Quit".to_string(),
                ];
                render_menu(f, layout.list, "Dumpview", &items, &mut self.state);
            }
            Scene::CardMenu => {
                let items = vec!["Load from file".to_string(), "Back".to_string()];
                render_menu(f, layout.list, "Card data", &items, &mut self.state);
            }
            Scene::FileBrowser => {
                let title = self.browser.location().to_string();
                render_file_list(
                    f,
                    layout.list,
                    &title,
                    self.browser.listing(),
                    &mut self.state,
                );
            }
        }

        render_tag_panel(f, layout.panel, &self.tag);

        let status = match self.status {
            Some(notice) => format!(" {}", notice),
            None => HELP_LINE.to_string(),
        };
        f.render_widget(Paragraph::new(status), layout.status);
    }
}
