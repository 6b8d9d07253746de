use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;

use crate::config::MakerConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::quest::manager::{QuestManager, StoreRequest};
use crate::quest::store::{Latency, QuestStore};
use crate::util::database::Database;
use crate::{log_error, log_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Quests,
}

impl Screen {
    pub fn all() -> [Screen; 2] {
        [Screen::Dashboard, Screen::Quests]
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Quests => "Quests",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::Quests => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Screen::Dashboard => Screen::Quests,
            Screen::Quests => Screen::Dashboard,
        }
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current screen
    pub screen: Screen,
    /// State of the quest management screen
    pub quests: QuestManager,
    /// Persistence for quests
    pub store: QuestStore,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`] and kicks off the initial quest load.
    pub async fn new(config: &MakerConfig) -> Result<Self> {
        let database = Database::open(&config.database_path())?;
        let store = QuestStore::new(
            database,
            config.storage_key.clone(),
            Latency::from(&config.latency),
        );
        log_info!(
            "Opened quest store at {} (key '{}')",
            config.database_path().display(),
            store.storage_key()
        );

        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            quests: QuestManager::new(),
            store,
            events: EventHandler::new(),
        };

        if config.reset_on_start {
            log_info!("reset_on_start is set; stored quests will be cleared");
        }
        let request = app.quests.start(config.reset_on_start);
        app.dispatch(request);

        Ok(app)
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                // only the loading indicator animates
                Event::Tick => needs_redraw = self.quests.is_loading(),
                Event::Crossterm(CrosstermEvent::Key(key_event)) => {
                    self.handle_key_events(key_event)?;
                    needs_redraw = true;
                }
                Event::Crossterm(CrosstermEvent::Resize(..)) => needs_redraw = true,
                Event::Crossterm(_) => {}
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if matches!(key_event.code, KeyCode::Char('c' | 'C'))
            && key_event.modifiers == KeyModifiers::CONTROL
        {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        // The modal and the search box own every key while focused
        if self.screen == Screen::Quests && self.quests.captures_input() {
            if let Some(request) = self.quests.handle_key(key_event) {
                self.dispatch(request);
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('1') => self.events.send(AppEvent::Navigate(Screen::Dashboard)),
            KeyCode::Char('2') => self.events.send(AppEvent::Navigate(Screen::Quests)),
            KeyCode::Tab => self.events.send(AppEvent::Navigate(self.screen.toggle())),
            KeyCode::Enter if self.screen == Screen::Dashboard => {
                self.events.send(AppEvent::Navigate(Screen::Quests))
            }
            KeyCode::Esc if self.screen == Screen::Quests => {
                self.events.send(AppEvent::Navigate(Screen::Dashboard))
            }
            _ if self.screen == Screen::Quests => {
                if let Some(request) = self.quests.handle_key(key_event) {
                    self.dispatch(request);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Navigate(screen) => self.screen = screen,
            AppEvent::Store(response) => self.quests.apply_response(response),
        }
    }

    /// Run a store request in the background; the result comes back as [`AppEvent::Store`].
    fn dispatch(&self, request: StoreRequest) {
        let store = self.store.clone();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let response = request.execute(&store).await;
            if sender.send(Event::App(AppEvent::Store(response))).is_err() {
                log_error!("Store response dropped: event loop is gone");
            }
        });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatencyConfig;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> MakerConfig {
        MakerConfig {
            data_dir: dir.path().join("db"),
            log_dir: dir.path().join("logs"),
            latency: LatencyConfig {
                enabled: false,
                ..LatencyConfig::default()
            },
            ..MakerConfig::default()
        }
    }

    /// Feed app events back in until no store request is in flight.
    async fn settle(app: &mut App) {
        while app.quests.is_loading() {
            if let Event::App(event) = app.events.next().await.unwrap() {
                app.handle_app_event(event);
            }
        }
    }

    async fn started_app(dir: &TempDir) -> App {
        let mut app = App::new(&config(dir)).await.unwrap();
        settle(&mut app).await;
        app
    }

    fn press(app: &mut App, key: KeyEvent) {
        app.handle_key_events(key).unwrap();
        while let Some(event) = app.events.try_next() {
            if let Event::App(event) = event {
                app.handle_app_event(event);
            }
        }
    }

    fn press_code(app: &mut App, code: KeyCode) {
        press(app, KeyEvent::from(code));
    }

    #[tokio::test]
    async fn q_quits_from_either_screen() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        press_code(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let other = TempDir::new().unwrap();
        let mut app = started_app(&other).await;
        press_code(&mut app, KeyCode::Char('2'));
        press_code(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn navigation_keys_switch_screens() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        assert_eq!(app.screen, Screen::Dashboard);

        press_code(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Quests);
        press_code(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Dashboard);
        press_code(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Quests);
        press_code(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Dashboard);
        press_code(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Quests);
    }

    #[tokio::test]
    async fn open_modal_owns_q_and_tab() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        press_code(&mut app, KeyCode::Char('2'));
        press_code(&mut app, KeyCode::Char('n'));
        press_code(&mut app, KeyCode::Char('q'));
        press_code(&mut app, KeyCode::Tab);
        press_code(&mut app, KeyCode::Char('1'));

        assert!(app.running);
        assert_eq!(app.screen, Screen::Quests);
        let form = app.quests.modal().unwrap();
        assert_eq!(form.title, "q");
        assert_eq!(form.description, "1");
    }

    #[tokio::test]
    async fn search_box_owns_digits_until_esc() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        press_code(&mut app, KeyCode::Char('2'));
        press_code(&mut app, KeyCode::Char('/'));
        press_code(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Quests);
        assert_eq!(app.quests.search(), "1");

        press_code(&mut app, KeyCode::Esc);
        press_code(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[tokio::test]
    async fn ctrl_c_quits_even_inside_the_modal() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        press_code(&mut app, KeyCode::Char('2'));
        press_code(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn submitted_form_reaches_the_store() {
        let dir = TempDir::new().unwrap();
        let mut app = started_app(&dir).await;
        press_code(&mut app, KeyCode::Char('2'));
        press_code(&mut app, KeyCode::Char('n'));
        for c in "Kite".chars() {
            press_code(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.quests.is_loading());

        settle(&mut app).await;
        assert!(app.quests.modal().is_none());
        assert_eq!(app.quests.quests()[0].title, "Kite");
        assert_eq!(app.store.fetch_quests().await.unwrap().len(), 1);
    }
}
