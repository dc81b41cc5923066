use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use recipebox_core::{update, AppState, AppViewModel, Msg, RecipeId};
use recipebox_logging::app_info;

use super::debounce::Debouncer;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui;

/// Quiet period for the free-text search input. Sort and
/// favorites-only changes are never debounced.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Event poll timeout; bounds how late a debounce deadline can fire.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    app_info!("Recipebox starting");

    let state_dir = std::env::current_dir().context("resolve state directory")?;
    let effects = EffectRunner::new(state_dir.clone());

    let restored = persistence::load_favorites(&state_dir);
    let (mut state, startup_effects) = update(AppState::new(), Msg::RestoreFavorites(restored));
    effects.run(startup_effects);
    // The first draw happens unconditionally.
    let _ = state.consume_dirty();

    let mut app = App::new(state, effects);

    let mut terminal = setup_terminal()?;
    let result = app.event_loop(&mut terminal);
    let restored_terminal = restore_terminal(&mut terminal);
    result.and(restored_terminal)
}

enum KeyOutcome {
    Redraw,
    NoChange,
    Quit,
}

struct App {
    state: AppState,
    view: AppViewModel,
    /// Host-side echo of the search field; runs ahead of the committed
    /// query while the debounce window is open.
    search_input: String,
    /// Host-local card selection; not part of the core state.
    selected: usize,
    debouncer: Debouncer<String>,
    effects: EffectRunner,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        let view = state.view();
        let search_input = state.search_query().to_string();
        Self {
            state,
            view,
            search_input,
            selected: 0,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            effects,
        }
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|frame| {
                        ui::render::draw(frame, &self.view, &self.search_input, self.selected)
                    })
                    .context("draw frame")?;
                needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL).context("poll terminal events")? {
                match event::read().context("read terminal event")? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match self.handle_key(key) {
                            KeyOutcome::Quit => return Ok(()),
                            KeyOutcome::Redraw => needs_redraw = true,
                            KeyOutcome::NoChange => {}
                        }
                    }
                    Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                }
            }

            // Trailing edge of the search debounce.
            if let Some(query) = self.debouncer.poll() {
                if self.dispatch(Msg::SearchChanged(query)) {
                    needs_redraw = true;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => KeyOutcome::Quit,
                // Immediate, never debounced.
                KeyCode::Char('f') => {
                    let enabled = !self.view.favorites_only;
                    redraw_if(self.dispatch(Msg::FavoritesOnlySet(enabled)))
                }
                KeyCode::Char('s') => {
                    let mode = self.view.sort_mode.cycled();
                    redraw_if(self.dispatch(Msg::SortModeChanged(mode)))
                }
                KeyCode::Char('h') => match self.selected_id() {
                    Some(id) => redraw_if(self.dispatch(Msg::FavoriteToggled(id))),
                    None => KeyOutcome::NoChange,
                },
                KeyCode::Char('u') => {
                    self.search_input.clear();
                    self.debouncer.submit(String::new());
                    KeyOutcome::Redraw
                }
                _ => KeyOutcome::NoChange,
            };
        }

        match key.code {
            KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => match self.selected_id() {
                Some(id) => redraw_if(self.dispatch(Msg::DetailsToggled(id))),
                None => KeyOutcome::NoChange,
            },
            KeyCode::Backspace => {
                if self.search_input.pop().is_some() {
                    self.debouncer.submit(self.search_input.clone());
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::NoChange
                }
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.debouncer.submit(self.search_input.clone());
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::NoChange,
        }
    }

    /// Runs the pure update, executes effects, and refreshes the view
    /// model when the state reports itself dirty.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);

        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            self.view = view;
            self.clamp_selection();
        }
        was_dirty
    }

    fn selected_id(&self) -> Option<RecipeId> {
        self.view.cards.get(self.selected).map(|card| card.id)
    }

    fn move_selection(&mut self, delta: isize) -> KeyOutcome {
        let last = self.view.cards.len().saturating_sub(1);
        let next = if delta < 0 {
            self.selected.saturating_sub(1)
        } else {
            (self.selected + 1).min(last)
        };
        if next == self.selected {
            KeyOutcome::NoChange
        } else {
            self.selected = next;
            KeyOutcome::Redraw
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.view.cards.len().saturating_sub(1));
    }
}

fn redraw_if(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Redraw
    } else {
        KeyOutcome::NoChange
    }
}

fn setup_terminal() -> anyhow::Result<Tui> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    terminal::disable_raw_mode().context("disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
