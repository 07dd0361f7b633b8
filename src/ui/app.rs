use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crate::moves::{MoveSource, RandomSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    // A seat with no source is human-controlled through the keyboard
    seats: [Option<Box<dyn MoveSource>>; 2],
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let first = config.players.first.to_player();
        App {
            config,
            game_state: GameState::initial_with(first),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            seats: [None, None],
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.machine_turn();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_ms);
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Machine seats move on the tick, not on keyboard input
                if self.current_seat_is_human() {
                    self.drop_piece(self.selected_column);
                }
            }
            KeyCode::Char('r') => {
                // Reset game, keeping seat assignments
                self.game_state = GameState::initial_with(self.config.players.first.to_player());
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('a') => self.assign_seat(Player::Yellow, Some(Box::new(RandomSource::new()))),
            KeyCode::Char('h') => self.assign_seat(Player::Yellow, None),
            KeyCode::Char('A') => self.assign_seat(Player::Red, Some(Box::new(RandomSource::new()))),
            KeyCode::Char('H') => self.assign_seat(Player::Red, None),
            _ => {}
        }
    }

    fn assign_seat(&mut self, player: Player, source: Option<Box<dyn MoveSource>>) {
        let label = source.as_deref().map_or("Human", |s| s.name()).to_string();
        self.seats[player.index()] = source;
        self.message = Some(format!("{} seat: {}", player.default_name(), label));
    }

    fn current_seat_is_human(&self) -> bool {
        self.seats[self.game_state.current_player().index()].is_none()
    }

    /// Let a machine-controlled seat take its turn
    fn machine_turn(&mut self) {
        if self.game_state.is_terminal() {
            return;
        }

        let seat = self.game_state.current_player().index();
        let column = match self.seats[seat].as_mut() {
            Some(source) => source.next_column(&self.game_state),
            None => return,
        };

        std::thread::sleep(Duration::from_millis(self.config.ui.machine_delay_ms));
        // A rejected column just comes around again on the next tick
        self.drop_piece(column);
    }

    /// Drop the current player's piece in a column
    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", self.config.name_of(player))
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Seat summary for the header, e.g. "Human vs Random"
    fn mode_label(&self) -> String {
        let label = |player: Player| {
            self.seats[player.index()]
                .as_deref()
                .map_or("Human", |s| s.name())
        };
        format!("{} vs {}", label(Player::Red), label(Player::Yellow))
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label(),
            &self.config,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
