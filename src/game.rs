//! Caller-owned frame driver
//!
//! Wraps a [`GameState`] with the pieces around the pure tick: a fixed
//! timestep accumulator, latched input from event handlers, and leaderboard
//! recording when a session ends.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::highscores::Leaderboard;
use crate::persistence::Storage;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SessionPhase, TickInput, tick};

/// A playable game: one session at a time plus its leaderboard
pub struct Game {
    state: GameState,
    settings: Settings,
    leaderboard: Leaderboard,
    storage: Box<dyn Storage>,
    /// Latched input, consumed at the start of each tick
    input: TickInput,
    accumulator: f32,
    /// Rank of the most recent finished session (None if it missed the board)
    last_rank: Option<usize>,
}

impl Game {
    /// Build a game, loading the leaderboard from `storage`
    pub fn new(seed: u64, settings: Settings, storage: Box<dyn Storage>) -> Self {
        let leaderboard = Leaderboard::load(&*storage);
        log::info!("New game (seed {}, {})", seed, settings.difficulty.as_str());
        let mut state = GameState::new(seed, settings.tuning());
        apply_visual_settings(&mut state, &settings);
        Self {
            state,
            settings,
            leaderboard,
            storage,
            input: TickInput::default(),
            accumulator: 0.0,
            last_rank: None,
        }
    }

    /// Build a game using settings persisted in `storage`
    pub fn from_storage(seed: u64, storage: Box<dyn Storage>) -> Self {
        let settings = Settings::load(&*storage);
        Self::new(seed, settings, storage)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios and tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Start the first session
    pub fn start(&mut self) {
        if self.state.phase == SessionPhase::NotStarted {
            self.state.tuning = self.settings.tuning();
        }
        self.state.start();
    }

    /// Throw away the current session and start a fresh one
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.input.shoot = false;
        self.input.pause = false;
        self.last_rank = None;
        self.state.tuning = self.settings.tuning();
        self.state.reset();
    }

    /// Replace and persist settings. Tuning changes apply from the next reset.
    pub fn set_settings(&mut self, settings: Settings) {
        if let Err(e) = settings.save(&mut *self.storage) {
            log::warn!("Failed to save settings: {}", e);
        }
        apply_visual_settings(&mut self.state, &settings);
        self.settings = settings;
    }

    // === Input latches (written by event handlers, read by the tick) ===

    /// Pointer moved: centre the player under `x`
    pub fn set_pointer_x(&mut self, x: f32) {
        self.input.target_x = Some(x - self.state.tuning.player_width / 2.0);
    }

    /// Pointer left the field; fall back to keyboard movement
    pub fn clear_pointer(&mut self) {
        self.input.target_x = None;
    }

    /// Keyboard direction in [-1, 1] (0 to stop)
    pub fn set_move_dir(&mut self, dir: f32) {
        self.input.move_dir = dir.clamp(-1.0, 1.0);
    }

    pub fn request_shoot(&mut self) {
        self.input.shoot = true;
    }

    pub fn request_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Advance by real elapsed seconds. Returns every event produced.
    pub fn frame(&mut self, elapsed: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != SessionPhase::Running {
            return events;
        }

        // Non-finite elapsed (NaN from a bad timestamp) would poison the accumulator
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let delta = tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.shoot = false;
            self.input.pause = false;

            let ended = delta.ended();
            events.extend(delta.events);
            if ended.is_some() {
                self.record_result();
                self.accumulator = 0.0;
                break;
            }
        }

        // Hit the substep cap: drop the backlog instead of fast-forwarding later
        if substeps >= MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        events
    }

    /// Put the finished session on the leaderboard and persist it
    fn record_result(&mut self) {
        let name = self.state.player_name;
        let score = self.state.score;
        self.last_rank = self.leaderboard.add_score(name, score);
        match self.last_rank {
            Some(rank) => log::info!("{} placed #{} with {}", name, rank, score),
            None => log::info!("{} scored {} (not a high score)", name, score),
        }
        if let Err(e) = self.leaderboard.save(&mut *self.storage) {
            log::warn!("Failed to save high scores: {}", e);
        }
    }
}

fn apply_visual_settings(state: &mut GameState, settings: &Settings) {
    state.max_particles = settings.max_particles();
    state.floating_text_enabled = settings.floating_text;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn game() -> Game {
        Game::new(7, Settings::default(), Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_frame_before_start_is_inert() {
        let mut game = game();
        assert!(game.frame(0.016).is_empty());
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_substeps_capped() {
        let mut game = game();
        game.start();
        // Clamped to MAX_FRAME_DT, then capped at MAX_SUBSTEPS
        game.frame(5.0);
        assert_eq!(game.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_slow_frames_leave_no_backlog() {
        let mut game = game();
        game.start();
        game.state_mut().spawner.interval = f32::MAX;
        // Below 15 fps each frame is capped at MAX_SUBSTEPS ticks
        for _ in 0..200 {
            game.frame(0.1);
        }
        let ticks = game.state().time_ticks;
        assert_eq!(ticks, 200 * MAX_SUBSTEPS as u64);

        // No real time passes: at most the one leftover tick may run
        for _ in 0..100 {
            game.frame(0.0);
        }
        assert!(game.state().time_ticks - ticks <= 1);
    }

    #[test]
    fn test_nan_elapsed_is_ignored() {
        let mut game = game();
        game.start();
        game.frame(f32::NAN);
        game.frame(f32::INFINITY);
        assert_eq!(game.state().time_ticks, 0);

        for _ in 0..60 {
            game.frame(1.0 / 60.0);
        }
        assert!(game.state().time_ticks >= 110);
        assert_eq!(game.state().phase, SessionPhase::Running);
    }

    #[test]
    fn test_seed_reproduces_names() {
        let mut a = game();
        let mut b = Game::new(a.state().seed, Settings::default(), Box::new(MemoryStorage::default()));
        a.start();
        b.start();
        assert_eq!(a.state().seed, 7);
        assert_eq!(a.state().player_name, b.state().player_name);
    }

    #[test]
    fn test_shoot_is_one_shot() {
        let mut game = game();
        game.start();
        game.request_shoot();
        game.frame(SIM_DT * 4.0);
        assert_eq!(game.state().projectiles.len(), 1);
    }

    #[test]
    fn test_pointer_centres_player() {
        let mut game = game();
        game.start();
        game.set_pointer_x(200.0);
        game.frame(SIM_DT);
        let player = &game.state().player.aabb;
        assert!((player.center().x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_settings_persist() {
        let mut game = game();
        let settings = Settings {
            floating_text: false,
            ..Default::default()
        };
        game.set_settings(settings.clone());
        assert!(!game.state().floating_text_enabled);
        assert_eq!(game.settings(), &settings);
    }
}
