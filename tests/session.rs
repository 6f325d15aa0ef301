use catchfall::consts::SIM_DT;
use catchfall::persistence::{MemoryStorage, Storage};
use catchfall::sim::{GameEvent, ObjectKind, SessionPhase};
use catchfall::{Game, Leaderboard, Settings};

fn new_game(seed: u64) -> Game {
    let mut game = Game::new(seed, Settings::default(), Box::new(MemoryStorage::default()));
    game.start();
    game
}

/// Drop an object right on the player so the next tick catches it
fn inject_catch(game: &mut Game, kind: ObjectKind) {
    let state = game.state_mut();
    let x = state.player.aabb.center().x - state.tuning.object_width / 2.0;
    let y = state.player.aabb.top();
    state.push_object(x, y, kind);
}

/// Put an object just past the bottom edge so the next tick misses it
fn inject_miss(game: &mut Game) {
    let state = game.state_mut();
    let y = state.tuning.field_height;
    state.push_object(0.0, y, ObjectKind::Good);
}

#[test]
fn one_good_catch() {
    let mut game = new_game(1);
    inject_catch(&mut game, ObjectKind::Good);
    game.frame(SIM_DT);

    let state = game.state();
    assert_eq!(state.score, 1);
    assert_eq!(state.lives, state.tuning.initial_lives);
    assert_eq!(state.level, 1);
}

#[test]
fn five_good_catches_level_up() {
    let mut game = new_game(2);
    let interval = game.state().spawner.interval;
    for _ in 0..5 {
        inject_catch(&mut game, ObjectKind::Good);
    }
    let events = game.frame(SIM_DT);

    let state = game.state();
    assert_eq!(state.score, 5);
    assert_eq!(state.level, 2);
    assert!((interval - state.spawner.interval - state.tuning.spawn_interval_step).abs() < 1e-6);
    assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
}

#[test]
fn last_life_miss_records_loss() {
    let mut game = new_game(3);
    game.state_mut().lives = 1;
    game.state_mut().score = 4;
    inject_miss(&mut game);
    game.frame(SIM_DT);

    assert_eq!(game.state().lives, 0);
    assert_eq!(game.state().phase, SessionPhase::Lost);
    let board = game.leaderboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].score, 4);
    assert_eq!(board.entries()[0].name, game.state().player_name);
    assert_eq!(game.last_rank(), Some(1));

    // Terminal: frames do nothing until reset
    assert!(game.frame(0.05).is_empty());
    game.reset();
    assert_eq!(game.state().phase, SessionPhase::Running);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.leaderboard().len(), 1);
}

#[test]
fn reaching_win_score_wins() {
    let mut game = new_game(4);
    let win = game.state().tuning.win_score;
    game.state_mut().score = win - 1;
    inject_catch(&mut game, ObjectKind::Good);
    game.frame(SIM_DT);

    let state = game.state();
    assert_eq!(state.score, win);
    assert!(state.lives > 0);
    assert_eq!(state.phase, SessionPhase::Won);
    assert_eq!(game.leaderboard().top_score(), Some(win));
}

#[test]
fn leaderboard_survives_restart() {
    let mut storage = MemoryStorage::default();
    let mut board = Leaderboard::new();
    board.add_score("Nova", 12);
    board.save(&mut storage).unwrap();

    let mut game = Game::new(5, Settings::default(), Box::new(storage));
    assert_eq!(game.leaderboard().top_score(), Some(12));

    game.start();
    game.state_mut().lives = 1;
    inject_miss(&mut game);
    game.frame(SIM_DT);
    assert_eq!(game.leaderboard().len(), 2);
    assert_eq!(game.leaderboard().top_score(), Some(12));
}

#[test]
fn corrupt_leaderboard_starts_empty() {
    let mut storage = MemoryStorage::default();
    storage.write(Leaderboard::STORAGE_KEY, "{{{ not json").unwrap();
    let game = Game::new(6, Settings::default(), Box::new(storage));
    assert!(game.leaderboard().is_empty());
}

#[test]
fn autopilot_session_finishes() {
    let mut game = new_game(7);
    game.set_idle_mode(true);
    let mut frames = 0;
    while game.state().phase == SessionPhase::Running && frames < 10_000 {
        game.frame(1.0 / 60.0);
        frames += 1;
    }
    assert!(game.state().phase.is_terminal());
    assert_eq!(game.leaderboard().len(), 1);
}

#[test]
fn same_seed_same_session() {
    let run = |seed| {
        let mut game = new_game(seed);
        game.set_idle_mode(true);
        for _ in 0..600 {
            game.frame(1.0 / 60.0);
        }
        let state = game.state();
        (state.score, state.lives, state.level, state.player_name)
    };
    assert_eq!(run(99), run(99));
}
