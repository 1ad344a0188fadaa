//! Asteroids headless entry point
//!
//! Loads settings, runs the simulation for a fixed number of frames with a
//! scripted pilot and prints the last frame as text.
//!
//! Usage: `asteroids-sim [settings.json]`

use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use asteroids_sim::Settings;
use asteroids_sim::consts::*;
use asteroids_sim::platform::{KeyLevels, KeyTracker};
use asteroids_sim::renderer::{self, Canvas, Models};
use asteroids_sim::sim::{Frame, GameEvent, GameState, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    keys: KeyTracker,
    accumulator: f32,
    last_frame: Frame,
    rounds_lost: u32,
    fields_cleared: u32,
    best_score: u64,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::with_config(seed, settings.field(), settings.tuning.clone()),
            keys: KeyTracker::new(),
            accumulator: 0.0,
            last_frame: Frame::default(),
            rounds_lost: 0,
            fields_cleared: 0,
            best_score: 0,
        }
    }

    /// Run simulation substeps for `frame_time` seconds of wall-clock
    fn update(&mut self, frame_time: f32, keys: KeyLevels) {
        self.accumulator += frame_time.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.keys.poll(keys);
            let frame = tick(&mut self.state, &input, SIM_DT);
            self.record(&frame);
            self.last_frame = frame;
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    fn record(&mut self, frame: &Frame) {
        for event in &frame.events {
            match event {
                GameEvent::CraftDestroyed => self.rounds_lost += 1,
                GameEvent::FieldCleared { .. } => self.fields_cleared += 1,
                _ => {}
            }
            log::debug!("frame {}: {:?}", self.state.frame_count, event);
        }
        self.best_score = self.best_score.max(frame.score);
    }
}

/// Keep turning and tap fire every few frames
fn pilot(frame: u32) -> KeyLevels {
    KeyLevels {
        right: frame % 90 < 45,
        left: false,
        up: frame % 240 < 20,
        space: frame % 12 < 6,
    }
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Asteroids starting (seed {}, {} frames)", seed, settings.frames);

    let mut game = Game::new(&settings, seed);
    let models = Models::generate(&mut Pcg32::seed_from_u64(seed));

    for frame in 0..settings.frames {
        game.update(settings.frame_time, pilot(frame));
    }

    log::info!(
        "Done after {} ticks: score {}, best {}, {} rounds lost, {} fields cleared",
        game.state.frame_count,
        game.state.score,
        game.best_score,
        game.rounds_lost,
        game.fields_cleared
    );

    if settings.render {
        let mut canvas = Canvas::for_field(settings.field_width, settings.field_height);
        renderer::present(&mut canvas, &models, &game.last_frame);
        print!("{canvas}");
    }

    if settings.dump_state {
        match serde_json::to_string_pretty(&game.state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize state: {}", e),
        }
    }
}
