//! Coin Catcher entry point
//!
//! The browser build is driven from JS through `coin_catcher::web`. Natively
//! this runs headless rounds with an autoplayer so the simulation can be
//! watched from the log.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use coin_catcher::consts::FRAME_INTERVAL_MS;
    use coin_catcher::sim::{GameEvent, GamePhase};
    use coin_catcher::{Game, GameError, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "coin-catcher", about = "Headless Coin Catcher rounds with an autoplayer")]
    pub struct Args {
        /// Settings JSON file (missing keys use defaults)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of sessions (rounds) to play
        #[arg(long, default_value_t = 3)]
        sessions: u32,

        /// Autoplayer click rate
        #[arg(long, default_value_t = 2.0)]
        clicks_per_second: f64,

        /// Autoplayer aim error in pixels
        #[arg(long, default_value_t = 12.0)]
        jitter: f32,

        /// Name submitted to the leaderboard
        #[arg(long, default_value = "Autoplayer")]
        name: String,
    }

    /// Idle-mode player: aims at the front-most coin with some jitter
    struct AutoPlayer {
        rng: Pcg32,
        click_interval_ms: f64,
        next_click_ms: f64,
        jitter: f32,
    }

    impl AutoPlayer {
        fn new(seed: u64, clicks_per_second: f64, jitter: f32) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
                click_interval_ms: 1000.0 / clicks_per_second.max(0.1),
                next_click_ms: 0.0,
                jitter: jitter.max(0.0),
            }
        }

        fn reset(&mut self, now_ms: f64) {
            self.next_click_ms = now_ms + self.click_interval_ms;
        }

        fn poll(&mut self, game: &mut Game, now_ms: f64) {
            if now_ms < self.next_click_ms {
                return;
            }
            self.next_click_ms += self.click_interval_ms;

            let Some(target) = game.coins().last().map(|c| c.pos) else {
                return;
            };
            let dx = self.rng.random_range(-self.jitter..=self.jitter);
            let dy = self.rng.random_range(-self.jitter..=self.jitter);
            game.pointer_down(target.x + dx, target.y + dy);
        }
    }

    pub fn run() -> Result<(), GameError> {
        let args = Args::parse();

        let settings = match &args.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Seed: {}", seed);

        let mut game = Game::new(seed, settings)?;
        let mut player = AutoPlayer::new(seed, args.clicks_per_second, args.jitter);
        let mut now_ms = 0.0;

        for round in 1..=args.sessions {
            game.start(now_ms);
            player.reset(now_ms);

            while game.phase() == GamePhase::Playing {
                now_ms += FRAME_INTERVAL_MS;
                game.on_display_frame(now_ms);
                player.poll(&mut game, now_ms);
            }

            for event in game.drain_events() {
                match event {
                    GameEvent::BonusUnlocked { score } => {
                        log::info!("Round {}: coupon unlocked at {}", round, score)
                    }
                    GameEvent::GameOver {
                        score,
                        new_high_score: true,
                        ..
                    } => log::info!("Round {}: new high score {}", round, score),
                    _ => {}
                }
            }

            let name = format!("{} #{}", args.name.trim(), round);
            if !game.submit_score(&name) {
                game.dismiss_name_dialog();
            }
            println!(
                "Round {}: score {} (best {}){}",
                round,
                game.score(),
                game.high_score(),
                if game.bonus_unlocked() { " + coupon" } else { "" }
            );
        }

        println!("\nLeaderboard");
        for (i, entry) in game.leaderboard().iter().enumerate() {
            println!(
                "{:>2}. {:<20} {:>6}  {}{}",
                i + 1,
                entry.name,
                entry.score,
                entry.date,
                if entry.bonus_unlocked { "  [coupon]" } else { "" }
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Catcher (native, headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is coin_catcher::web, this is just to satisfy the compiler
}
