//! Sky Hop headless entry point
//!
//! Runs the simulation without a window: the autopilot plays, a fixed-step
//! accumulator drives the world at the requested frame rate, and a summary is
//! printed as JSON when the run ends.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use sky_hop::WorldConfig;
    use sky_hop::consts::{MAX_SUBSTEPS, SIM_DT};
    use sky_hop::sim::{ReplayRecorder, World, autopilot_intent};

    const USAGE: &str = "usage: sky-hop [--seed <n>] [--ticks <n>] [--fps <n>] [--config <path>] [--record <path>]";

    #[derive(Debug)]
    struct Args {
        seed: u64,
        ticks: u64,
        fps: f32,
        config: Option<PathBuf>,
        record: Option<PathBuf>,
    }

    impl Default for Args {
        fn default() -> Self {
            Self {
                seed: 1,
                ticks: 3600,
                fps: 60.0,
                config: None,
                record: None,
            }
        }
    }

    fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut args = Args::default();
        while let Some(flag) = raw.next() {
            let mut value = || raw.next().ok_or_else(|| format!("missing value for {flag}"));
            match flag.as_str() {
                "--seed" => args.seed = value()?.parse().map_err(|e| format!("--seed: {e}"))?,
                "--ticks" => args.ticks = value()?.parse().map_err(|e| format!("--ticks: {e}"))?,
                "--fps" => {
                    let fps: f32 = value()?.parse().map_err(|e| format!("--fps: {e}"))?;
                    if !fps.is_finite() || fps <= 0.0 {
                        return Err(format!("--fps must be positive, got {fps}"));
                    }
                    args.fps = fps;
                }
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--record" => args.record = Some(PathBuf::from(value()?)),
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(args)
    }

    /// Fixed-step driver holding the world and the frame accumulator
    struct Driver {
        world: World,
        accumulator: f32,
        recorder: Option<ReplayRecorder>,
    }

    impl Driver {
        /// Run as many simulation steps as `dt` of wall time covers
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let intent = autopilot_intent(&self.world.snapshot(), self.world.config());
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.record(&intent);
                }
                self.world.tick(SIM_DT, &intent);
                self.accumulator -= SIM_DT;
                substeps += 1;

                if self.world.is_game_over() {
                    self.accumulator = 0.0;
                    break;
                }
            }
        }
    }

    fn load_config(path: Option<&PathBuf>) -> Result<WorldConfig, String> {
        let Some(path) = path else {
            return Ok(WorldConfig::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        WorldConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn run() -> ExitCode {
        env_logger::init();

        let args = match parse_args(std::env::args().skip(1)) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{e}\n{USAGE}");
                return ExitCode::from(2);
            }
        };
        let config = match load_config(args.config.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid config: {e}");
                return ExitCode::FAILURE;
            }
        };

        let recorder = args
            .record
            .as_ref()
            .map(|_| ReplayRecorder::new(config.clone(), args.seed, SIM_DT));
        let world = match World::new(config, args.seed) {
            Ok(world) => world,
            Err(e) => {
                log::error!("Invalid config: {e}");
                return ExitCode::FAILURE;
            }
        };
        let mut driver = Driver {
            world,
            accumulator: 0.0,
            recorder,
        };

        log::info!("Sky Hop (headless) starting: seed {}, {} ticks", args.seed, args.ticks);

        let frame_dt = 1.0 / args.fps;
        while driver.world.time_ticks() < args.ticks && !driver.world.is_game_over() {
            driver.update(frame_dt);
        }

        let world = &driver.world;
        log::info!(
            "Run finished after {} ticks: score {}, height {:.0}, scroll speed {:.2}, game over {}",
            world.time_ticks(),
            world.score(),
            world.camera_offset(),
            world.scroll_speed(),
            world.is_game_over()
        );

        if let (Some(path), Some(recorder)) = (args.record.as_ref(), driver.recorder.take()) {
            let written = recorder
                .finish()
                .to_json()
                .map_err(|e| e.to_string())
                .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
            match written {
                Ok(()) => log::info!("Replay written to {}", path.display()),
                Err(e) => {
                    log::error!("Failed to write replay to {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        }

        let summary = serde_json::json!({
            "seed": args.seed,
            "ticks": world.time_ticks(),
            "score": world.score(),
            "height": world.camera_offset(),
            "scroll_speed": world.scroll_speed(),
            "game_over": world.is_game_over(),
        });
        println!("{summary}");
        ExitCode::SUCCESS
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders on the web drive `sky_hop::sim::World` directly
}
