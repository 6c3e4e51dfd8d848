use truku_gen_core::io::StdConsole;
use truku_gen_core::{GameConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, filtered by RUST_LOG (warnings only by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // TRUKU_SEED=<u64> replays the same session
    let config = GameConfig::from_env();
    if let Some(seed) = config.seed {
        log::info!("using seed {seed}");
    }

    let rng = config.rng();
    let mut session = Session::new(config, StdConsole::new(), rng);
    session.run()?;

    Ok(())
}
