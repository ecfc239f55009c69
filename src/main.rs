use tataku_runtime::prelude::*;

#[macro_use]
extern crate log;

const USAGE:&str = "usage: tataku-runtime <chart.json> <replay.json> [settings.json] [mode]";
const FPS:f32 = 1000.0;

// main fn
#[tokio::main]
async fn main() {
    init_logging(log::LevelFilter::Info);

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

/// play a replay back against a chart, headless, and print the score it gets
async fn run() -> TatakuResult {
    let mut args = std::env::args().skip(1);
    let (Some(chart_path), Some(replay_path)) = (args.next(), args.next()) else {
        return Err(USAGE.to_owned().into())
    };
    let settings_path = args.next().unwrap_or_else(|| SETTINGS_FILE.to_owned());

    let settings = Settings::load(&settings_path);
    let chart = Chart::load(&chart_path)?;
    let replay = Replay::load(&replay_path)?;

    let playmode = match args.next() {
        Some(mode) => mode.parse::<PlayMode>()?,
        None => replay.playmode.parse::<PlayMode>()?,
    };
    info!("playing {} [{}] as {}", chart.metadata.title, chart.metadata.version, playmode.display_name());

    let audio = Arc::new(InstantAudio::new());
    let mut manager = manager_from_playmode(playmode, chart, &settings, audio)?;
    manager.set_replay(replay);
    let mut updates = manager.subscribe();

    let (play_loop, _handle) = PlayLoop::new(manager, FPS);
    let manager = play_loop.run().await?;

    let mut final_score = None;
    while let Ok(update) = updates.try_recv() {
        match update {
            ScoreUpdate::Live(score) => trace!("{} ({}x)", score.score, score.combo),
            ScoreUpdate::Final(score) => final_score = Some(score),
        }
    }
    let Some(score) = final_score else {
        warn!("session ended without a score ({:?})", manager.state());
        return Ok(())
    };

    info!("{} points, {:.2}% accuracy, {}x max combo", score.score, score.accuracy, score.max_combo);
    info!("300: {}, 100: {}, 50: {}, miss: {}", score.x300, score.x100, score.x50, score.xmiss);
    println!("{}", serde_json::to_string_pretty(&score)?);

    // keep the scored replay around
    std::fs::create_dir_all(REPLAYS_DIR)?;
    let path = Path::new(REPLAYS_DIR).join(format!("{}-{}.json", playmode, score.time));
    manager.replay.save(&path)?;
    debug!("replay saved to {}", path.display());

    Ok(())
}
