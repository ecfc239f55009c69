use std::io::Write;
use log::LevelFilter;

/// set up the global logger.
///
/// `RUST_LOG` overrides `level`. calling this more than once is a no-op
pub fn init_logging(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        debug!("logging initialized at {level}");
    }
}


#[test]
fn init_twice_is_fine() {
    init_logging(LevelFilter::Debug);
    init_logging(LevelFilter::Trace);
    info!("still logging");
}
