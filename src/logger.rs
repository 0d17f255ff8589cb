use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

pub fn verbosity_to_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Records go to stderr so they never mix with output paths.
pub fn init(verbosity: u8) {
    let result = Builder::new()
        .filter_level(verbosity_to_level(verbosity))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {: <5} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
    if let Err(e) = result {
        eprintln!("logger already initialized: {e}");
    }
}
