use anyhow::Result;
use chrono::Utc;
use log::LevelFilter;

/// Install the global logger, writing to stderr so command output on
/// stdout stays clean.
pub fn init(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = Utc::now().format("%H:%M:%S%.3f");
            out.finish(format_args!("[{} {} {}] {}", timestamp, record.level(), record.target(), message));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
