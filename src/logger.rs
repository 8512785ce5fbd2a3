use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt;

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to `log.txt` next to the executable, or stderr if that can't be opened.
/// `EMOTRANS_DEBUG` turns on debug-level output.
pub fn init() {
    let level = if std::env::var_os("EMOTRANS_DEBUG").is_some() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let builder = fmt().with_max_level(level).with_target(false);

    let path = exe_dir().join("log.txt");
    let (result, sink) = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(mut f) => {
            let _ = writeln!(f, "===== emotrans start =====");
            (builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(), path.display().to_string())
        }
        Err(_) => (builder.with_writer(std::io::stderr).try_init(), "stderr".to_string()),
    };
    if result.is_err() {
        // Someone else already installed a subscriber.
        return;
    }
    tracing::info!(%sink, "logger ready");
}
