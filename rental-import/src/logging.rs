//! Process logger setup.
//!
//! Messages go to the console through `env_logger` (default `debug`,
//! overridable with `RUST_LOG`) and, at `info` and above, to a log file that is
//! truncated at startup.

use crate::error::LoggingError;
use env_logger::Env;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const FILE_LEVEL: LevelFilter = LevelFilter::Info;

/// Short file name of the call site, e.g. `coordinator.rs`.
fn source_file<'a>(record: &Record<'a>) -> &'a str {
    record
        .file()
        .map(|file| {
            Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file)
        })
        .unwrap_or("<unknown>")
}

struct FileSink {
    level: LevelFilter,
    writer: Mutex<BufWriter<File>>,
}

/// Fans records out to the console logger and an optional log file.
pub struct TeeLogger {
    console: env_logger::Logger,
    file: Option<FileSink>,
}

impl TeeLogger {
    pub fn new(log_file: Option<&Path>) -> Result<Self, LoggingError> {
        let console = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{}:{:<4} {}",
                    source_file(record),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .build();

        let file = log_file
            .map(|path| {
                File::create(path)
                    .map(|file| FileSink {
                        level: FILE_LEVEL,
                        writer: Mutex::new(BufWriter::new(file)),
                    })
                    .map_err(|source| LoggingError::LogFile {
                        path: path.to_path_buf(),
                        source,
                    })
            })
            .transpose()?;

        Ok(Self { console, file })
    }

    /// Most verbose level either sink accepts.
    pub fn max_level(&self) -> LevelFilter {
        let file_level = self.file.as_ref().map_or(LevelFilter::Off, |sink| sink.level);
        self.console.filter().max(file_level)
    }
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
            || self
                .file
                .as_ref()
                .is_some_and(|sink| metadata.level() <= sink.level)
    }

    fn log(&self, record: &Record) {
        self.console.log(record);

        if let Some(sink) = &self.file {
            if record.level() <= sink.level {
                let mut writer = sink.writer.lock();
                let _ = writeln!(
                    writer,
                    "{} {}:{:<4} {} {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                    source_file(record),
                    record.line().unwrap_or(0),
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(sink) = &self.file {
            let _ = sink.writer.lock().flush();
        }
    }
}

/// Install the tee logger as the process-wide logger.
pub fn init(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let logger = TeeLogger::new(log_file)?;
    let max_level = logger.max_level();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::fs;

    #[test]
    fn file_sink_keeps_info_and_above() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.log");
        let logger = TeeLogger::new(Some(&path)).expect("logger");

        for (level, message) in [
            (Level::Debug, "row added"),
            (Level::Info, "file loaded"),
            (Level::Error, "insert failed"),
        ] {
            logger.log(
                &Record::builder()
                    .level(level)
                    .file(Some("src/import/coordinator.rs"))
                    .line(Some(42))
                    .args(format_args!("{message}"))
                    .build(),
            );
        }
        logger.flush();

        let contents = fs::read_to_string(&path).expect("log written");
        assert!(!contents.contains("row added"));
        assert!(contents.contains("coordinator.rs:42   INFO file loaded"));
        assert!(contents.contains("coordinator.rs:42   ERROR insert failed"));
    }

    #[test]
    fn log_file_is_truncated_on_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.log");
        fs::write(&path, "previous run\n").expect("seed log");

        let logger = TeeLogger::new(Some(&path)).expect("logger");
        logger.flush();

        assert_eq!(fs::read_to_string(&path).expect("log exists"), "");
    }
}
