//! Logger setup for the CLI.
//!
//! All user-facing output goes through the `log` macros. Info lines are
//! printed bare; warnings and errors get a coloured prefix. `--verbose`
//! switches to timestamped lines with module targets.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Writes to stdout and mirrors the bytes, ANSI codes stripped, to a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Install the global logger. `RUST_LOG` still overrides the level.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| match record.level() {
        Level::Error => writeln!(
            buf,
            "{} {}",
            "error:".if_supports_color(Stdout, |t| t.bright_red()),
            record.args(),
        ),
        Level::Warn => writeln!(
            buf,
            "{} {}",
            "warning:".if_supports_color(Stdout, |t| t.yellow()),
            record.args(),
        ),
        _ if verbose => writeln!(
            buf,
            "[{} {:<5} {}] {}",
            buf.timestamp_millis(),
            record.level(),
            record.target(),
            record.args(),
        ),
        _ => writeln!(buf, "{}", record.args()),
    });

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_writer_strips_ansi_codes_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client-book.log");
        let mut tee = TeeWriter {
            file: File::create(&path).unwrap(),
        };

        let line = format!("{} Client id 3 updated.\n", "warning:".yellow());
        tee.write_all(line.as_bytes()).unwrap();
        tee.write_all(b"Client Ivan Petrov added.\n").unwrap();
        tee.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains('\x1b'));
        assert_eq!(
            contents,
            "warning: Client id 3 updated.\nClient Ivan Petrov added.\n"
        );
    }
}
