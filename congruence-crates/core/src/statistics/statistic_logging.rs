//! Writes statistics as blocks of `{prefix} {name}={value}` lines. The command line solver writes
//! one block per instance of a batch, each closed by an optional end line.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where and how statistic blocks are written.
pub struct StatisticOptions {
    prefix: &'static str,
    block_end: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("block_end", &self.block_end)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

impl StatisticOptions {
    /// Writes every statistic to stdout behind `prefix`, with names as they are.
    pub fn new(prefix: &'static str) -> Self {
        StatisticOptions {
            prefix,
            block_end: None,
            casing: None,
            writer: Box::new(stdout()),
        }
    }

    /// The line written after the statistics of one instance.
    pub fn with_block_end(mut self, block_end: &'static str) -> Self {
        self.block_end = Some(block_end);
        self
    }

    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    fn write_statistic(&mut self, name: impl Display, value: impl Display) {
        let name = match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        // Statistics are best effort; a closed writer must not end the search.
        let _ = writeln!(self.writer, "{} {name}={value}", self.prefix);
    }

    fn end_block(&mut self) {
        if let Some(block_end) = self.block_end {
            let _ = writeln!(self.writer, "{block_end}");
        }
        let _ = self.writer.flush();
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Enables statistic logging for the rest of the process.
///
/// Only the first call has an effect; returns whether this call configured the logging.
pub fn configure_statistic_logging(options: StatisticOptions) -> bool {
    let mut configured = false;
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        configured = true;
        Mutex::new(options)
    });
    configured
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = options.lock() {
            action(&mut *options);
        }
    }
}

/// Writes `{prefix} {name}={value}`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| options.write_statistic(name, value));
}

/// Closes the statistic block of the current instance.
pub fn end_statistic_block() {
    with_options(StatisticOptions::end_block);
}
