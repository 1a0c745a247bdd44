use slog::{o, Discard, Drain, Logger};
use slog_async::Async;
use slog_term::{FullFormat, TermDecorator};

pub fn create_logger(for_module: &str) -> Logger {
    let decorator = TermDecorator::new().build();
    let drain = FullFormat::new(decorator)
        .use_utc_timestamp()
        .use_original_order()
        .build()
        .fuse();
    let async_drain = Async::new(drain).build().fuse();
    Logger::root(
        async_drain,
        o!("component" => "VVTable", "module" => for_module.to_owned()),
    )
}

/// Child of `parent` tagging every record with the recording it came from.
/// Without a parent the records are discarded.
pub(crate) fn recording_logger(parent: Option<Logger>, file_path: &str) -> Logger {
    parent
        .unwrap_or_else(|| Logger::root(Discard, o!()))
        .new(o!("file" => file_path.to_owned()))
}
