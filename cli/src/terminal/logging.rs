use std::fmt;

use colored::*;
use tour_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

const PRINT_TARGET: &str = "tour::print";
const SUCCESS_TARGET: &str = "tour::success";

pub struct TourFormatter;

/// Pulls the `raw_msg` field out of a `tour::print` event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S, N> FormatEvent<S, N> for TourFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name().bright_black())?;
                let ext = span.extensions();
                if let Some(fields) = ext.get::<tracing_subscriber::fmt::FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{}", format!("{{{}}}", fields).bright_black())?;
                    }
                }
                write!(writer, " ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter directives for a run: the verbosity level, with terminal output and
/// success reports always let through.
pub fn directives(cfg: &Config) -> String {
    format!(
        "{},{}=info,{}=info",
        cfg.log_level(),
        PRINT_TARGET,
        SUCCESS_TARGET
    )
}

/// Builds the event filter. `env` (the value of `RUST_LOG`) replaces the
/// verbosity flags when it parses, but never silences terminal output or
/// success reports.
pub fn filter(cfg: &Config, env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let base: EnvFilter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(directives(cfg)));

    Ok(base
        .add_directive(format!("{PRINT_TARGET}=info").parse()?)
        .add_directive(format!("{SUCCESS_TARGET}=info").parse()?))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flags.
pub fn init(cfg: &Config) -> anyhow::Result<()> {
    let env: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(cfg, env.as_deref())?)
        .with_writer(std::io::stdout)
        .event_format(TourFormatter)
        .init();
    Ok(())
}

/// Renders events into a buffer instead of stdout.
#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::EnvFilter;

    use super::TourFormatter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn output_through<T>(filter: EnvFilter, emit: impl FnOnce() -> T) -> (T, String) {
        let out = Captured::default();
        let sink = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(move || sink.clone())
            .event_format(TourFormatter)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, emit);
        let bytes = out.0.lock().unwrap().clone();
        (result, String::from_utf8(bytes).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::capture::output_through;
    use super::*;

    fn emit_all() {
        crate::terminal::print::print("| a transcript line");
        tracing::info!(target: "tour::success", "tour finished");
        tracing::debug!(target: "tour_core::tour", "chapter starting");
    }

    #[test]
    fn print_target_survives_any_verbosity() {
        let quiet = Config::default();
        assert_eq!(directives(&quiet), "warn,tour::print=info,tour::success=info");

        let loud = Config {
            verbose: 3,
            ..Config::default()
        };
        assert!(directives(&loud).starts_with("trace,"));
    }

    #[test]
    fn rust_log_cannot_silence_terminal_output() {
        let cfg = Config::default();
        for env in ["warn", "off", "error,tour_core=debug"] {
            let (_, output) = output_through(filter(&cfg, Some(env)).unwrap(), emit_all);
            assert!(output.contains("| a transcript line\n"), "RUST_LOG={env}: {output:?}");
            assert!(output.contains("tour finished"), "RUST_LOG={env}: {output:?}");
        }
    }

    #[test]
    fn rust_log_still_sets_the_level_of_everything_else() {
        let cfg = Config::default();

        let (_, hidden) = output_through(filter(&cfg, Some("warn")).unwrap(), emit_all);
        assert!(!hidden.contains("chapter starting"));

        let (_, shown) = output_through(filter(&cfg, Some("tour_core=debug")).unwrap(), emit_all);
        assert!(shown.contains("chapter starting"));
    }

    #[test]
    fn unparsable_rust_log_falls_back_to_flags() {
        let cfg = Config::default();
        let (_, output) = output_through(filter(&cfg, Some("tour_core=loudest")).unwrap(), emit_all);
        assert!(output.contains("| a transcript line"));
        assert!(!output.contains("chapter starting"));
    }
}
