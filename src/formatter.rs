//! Log line formatter that stamps each event with wall time and the simulation tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Ticks simulated so far, shown on every log line.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Ticks are shown as four hex digits and wrap.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

/// `HH:MM:SS.ssss 0xTICK LEVEL span{fields}: target: message fields`
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let timestamp = OffsetDateTime::now_utc()
            .format(&TIMESTAMP_FORMAT)
            .map_err(|_| fmt::Error)?;
        Style::Dim.write(&mut writer, timestamp)?;
        writer.write_char(' ')?;

        Style::Dim.write(&mut writer, format_args!("0x{:04X}", tick_count() & TICK_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        Style::for_level(meta.level()).write(&mut writer, format_args!("{:>5}", meta.level().as_str()))?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut any = false;
            for span in scope.from_root() {
                any = true;
                Style::Bold.write(&mut writer, span.metadata().name())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>().filter(|f| !f.is_empty()) {
                    Style::Bold.write(&mut writer, format_args!("{{{fields}}}"))?;
                }
                Style::Dim.write(&mut writer, ':')?;
            }
            if any {
                writer.write_char(' ')?;
            }
        }

        Style::Dim.write(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// ANSI styling, dropped when the writer does not support escapes.
#[derive(Debug, Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Color(u8),
}

impl Style {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::TRACE => Style::Color(35),
            Level::DEBUG => Style::Color(34),
            Level::INFO => Style::Color(32),
            Level::WARN => Style::Color(33),
            Level::ERROR => Style::Color(31),
        }
    }

    fn write(self, writer: &mut Writer<'_>, value: impl fmt::Display) -> fmt::Result {
        if !writer.has_ansi_escapes() {
            return write!(writer, "{value}");
        }

        match self {
            Style::Dim => write!(writer, "\x1b[2m{value}\x1b[0m"),
            Style::Bold => write!(writer, "\x1b[1m{value}\x1b[0m"),
            Style::Color(code) => write!(writer, "\x1b[{code}m{value}\x1b[0m"),
        }
    }
}

/// Advances the tick shown in log lines. Called once per simulated frame.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
