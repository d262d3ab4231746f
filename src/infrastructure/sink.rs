//! Sink adapters on top of `tracing`.
//!
//! `TracingSink` forwards warnings to whatever subscriber is active for the
//! current thread. Enablement is asked with the source name as the target, so
//! per-target directives such as `RUST_LOG=myapp::db=error` silence a single
//! source. Events are then dispatched under the [`SINK_TARGET`] target with the
//! source name attached as the `log_source` field.

use crate::application::ports::LogSink;
use crate::domain::source::LogSource;
use tracing::callsite::{Callsite, Identifier};
use tracing::field::{FieldSet, Value};
use tracing::metadata::Kind;
use tracing::subscriber::Interest;
use tracing::{dispatcher, Event, Level, Metadata};

/// Target of every event emitted by [`TracingSink`].
pub const SINK_TARGET: &str = "tracing_once";

static FIELD_NAMES: &[&str] = &["message", "log_source"];

macro_rules! sink_callsite {
    ($level:expr, $cs:ident, $meta:ident, $ty:ident) => {
        struct $ty;
        static $cs: $ty = $ty;
        static $meta: Metadata<'static> = Metadata::new(
            "tracing_once event",
            SINK_TARGET,
            $level,
            None,
            None,
            None,
            FieldSet::new(FIELD_NAMES, Identifier(&$cs)),
            Kind::EVENT,
        );

        impl Callsite for $ty {
            fn set_interest(&self, _: Interest) {}
            fn metadata(&self) -> &'static Metadata<'static> {
                &$meta
            }
        }
    };
}

sink_callsite!(Level::ERROR, ERROR_CS, ERROR_META, ErrorCallsite);
sink_callsite!(Level::WARN, WARN_CS, WARN_META, WarnCallsite);
sink_callsite!(Level::INFO, INFO_CS, INFO_META, InfoCallsite);
sink_callsite!(Level::DEBUG, DEBUG_CS, DEBUG_META, DebugCallsite);
sink_callsite!(Level::TRACE, TRACE_CS, TRACE_META, TraceCallsite);

fn level_to_cs(level: Level) -> (&'static dyn Callsite, &'static Metadata<'static>) {
    match level {
        Level::ERROR => (&ERROR_CS, &ERROR_META),
        Level::WARN => (&WARN_CS, &WARN_META),
        Level::INFO => (&INFO_CS, &INFO_META),
        Level::DEBUG => (&DEBUG_CS, &DEBUG_META),
        _ => (&TRACE_CS, &TRACE_META),
    }
}

/// Metadata used only to ask the subscriber whether `source` is enabled at
/// `level`. The target is the source name rather than [`SINK_TARGET`].
fn source_metadata(source: &LogSource, level: Level) -> Metadata<'static> {
    let (callsite, _) = level_to_cs(level);
    Metadata::new(
        "tracing_once source",
        source.name(),
        level,
        None,
        None,
        None,
        FieldSet::new(FIELD_NAMES, Identifier(callsite)),
        Kind::EVENT,
    )
}

/// Sink forwarding warnings to the current `tracing` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn is_enabled(&self, source: &LogSource, level: Level) -> bool {
        dispatcher::get_default(|dispatch| dispatch.enabled(&source_metadata(source, level)))
    }

    fn emit(&self, source: &LogSource, level: Level, message: &str) {
        dispatcher::get_default(|dispatch| {
            // Refreshes per-layer filter state for the event below
            if !dispatch.enabled(&source_metadata(source, level)) {
                return;
            }

            let (_, meta) = level_to_cs(level);
            let fields = meta.fields();
            let (Some(message_field), Some(source_field)) =
                (fields.field("message"), fields.field("log_source"))
            else {
                return;
            };
            let name = source.name();

            dispatch.event(&Event::new(
                meta,
                &fields.value_set(&[
                    (&message_field, Some(&message as &dyn Value)),
                    (&source_field, Some(&name as &dyn Value)),
                ]),
            ));
        });
    }
}
