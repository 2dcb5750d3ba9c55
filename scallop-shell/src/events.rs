//! Tracing configuration for the shell.

use std::collections::HashSet;

use tracing_subscriber::{
    Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Type of event to trace.
#[derive(Clone, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub(crate) enum TraceEvent {
    /// Traces command dispatch and execution.
    #[clap(name = "commands")]
    Commands,
    /// Traces alias and variable expansion.
    #[clap(name = "expand")]
    Expand,
    /// Traces lines read from input.
    #[clap(name = "input")]
    Input,
    /// Traces line splitting and tokenization.
    #[clap(name = "parse")]
    Parse,
}

pub(crate) struct TraceEventConfig {
    enabled_trace_events: HashSet<TraceEvent>,
}

impl TraceEventConfig {
    /// Initializes tracing over stderr, enabling debug-level output for the
    /// requested event categories.
    pub fn init(enabled_log_events: &[TraceEvent]) -> Self {
        let enabled_trace_events: HashSet<TraceEvent> =
            enabled_log_events.iter().cloned().collect();

        let config = Self {
            enabled_trace_events,
        };

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(config.compose_filter());

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            // Proceed anyway, but complain audibly.
            eprintln!("warning: failed to initialize tracing.");
        }

        config
    }

    fn compose_filter(&self) -> tracing_subscriber::filter::Targets {
        let mut filter =
            tracing_subscriber::filter::Targets::new().with_default(LevelFilter::INFO);

        for event in &self.enabled_trace_events {
            let target = match event {
                TraceEvent::Commands => "commands",
                TraceEvent::Expand => "expansion",
                TraceEvent::Input => "input",
                TraceEvent::Parse => "parse",
            };
            filter = filter.with_target(target, LevelFilter::DEBUG);
        }

        filter
    }
}
