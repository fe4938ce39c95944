use tracing::Level;

/// Receiver for non-fatal decode diagnostics.
///
/// Sinks are advisory: whatever they do with a message has no effect on
/// the decode result.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, level: Level, message: &str);
}

/// Forwards diagnostics to `tracing` under the `emsgbox::decoder` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "emsgbox::decoder", "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "emsgbox::decoder", "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "emsgbox::decoder", "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "emsgbox::decoder", "{}", message);
        } else {
            tracing::trace!(target: "emsgbox::decoder", "{}", message);
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: Level, _message: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn emit(&self, level: Level, message: &str) {
        self(level, message)
    }
}
