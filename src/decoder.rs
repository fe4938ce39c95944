use crate::cursor::ByteCursor;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::event::EventMessage;
use crate::util::scale_large_timestamp;
use tracing::Level;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("truncated input: {field} at offset {offset}")]
    TruncatedInput { field: &'static str, offset: usize },
    #[error("invalid timescale: 0")]
    InvalidTimescale,
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decodes the body of an Event Message (emsg) box, ISO/IEC 23009-1 §5.10.3.3.
///
/// Input starts at the first byte of `scheme_id_uri`; the box header and
/// version/flags must already be stripped. `presentation_time_delta` is
/// expected to be zero, having been folded into the sample timestamp
/// upstream. A non-zero delta is reported to the sink as soon as it is
/// read, even if a later field then fails, and is otherwise ignored.
///
/// `duration_ms` is floored. A zero timescale is [`DecodeError::InvalidTimescale`].
pub struct EmsgDecoder {
    sink: Box<dyn DiagnosticSink>,
}

impl EmsgDecoder {
    /// Decoder reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn decode(&self, input: &[u8]) -> Result<EventMessage> {
        let mut cur = ByteCursor::new(input);

        let scheme_id_uri = read_string(&mut cur, "scheme_id_uri")?;
        let value = read_string(&mut cur, "value")?;
        let timescale = read_u32(&mut cur, "timescale")?;
        let presentation_time_delta = read_u32(&mut cur, "presentation_time_delta")?;
        if presentation_time_delta != 0 {
            self.sink.emit(
                Level::WARN,
                &format!(
                    "ignoring non-zero presentation_time_delta: {}",
                    presentation_time_delta
                ),
            );
        }
        let event_duration = read_u32(&mut cur, "event_duration")?;
        let id = read_u32(&mut cur, "id")?;

        let duration_ms = scale_large_timestamp(event_duration as u64, 1000, timescale as u64)
            .ok_or(DecodeError::InvalidTimescale)?;

        Ok(EventMessage {
            scheme_id_uri,
            value,
            duration_ms,
            id: id as u64,
            message_data: cur.read_remaining(),
        })
    }
}

impl Default for EmsgDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode with the default `tracing` sink.
pub fn decode(input: &[u8]) -> Result<EventMessage> {
    EmsgDecoder::new().decode(input)
}

fn read_string(cur: &mut ByteCursor<'_>, field: &'static str) -> Result<String> {
    let offset = cur.position();
    cur.read_null_terminated_string()
        .ok_or(DecodeError::TruncatedInput { field, offset })
}

fn read_u32(cur: &mut ByteCursor<'_>, field: &'static str) -> Result<u32> {
    let offset = cur.position();
    cur.read_u32()
        .map_err(|_| DecodeError::TruncatedInput { field, offset })
}
