pub mod cursor;
pub mod decoder;
pub mod diagnostics;
pub mod event;
pub mod util;

pub use decoder::{DecodeError, EmsgDecoder, decode};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use event::{EventMessage, WrappedMetadata};
