use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme carrying a binary SCTE-35 `splice_info_section`.
pub const SCHEME_SCTE35: &str = "urn:scte:scte35:2014:bin";
/// AOM scheme carrying a complete ID3v2 tag.
pub const SCHEME_ID3_AOM: &str = "https://aomedia.org/emsg/ID3";
/// Apple scheme carrying a complete ID3v2 tag.
pub const SCHEME_ID3_APPLE: &str = "https://developer.apple.com/streaming/emsg-id3";

/// Metadata formats that are carried verbatim inside `message_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrappedMetadata {
    Scte35,
    Id3,
}

impl WrappedMetadata {
    pub fn from_scheme(scheme_id_uri: &str) -> Option<Self> {
        match scheme_id_uri {
            SCHEME_SCTE35 => Some(Self::Scte35),
            SCHEME_ID3_AOM | SCHEME_ID3_APPLE => Some(Self::Id3),
            _ => None,
        }
    }
}

/// A decoded Event Message (emsg) box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventMessage {
    /// Identifies the message scheme.
    pub scheme_id_uri: String,
    /// Scheme-specific value.
    pub value: String,
    /// Event duration in milliseconds.
    pub duration_ms: u64,
    /// Instance id, unique within `scheme_id_uri` + `value`.
    pub id: u64,
    /// Scheme-specific payload; serialized as lowercase hex.
    #[serde(with = "hex")]
    pub message_data: Vec<u8>,
}

impl EventMessage {
    pub fn new(
        scheme_id_uri: impl Into<String>,
        value: impl Into<String>,
        duration_ms: u64,
        id: u64,
        message_data: Vec<u8>,
    ) -> Self {
        Self {
            scheme_id_uri: scheme_id_uri.into(),
            value: value.into(),
            duration_ms,
            id,
            message_data,
        }
    }

    pub fn wrapped_metadata_kind(&self) -> Option<WrappedMetadata> {
        WrappedMetadata::from_scheme(&self.scheme_id_uri)
    }

    /// The payload, if the scheme wraps another metadata format.
    pub fn wrapped_metadata_bytes(&self) -> Option<&[u8]> {
        self.wrapped_metadata_kind()
            .map(|_| self.message_data.as_slice())
    }
}

impl fmt::Display for EventMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EMSG: scheme={}, id={}, value={}",
            self.scheme_id_uri, self.id, self.value
        )
    }
}
