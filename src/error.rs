use miette::Diagnostic;
use thiserror::Error;

use crate::document::DocumentKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unsupported document kind: {kind:?}")]
    #[diagnostic(
        code(furiganify::unsupported_document),
        help("open a text document before converting")
    )]
    UnsupportedDocument { kind: DocumentKind },

    #[error("Malformed match: {word:?} with reading {reading:?}")]
    #[diagnostic(code(furiganify::malformed_match))]
    MalformedMatch { word: String, reading: String },

    #[error("Block {index} cannot be edited: {reason}")]
    #[diagnostic(code(furiganify::capability_missing))]
    CapabilityMissing { index: usize, reason: String },

    #[error("Host rejected an edit in block {index}")]
    #[diagnostic(code(furiganify::host))]
    Host {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}
