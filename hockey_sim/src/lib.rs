//! Headless air-hockey session: tracker hand-off, session lifecycle and
//! snapshot output over the wire protocol.

pub mod ai;
pub mod session;
pub mod tracking;


pub use session::*;
pub use tracking::LatestCell;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Settings(#[from] hockey_core::SettingsError),

    #[error(transparent)]
    Proto(#[from] hockey_proto::ProtoError),

    #[error("unknown side id {0}")]
    UnknownSide(u8),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("sink closed")]
    SinkClosed,
}
