//! Contract between the agent and a remote control-plane backend, plus JSON text
//! helpers that feed the data-contract mapper.

pub mod codec;
mod error;
mod protocol;

pub use codec::{decode_json, decode_json_into, decode_json_with, encode_json, encode_json_pretty};
pub use error::ProtocolError;
pub use protocol::Protocol;
