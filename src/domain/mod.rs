pub mod sta_lta;
pub mod uplink;

mod error;
mod payload_decoder;
mod reading;
mod uplink_service;

pub use error::*;
pub use payload_decoder::*;
pub use reading::*;
pub use sta_lta::*;
pub use uplink::*;
pub use uplink_service::*;
