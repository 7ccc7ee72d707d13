//! simple-ntp: single-shot NTP query and header decoder
//!
//! This library sends one client-mode request to an NTP server and decodes the
//! 48-byte reply into readable header fields: leap indicator, version, mode,
//! stratum, poll interval, precision, root delay and dispersion, reference ID
//! and the four timestamps. It reports raw fields only and does not estimate
//! clock offset or delay.
//!
//! ```no_run
//! use simple_ntp::{client, DisplayOptions, QueryInput};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> simple_ntp::Result<()> {
//!     let fields = client::probe_input(&QueryInput::new("time.cloudflare.com"), DisplayOptions::default()).await?;
//!     for (label, value) in fields.rows() {
//!         println!("{}: {}", label, value);
//!     }
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod core;
pub mod network;
pub mod protocol;
pub mod time;
mod util;

// Re-export commonly used items
pub use crate::core::{DisplayOptions, Error, ErrorClass, QueryInput, QueryTarget, Result};
pub use crate::protocol::{decode, DecodedFields};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
