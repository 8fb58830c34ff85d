//! App Core - client-side logic of the driver-monitoring app
//!
//! Everything the screens need that is not rendering:
//! - `session` - durable token/profile storage and the authenticated signal
//! - `api` - auth endpoints client (signup, login)
//! - `shell` - the startup state machine that picks the screen graph
//! - `detection` - upload client and report model for the external
//!   detection endpoint, gated on the session state
//!
//! Screens stay thin: they call into this crate and render what comes back.

pub mod api;
pub mod detection;
pub mod error;
pub mod session;
pub mod shell;

pub use api::AuthApi;
pub use error::{ClientError, ClientResult};
pub use session::{Profile, SessionManager};
pub use shell::{AppShell, ScreenGraph, ShellState};
