//! # Feline Core
//!
//! The interactive state behind the Feline Fascination page. Each piece of state is
//! an explicit value with synchronous transitions; the view layer only forwards
//! intents and renders snapshots.
//!
//! ## Core Components
//!
//! - **trivia**: Walks the fixed question list and keeps score
//! - **matcher**: Collects personality answers and picks the best-fitting breed
//! - **facts**: Rotating "did you know" cursor and the periodic ticker driving it
//! - **likes**: Like counter and the notification seam
//! - **events**: Intents forwarded by the view layer
//! - **site**: Aggregate state, read-only snapshots and the async event loop
//!
//! ## Design Philosophy
//!
//! - **Independent**: None of the four state pieces reads another's output
//! - **Event-Driven**: Every change goes through one update function, one event at a time
//! - **Testable**: Transitions run without a timer or a live view

pub mod error;
pub mod events;
pub mod facts;
pub mod likes;
pub mod matcher;
pub mod site;
pub mod trivia;

pub use error::*;
pub use events::*;
pub use facts::*;
pub use likes::*;
pub use matcher::*;
pub use site::*;
pub use trivia::*;
