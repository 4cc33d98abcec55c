//! # Krypton
//!
//! Interactive terminal lookup for cryptocurrency prices backed by the
//! Messari market-data API.
//!
//! ## Usage
//!
//! ```no_run
//! use krypton::{Config, InteractionCycle, MessariProvider, TerminalUserInterface};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let provider = Arc::new(MessariProvider::new(&config)?);
//! let ui = Arc::new(TerminalUserInterface::new());
//!
//! // Runs until the terminal closes or a response cannot be parsed
//! InteractionCycle::new(&config, provider, ui).run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! InteractionCycle
//!     ↓ label → key (SelectionRegistry)
//! MarketDataProvider (Messari)
//!     ↓ FetchOutcome
//! format::QuoteLine
//!     ↓
//! UserInterface (status indicator)
//! ```

pub mod config;
pub mod constants;
pub mod cycle;
pub mod error;
pub mod format;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use cycle::{InteractionCycle, LookupOutcome};
pub use error::{CycleError, PayloadError, ProviderError, UiError};
pub use provider::{FetchOutcome, MarketDataProvider};
pub use providers::MessariProvider;
pub use registry::SelectionRegistry;
pub use types::Quote;
pub use ui::{ScriptedAnswer, ScriptedUserInterface, TerminalUserInterface, UiEvent, UserInterface};
