//! Constants for the krypton price lookup
//!
//! All configuration is centralized here. No runtime configuration file or
//! environment variable is read - `Config::default()` is built from these
//! compile-time constants.

/// Messari API base URL
pub const MESSARI_API_URL: &str = "https://data.messari.io/api/v1";

/// Messari market-data endpoint, `{ticker}` is replaced with the ticker key
pub const MESSARI_MARKET_DATA_ENDPOINT: &str = "/assets/{ticker}/metrics/market-data";

/// Ticker used when the user submits an empty free-text answer
pub const DEFAULT_TICKER: &str = "btc";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "krypton/0.1.0";

/// Startup banner text
pub const BANNER_TEXT: &str = "Welcome to Krypton";

/// Instruction line shown under the banner
pub const INSTRUCTION_TEXT: &str = "Select from the list or enter a name";

/// Prompt for the ticker menu
pub const MENU_PROMPT: &str = "Get Price for:";

/// Prompt for the free-text ticker
pub const TICKER_PROMPT: &str = "Which token you want to search for?";

/// Spinner tick rate (in milliseconds)
pub const SPINNER_TICK_MS: u64 = 80;
