//! Interaction cycle: menu, ticker resolution, fetch, report, repeat
//!
//! ```text
//! menu ──▶ registry.key_for ──▶ ("others"? free-text prompt)
//!   ▲                                   │
//!   │                                   ▼
//!   └──── report outcome ◀──── provider.fetch_market_data
//! ```
//!
//! Transport failures and non-200 statuses are reported and the loop goes
//! on. A success body that cannot be parsed is not: it ends the cycle with
//! [`CycleError::Payload`].

use crate::{
    config::Config,
    constants::{BANNER_TEXT, INSTRUCTION_TEXT, MENU_PROMPT, TICKER_PROMPT},
    error::{CycleError, ProviderError},
    format::{parse_quote, QuoteLine},
    provider::{FetchOutcome, MarketDataProvider},
    registry::SelectionRegistry,
    types::Quote,
    ui::UserInterface,
};
use reqwest::StatusCode;
use std::sync::Arc;

/// How a single lookup ended, when it did not end the cycle
#[derive(Debug)]
pub enum LookupOutcome {
    /// Price shown
    Quoted(Quote),
    /// Server answered with a non-200 status
    Rejected(StatusCode),
    /// Request never completed
    Failed(ProviderError),
}

/// Drives the menu loop
pub struct InteractionCycle {
    registry: SelectionRegistry,
    provider: Arc<dyn MarketDataProvider>,
    ui: Arc<dyn UserInterface>,
    default_ticker: String,
}

impl InteractionCycle {
    pub fn new(
        config: &Config,
        provider: Arc<dyn MarketDataProvider>,
        ui: Arc<dyn UserInterface>,
    ) -> Self {
        Self {
            registry: SelectionRegistry::new(),
            provider,
            ui,
            default_ticker: config.default_ticker.clone(),
        }
    }

    /// Shows the banner, then loops until the terminal or a payload fails
    pub async fn run(&self) -> Result<(), CycleError> {
        tracing::info!(provider = self.provider.provider_name(), "Starting lookup cycle");
        self.ui.banner(BANNER_TEXT, INSTRUCTION_TEXT);

        loop {
            self.run_once().await?;
        }
    }

    /// One menu round: choose a ticker and look it up
    pub async fn run_once(&self) -> Result<LookupOutcome, CycleError> {
        let ticker = self.choose_ticker()?;
        self.lookup(&ticker).await
    }

    /// Presents the menu and resolves the answer to the effective ticker
    pub fn choose_ticker(&self) -> Result<String, CycleError> {
        let labels = self.registry.labels();
        let index = self.ui.select(MENU_PROMPT, &labels)?;
        let label = labels
            .get(index)
            .ok_or_else(|| CycleError::unknown_selection(format!("#{}", index)))?;
        let key = self
            .registry
            .key_for(label)
            .ok_or_else(|| CycleError::unknown_selection(*label))?;

        if self.registry.is_catch_all(key) {
            let ticker = self.ui.input(TICKER_PROMPT, &self.default_ticker)?;
            Ok(ticker)
        } else {
            Ok(key.to_string())
        }
    }

    /// Fetches and reports the price for one ticker
    pub async fn lookup(&self, ticker: &str) -> Result<LookupOutcome, CycleError> {
        let status = self
            .ui
            .start_status(&format!("Fetching price for {}...", ticker));

        let outcome = match self.provider.fetch_market_data(ticker).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(ticker, error = %e, "Market data request failed");
                status.clear();
                self.ui.print(&format!("\n    Error: {}\n    ", e));
                return Ok(LookupOutcome::Failed(e));
            }
        };

        match outcome {
            FetchOutcome::Status(code) => {
                tracing::warn!(ticker, status = code.as_u16(), "Market data request rejected");
                status.error(&format!(
                    "☠️ Failed to get data for {}, error: {}",
                    ticker,
                    code.as_u16()
                ));
                Ok(LookupOutcome::Rejected(code))
            }
            FetchOutcome::Success(body) => {
                let quote = match parse_quote(&body) {
                    Ok(quote) => quote,
                    Err(e) => {
                        status.clear();
                        return Err(e.into());
                    }
                };
                tracing::debug!(
                    symbol = %quote.symbol,
                    price_usd = quote.price_usd,
                    fetched_at = %quote.fetched_at,
                    "Quote received"
                );
                status.success(&QuoteLine::from_quote(&quote).render());
                Ok(LookupOutcome::Quoted(quote))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use crate::provider::mock::{MockProvider, MockReply};
    use crate::ui::{ScriptedAnswer, ScriptedUserInterface, StatusIndicator, UiEvent};

    const BTC_BODY: &str = r#"{"data":{"symbol":"BTC","name":"Bitcoin","market_data":{"price_usd":12345.6789,"percent_change_usd_last_24_hours":-0.001}}}"#;

    fn select(label: &str) -> ScriptedAnswer {
        ScriptedAnswer::Select(label.to_string())
    }

    fn cycle(
        provider: Arc<MockProvider>,
        answers: Vec<ScriptedAnswer>,
    ) -> (InteractionCycle, Arc<ScriptedUserInterface>) {
        let ui = Arc::new(ScriptedUserInterface::new(answers));
        let cycle = InteractionCycle::new(&Config::default(), provider, ui.clone());
        (cycle, ui)
    }

    #[tokio::test]
    async fn test_known_ticker_is_quoted() {
        let provider = Arc::new(MockProvider::new());
        provider.set_reply("btc", MockReply::Body(BTC_BODY.to_string()));
        let (cycle, ui) = cycle(provider.clone(), vec![select("BTC")]);

        let outcome = cycle.run_once().await.unwrap();

        assert!(matches!(outcome, LookupOutcome::Quoted(ref q) if q.symbol == "BTC"));
        assert_eq!(provider.requested(), vec!["btc"]);
        assert!(ui.events().contains(&UiEvent::Success(
            "Bitcoin (BTC) -  12345.6789 USD  ⬆-0.00% (24h)".to_string()
        )));
    }

    #[tokio::test]
    async fn test_others_with_empty_input_uses_default() {
        let provider = Arc::new(MockProvider::new());
        let (cycle, ui) = cycle(
            provider.clone(),
            vec![select("Others"), ScriptedAnswer::Input(String::new())],
        );

        cycle.run_once().await.unwrap();

        assert_eq!(provider.requested(), vec!["btc"]);
        assert!(ui.events().contains(&UiEvent::Prompt {
            prompt: TICKER_PROMPT.to_string(),
            default: "btc".to_string(),
        }));
    }

    #[tokio::test]
    async fn test_others_passes_text_through() {
        let provider = Arc::new(MockProvider::new());
        let (cycle, _ui) = cycle(
            provider.clone(),
            vec![select("Others"), ScriptedAnswer::Input("NotACoin".into())],
        );

        cycle.run_once().await.unwrap();

        assert_eq!(provider.requested(), vec!["NotACoin"]);
    }

    #[tokio::test]
    async fn test_non_200_is_reported_and_loop_continues() {
        let provider = Arc::new(MockProvider::new());
        provider.set_reply("eth", MockReply::Status(404));
        let (cycle, ui) = cycle(provider.clone(), vec![select("ETH"), select("ETH")]);

        let err = cycle.run().await.unwrap_err();

        assert!(matches!(err, CycleError::Ui(UiError::Closed)));
        assert_eq!(provider.requested(), vec!["eth", "eth"]);
        assert_eq!(ui.menu_count(), 3);
        assert!(ui.events().contains(&UiEvent::Error(
            "☠️ Failed to get data for eth, error: 404".to_string()
        )));
    }

    #[tokio::test]
    async fn test_transport_failure_is_printed_and_loop_continues() {
        let provider = Arc::new(MockProvider::new());
        provider.set_reply("xrp", MockReply::Unreachable);
        let (cycle, ui) = cycle(provider.clone(), vec![select("XRP")]);

        let outcome = cycle.run_once().await.unwrap();
        assert!(matches!(outcome, LookupOutcome::Failed(_)));

        let err = cycle.run_once().await.unwrap_err();
        assert!(matches!(err, CycleError::Ui(UiError::Closed)));

        let events = ui.events();
        assert!(events.contains(&UiEvent::Cleared));
        assert!(events
            .iter()
            .any(|e| matches!(e, UiEvent::Printed(msg) if msg.contains("Error: Network error"))));
        assert_eq!(ui.menu_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_payload_ends_the_cycle() {
        let provider = Arc::new(MockProvider::new());
        provider.set_reply(
            "doge",
            MockReply::Body(r#"{"data":{"symbol":"DOGE","name":"Dogecoin"}}"#.to_string()),
        );
        let (cycle, ui) = cycle(provider.clone(), vec![select("Doge🐕"), select("BTC")]);

        let err = cycle.run().await.unwrap_err();

        assert!(matches!(err, CycleError::Payload(_)));
        // The second answer is never consumed.
        assert_eq!(ui.menu_count(), 1);
        assert!(!ui
            .events()
            .iter()
            .any(|e| matches!(e, UiEvent::Printed(_))));
    }

    #[tokio::test]
    async fn test_run_shows_banner_first() {
        let provider = Arc::new(MockProvider::new());
        let (cycle, ui) = cycle(provider, vec![]);

        let _ = cycle.run().await;

        assert_eq!(ui.events()[0], UiEvent::Banner(BANNER_TEXT.to_string()));
    }

    /// Menu that answers with an index past the end of the list
    struct OutOfRangeMenu(ScriptedUserInterface);

    impl UserInterface for OutOfRangeMenu {
        fn banner(&self, title: &str, subtitle: &str) {
            self.0.banner(title, subtitle);
        }

        fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, UiError> {
            self.0.select(prompt, items).map(|_| items.len())
        }

        fn input(&self, prompt: &str, default: &str) -> Result<String, UiError> {
            self.0.input(prompt, default)
        }

        fn start_status(&self, message: &str) -> Box<dyn StatusIndicator> {
            self.0.start_status(message)
        }

        fn print(&self, message: &str) {
            self.0.print(message);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_selection_is_rejected() {
        let provider = Arc::new(MockProvider::new());
        let ui = Arc::new(OutOfRangeMenu(ScriptedUserInterface::new([select("BTC")])));
        let cycle = InteractionCycle::new(&Config::default(), provider.clone(), ui);

        let err = cycle.run_once().await.unwrap_err();

        assert!(matches!(err, CycleError::UnknownSelection(ref label) if label == "#7"));
        assert!(provider.requested().is_empty());
    }
}
