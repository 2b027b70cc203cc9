use std::path::PathBuf;

use protocol::Deck;
use tokio::time::Duration;

use super::error::{ErrorKind, TableResult};
use crate::consts::*;
use crate::wheel::Wheel;

pub struct Config {
    pub round_secs: u16,
    pub lockin_secs: u8,
    pub cycle_interval: Duration,
    pub spin_duration: Duration,
    pub wheel: Wheel,
    pub deck: DeckSource,
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            round_secs: ROUND_SECS,
            lockin_secs: LOCKIN_SECS,
            cycle_interval: CYCLE_INTERVAL,
            spin_duration: SPIN_DURATION,
            wheel: Wheel {
                pointer_offset: POINTER_OFFSET,
                min_spins: MIN_SPINS,
                max_spins: MAX_SPINS,
                snap_tolerance: SNAP_TOLERANCE,
            },
            deck: DeckSource::Builtin,
            seed: None,
        }
    }

    pub fn validate(&self) -> TableResult<()> {
        if self.round_secs == 0 {
            return Err(ErrorKind::Config("round must last at least one second".to_string()));
        }
        if self.wheel.min_spins == 0 || self.wheel.min_spins > self.wheel.max_spins {
            return Err(ErrorKind::Config(format!(
                "spin range {}..={} is empty",
                self.wheel.min_spins, self.wheel.max_spins
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub enum DeckSource {
    Builtin,
    File(PathBuf),
}

impl DeckSource {
    pub(crate) async fn load(&self) -> TableResult<Deck> {
        match self {
            DeckSource::Builtin => Ok(Deck::builtin()),
            DeckSource::File(path) => {
                let text = tokio::fs::read_to_string(path).await.map_err(ErrorKind::DeckRead)?;
                Deck::from_json(&text).map_err(ErrorKind::DeckParse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.round_secs, 90);
        assert_eq!(config.lockin_secs, 5);
    }

    #[test]
    fn rejects_inverted_spin_range() {
        let mut config = Config::new();
        config.wheel.min_spins = 13;
        assert!(matches!(config.validate(), Err(ErrorKind::Config(_))));
        config.wheel.min_spins = 0;
        assert!(matches!(config.validate(), Err(ErrorKind::Config(_))));
    }

    #[test]
    fn rejects_zero_second_rounds() {
        let mut config = Config::new();
        config.round_secs = 0;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn loads_deck_from_file() {
        let path = std::env::temp_dir().join(format!("chromatic-deck-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"name":"tiny","questions":[{"color":"green","text":"Tabs or spaces?"}]}"#)
            .await
            .unwrap();
        let deck = DeckSource::File(path.clone()).load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap_or_default();
        assert_eq!(deck.name, "tiny");
        assert_eq!(deck.questions.len(), 1);
    }

    #[tokio::test]
    async fn missing_deck_file_is_a_read_error() {
        let source = DeckSource::File(PathBuf::from("/nonexistent/chromatic/deck.json"));
        assert!(matches!(source.load().await, Err(ErrorKind::DeckRead(_))));
    }
}
