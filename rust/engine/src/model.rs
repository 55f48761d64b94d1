use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;

/// One exported table session: the game identifier and every hand played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Table/game identifier, shown in the table line
    #[serde(rename = "gameId", default)]
    pub game_id: Option<String>,
    /// Hands in the order they were played
    pub hands: Vec<Hand>,
}

impl Session {
    pub fn from_json(content: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn game_label(&self) -> &str {
        self.game_id.as_deref().unwrap_or("Unknown")
    }
}

/// A single hand as recorded by the source platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    /// Alphanumeric hand identifier
    pub id: String,
    /// Small blind in minor currency units
    pub small_blind: i64,
    /// Big blind in minor currency units
    pub big_blind: i64,
    /// Hand start, milliseconds since the Unix epoch
    pub started_at: i64,
    /// Button seat in the source seat numbering
    pub dealer_seat: u32,
    pub players: Vec<Player>,
    /// Replay timeline; order is significant
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Seat in the source numbering (may be sparse)
    pub seat: u32,
    pub name: String,
    /// Starting stack in minor currency units
    pub stack: i64,
    /// Hole cards; only the recording player's are present
    #[serde(default)]
    pub hand: Option<Vec<Option<String>>>,
}

impl Player {
    /// Hole cards with blanks removed, if any were recorded.
    pub fn hole_cards(&self) -> Vec<String> {
        self.hand.as_deref().map(valid_cards).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub payload: EventPayload,
}

/// Raw event payload. `code` discriminates; the remaining fields are
/// populated depending on the event type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub code: i64,
    #[serde(default)]
    pub seat: Option<u32>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub cards: Option<Vec<Option<String>>>,
    /// Board reveal index: 1 flop, 2 turn, 3 river
    #[serde(default)]
    pub turn: Option<i64>,
    #[serde(default)]
    pub hand_description: Option<String>,
    /// Declared pot total on a win-pot event
    #[serde(default)]
    pub pot: Option<i64>,
}

/// Drops `null` and empty card entries.
pub fn valid_cards(cards: &[Option<String>]) -> Vec<String> {
    cards
        .iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect()
}
