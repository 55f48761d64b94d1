//! Decoding of raw event payloads into typed actions, and the split between
//! blind posts and the in-play timeline.

use crate::errors::ConvertError;
use crate::model::{Event, EventPayload, valid_cards};

pub const CODE_CHECK: i64 = 0;
pub const CODE_BIG_BLIND: i64 = 2;
pub const CODE_SMALL_BLIND: i64 = 3;
pub const CODE_CALL: i64 = 7;
pub const CODE_BET: i64 = 8;
pub const CODE_BOARD: i64 = 9;
pub const CODE_WIN_POT: i64 = 10;
pub const CODE_FOLD: i64 = 11;
pub const CODE_SHOW_CARDS: i64 = 12;
pub const CODE_SHOWDOWN: i64 = 15;

/// A decoded event. Seats are in the source numbering; the replay engine
/// resolves them. Amounts stay optional until the seat resolves, since events
/// for empty seats are skipped without reading them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SmallBlind { seat: Option<u32>, amount: Option<i64> },
    BigBlind { seat: Option<u32>, amount: Option<i64> },
    Check { seat: Option<u32> },
    Call { seat: Option<u32>, amount: Option<i64> },
    /// Bet or raise *to* `amount`
    BetOrRaise { seat: Option<u32>, amount: Option<i64> },
    /// Community cards; `turn` is 1 flop, 2 turn, 3 river
    Board { turn: i64, cards: Vec<String> },
    Showdown,
    ShowCards {
        seat: Option<u32>,
        cards: Vec<String>,
        description: Option<String>,
    },
    Fold { seat: Option<u32> },
    WinPot {
        seat: Option<u32>,
        amount: Option<i64>,
        pot: Option<i64>,
    },
    /// Unrecognised type code, replayed as a no-op
    Unknown(i64),
}

impl Action {
    pub fn decode(hand_id: &str, payload: &EventPayload) -> Result<Self, ConvertError> {
        let seat = payload.seat;
        let amount = payload.value;
        let action = match payload.code {
            CODE_CHECK => Action::Check { seat },
            CODE_BIG_BLIND => Action::BigBlind {
                seat,
                amount,
            },
            CODE_SMALL_BLIND => Action::SmallBlind {
                seat,
                amount,
            },
            CODE_CALL => Action::Call {
                seat,
                amount,
            },
            CODE_BET => Action::BetOrRaise {
                seat,
                amount,
            },
            CODE_BOARD => {
                let cards = payload.cards.as_deref().map(valid_cards).unwrap_or_default();
                // An empty reveal is skipped downstream, so its index is irrelevant.
                let turn = if cards.is_empty() {
                    payload.turn.unwrap_or(0)
                } else {
                    payload.turn.ok_or_else(|| ConvertError::MissingField {
                        hand: hand_id.to_string(),
                        code: payload.code,
                        field: "turn",
                    })?
                };
                Action::Board { turn, cards }
            }
            CODE_WIN_POT => Action::WinPot {
                seat,
                amount,
                pot: payload.pot,
            },
            CODE_FOLD => Action::Fold { seat },
            CODE_SHOW_CARDS => Action::ShowCards {
                seat,
                cards: payload.cards.as_deref().map(valid_cards).unwrap_or_default(),
                description: payload
                    .hand_description
                    .clone()
                    .filter(|d| !d.is_empty()),
            },
            CODE_SHOWDOWN => Action::Showdown,
            other => Action::Unknown(other),
        };
        Ok(action)
    }

    pub fn is_blind(&self) -> bool {
        matches!(self, Action::SmallBlind { .. } | Action::BigBlind { .. })
    }
}

/// An in-play action plus whether any show-cards event follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InPlay {
    pub action: Action,
    pub shows_ahead: bool,
}

/// A hand's events partitioned into blind posts and everything else, each
/// in original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedEvents {
    pub blinds: Vec<Action>,
    pub in_play: Vec<InPlay>,
}

impl ClassifiedEvents {
    pub fn split(hand_id: &str, events: &[Event]) -> Result<Self, ConvertError> {
        let mut blinds = Vec::new();
        let mut rest = Vec::new();
        for event in events {
            let action = Action::decode(hand_id, &event.payload)?;
            if action.is_blind() {
                blinds.push(action);
            } else {
                rest.push((event.payload.code, action));
            }
        }

        let mut in_play = Vec::with_capacity(rest.len());
        let mut shows_seen = false;
        for (code, action) in rest.into_iter().rev() {
            in_play.push(InPlay {
                action,
                shows_ahead: shows_seen,
            });
            shows_seen |= code == CODE_SHOW_CARDS;
        }
        in_play.reverse();

        Ok(Self { blinds, in_play })
    }
}
