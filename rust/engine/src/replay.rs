//! Hand replay: folds the decoded event timeline into per-hand state while
//! emitting the action lines of the PokerStars transcript.
//!
//! [`ReplayState::apply`] is the only mutator. It is called once per event
//! and returns the lines that event renders, so a single transition can be
//! exercised in isolation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::errors::ConvertError;
use crate::events::{Action, CODE_BET, CODE_BIG_BLIND, CODE_CALL, CODE_SMALL_BLIND, CODE_WIN_POT};
use crate::format::{format_cards, format_money};
use crate::model::Hand;
use crate::seats::SeatMap;

/// Betting street. Advanced only by board reveals.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Summary suffix for a seat that folded on this street.
    pub fn fold_label(self, bet_voluntarily: bool) -> &'static str {
        match self {
            Street::Preflop if bet_voluntarily => "folded before Flop",
            Street::Preflop => "folded before Flop (didn't bet)",
            Street::Flop => "folded on the Flop",
            Street::Turn => "folded on the Turn",
            Street::River => "folded on the River",
        }
    }
}

/// Seat and name lookups for one hand, in the dense seat numbering.
#[derive(Debug, Clone)]
pub struct HandContext {
    pub hand_id: String,
    pub seats: SeatMap,
    pub button: u32,
    names: BTreeMap<u32, String>,
}

impl HandContext {
    pub fn new(hand: &Hand) -> Self {
        let seats = SeatMap::from_players(&hand.players);
        let mut names = BTreeMap::new();
        for player in &hand.players {
            if let Some(dense) = seats.renumber(player.seat) {
                names.insert(dense, player.name.clone());
            }
        }
        let button = seats.dealer(hand.dealer_seat);
        Self {
            hand_id: hand.id.clone(),
            seats,
            button,
            names,
        }
    }

    /// Resolve an event's source seat to `(dense seat, name)`. Events naming
    /// a seat with no player are not rendered.
    pub fn resolve(&self, original: Option<u32>) -> Option<(u32, &str)> {
        let dense = self.seats.renumber(original?)?;
        self.name(dense).map(|name| (dense, name))
    }

    pub fn name(&self, dense: u32) -> Option<&str> {
        self.names.get(&dense).map(String::as_str)
    }

    /// Dense seats in ascending order.
    pub fn dense_seats(&self) -> impl Iterator<Item = u32> + '_ {
        self.names.keys().copied()
    }
}

/// The most recent aggressive action nobody has matched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UncalledBet {
    pub seat: u32,
    pub amount: i64,
}

/// Per-seat facts the summary section needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatRecord {
    pub folded_on: Option<Street>,
    pub bet_voluntarily: bool,
    pub shown: Option<Vec<String>>,
    pub description: Option<String>,
    pub winnings: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayState {
    pub street: Street,
    pub active: BTreeSet<u32>,
    pub board: Vec<String>,
    /// Amount required to call on the current street
    pub street_bet: i64,
    pub last_bet: i64,
    pub uncalled: Option<UncalledBet>,
    pub bet_called: bool,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub records: BTreeMap<u32, SeatRecord>,
    /// Last declared pot total
    pub total_pot: i64,
    pub total_winnings: i64,
}

impl ReplayState {
    pub fn new(ctx: &HandContext) -> Self {
        Self {
            active: ctx.dense_seats().collect(),
            records: ctx.dense_seats().map(|s| (s, SeatRecord::default())).collect(),
            ..Default::default()
        }
    }

    pub fn record(&self, seat: u32) -> Option<&SeatRecord> {
        self.records.get(&seat)
    }

    fn record_mut(&mut self, seat: u32) -> &mut SeatRecord {
        self.records.entry(seat).or_default()
    }

    pub fn any_shown(&self) -> bool {
        self.records.values().any(|r| r.shown.is_some())
    }

    pub fn rake(&self) -> i64 {
        if self.total_pot > 0 {
            self.total_pot - self.total_winnings
        } else {
            0
        }
    }

    /// Apply one event. `shows_ahead` tells a showdown marker whether any
    /// show-cards event follows it in this hand.
    ///
    /// A missing amount is only an error once the seat resolves to a player.
    pub fn apply(
        &mut self,
        ctx: &HandContext,
        action: &Action,
        shows_ahead: bool,
    ) -> Result<Vec<String>, ConvertError> {
        let lines = match action {
            Action::SmallBlind { seat, amount } => {
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                let amount = required(ctx, *amount, CODE_SMALL_BLIND)?;
                self.small_blind = Some(seat);
                vec![format!("{}: posts small blind {} ", name, format_money(amount))]
            }
            Action::BigBlind { seat, amount } => {
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                let amount = required(ctx, *amount, CODE_BIG_BLIND)?;
                self.big_blind = Some(seat);
                self.last_bet = amount;
                self.street_bet = amount;
                vec![format!("{}: posts big blind {} ", name, format_money(amount))]
            }
            Action::Check { seat } => match resolve(ctx, *seat) {
                Some((_, name)) => vec![format!("{}: checks ", name)],
                None => Vec::new(),
            },
            Action::Call { seat, amount } => {
                let Some((_, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                let amount = required(ctx, *amount, CODE_CALL)?;
                if self.uncalled.is_some() && amount >= self.last_bet {
                    self.bet_called = true;
                    self.uncalled = None;
                }
                vec![format!("{}: calls {} ", name, format_money(amount))]
            }
            Action::BetOrRaise { seat, amount } => {
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                let amount = required(ctx, *amount, CODE_BET)?;
                self.record_mut(seat).bet_voluntarily = true;
                let line = if self.street_bet > 0 && amount > self.street_bet {
                    format!(
                        "{}: raises {} to {} ",
                        name,
                        format_money(amount - self.street_bet),
                        format_money(amount)
                    )
                } else {
                    format!("{}: bets {} ", name, format_money(amount))
                };
                self.street_bet = amount;
                self.last_bet = amount;
                self.uncalled = Some(UncalledBet { seat, amount });
                self.bet_called = false;
                vec![line]
            }
            Action::Fold { seat } => {
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                let street = self.street;
                self.record_mut(seat).folded_on = Some(street);
                self.active.remove(&seat);
                vec![format!("{}: folds ", name)]
            }
            Action::Board { turn, cards } => self.reveal(*turn, cards),
            Action::Showdown => {
                let mut lines: Vec<String> = self.return_uncalled(ctx).into_iter().collect();
                if self.any_shown() || shows_ahead {
                    lines.push("*** SHOW DOWN ***".to_string());
                }
                lines
            }
            Action::ShowCards {
                seat,
                cards,
                description,
            } => {
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(Vec::new());
                };
                if cards.is_empty() {
                    return Ok(Vec::new());
                }
                let shown = format_cards(cards);
                let line = match description {
                    Some(desc) => format!("{}: shows [{}] ({})", name, shown, desc),
                    None => format!("{}: shows [{}]", name, shown),
                };
                let record = self.record_mut(seat);
                record.shown = Some(cards.clone());
                record.description = description.clone();
                vec![line]
            }
            Action::WinPot { seat, amount, pot } => {
                let mut lines: Vec<String> = self.return_uncalled(ctx).into_iter().collect();
                let Some((seat, name)) = resolve(ctx, *seat) else {
                    return Ok(lines);
                };
                let amount = required(ctx, *amount, CODE_WIN_POT)?;
                self.total_pot = pot.unwrap_or(amount);
                self.total_winnings += amount;
                let record = self.record_mut(seat);
                record.winnings += amount;
                let shown = record.shown.is_some();
                lines.push(format!("{} collected {} from pot", name, format_money(amount)));
                if !shown {
                    lines.push(format!("{}: doesn't show hand ", name));
                }
                lines
            }
            Action::Unknown(code) => {
                trace!(code, "ignoring unknown event type");
                Vec::new()
            }
        };
        Ok(lines)
    }

    fn reveal(&mut self, turn: i64, cards: &[String]) -> Vec<String> {
        if cards.is_empty() {
            return Vec::new();
        }
        let (street, label) = match turn {
            1 => {
                self.board = cards.to_vec();
                self.street_bet = 0;
                self.street = Street::Flop;
                return vec![format!("*** FLOP *** [{}]", format_cards(&self.board))];
            }
            2 => (Street::Turn, "TURN"),
            3 => (Street::River, "RIVER"),
            other => {
                debug!(turn = other, "ignoring board reveal with unknown index");
                return Vec::new();
            }
        };
        self.board.extend_from_slice(cards);
        self.street_bet = 0;
        self.street = street;
        let (prior, last) = self.board.split_at(self.board.len() - 1);
        vec![format!(
            "*** {} *** [{}] [{}]",
            label,
            format_cards(prior),
            format_cards(last)
        )]
    }

    /// Surface an unmatched flop/turn bet as returned to its bettor. Applied
    /// before showdown markers and pot awards.
    fn return_uncalled(&mut self, ctx: &HandContext) -> Option<String> {
        let bet = self.uncalled?;
        if !self.active.contains(&bet.seat) || !matches!(self.street, Street::Flop | Street::Turn)
        {
            return None;
        }
        let contested = self.active.iter().any(|&s| s != bet.seat);
        if contested && self.bet_called {
            return None;
        }
        let name = ctx.name(bet.seat)?;
        self.uncalled = None;
        Some(format!(
            "Uncalled bet ({}) returned to {}",
            format_money(bet.amount),
            name
        ))
    }
}

fn resolve(ctx: &HandContext, seat: Option<u32>) -> Option<(u32, &str)> {
    let resolved = ctx.resolve(seat);
    if resolved.is_none() {
        debug!(?seat, "skipping event for seat without a player");
    }
    resolved
}

fn required(ctx: &HandContext, amount: Option<i64>, code: i64) -> Result<i64, ConvertError> {
    amount.ok_or_else(|| ConvertError::MissingField {
        hand: ctx.hand_id.clone(),
        code,
        field: "value",
    })
}
