//! Session driver: renders every hand of a session into PokerStars text.
//!
//! Each hand is replayed from scratch; nothing carries over between hands.

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::ConvertError;
use crate::events::ClassifiedEvents;
use crate::format::{format_cards, format_money, hand_timestamp};
use crate::hand_id::hand_number;
use crate::model::{Hand, Player, Session};
use crate::replay::{HandContext, ReplayState};
use crate::summary::render_summary;

/// Labels and the hero name used while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Player whose hole cards are disclosed in the `Dealt to` line
    pub hero: String,
    pub site_name: String,
    pub table_prefix: String,
    pub table_size: u8,
    pub currency: String,
    /// Literal label appended to UTC timestamps
    pub timezone_label: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            hero: String::new(),
            site_name: "PokerStarsCollection".to_string(),
            table_prefix: "PokerNow".to_string(),
            table_size: 9,
            currency: "USD".to_string(),
            timezone_label: "ET".to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn with_hero(hero: impl Into<String>) -> Self {
        Self {
            hero: hero.into(),
            ..Self::default()
        }
    }
}

/// Render one hand as a text block terminated by two blank lines.
pub fn render_hand(
    hand: &Hand,
    game_id: &str,
    config: &ConverterConfig,
) -> Result<String, ConvertError> {
    let classified = ClassifiedEvents::split(&hand.id, &hand.events)?;
    let started = hand_timestamp(&hand.id, hand.started_at, &config.timezone_label)?;
    let ctx = HandContext::new(hand);
    debug!(
        hand = %hand.id,
        seats = ctx.seats.len(),
        events = hand.events.len(),
        "rendering hand"
    );

    let mut lines = vec![
        format!(
            "{} Hand #{}:  Hold'em No Limit ({}/{} {}) - {}",
            config.site_name,
            hand_number(&hand.id),
            format_money(hand.small_blind),
            format_money(hand.big_blind),
            config.currency,
            started
        ),
        format!(
            "Table '{} {}' {}-max Seat #{} is the button",
            config.table_prefix, game_id, config.table_size, ctx.button
        ),
    ];
    for (seat, player) in ordered_players(hand, &ctx) {
        lines.push(format!(
            "Seat {}: {} ({} in chips) ",
            seat,
            player.name,
            format_money(player.stack)
        ));
    }

    let mut state = ReplayState::new(&ctx);
    for blind in &classified.blinds {
        lines.extend(state.apply(&ctx, blind, false)?);
    }

    lines.push("*** HOLE CARDS ***".to_string());
    for (_, player) in ordered_players(hand, &ctx) {
        if player.name != config.hero {
            continue;
        }
        let cards = player.hole_cards();
        if cards.len() == 2 {
            lines.push(format!("Dealt to {} [{}]", config.hero, format_cards(&cards)));
        }
    }

    for event in &classified.in_play {
        lines.extend(state.apply(&ctx, &event.action, event.shows_ahead)?);
    }
    lines.extend(render_summary(&state, &ctx));

    let mut block = lines.join("\n");
    block.push_str("\n\n\n");
    Ok(block)
}

/// Render every hand in session order. The first malformed hand aborts.
pub fn convert_session(
    session: &Session,
    config: &ConverterConfig,
) -> Result<Vec<String>, ConvertError> {
    let game_id = session.game_label();
    session
        .hands
        .iter()
        .map(|hand| render_hand(hand, game_id, config))
        .collect()
}

/// One player per dense seat, ascending; a repeated source seat keeps the
/// last player listed.
fn ordered_players<'a>(hand: &'a Hand, ctx: &HandContext) -> BTreeMap<u32, &'a Player> {
    let mut by_seat = BTreeMap::new();
    for player in &hand.players {
        if let Some(dense) = ctx.seats.renumber(player.seat) {
            by_seat.insert(dense, player);
        }
    }
    by_seat
}
