use crate::format::{format_cards, format_money};
use crate::replay::{HandContext, ReplayState};

/// Render the `*** SUMMARY ***` section from the finished replay state.
pub fn render_summary(state: &ReplayState, ctx: &HandContext) -> Vec<String> {
    let mut lines = vec![
        "*** SUMMARY ***".to_string(),
        format!(
            "Total pot {} | Rake {} ",
            format_money(state.total_pot),
            format_money(state.rake())
        ),
    ];
    if !state.board.is_empty() {
        lines.push(format!("Board [{}]", format_cards(&state.board)));
    }
    for seat in ctx.dense_seats() {
        let Some(name) = ctx.name(seat) else {
            continue;
        };
        lines.push(seat_line(state, ctx, seat, name));
    }
    lines
}

fn seat_line(state: &ReplayState, ctx: &HandContext, seat: u32, name: &str) -> String {
    let mut line = format!("Seat {}: {}", seat, name);
    if seat == ctx.button {
        line.push_str(" (button)");
    }
    if state.small_blind == Some(seat) {
        line.push_str(" (small blind)");
    }
    if state.big_blind == Some(seat) {
        line.push_str(" (big blind)");
    }

    let Some(record) = state.record(seat) else {
        return line;
    };
    if let Some(cards) = &record.shown {
        let cards = format_cards(cards);
        let outcome = if record.winnings > 0 {
            format!("won ({})", format_money(record.winnings))
        } else {
            "lost".to_string()
        };
        line.push_str(&format!(" showed [{}] and {}", cards, outcome));
        if let Some(desc) = &record.description {
            line.push_str(&format!(" with {}", desc));
        }
    } else if let Some(street) = record.folded_on {
        line.push(' ');
        line.push_str(street.fold_label(record.bet_voluntarily));
    } else if record.winnings > 0 {
        line.push_str(&format!(" collected ({})", format_money(record.winnings)));
    }
    line
}
