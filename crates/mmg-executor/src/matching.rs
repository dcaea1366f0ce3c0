//! Bid-side and ask-side matching between the player and bot quotes.

use std::cmp::Ordering;

use mmg_core::{Participant, ParticipantRole, Price, Quote, TradeSide};
use tracing::info;

use crate::trade_log::{TradeEvent, TradeLog};

/// Participants after matching, plus what traded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub player: Participant,
    pub bot: Participant,
    pub trades: TradeLog,
}

/// Match one round of quotes.
///
/// The bid side and the ask side are resolved independently, so one
/// participant may buy and sell in the same round. Each winner trades one
/// unit at its own quoted price; an exact tie trades nothing.
pub fn resolve_round(
    player_quote: &Quote,
    bot_quote: &Quote,
    mut player: Participant,
    mut bot: Participant,
) -> Resolution {
    debug_assert_eq!(player.role, ParticipantRole::Player);
    debug_assert_eq!(bot.role, ParticipantRole::Bot);

    let mut trades = TradeLog::new();

    // Bid side: the higher bid buys
    let bid_winner = match player_quote.bid.cmp(&bot_quote.bid) {
        Ordering::Greater => Some((&mut player, player_quote.bid)),
        Ordering::Less => Some((&mut bot, bot_quote.bid)),
        Ordering::Equal => None,
    };
    trades.push(fill(bid_winner, TradeSide::Buy, player_quote));

    // Ask side: the lower ask sells
    let ask_winner = match player_quote.ask.cmp(&bot_quote.ask) {
        Ordering::Less => Some((&mut player, player_quote.ask)),
        Ordering::Greater => Some((&mut bot, bot_quote.ask)),
        Ordering::Equal => None,
    };
    trades.push(fill(ask_winner, TradeSide::Sell, player_quote));

    info!(
        player_bid = %player_quote.bid,
        player_ask = %player_quote.ask,
        bot_bid = %bot_quote.bid,
        bot_ask = %bot_quote.ask,
        player_inventory = player.inventory,
        bot_inventory = bot.inventory,
        "Round matched"
    );

    Resolution {
        player,
        bot,
        trades,
    }
}

fn fill(
    winner: Option<(&mut Participant, Price)>,
    side: TradeSide,
    player_quote: &Quote,
) -> TradeEvent {
    match winner {
        Some((participant, price)) => {
            participant.trade(side, price);
            TradeEvent::Filled {
                role: participant.role,
                side,
                price,
            }
        }
        // On a tie both quotes carry the same price
        None => TradeEvent::Tied {
            side,
            price: player_quote.price_for(side),
        },
    }
}
