//! End-of-game liquidation.

use mmg_core::{Participant, ParticipantRole, Price};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Record of closing a participant's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Liquidation {
    pub role: ParticipantRole,
    /// Inventory closed (positive = sold, negative = bought back).
    pub units: i64,
    pub price: Price,
    /// Signed balance change.
    pub proceeds: Decimal,
}

impl fmt::Display for Liquidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units.signum() {
            0 => write!(f, "{} has no inventory to liquidate.", self.role),
            1 => write!(
                f,
                "{} sells {} unit(s) at £{} and receives £{:.2}.",
                self.role, self.units, self.price, self.proceeds
            ),
            _ => write!(
                f,
                "{} buys back {} unit(s) at £{} and pays £{:.2}.",
                self.role,
                -self.units,
                self.price,
                -self.proceeds
            ),
        }
    }
}

/// Close the whole inventory at `price`: `balance += inventory × price`.
pub fn liquidate(mut participant: Participant, price: Price) -> (Participant, Liquidation) {
    let units = participant.inventory;
    let proceeds = Decimal::from(units) * price.inner();

    participant.balance += proceeds;
    participant.inventory = 0;

    info!(
        role = %participant.role,
        units,
        %price,
        %proceeds,
        balance = %participant.balance,
        "Liquidated inventory"
    );

    (
        participant,
        Liquidation {
            role: participant.role,
            units,
            price,
            proceeds,
        },
    )
}
