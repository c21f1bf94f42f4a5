//! Conversions from wire types to domain types for opportunities.

use super::wire::OpportunityResponse;
use super::{OpportunityKind, OpportunitySignal};

impl From<OpportunityResponse> for OpportunitySignal {
    fn from(r: OpportunityResponse) -> Self {
        Self {
            kind: OpportunityKind::from_flags(r.buy_opportunity, r.sell_opportunity),
            strength: OpportunitySignal::strength_from_difference(r.price_difference),
        }
    }
}
