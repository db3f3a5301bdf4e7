//! Derives the Flying-ICO dashboard metrics from an offering snapshot.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Inconsistency;
use crate::offerings::{
    Offering, OfferingEconomics, OfferingPositionEconomics, SupplyBreakdown, TokenDistribution,
};
use crate::vesting::{
    locked_fraction, position_locked_fraction, vesting_schedule, SchedulePoint,
};

/// Computes every derived offering metric for a single instant.
///
/// `now` is applied to the global and all per-position fractions in one
/// pass so the splits are mutually consistent. Negative derived
/// quantities are surfaced as findings, never clamped.
pub fn calculate_offering_economics(offering: &Offering, now: i64) -> OfferingEconomics {
    debug!(
        "Calculating offering economics for {} ({} positions) at {}.",
        offering.id,
        offering.positions.len(),
        now
    );

    let tokens_locked = offering.total_supply - offering.tokens_unlocked;
    let remaining_cap = offering.token_cap - offering.total_supply;
    let locked = locked_fraction(&offering.window, now);
    let vested_tokens = tokens_locked * (Decimal::ONE - locked);

    let mut findings = Vec::new();
    if remaining_cap < Decimal::ZERO {
        let finding = Inconsistency::NegativeRemainingCap { remaining_cap };
        warn!("Offering {}: {}", offering.id, finding);
        findings.push(finding);
    }
    if tokens_locked < Decimal::ZERO {
        let finding = Inconsistency::NegativeTokensLocked { tokens_locked };
        warn!("Offering {}: {}", offering.id, finding);
        findings.push(finding);
    }

    let positions = offering
        .positions
        .iter()
        .map(|position| {
            let position_locked =
                position_locked_fraction(&offering.window, position.created_at, now);
            let divestible_tokens = position.vesting_amount * position_locked;
            OfferingPositionEconomics {
                position_id: position.position_id.clone(),
                asset: position.asset.clone(),
                asset_symbol: position.asset_symbol.clone(),
                asset_amount: position.asset_amount,
                token_amount: position.token_amount,
                vesting_amount: position.vesting_amount,
                divestible_tokens,
                vested_tokens: position.vesting_amount - divestible_tokens,
                vesting_progress_pct: ((Decimal::ONE - position_locked) * dec!(100)).round_dp(4),
                is_closed: position.is_closed,
            }
        })
        .collect();

    OfferingEconomics {
        evaluated_at: now,
        token_cap: offering.token_cap,
        tokens_per_usd: offering.tokens_per_usd,
        total_supply: offering.total_supply,
        tokens_unlocked: offering.tokens_unlocked,
        tokens_locked,
        remaining_cap,
        locked_fraction: locked,
        vested_tokens,
        supply: SupplyBreakdown {
            remaining_cap,
            total_supply: offering.total_supply,
        },
        distribution: TokenDistribution {
            tokens_put: tokens_locked,
            tokens_purchased: offering.tokens_unlocked,
            tokens_vested: vested_tokens,
        },
        positions,
        findings,
    }
}

/// Vesting schedule series for the offering chart, tracking the
/// globally locked token quantity across the padded window.
pub fn offering_vesting_schedule(offering: &Offering, steps: usize) -> Vec<SchedulePoint> {
    let tokens_locked = offering.total_supply - offering.tokens_unlocked;
    vesting_schedule(&offering.window, tokens_locked, steps)
}
