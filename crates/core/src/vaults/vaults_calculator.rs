//! Derives the Stak-vault dashboard metrics from a vault snapshot.

use std::collections::HashSet;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::amounts::{decode_field, parse_decimals};
use crate::errors::{Inconsistency, Result};
use crate::vaults::{
    DivestPreview, ShareDistribution, Vault, VaultEconomics, VaultListRecord,
    VaultPositionEconomics, VaultSummary,
};
use crate::vesting::{
    locked_fraction, position_locked_fraction, vesting_schedule, SchedulePoint,
};

/// Computes every derived vault metric for a single instant.
///
/// `now` is applied to the global and all per-position fractions in one
/// pass. A negative locked-share balance is surfaced as a finding and
/// left in the distribution as-is: clamping it would hide an upstream
/// accounting bug.
pub fn calculate_vault_economics(vault: &Vault, now: i64) -> VaultEconomics {
    debug!(
        "Calculating vault economics for {} ({} positions) at {}.",
        vault.id,
        vault.positions.len(),
        now
    );

    let total_assets = vault.idle_assets + vault.invested_assets - vault.performance_fees;

    let utilization_rate = if total_assets <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (vault.invested_assets / total_assets * dec!(100)).round_dp(4)
    };

    let price_per_share = if vault.total_shares > Decimal::ZERO {
        Some(total_assets / vault.total_shares)
    } else {
        None
    };

    let locked = locked_fraction(&vault.window, now);
    let shares_vested = vault.total_shares * (Decimal::ONE - locked);
    let shares_locked = vault.total_shares - vault.total_shares_unlocked - shares_vested;

    let mut findings = Vec::new();
    if shares_locked < Decimal::ZERO {
        let finding = Inconsistency::NegativeSharesLocked { shares_locked };
        warn!("Vault {}: {}", vault.id, finding);
        findings.push(finding);
    }

    let positions = vault
        .positions
        .iter()
        .map(|position| {
            let position_locked = position_locked_fraction(&vault.window, position.created_at, now);
            let divestible_shares = position.share_amount * position_locked;
            let current_value = price_per_share.map(|price| position.share_amount * price);
            let profit_loss = current_value.map(|value| value - position.asset_amount);
            let profit_loss_pct = profit_loss.map(|gain| {
                if position.asset_amount > Decimal::ZERO {
                    (gain / position.asset_amount * dec!(100)).round_dp(4)
                } else {
                    Decimal::ZERO
                }
            });
            VaultPositionEconomics {
                position_id: position.position_id.clone(),
                asset_amount: position.asset_amount,
                share_amount: position.share_amount,
                shares_unlocked: position.shares_unlocked,
                assets_divested: position.assets_divested,
                divestible_shares,
                vested_shares: position.share_amount - divestible_shares,
                vesting_progress_pct: ((Decimal::ONE - position_locked) * dec!(100)).round_dp(4),
                current_value,
                profit_loss,
                profit_loss_pct,
                is_closed: position.is_closed,
            }
        })
        .collect();

    VaultEconomics {
        evaluated_at: now,
        idle_assets: vault.idle_assets,
        invested_assets: vault.invested_assets,
        performance_fees: vault.performance_fees,
        total_assets,
        utilization_rate,
        price_per_share,
        total_shares: vault.total_shares,
        locked_fraction: locked,
        shares_vested,
        distribution: ShareDistribution {
            shares_locked,
            shares_unlocked: vault.total_shares_unlocked,
            shares_vested,
        },
        positions,
        findings,
    }
}

/// Vesting schedule series for the vault chart, tracking the share
/// supply (the quantity that actually vests) across the padded window.
pub fn vault_vesting_schedule(vault: &Vault, steps: usize) -> Vec<SchedulePoint> {
    vesting_schedule(&vault.window, vault.total_shares, steps)
}

/// Asset amounts produced by divesting `shares` at the given
/// price-per-share, net of the divest fee rate.
pub fn divest_preview(
    shares: Decimal,
    price_per_share: Decimal,
    divest_fee_rate: Decimal,
) -> DivestPreview {
    let gross_assets = shares * price_per_share;
    let fee_assets = gross_assets * divest_fee_rate;
    DivestPreview {
        gross_assets,
        fee_assets,
        net_assets: gross_assets - fee_assets,
    }
}

/// Builds list-view summaries from the lighter list records, skipping
/// the caller-supplied exclusion addresses (case-insensitive).
pub fn summarize_vaults(
    records: &[VaultListRecord],
    excluded_addresses: &[String],
) -> Result<Vec<VaultSummary>> {
    let excluded: HashSet<String> = excluded_addresses
        .iter()
        .map(|address| address.to_lowercase())
        .collect();

    records
        .iter()
        .filter(|record| !excluded.contains(&record.id.to_lowercase()))
        .map(|record| {
            let decimals = parse_decimals(record.decimals.as_deref());
            let idle_assets =
                decode_field(record.total_assets.as_deref(), decimals, "totalAssets")?;
            let invested_assets =
                decode_field(record.invested_assets.as_deref(), decimals, "investedAssets")?;
            let total_supply =
                decode_field(record.total_supply.as_deref(), decimals, "totalSupply")?;
            let position_count = record
                .position_count
                .as_deref()
                .and_then(|count| count.trim().parse::<u64>().ok())
                .unwrap_or(0);

            Ok(VaultSummary {
                id: record.id.clone(),
                name: record.name.clone(),
                symbol: record.symbol.clone(),
                asset: record.asset.clone(),
                total_assets: idle_assets + invested_assets,
                total_supply,
                position_count,
                redeems_at_nav_enabled: record.redeems_at_nav_enabled,
            })
        })
        .collect()
}
