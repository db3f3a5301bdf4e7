use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amounts::{decode_field, parse_decimals, parse_timestamp_field};
use crate::constants::FEE_DECIMALS;
use crate::errors::{Error, Inconsistency, Result};
use crate::vesting::VestingWindow;

// --- Wire records (indexer JSON shapes) ---

/// Wire shape of a `stakVault` record from the detail query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub treasury: Option<String>,
    #[serde(default)]
    pub performance_rate: Option<String>,
    #[serde(default)]
    pub vesting_start: Option<String>,
    #[serde(default)]
    pub vesting_end: Option<String>,
    #[serde(default)]
    pub redeems_at_nav_enabled: bool,
    #[serde(default)]
    pub total_performance_fees: Option<String>,
    #[serde(default)]
    pub total_assets: Option<String>,
    #[serde(default)]
    pub invested_assets: Option<String>,
    #[serde(default)]
    pub redeemable_assets: Option<String>,
    #[serde(default)]
    pub total_shares: Option<String>,
    #[serde(default)]
    pub total_shares_unlocked: Option<String>,
    #[serde(default)]
    pub divest_fee: Option<String>,
    #[serde(default)]
    pub position_count: Option<String>,
    #[serde(default)]
    pub positions: Vec<VaultPositionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPositionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub position_id: String,
    pub user: String,
    #[serde(default)]
    pub asset_amount: Option<String>,
    #[serde(default)]
    pub share_amount: Option<String>,
    #[serde(default)]
    pub shares_unlocked: Option<String>,
    #[serde(default)]
    pub assets_divested: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Wire shape of the lighter `stakVaults` list record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultListRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
    #[serde(default)]
    pub total_assets: Option<String>,
    #[serde(default)]
    pub invested_assets: Option<String>,
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub redeems_at_nav_enabled: bool,
    #[serde(default)]
    pub total_performance_fees: Option<String>,
    #[serde(default)]
    pub position_count: Option<String>,
}

// --- Typed domain snapshot ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPosition {
    pub position_id: String,
    pub owner: String,
    pub asset_amount: Decimal,
    pub share_amount: Decimal,
    pub shares_unlocked: Decimal,
    pub assets_divested: Decimal,
    pub is_closed: bool,
    pub created_at: i64,
}

/// A Stak vault snapshot with all amounts decoded.
///
/// `idle_assets` is the indexer's `totalAssets` field: the balance held
/// by the vault that is not currently deployed. Performance fees keep
/// their fixed 4-decimal scale regardless of the asset's decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub asset: Option<String>,
    pub decimals: u32,
    pub idle_assets: Decimal,
    pub invested_assets: Decimal,
    pub performance_fees: Decimal,
    pub total_shares: Decimal,
    pub total_shares_unlocked: Decimal,
    pub performance_rate: Option<Decimal>,
    pub divest_fee: Option<Decimal>,
    pub redeems_at_nav_enabled: bool,
    pub window: VestingWindow,
    pub positions: Vec<VaultPosition>,
}

/// Decodes a rate field at the fixed fee scale when it is present.
fn decode_fee_rate(value: Option<&str>, field: &str) -> Result<Option<Decimal>> {
    match value {
        Some(raw) if !raw.trim().is_empty() => {
            Ok(Some(decode_field(Some(raw), FEE_DECIMALS, field)?))
        }
        _ => Ok(None),
    }
}

impl TryFrom<VaultRecord> for Vault {
    type Error = Error;

    fn try_from(record: VaultRecord) -> Result<Self> {
        let decimals = parse_decimals(record.decimals.as_deref());
        let window = VestingWindow::parse(
            record.vesting_start.as_deref(),
            record.vesting_end.as_deref(),
        )?;

        let positions = record
            .positions
            .into_iter()
            .map(|position| {
                Ok(VaultPosition {
                    asset_amount: decode_field(
                        position.asset_amount.as_deref(),
                        decimals,
                        "assetAmount",
                    )?,
                    share_amount: decode_field(
                        position.share_amount.as_deref(),
                        decimals,
                        "shareAmount",
                    )?,
                    shares_unlocked: decode_field(
                        position.shares_unlocked.as_deref(),
                        decimals,
                        "sharesUnlocked",
                    )?,
                    assets_divested: decode_field(
                        position.assets_divested.as_deref(),
                        decimals,
                        "assetsDivested",
                    )?,
                    created_at: parse_timestamp_field(position.created_at.as_deref(), "createdAt")?,
                    position_id: position.position_id,
                    owner: position.user,
                    is_closed: position.is_closed,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Vault {
            idle_assets: decode_field(record.total_assets.as_deref(), decimals, "totalAssets")?,
            invested_assets: decode_field(
                record.invested_assets.as_deref(),
                decimals,
                "investedAssets",
            )?,
            performance_fees: decode_field(
                record.total_performance_fees.as_deref(),
                FEE_DECIMALS,
                "totalPerformanceFees",
            )?,
            total_shares: decode_field(record.total_shares.as_deref(), decimals, "totalShares")?,
            total_shares_unlocked: decode_field(
                record.total_shares_unlocked.as_deref(),
                decimals,
                "totalSharesUnlocked",
            )?,
            performance_rate: decode_fee_rate(
                record.performance_rate.as_deref(),
                "performanceRate",
            )?,
            divest_fee: decode_fee_rate(record.divest_fee.as_deref(), "divestFee")?,
            id: record.id,
            name: record.name,
            symbol: record.symbol,
            asset: record.asset,
            decimals,
            redeems_at_nav_enabled: record.redeems_at_nav_enabled,
            window,
            positions,
        })
    }
}

// --- Derived view models ---

/// Locked vs. unlocked vs. vested shares, for the distribution chart.
/// `shares_locked` is intentionally not forced non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareDistribution {
    pub shares_locked: Decimal,
    pub shares_unlocked: Decimal,
    pub shares_vested: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPositionEconomics {
    pub position_id: String,
    pub asset_amount: Decimal,
    pub share_amount: Decimal,
    pub shares_unlocked: Decimal,
    pub assets_divested: Decimal,
    pub divestible_shares: Decimal,
    pub vested_shares: Decimal,
    pub vesting_progress_pct: Decimal,
    /// Absent while price-per-share is undefined (no shares outstanding).
    pub current_value: Option<Decimal>,
    pub profit_loss: Option<Decimal>,
    pub profit_loss_pct: Option<Decimal>,
    pub is_closed: bool,
}

/// All derived metrics for one vault snapshot at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEconomics {
    pub evaluated_at: i64,
    pub idle_assets: Decimal,
    pub invested_assets: Decimal,
    pub performance_fees: Decimal,
    /// Idle plus invested assets, net of accrued performance fees.
    pub total_assets: Decimal,
    /// Percent of total assets currently deployed; 0 when the vault is
    /// empty.
    pub utilization_rate: Decimal,
    /// `None` when no shares are outstanding.
    pub price_per_share: Option<Decimal>,
    pub total_shares: Decimal,
    pub locked_fraction: Decimal,
    pub shares_vested: Decimal,
    pub distribution: ShareDistribution,
    pub positions: Vec<VaultPositionEconomics>,
    pub findings: Vec<Inconsistency>,
}

/// List-view summary of a vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub asset: Option<String>,
    /// Idle plus invested assets.
    pub total_assets: Decimal,
    pub total_supply: Decimal,
    pub position_count: u64,
    pub redeems_at_nav_enabled: bool,
}

/// Asset amounts a divest of `shares` would produce, before and after
/// the divest fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivestPreview {
    pub gross_assets: Decimal,
    pub fee_assets: Decimal,
    pub net_assets: Decimal,
}
