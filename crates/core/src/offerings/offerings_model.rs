use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::amounts::{decode_field, parse_decimals, parse_timestamp_field};
use crate::constants::DEFAULT_TOKEN_DECIMALS;
use crate::errors::{Error, Inconsistency, Result};
use crate::vesting::VestingWindow;

// --- Wire records (indexer JSON shapes) ---

/// Wire shape of a `flyingICO` record as returned by the indexer.
///
/// Numeric fields stay as the indexer's decimal strings; the typed
/// [`Offering`] is produced by fallible conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub treasury: Option<String>,
    #[serde(default)]
    pub vesting_start: Option<String>,
    #[serde(default)]
    pub vesting_end: Option<String>,
    #[serde(default)]
    pub token_cap: Option<String>,
    #[serde(default)]
    pub tokens_per_usd: Option<String>,
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub tokens_unlocked: Option<String>,
    #[serde(default)]
    pub position_count: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub accepted_assets: Vec<AcceptedAssetRecord>,
    #[serde(default)]
    pub positions: Vec<OfferingPositionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedAssetRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub address: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
    #[serde(default)]
    pub total_assets: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingPositionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub position_id: String,
    pub user: String,
    #[serde(default)]
    pub asset_amount: Option<String>,
    #[serde(default)]
    pub token_amount: Option<String>,
    #[serde(default)]
    pub vesting_amount: Option<String>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// --- Typed domain snapshot ---

/// Asset metadata supplied explicitly by the snapshot; the core never
/// consults a global lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedAsset {
    pub address: String,
    pub symbol: Option<String>,
    pub decimals: u32,
    pub total_assets: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingPosition {
    pub position_id: String,
    pub owner: String,
    pub asset: Option<String>,
    pub asset_symbol: Option<String>,
    pub asset_amount: Decimal,
    pub token_amount: Decimal,
    pub vesting_amount: Decimal,
    pub is_closed: bool,
    pub created_at: i64,
}

/// A Flying-ICO offering snapshot with all amounts decoded.
///
/// `token_cap` and `tokens_per_usd` are stored by the contract as whole
/// tokens (scale 0); the supply counters use the token's 18 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub token_cap: Decimal,
    pub tokens_per_usd: Decimal,
    pub total_supply: Decimal,
    pub tokens_unlocked: Decimal,
    pub window: VestingWindow,
    pub accepted_assets: Vec<AcceptedAsset>,
    pub positions: Vec<OfferingPosition>,
}

impl TryFrom<OfferingRecord> for Offering {
    type Error = Error;

    fn try_from(record: OfferingRecord) -> Result<Self> {
        let window = VestingWindow::parse(
            record.vesting_start.as_deref(),
            record.vesting_end.as_deref(),
        )?;

        let token_cap = decode_field(record.token_cap.as_deref(), 0, "tokenCap")?;
        let tokens_per_usd = decode_field(record.tokens_per_usd.as_deref(), 0, "tokensPerUsd")?;
        let total_supply = decode_field(
            record.total_supply.as_deref(),
            DEFAULT_TOKEN_DECIMALS,
            "totalSupply",
        )?;
        let tokens_unlocked = decode_field(
            record.tokens_unlocked.as_deref(),
            DEFAULT_TOKEN_DECIMALS,
            "tokensUnlocked",
        )?;

        let accepted_assets = record
            .accepted_assets
            .into_iter()
            .map(|asset| {
                let decimals = parse_decimals(asset.decimals.as_deref());
                Ok(AcceptedAsset {
                    total_assets: decode_field(
                        asset.total_assets.as_deref(),
                        decimals,
                        "totalAssets",
                    )?,
                    address: asset.address,
                    symbol: asset.symbol,
                    decimals,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Position amounts decode with their accepted asset's decimals.
        let assets_by_address: HashMap<String, (u32, Option<String>)> = accepted_assets
            .iter()
            .map(|asset| {
                (
                    asset.address.to_lowercase(),
                    (asset.decimals, asset.symbol.clone()),
                )
            })
            .collect();

        let positions = record
            .positions
            .into_iter()
            .map(|position| {
                let asset = position
                    .asset
                    .as_deref()
                    .and_then(|address| assets_by_address.get(&address.to_lowercase()));
                let decimals = asset.map_or(DEFAULT_TOKEN_DECIMALS, |(decimals, _)| *decimals);
                Ok(OfferingPosition {
                    asset_amount: decode_field(
                        position.asset_amount.as_deref(),
                        decimals,
                        "assetAmount",
                    )?,
                    token_amount: decode_field(
                        position.token_amount.as_deref(),
                        decimals,
                        "tokenAmount",
                    )?,
                    vesting_amount: decode_field(
                        position.vesting_amount.as_deref(),
                        decimals,
                        "vestingAmount",
                    )?,
                    created_at: parse_timestamp_field(position.created_at.as_deref(), "createdAt")?,
                    asset_symbol: asset.and_then(|(_, symbol)| symbol.clone()),
                    position_id: position.position_id,
                    owner: position.user,
                    asset: position.asset,
                    is_closed: position.is_closed,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Offering {
            id: record.id,
            name: record.name,
            symbol: record.symbol,
            token_cap,
            tokens_per_usd,
            total_supply,
            tokens_unlocked,
            window,
            accepted_assets,
            positions,
        })
    }
}

// --- Derived view models ---

/// Remaining cap vs. minted supply, for the supply pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyBreakdown {
    pub remaining_cap: Decimal,
    pub total_supply: Decimal,
}

/// Put vs. purchased vs. vested tokens, for the distribution pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDistribution {
    pub tokens_put: Decimal,
    pub tokens_purchased: Decimal,
    pub tokens_vested: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingPositionEconomics {
    pub position_id: String,
    pub asset: Option<String>,
    pub asset_symbol: Option<String>,
    pub asset_amount: Decimal,
    pub token_amount: Decimal,
    pub vesting_amount: Decimal,
    pub divestible_tokens: Decimal,
    pub vested_tokens: Decimal,
    pub vesting_progress_pct: Decimal,
    pub is_closed: bool,
}

/// All derived metrics for one offering snapshot at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingEconomics {
    pub evaluated_at: i64,
    pub token_cap: Decimal,
    pub tokens_per_usd: Decimal,
    pub total_supply: Decimal,
    pub tokens_unlocked: Decimal,
    pub tokens_locked: Decimal,
    pub remaining_cap: Decimal,
    pub locked_fraction: Decimal,
    pub vested_tokens: Decimal,
    pub supply: SupplyBreakdown,
    pub distribution: TokenDistribution,
    pub positions: Vec<OfferingPositionEconomics>,
    pub findings: Vec<Inconsistency>,
}
