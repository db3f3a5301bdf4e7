#[cfg(test)]
mod tests {
    use crate::errors::Inconsistency;
    use crate::vaults::{
        calculate_vault_economics, divest_preview, summarize_vaults, vault_vesting_schedule,
        Vault, VaultListRecord, VaultRecord,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const VAULT_JSON: &str = r#"{
        "id": "0xde30da39c46104798bb5aa3fe8b9e0e1f348163f",
        "name": "Stak USDC Vault",
        "symbol": "sUSDC",
        "asset": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        "decimals": "6",
        "owner": "0x281055afc982d96fab65b3a49cac8b878184cb16",
        "treasury": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
        "performanceRate": "2000",
        "vestingStart": "1000",
        "vestingEnd": "2000",
        "redeemsAtNavEnabled": true,
        "totalPerformanceFees": "40000",
        "totalAssets": "1000000000",
        "investedAssets": "500000000",
        "totalShares": "748000000",
        "totalSharesUnlocked": "148000000",
        "divestFee": "100",
        "positionCount": "2",
        "positions": [
            {
                "positionId": "1",
                "user": "0x52908400098527886e0f7030069857d2e4169ee7",
                "assetAmount": "180000000",
                "shareAmount": "100000000",
                "sharesUnlocked": "0",
                "assetsDivested": "0",
                "isClosed": false,
                "createdAt": "1200"
            },
            {
                "positionId": "2",
                "user": "0x8617e340b3d01fa5f11f306f4090fd50e238070d",
                "assetAmount": "0",
                "shareAmount": "50000000",
                "sharesUnlocked": "0",
                "assetsDivested": "0",
                "isClosed": false,
                "createdAt": "1000"
            }
        ]
    }"#;

    fn vault() -> Vault {
        let record: VaultRecord = serde_json::from_str(VAULT_JSON).unwrap();
        Vault::try_from(record).unwrap()
    }

    #[test]
    fn fee_fields_decode_at_their_fixed_scale() {
        let vault = vault();
        // Asset fields use the vault's 6 decimals, fee fields always 4.
        assert_eq!(vault.idle_assets, dec!(1000));
        assert_eq!(vault.invested_assets, dec!(500));
        assert_eq!(vault.performance_fees, dec!(4));
        assert_eq!(vault.performance_rate, Some(dec!(0.2)));
        assert_eq!(vault.divest_fee, Some(dec!(0.01)));
    }

    #[test]
    fn total_assets_combine_net_of_fees() {
        let economics = calculate_vault_economics(&vault(), 1500);
        assert_eq!(economics.total_assets, dec!(1496));
        assert_eq!(economics.utilization_rate, dec!(33.4225));
    }

    #[test]
    fn utilization_is_zero_for_an_empty_vault() {
        let mut record: VaultRecord = serde_json::from_str(VAULT_JSON).unwrap();
        record.total_assets = Some(String::from("0"));
        record.invested_assets = Some(String::from("0"));
        record.total_performance_fees = Some(String::from("0"));
        let vault = Vault::try_from(record).unwrap();

        let economics = calculate_vault_economics(&vault, 1500);
        assert_eq!(economics.utilization_rate, Decimal::ZERO);
    }

    #[test]
    fn price_per_share_guards_zero_shares() {
        let economics = calculate_vault_economics(&vault(), 1500);
        assert_eq!(economics.price_per_share, Some(dec!(2)));

        let mut record: VaultRecord = serde_json::from_str(VAULT_JSON).unwrap();
        record.total_shares = Some(String::from("0"));
        let empty = Vault::try_from(record).unwrap();
        let economics = calculate_vault_economics(&empty, 1500);
        assert_eq!(economics.price_per_share, None);
        assert!(economics.positions.iter().all(|p| p.current_value.is_none()));
    }

    #[test]
    fn share_distribution_at_midpoint() {
        let economics = calculate_vault_economics(&vault(), 1500);
        assert_eq!(economics.locked_fraction, dec!(0.5));
        assert_eq!(economics.shares_vested, dec!(374));
        assert_eq!(economics.distribution.shares_unlocked, dec!(148));
        assert_eq!(economics.distribution.shares_locked, dec!(226));
        assert!(economics.findings.is_empty());
    }

    #[test]
    fn negative_locked_shares_are_reported_not_clamped() {
        let mut record: VaultRecord = serde_json::from_str(VAULT_JSON).unwrap();
        record.total_shares_unlocked = Some(String::from("500000000"));
        let vault = Vault::try_from(record).unwrap();

        let economics = calculate_vault_economics(&vault, 1500);
        assert_eq!(economics.distribution.shares_locked, dec!(-126));
        assert_eq!(
            economics.findings,
            vec![Inconsistency::NegativeSharesLocked {
                shares_locked: dec!(-126)
            }]
        );
    }

    #[test]
    fn position_splits_use_the_position_evaluator() {
        let economics = calculate_vault_economics(&vault(), 1500);

        // Opened at 1200, so it vests over [1200, 2000]: 62.5% locked
        // at 1500.
        let first = &economics.positions[0];
        assert_eq!(first.divestible_shares, dec!(62.5));
        assert_eq!(first.vested_shares, dec!(37.5));
        assert_eq!(first.vesting_progress_pct, dec!(37.5));
    }

    #[test]
    fn position_value_and_profit_loss() {
        let economics = calculate_vault_economics(&vault(), 1500);

        let first = &economics.positions[0];
        assert_eq!(first.current_value, Some(dec!(200)));
        assert_eq!(first.profit_loss, Some(dec!(20)));
        assert_eq!(first.profit_loss_pct, Some(dec!(11.1111)));

        // Zero initial assets: percentage guards the denominator.
        let second = &economics.positions[1];
        assert_eq!(second.current_value, Some(dec!(100)));
        assert_eq!(second.profit_loss, Some(dec!(100)));
        assert_eq!(second.profit_loss_pct, Some(Decimal::ZERO));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let vault = vault();
        assert_eq!(
            calculate_vault_economics(&vault, 1500),
            calculate_vault_economics(&vault, 1500)
        );
    }

    #[test]
    fn schedule_tracks_the_share_supply() {
        let series = vault_vesting_schedule(&vault(), 50);
        assert_eq!(series.len(), 51);
        assert_eq!(series[0].vested_amount, Decimal::ZERO);
        assert_eq!(series.last().unwrap().vested_amount, dec!(748));
    }

    #[test]
    fn divest_preview_applies_the_fee() {
        let preview = divest_preview(dec!(50), dec!(2), dec!(0.01));
        assert_eq!(preview.gross_assets, dec!(100));
        assert_eq!(preview.fee_assets, dec!(1));
        assert_eq!(preview.net_assets, dec!(99));
    }

    #[test]
    fn missing_required_field_is_named() {
        let mut record: VaultRecord = serde_json::from_str(VAULT_JSON).unwrap();
        record.total_performance_fees = None;
        let err = Vault::try_from(record).unwrap_err();
        assert!(err.to_string().contains("totalPerformanceFees"));
    }

    fn list_record(id: &str, total: &str, invested: &str) -> VaultListRecord {
        serde_json::from_str(&format!(
            r#"{{
                "id": "{id}",
                "name": "Vault",
                "symbol": "VLT",
                "decimals": "6",
                "totalAssets": "{total}",
                "investedAssets": "{invested}",
                "totalSupply": "748000000",
                "redeemsAtNavEnabled": false,
                "positionCount": "3"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn summaries_combine_assets_and_honor_exclusions() {
        let records = vec![
            list_record("0xaaa1", "1000000000", "500000000"),
            list_record("0xBBB2", "2000000000", "0"),
        ];

        // Exclusions are matched case-insensitively.
        let summaries = summarize_vaults(&records, &[String::from("0xbbb2")]).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "0xaaa1");
        assert_eq!(summaries[0].total_assets, dec!(1500));
        assert_eq!(summaries[0].position_count, 3);
    }
}
