use fractic_distributable_amount::{
    entities::{
        CalculationMode, CalculatorOptions, GoodwillDeductionTier, SheetFormat,
        TreasuryStockBookValue,
    },
    util::DistributableAmountUtil,
    ReportOptions,
};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[tokio::test]
async fn csv_sheet_with_dividends() {
    let util = DistributableAmountUtil::new();
    let (sheet, breakdown, report) = util.from_file(fixture("fy2024.csv")).await.unwrap();

    assert_eq!(sheet.name.as_deref(), Some("Example K.K."));
    assert_eq!(
        sheet.fiscal_year_end.map(|d| d.to_string()).as_deref(),
        Some("2024-03-31")
    );
    assert_eq!(breakdown.result.surplus_amount, 23_000_000);
    assert_eq!(breakdown.result.dividend_adjustments, -2_200_000);
    assert_eq!(breakdown.result.distributable_amount, 18_800_000);
    assert!(report.contains("18,800,000 ¥"));
}

#[tokio::test]
async fn ron_sheet_with_interim_settlement() {
    let util = DistributableAmountUtil::new();
    let (_, breakdown, _) = util
        .from_file(fixture("fy2024_interim.ron"))
        .await
        .unwrap();
    assert_eq!(breakdown.result.interim_settlement_adjustments, 3_300_000);
    assert_eq!(breakdown.goodwill.tier, GoodwillDeductionTier::NoDeduction);
    assert_eq!(breakdown.result.treasury_stock_abs, 3_000_000);
    assert_eq!(breakdown.result.distributable_amount, 21_650_000);

    let util = DistributableAmountUtil::with_options(
        CalculatorOptions {
            treasury_stock_book_value: TreasuryStockBookValue::NetOfDisposal,
            ..Default::default()
        },
        ReportOptions::default(),
    );
    let (_, breakdown, report) = util
        .from_file(fixture("fy2024_interim.ron"))
        .await
        .unwrap();
    assert_eq!(breakdown.result.treasury_stock_abs, 2_000_000);
    assert_eq!(breakdown.result.distributable_amount, 22_650_000);
    assert!(report.contains("net of post-year-end disposals"));
}

#[tokio::test]
async fn basic_mode_ignores_interim_settlement() {
    let util = DistributableAmountUtil::with_options(
        CalculatorOptions {
            mode: CalculationMode::Basic,
            ..Default::default()
        },
        ReportOptions::default(),
    );
    let (_, breakdown, _) = util
        .from_file(fixture("fy2024_interim.ron"))
        .await
        .unwrap();
    assert_eq!(breakdown.result.interim_settlement_adjustments, 0);
    assert_eq!(breakdown.result.dividend_adjustments, 0);
    // 23,000,000 surplus - 3,000,000 treasury stock - 1,000,000 securities.
    assert_eq!(breakdown.result.distributable_amount, 19_000_000);
}

#[tokio::test]
async fn batch_preserves_order() {
    let util = DistributableAmountUtil::new();
    let results = util
        .from_files(vec![
            fixture("deficit.csv"),
            fixture("fy2024.csv"),
            fixture("fy2024_interim.ron"),
        ])
        .await
        .unwrap();

    let amounts: Vec<i64> = results
        .iter()
        .map(|(_, breakdown, _)| breakdown.result.distributable_amount)
        .collect();
    assert_eq!(amounts, vec![-1_400_000, 18_800_000, 21_650_000]);
    assert_eq!(results[0].1.result.net_assets_adjustment, 1_700_000);
    assert!(results[0].2.contains("No distribution is permitted."));
}

#[tokio::test]
async fn batch_fails_on_invalid_sheet() {
    let util = DistributableAmountUtil::new();
    let result = util
        .from_files(vec![fixture("fy2024.csv"), fixture("negative_goodwill.csv")])
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn rejects_unsupported_or_missing_files() {
    let util = DistributableAmountUtil::new();
    assert!(util.from_file(fixture("balances.xlsx")).await.is_err());
    assert!(util.from_file(fixture("missing.csv")).await.is_err());
}

#[tokio::test]
async fn from_string_and_json_export() {
    let util = DistributableAmountUtil::new();
    let (sheet, breakdown, _) = util
        .from_string("(capital_stock: 2999999)", SheetFormat::Ron)
        .await
        .unwrap();
    assert_eq!(sheet.name, None);
    assert_eq!(breakdown.result.net_assets_adjustment, 1);

    let json = util.export_json(&breakdown).unwrap();
    assert!(json.contains("\"distributable_amount\": -1"));
}
