/// Field names accepted in the first column of a CSV calculation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub(crate) enum InputFieldModel {
    Name,
    FiscalYearEnd,
    CapitalStock,
    CapitalReserve,
    OtherCapitalSurplus,
    EarnedReserve,
    OtherRetainedEarnings,
    TreasuryStock,
    Goodwill,
    DeferredAssets,
    SecuritiesValuation,
    LandRevaluation,
    DisposalTreasuryStock,
    DisposalConsideration,
    CanceledTreasuryStock,
    CapitalReduction,
    ReserveReduction,
    SurplusToCapital,
    DividendAmount,
    DividendReserve,
    InterimSettlement,
    InterimProfit,
    InterimLoss,
    InterimTreasuryDisposal,
}
