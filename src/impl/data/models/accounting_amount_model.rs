use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAccountingAmount;

/// Whole-unit amount in accounting notation. Thousands separators are
/// ignored, and both `(1,000)` and `-1,000` are read as negative. Parentheses
/// must come as one balanced pair around an unsigned number.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct AccountingAmountModel(pub i64);
impl FromStr for AccountingAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let raw = raw.trim();
        let (is_parenthesised, numeric_part) =
            match raw.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                Some(inner) => (true, inner.trim()),
                None => (false, raw),
            };
        if is_parenthesised && numeric_part.starts_with(['-', '+']) {
            return Err(InvalidAccountingAmount::new(s));
        }
        // Stray parentheses are left in `numeric_part` and fail to parse.
        let amount = numeric_part
            .parse::<i64>()
            .map_err(|_| InvalidAccountingAmount::new(s))?;
        Ok(AccountingAmountModel(if is_parenthesised {
            -amount
        } else {
            amount
        }))
    }
}

impl Into<i64> for AccountingAmountModel {
    fn into(self) -> i64 {
        self.0
    }
}
