/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::model::types::{AdditionalProperties, Nullable};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a fee
///
/// Values the client does not know are kept verbatim in [`ApiFeeType::Other`]
/// so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiFeeType {
    /// Charged per ledger transaction
    Transaction,
    /// Charged when a settlement completes
    Settlement,
    /// Periodic custody fee
    Custody,
    /// Charged on withdrawals
    Withdrawal,
    /// Any other fee type reported by the server
    Other(String),
}

impl ApiFeeType {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ApiFeeType::Transaction => "TRANSACTION",
            ApiFeeType::Settlement => "SETTLEMENT",
            ApiFeeType::Custody => "CUSTODY",
            ApiFeeType::Withdrawal => "WITHDRAWAL",
            ApiFeeType::Other(s) => s,
        }
    }
}

impl From<String> for ApiFeeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TRANSACTION" => ApiFeeType::Transaction,
            "SETTLEMENT" => ApiFeeType::Settlement,
            "CUSTODY" => ApiFeeType::Custody,
            "WITHDRAWAL" => ApiFeeType::Withdrawal,
            _ => ApiFeeType::Other(value),
        }
    }
}

impl From<ApiFeeType> for String {
    fn from(value: ApiFeeType) -> Self {
        match value {
            ApiFeeType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ApiFeeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ApiFeeType::from(s.to_string()))
    }
}

impl fmt::Display for ApiFeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated fee line for one fee type
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFeeLine {
    /// Fee category
    pub fee_type: ApiFeeType,
    /// Sum of fees of this type
    pub amount: Decimal,
    /// Number of fees of this type
    pub count: u32,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Fee totals for an account over a period
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFeeSummary {
    /// Ledger account the summary belongs to
    pub account_id: String,
    /// ISO 4217 currency of all amounts
    pub currency: String,
    /// Start of the summarised period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<DateTime<Utc>>,
    /// End of the summarised period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<DateTime<Utc>>,
    /// Sum of every fee in the period
    pub total_fees: Decimal,
    /// Number of fees in the period
    pub fee_count: u32,
    /// Totals per fee type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<ApiFeeLine>>,
    /// Amount waived in the period, `null` when waivers do not apply
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub waived_total: Nullable<Decimal>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiFeeSummary {
    /// Total fees minus waivers
    #[must_use]
    pub fn net_fees(&self) -> Decimal {
        match self.waived_total.as_option() {
            Some(waived) => self.total_fees - *waived,
            None => self.total_fees,
        }
    }

    /// Breakdown line for the given fee type, if reported
    #[must_use]
    pub fn line(&self, fee_type: &ApiFeeType) -> Option<&ApiFeeLine> {
        self.breakdown
            .as_ref()
            .and_then(|lines| lines.iter().find(|l| &l.fee_type == fee_type))
    }
}

/// A single fee charged to a ledger account
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFee {
    /// Fee identifier
    pub id: String,
    /// Ledger account charged
    pub account_id: String,
    /// Fee category
    pub fee_type: ApiFeeType,
    /// Charged amount
    pub amount: Decimal,
    /// ISO 4217 currency
    pub currency: String,
    /// When the fee was charged
    pub charged_at: DateTime<Utc>,
    /// Free text shown on statements
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub description: Nullable<String>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
