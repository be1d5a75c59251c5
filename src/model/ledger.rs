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
use std::collections::BTreeMap;

/// Accounting class of a ledger account
#[derive(Debug, DisplaySimple, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiLedgerAccountType {
    /// Asset account
    Asset,
    /// Liability account
    Liability,
    /// Equity account
    Equity,
    /// Revenue account
    Revenue,
    /// Expense account
    Expense,
}

impl ApiLedgerAccountType {
    /// Wire form of the type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiLedgerAccountType::Asset => "ASSET",
            ApiLedgerAccountType::Liability => "LIABILITY",
            ApiLedgerAccountType::Equity => "EQUITY",
            ApiLedgerAccountType::Revenue => "REVENUE",
            ApiLedgerAccountType::Expense => "EXPENSE",
        }
    }
}

/// Lifecycle state of a ledger account
#[derive(Debug, DisplaySimple, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiAccountStatus {
    /// Accepts postings
    Active,
    /// Temporarily blocked
    Frozen,
    /// No longer accepts postings
    Closed,
}

impl ApiAccountStatus {
    /// Wire representation, as used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAccountStatus::Active => "ACTIVE",
            ApiAccountStatus::Frozen => "FROZEN",
            ApiAccountStatus::Closed => "CLOSED",
        }
    }
}

/// A ledger account
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiLedgerAccount {
    /// Account identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Accounting class
    pub account_type: ApiLedgerAccountType,
    /// ISO 4217 currency
    pub currency: String,
    /// Posted balance
    pub balance: Decimal,
    /// Balance minus holds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<Decimal>,
    /// Lifecycle state
    pub status: ApiAccountStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Closing time, `null` while the account is open
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub closed_at: Nullable<DateTime<Utc>>,
    /// Caller supplied labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiLedgerAccount {
    /// True when the account accepts postings
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ApiAccountStatus::Active
    }
}

/// Body of `create_ledger_account`
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCreateLedgerAccount {
    /// Display name
    pub name: String,
    /// Accounting class
    pub account_type: ApiLedgerAccountType,
    /// ISO 4217 currency
    pub currency: String,
    /// Caller supplied labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiCreateLedgerAccount {
    /// Creates a request body without metadata
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        account_type: ApiLedgerAccountType,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account_type,
            currency: currency.into(),
            metadata: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Adds a metadata label
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Side of a ledger posting
#[derive(Debug, DisplaySimple, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiEntryDirection {
    /// Debit posting
    Debit,
    /// Credit posting
    Credit,
}

/// A posting on a ledger account
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiLedgerEntry {
    /// Entry identifier
    pub id: String,
    /// Account the entry is posted on
    pub account_id: String,
    /// Absolute posted amount
    pub amount: Decimal,
    /// Debit or credit
    pub direction: ApiEntryDirection,
    /// Account balance right after this entry
    pub balance_after: Decimal,
    /// Posting time
    pub posted_at: DateTime<Utc>,
    /// External reference, `null` when the posting has none
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub reference: Nullable<String>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiLedgerEntry {
    /// Amount signed from the account's point of view: credits positive
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            ApiEntryDirection::Credit => self.amount,
            ApiEntryDirection::Debit => -self.amount,
        }
    }
}
