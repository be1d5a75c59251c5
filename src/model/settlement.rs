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

/// Action applied to a settlement
#[derive(Debug, DisplaySimple, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiSettlementActionType {
    /// Approve the settlement for release
    Approve,
    /// Reject the settlement
    Reject,
    /// Release funds
    Release,
    /// Put the settlement on hold
    Hold,
    /// Reverse a released settlement
    Reverse,
}

impl ApiSettlementActionType {
    /// Wire form of the action
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiSettlementActionType::Approve => "APPROVE",
            ApiSettlementActionType::Reject => "REJECT",
            ApiSettlementActionType::Release => "RELEASE",
            ApiSettlementActionType::Hold => "HOLD",
            ApiSettlementActionType::Reverse => "REVERSE",
        }
    }
}

/// Processing state of a settlement action
#[derive(Debug, DisplaySimple, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiSettlementActionStatus {
    /// Accepted, not yet applied
    Pending,
    /// Applied to the settlement
    Applied,
    /// Could not be applied
    Failed,
    /// Cancelled before it was applied
    Cancelled,
}

impl ApiSettlementActionStatus {
    /// Wire form of the status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiSettlementActionStatus::Pending => "PENDING",
            ApiSettlementActionStatus::Applied => "APPLIED",
            ApiSettlementActionStatus::Failed => "FAILED",
            ApiSettlementActionStatus::Cancelled => "CANCELLED",
        }
    }

    /// True once the action can no longer change state
    #[must_use]
    pub fn is_final(&self) -> bool {
        !matches!(self, ApiSettlementActionStatus::Pending)
    }
}

/// An action recorded against a settlement
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettlementAction {
    /// Action identifier
    pub id: String,
    /// Settlement the action applies to
    pub settlement_id: String,
    /// Requested action
    pub action: ApiSettlementActionType,
    /// Processing state
    pub status: ApiSettlementActionStatus,
    /// When the action was requested
    pub requested_at: DateTime<Utc>,
    /// When the action reached a final state, `null` while pending
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub completed_at: Nullable<DateTime<Utc>>,
    /// Partial amount for release and reverse actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Operator note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `create_settlement_action`
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettlementActionRequest {
    /// Requested action
    pub action: ApiSettlementActionType,
    /// Partial amount for release and reverse actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Operator note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiSettlementActionRequest {
    /// Creates a request for `action` with no amount or note
    #[must_use]
    pub fn new(action: ApiSettlementActionType) -> Self {
        Self {
            action,
            amount: None,
            note: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Sets the partial amount
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the operator note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
