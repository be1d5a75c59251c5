/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::model::types::{AdditionalProperties, Nullable};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error body documented for every 4xx response of the API
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine readable error code, e.g. `account_not_found`
    pub code: String,
    /// Human readable description
    pub message: String,
    /// Free-form details, typically field validation failures
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub details: Nullable<Value>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiError {
    /// Creates an error body with only code and message set
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Nullable::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPage<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// One-based page number
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
    /// Number of the next page, absent on the last one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl<T> ApiPage<T> {
    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the server reported a following page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Iterates over the items of this page
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Serialize> fmt::Display for ApiPage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

/// Service health report
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiHealth {
    /// `ok` when the service is healthy
    pub status: String,
    /// Deployed API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Database connectivity status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Keys not described by the schema
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ApiHealth {
    /// True when the reported status is `ok`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
