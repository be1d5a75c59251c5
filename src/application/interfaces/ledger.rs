use crate::api::ledger_accounts::{
    CreateLedgerAccountResponse, GetLedgerAccountResponse, ListLedgerAccountsResponse,
    ListLedgerEntriesResponse,
};
use crate::error::AppError;
use crate::model::ledger::{ApiAccountStatus, ApiCreateLedgerAccount};
use async_trait::async_trait;

/// Interface for the ledger account operations
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Lists ledger accounts
    async fn list_ledger_accounts(
        &self,
        currency: Option<&str>,
        status: Option<ApiAccountStatus>,
        page: Option<u32>,
    ) -> Result<Option<ListLedgerAccountsResponse>, AppError>;

    /// Gets a single ledger account
    async fn get_ledger_account(
        &self,
        account_id: &str,
    ) -> Result<Option<GetLedgerAccountResponse>, AppError>;

    /// Creates a ledger account
    async fn create_ledger_account(
        &self,
        account: ApiCreateLedgerAccount,
    ) -> Result<Option<CreateLedgerAccountResponse>, AppError>;

    /// Lists the postings of a ledger account, one page at a time
    async fn list_ledger_entries(
        &self,
        account_id: &str,
        page: Option<u32>,
    ) -> Result<Option<ListLedgerEntriesResponse>, AppError>;
}
