use crate::api::ledger_accounts::{
    CreateLedgerAccount, CreateLedgerAccountResponse, GetLedgerAccount, GetLedgerAccountResponse,
    ListLedgerAccounts, ListLedgerAccountsResponse, ListLedgerEntries, ListLedgerEntriesResponse,
};
use crate::application::client::Client;
use crate::application::interfaces::ledger::LedgerService;
use crate::error::AppError;
use crate::model::ledger::{ApiAccountStatus, ApiCreateLedgerAccount};
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl LedgerService for Client {
    async fn list_ledger_accounts(
        &self,
        currency: Option<&str>,
        status: Option<ApiAccountStatus>,
        page: Option<u32>,
    ) -> Result<Option<ListLedgerAccountsResponse>, AppError> {
        info!("Listing ledger accounts");

        let request = ListLedgerAccounts {
            currency: currency.map(str::to_string),
            status,
            page,
            page_size: None,
        };
        let result = self.send(&request).await?;

        if let Some(ListLedgerAccountsResponse::Ok(accounts)) = &result {
            debug!(
                "Ledger accounts obtained: {} of {}",
                accounts.len(),
                accounts.total
            );
        }
        Ok(result)
    }

    async fn get_ledger_account(
        &self,
        account_id: &str,
    ) -> Result<Option<GetLedgerAccountResponse>, AppError> {
        info!("Getting ledger account {}", account_id);

        let result = self.send(&GetLedgerAccount::new(account_id)).await?;

        if let Some(GetLedgerAccountResponse::NotFound(err)) = &result {
            warn!("Ledger account {} not found: {}", account_id, err.message);
        }
        Ok(result)
    }

    async fn create_ledger_account(
        &self,
        account: ApiCreateLedgerAccount,
    ) -> Result<Option<CreateLedgerAccountResponse>, AppError> {
        info!("Creating ledger account {}", account.name);

        let result = self.send(&CreateLedgerAccount::new(account)).await?;

        match &result {
            Some(CreateLedgerAccountResponse::Created(created)) => {
                debug!("Ledger account created: {}", created.id);
            }
            Some(CreateLedgerAccountResponse::Conflict(err))
            | Some(CreateLedgerAccountResponse::UnprocessableEntity(err)) => {
                warn!("Ledger account rejected: {} ({})", err.message, err.code);
            }
            None => {}
        }
        Ok(result)
    }

    async fn list_ledger_entries(
        &self,
        account_id: &str,
        page: Option<u32>,
    ) -> Result<Option<ListLedgerEntriesResponse>, AppError> {
        info!("Listing entries of ledger account {}", account_id);

        let mut request = ListLedgerEntries::new(account_id);
        request.page = page;
        let result = self.send(&request).await?;

        if let Some(ListLedgerEntriesResponse::Ok(entries)) = &result {
            debug!("Ledger entries obtained: {} of {}", entries.len(), entries.total);
        }
        Ok(result)
    }
}
