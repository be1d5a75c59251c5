/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::common::ApiPage;
use crate::model::fees::ApiFeeSummary;
use crate::model::ledger::ApiLedgerAccount;
use crate::model::settlement::ApiSettlementAction;
use prettytable::{Cell, Row, Table, format};

const MAX_NAME_LEN: usize = 30;

fn boxed_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
    table
}

fn truncate(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LEN {
        let short: String = name.chars().take(MAX_NAME_LEN - 3).collect();
        format!("{short}...")
    } else {
        name.to_string()
    }
}

/// Renders a page of ledger accounts, sorted by name
#[must_use]
pub fn ledger_accounts_table(page: &ApiPage<ApiLedgerAccount>) -> String {
    let mut table = boxed_table(&[
        "NAME", "ID", "TYPE", "CURRENCY", "BALANCE", "AVAILABLE", "STATUS",
    ]);

    let mut accounts: Vec<&ApiLedgerAccount> = page.iter().collect();
    accounts.sort_by_key(|a| a.name.to_lowercase());

    for account in accounts {
        let available = account
            .available_balance
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(Row::new(vec![
            Cell::new(&truncate(&account.name)),
            Cell::new(&account.id),
            Cell::new(account.account_type.as_str()),
            Cell::new(&account.currency),
            Cell::new(&account.balance.to_string()),
            Cell::new(&available),
            Cell::new(account.status.as_str()),
        ]));
    }

    format!(
        "{}Page {} ({} of {} accounts)",
        table,
        page.page,
        page.len(),
        page.total
    )
}

/// Renders the per fee type breakdown of a summary followed by its totals
#[must_use]
pub fn fee_summary_table(summary: &ApiFeeSummary) -> String {
    let mut table = boxed_table(&["FEE TYPE", "COUNT", "AMOUNT"]);

    if let Some(lines) = &summary.breakdown {
        for line in lines {
            table.add_row(Row::new(vec![
                Cell::new(line.fee_type.as_str()),
                Cell::new(&line.count.to_string()),
                Cell::new(&line.amount.to_string()),
            ]));
        }
    }
    table.add_row(Row::new(vec![
        Cell::new("TOTAL"),
        Cell::new(&summary.fee_count.to_string()),
        Cell::new(&format!("{} {}", summary.total_fees, summary.currency)),
    ]));
    if let Some(waived) = summary.waived_total.as_option() {
        table.add_row(Row::new(vec![
            Cell::new("WAIVED"),
            Cell::new(""),
            Cell::new(&format!("{} {}", waived, summary.currency)),
        ]));
    }

    table.to_string()
}

/// Renders settlement actions in request order
#[must_use]
pub fn settlement_actions_table(actions: &[ApiSettlementAction]) -> String {
    let mut table = boxed_table(&[
        "REQUESTED", "ID", "ACTION", "STATUS", "AMOUNT", "COMPLETED",
    ]);

    let mut sorted: Vec<&ApiSettlementAction> = actions.iter().collect();
    sorted.sort_by_key(|a| a.requested_at);

    for action in sorted {
        let completed = action
            .completed_at
            .as_option()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        let amount = action
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(Row::new(vec![
            Cell::new(&action.requested_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(&action.id),
            Cell::new(action.action.as_str()),
            Cell::new(action.status.as_str()),
            Cell::new(&amount),
            Cell::new(&completed),
        ]));
    }

    table.to_string()
}
