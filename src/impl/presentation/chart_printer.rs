use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::{AccountType, AccountWithTotals, ChartOfAccounts},
    errors::SerializationFailed,
};

use super::utils::format_amount;

const NUMBER_WIDTH: usize = 10;
const NAME_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 20;
const INDENT: &str = "  ";

pub(crate) struct ChartPrinter {
    currency: Currency,
}

impl ChartPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print_report(&self, chart: &ChartOfAccounts) -> String {
        let mut report_output = String::new();

        report_output.push_str(&format!(
            "; --- Chart of Accounts ({} .. {}) ",
            chart.period.start, chart.period.end
        ));
        let rule_len = NUMBER_WIDTH + NAME_WIDTH + 3 * (AMOUNT_WIDTH + 1) + 1;
        let used = report_output.chars().count();
        report_output.push_str(&"-".repeat(rule_len.saturating_sub(used)));
        report_output.push_str("\n\n");

        report_output.push_str(&format!(
            "{:NUMBER_WIDTH$} {:NAME_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}\n",
            "No.", "Name", "Net Change", "Balance", "Balance at Date"
        ));
        for account in &chart.accounts {
            self.print_account(&mut report_output, account);
        }

        report_output
    }

    pub(crate) fn print_json(&self, chart: &ChartOfAccounts) -> Result<String, ServerError> {
        serde_json::to_string_pretty(chart).map_err(|e| SerializationFailed::with_debug(&e))
    }

    fn print_account(&self, report_output: &mut String, account: &AccountWithTotals) {
        let indent = INDENT.repeat(account.leveled.level);
        let wrap_width = NAME_WIDTH.saturating_sub(indent.len()).max(10);
        let name_lines = textwrap::wrap(&account.leveled.account.name, wrap_width);

        // Headings and range openers only label the rows below them.
        let amounts = match account.leveled.account.account_type {
            AccountType::Heading | AccountType::BeginTotal => None,
            AccountType::Posting | AccountType::EndTotal => Some([
                format_amount(account.net_change, self.currency),
                format_amount(account.balance, self.currency),
                format_amount(account.balance_at_date, self.currency),
            ]),
        };

        let first_line = name_lines.first().map(|l| l.to_string()).unwrap_or_default();
        let first_name = format!("{}{}", indent, first_line);
        match amounts {
            Some([net_change, balance, balance_at_date]) => {
                report_output.push_str(&format!(
                    "{:NUMBER_WIDTH$} {:NAME_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}\n",
                    account.number(),
                    first_name,
                    net_change,
                    balance,
                    balance_at_date,
                ));
            }
            None => {
                report_output.push_str(&format!(
                    "{:NUMBER_WIDTH$} {}\n",
                    account.number(),
                    first_name.trim_end()
                ));
            }
        }
        for line in name_lines.iter().skip(1) {
            report_output.push_str(&format!("{:NUMBER_WIDTH$} {}{}\n", "", indent, line));
        }
    }
}
