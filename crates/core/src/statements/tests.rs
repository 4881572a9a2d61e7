//! Tests for statement generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use statera_shared::config::UnmappedPolicy;

use super::*;
use crate::mapping::{
    BalanceSheetMapping, IncomeStatementMapping, LineItemMapping, Mapping, RETAINED_EARNINGS,
    SubSectionMapping,
};
use crate::trial_balance::{AccountBalance, TrialBalance};

// ============================================================================
// Fixtures
// ============================================================================

/// Sales 4000, COGS 5000, Cash 1000, Payables 2000, Retained Earnings 3000.
fn scenario_mapping() -> Mapping {
    Mapping::new(
        IncomeStatementMapping {
            revenue: vec![LineItemMapping::new("Sales", ["4000"])],
            expenses: vec![LineItemMapping::new("COGS", ["5000"])],
        },
        BalanceSheetMapping {
            assets: vec![SubSectionMapping::new(
                "Current",
                vec![LineItemMapping::new("Cash", ["1000"])],
            )],
            liabilities: vec![SubSectionMapping::new(
                "Current",
                vec![LineItemMapping::new("Payables", ["2000"])],
            )],
            equity: vec![SubSectionMapping::new(
                "Equity",
                vec![LineItemMapping::new(RETAINED_EARNINGS, ["3000"])],
            )],
        },
    )
    .unwrap()
}

/// Balances summing to zero.
fn scenario_trial_balance() -> TrialBalance {
    TrialBalance::new(vec![
        AccountBalance::new("4000", dec!(-1000)),
        AccountBalance::new("5000", dec!(400)),
        AccountBalance::new("1000", dec!(2000)),
        AccountBalance::new("2000", dec!(-400)),
        AccountBalance::new("3000", dec!(-1000)),
    ])
}

fn descriptions(statement: &Statement) -> Vec<&str> {
    statement
        .lines()
        .iter()
        .map(|l| l.description.as_str())
        .collect()
}

/// Builds a ledger where every account is mapped exactly once and retained
/// earnings absorbs the difference so the balances sum to zero.
fn generated_ledger(
    revenue: &[i64],
    expenses: &[i64],
    assets: &[i64],
    liabilities: &[i64],
) -> (TrialBalance, Mapping) {
    let mut rows = Vec::new();

    let mut items = |base: u64, prefix: &str, values: &[i64]| -> Vec<LineItemMapping> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let account = format!("{}", base + i as u64);
                rows.push(AccountBalance::new(account.as_str(), Decimal::new(*v, 2)));
                LineItemMapping::new(format!("{prefix} {i}"), [account])
            })
            .collect()
    };

    let revenue = items(4000, "Revenue", revenue);
    let expenses = items(5000, "Expense", expenses);
    let assets = items(1000, "Asset", assets);
    let liabilities = items(2000, "Liability", liabilities);

    let total: Decimal = rows.iter().map(|r| r.balance).sum();
    rows.push(AccountBalance::new("3000", -total));

    let mapping = Mapping::new(
        IncomeStatementMapping { revenue, expenses },
        BalanceSheetMapping {
            assets: vec![SubSectionMapping::new("Current Assets", assets)],
            liabilities: vec![SubSectionMapping::new("Current Liabilities", liabilities)],
            equity: vec![SubSectionMapping::new(
                "Equity",
                vec![LineItemMapping::new(RETAINED_EARNINGS, ["3000"])],
            )],
        },
    )
    .unwrap();

    (TrialBalance::new(rows), mapping)
}

// ============================================================================
// Concrete scenario
// ============================================================================

#[test]
fn test_scenario_income_statement() {
    let result = StatementService::build(&scenario_trial_balance(), &scenario_mapping()).unwrap();
    let income = result.get(INCOME_STATEMENT_NAME).unwrap();

    assert_eq!(
        descriptions(income),
        [
            "Revenue",
            "Sales",
            "Total Revenue",
            "Expenses",
            "COGS",
            "Total Expenses",
            "Net Income",
        ]
    );

    let lines = income.lines();
    assert!(lines[0].is_header && lines[0].amount.is_none());
    assert_eq!(lines[1].amount, Some(dec!(1000)));
    assert_eq!(lines[1].level, 1);
    assert_eq!(lines[2].amount, Some(dec!(1000)));
    assert!(lines[2].is_total && !lines[2].is_final_total);
    assert!(lines[3].is_header);
    assert_eq!(lines[4].amount, Some(dec!(400)));
    assert_eq!(lines[5].amount, Some(dec!(400)));
    assert!(lines[5].is_total);
    assert_eq!(lines[6].amount, Some(dec!(600)));
    assert!(lines[6].is_total && lines[6].is_final_total);
}

#[test]
fn test_scenario_balance_sheet() {
    let result = StatementService::build(&scenario_trial_balance(), &scenario_mapping()).unwrap();
    let sheet = result.get(BALANCE_SHEET_NAME).unwrap();

    assert_eq!(
        descriptions(sheet),
        [
            "Current",
            "Cash",
            "Total Current",
            "Total Assets",
            "Current",
            "Payables",
            "Total Current",
            "Equity",
            "Retained Earnings",
            "Total Equity",
            "Total Liabilities and Equity",
        ]
    );

    assert_eq!(sheet.amount_of("Cash"), Some(dec!(2000)));
    assert_eq!(sheet.amount_of("Total Assets"), Some(dec!(2000)));
    assert_eq!(sheet.amount_of("Payables"), Some(dec!(400)));
    assert_eq!(sheet.amount_of("Retained Earnings"), Some(dec!(1600)));
    assert_eq!(
        sheet.amount_of("Total Liabilities and Equity"),
        Some(dec!(2000))
    );

    let total_assets = sheet.line("Total Assets").unwrap();
    assert!(total_assets.is_total && total_assets.is_final_total);
    let sub_total = sheet.line("Total Equity").unwrap();
    assert!(sub_total.is_total && !sub_total.is_final_total);
}

#[test]
fn test_scenario_summary() {
    let result = StatementService::build(&scenario_trial_balance(), &scenario_mapping()).unwrap();
    let summary = result.summary().unwrap();

    assert_eq!(summary.total_revenue, dec!(1000));
    assert_eq!(summary.total_expenses, dec!(400));
    assert_eq!(summary.net_income, dec!(600));
    assert_eq!(summary.retained_earnings_before, dec!(-1000));
    assert_eq!(summary.retained_earnings_after, dec!(-1600));
    assert_eq!(summary.total_assets, dec!(2000));
    assert_eq!(summary.total_liabilities, dec!(400));
    assert_eq!(summary.total_equity, dec!(1600));
    assert_eq!(summary.total_liabilities_and_equity, dec!(2000));
    assert!(summary.is_balanced);
    assert!(result.diagnostics().is_empty());
}

#[test]
fn test_statement_order_is_fixed() {
    let result = StatementService::build(&scenario_trial_balance(), &scenario_mapping()).unwrap();
    let kinds: Vec<StatementKind> = result.statements().iter().map(Statement::kind).collect();

    assert_eq!(
        kinds,
        [
            StatementKind::IncomeStatement,
            StatementKind::BalanceSheet,
            StatementKind::CashFlow,
        ]
    );
    assert_eq!(result.supported().count(), 2);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_cash_flow_placeholder_always_present() {
    let result = StatementService::build(&scenario_trial_balance(), &scenario_mapping()).unwrap();
    let cash_flow = result.by_kind(StatementKind::CashFlow).unwrap();

    assert!(!cash_flow.supported());
    assert_eq!(cash_flow.lines().len(), 1);
    assert_eq!(cash_flow.lines()[0].description, CASH_FLOW_PLACEHOLDER);
    assert!(cash_flow.lines().iter().all(|l| l.amount.is_none()));
}

#[test]
fn test_zero_line_items_are_emitted() {
    let mut mapping = scenario_mapping();
    mapping
        .income_statement
        .expenses
        .push(LineItemMapping::new("Rent", ["6100"]));

    let result = StatementService::build(&scenario_trial_balance(), &mapping).unwrap();
    let income = result.get(INCOME_STATEMENT_NAME).unwrap();

    assert_eq!(income.amount_of("Rent"), Some(Decimal::ZERO));
    assert_eq!(income.amount_of("Total Expenses"), Some(dec!(400)));
}

#[test]
fn test_empty_trial_balance_gives_empty_result() {
    let result = StatementService::build(&TrialBalance::default(), &scenario_mapping()).unwrap();
    assert!(result.is_empty());
    assert!(result.summary().is_none());
}

#[test]
fn test_empty_mapping_gives_empty_result() {
    let result = StatementService::build(&scenario_trial_balance(), &Mapping::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_incomplete_mapping_fails_before_building() {
    let mut mapping = scenario_mapping();
    mapping.balance_sheet.equity[0].line_items[0].name = "Reserves".to_string();

    let err = StatementService::build(&scenario_trial_balance(), &mapping).unwrap_err();
    assert_eq!(
        err,
        StatementError::Mapping(crate::mapping::MappingError::MissingRetainedEarnings)
    );

    let err = StatementService::build(&TrialBalance::default(), &mapping).unwrap_err();
    assert!(matches!(err, StatementError::Mapping(_)));
}

#[test]
fn test_unmapped_account_is_reported() {
    let mut rows = scenario_trial_balance().rows().to_vec();
    rows.push(AccountBalance::new("1900", dec!(75)));
    rows.push(AccountBalance::new("1900", dec!(25)));
    rows.push(AccountBalance::new("3000", dec!(-100)));
    let tb = TrialBalance::new(rows);

    let result = StatementService::build(&tb, &scenario_mapping()).unwrap();

    assert_eq!(
        result.diagnostics()[0],
        Diagnostic::UnmappedAccount {
            account_number: "1900".into(),
            balance: dec!(100),
        }
    );
    assert!(!result.summary().unwrap().is_balanced);
    assert!(
        result
            .diagnostics()
            .iter()
            .any(|d| matches!(d, Diagnostic::OutOfBalance { .. }))
    );
}

#[test]
fn test_unmapped_policy_ignore_and_deny() {
    let mut rows = scenario_trial_balance().rows().to_vec();
    rows.push(AccountBalance::new("1900", Decimal::ZERO));
    let tb = TrialBalance::new(rows);

    let ignore = BuildOptions {
        unmapped: UnmappedPolicy::Ignore,
    };
    let result = StatementService::build_with(&tb, &scenario_mapping(), &ignore).unwrap();
    assert!(result.diagnostics().is_empty());

    let deny = BuildOptions {
        unmapped: UnmappedPolicy::Deny,
    };
    let err = StatementService::build_with(&tb, &scenario_mapping(), &deny).unwrap_err();
    assert_eq!(err, StatementError::UnmappedAccounts(vec!["1900".into()]));
    assert_eq!(
        err.to_string(),
        "1 trial balance account(s) are not mapped: 1900"
    );

    let clean = StatementService::build_with(&scenario_trial_balance(), &scenario_mapping(), &deny);
    assert!(clean.is_ok());
}

#[test]
fn test_duplicate_mapping_double_counts_and_is_reported() {
    let mut mapping = scenario_mapping();
    mapping
        .income_statement
        .revenue
        .push(LineItemMapping::new("Sales Again", ["4000"]));

    let result = StatementService::build(&scenario_trial_balance(), &mapping).unwrap();
    let income = result.get(INCOME_STATEMENT_NAME).unwrap();

    assert_eq!(income.amount_of("Total Revenue"), Some(dec!(2000)));
    assert!(result.diagnostics().iter().any(|d| matches!(
        d,
        Diagnostic::DuplicateMapping { account_number, locations }
            if account_number.as_str() == "4000" && locations.len() == 2
    )));
}

#[test]
fn test_unmatched_retained_earnings_skips_closing() {
    let tb = TrialBalance::new(
        scenario_trial_balance()
            .iter()
            .filter(|r| r.account_number.as_str() != "3000")
            .cloned()
            .collect(),
    );

    let result = StatementService::build(&tb, &scenario_mapping()).unwrap();
    let summary = result.summary().unwrap();

    assert_eq!(summary.retained_earnings_after, Decimal::ZERO);
    assert!(!summary.is_balanced);
    assert!(result.diagnostics().iter().any(|d| matches!(
        d,
        Diagnostic::RetainedEarningsUnmatched { net_income, .. } if *net_income == dec!(600)
    )));
}

#[test]
fn test_unbalanced_trial_balance_is_reported() {
    let mut rows = scenario_trial_balance().rows().to_vec();
    rows[2] = AccountBalance::new("1000", dec!(1000));
    let tb = TrialBalance::new(rows);

    let result = StatementService::build(&tb, &scenario_mapping()).unwrap();

    assert!(result.diagnostics().contains(&Diagnostic::TrialBalanceNotZero { total: dec!(-1000) }));
    assert!(result.diagnostics().contains(&Diagnostic::OutOfBalance {
        total_assets: dec!(1000),
        total_liabilities_and_equity: dec!(2000),
    }));
}

#[test]
fn test_net_loss_reduces_equity() {
    let tb = TrialBalance::new(vec![
        AccountBalance::new("4000", dec!(-100)),
        AccountBalance::new("5000", dec!(400)),
        AccountBalance::new("1000", dec!(700)),
        AccountBalance::new("2000", dec!(-400)),
        AccountBalance::new("3000", dec!(-600)),
    ]);

    let result = StatementService::build(&tb, &scenario_mapping()).unwrap();
    let summary = result.summary().unwrap();

    assert_eq!(summary.net_income, dec!(-300));
    assert_eq!(summary.total_equity, dec!(300));
    assert!(summary.is_balanced);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_build_leaves_trial_balance_untouched_and_repeats() {
    let tb = scenario_trial_balance();
    let pristine = tb.clone();
    let mapping = scenario_mapping();

    let first = StatementService::build(&tb, &mapping).unwrap();
    assert_eq!(tb, pristine);
    let second = StatementService::build(&tb, &mapping).unwrap();
    assert_eq!(tb, pristine);

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_builds_share_one_table() {
    let tb = scenario_trial_balance();
    let mapping = scenario_mapping();
    let expected = StatementService::build(&tb, &mapping).unwrap();

    let results: Vec<FinancialStatements> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| StatementService::build(&tb, &mapping).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|r| *r == expected));
    assert_eq!(tb, scenario_trial_balance());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A zero-sum ledger with every account mapped exactly once gives a
    /// balance sheet where assets equal liabilities plus equity.
    #[test]
    fn test_balanced_ledger_gives_balanced_sheet(
        revenue in prop::collection::vec(-10_000_000i64..0, 1..5),
        expenses in prop::collection::vec(0i64..10_000_000, 1..5),
        assets in prop::collection::vec(0i64..10_000_000, 1..5),
        liabilities in prop::collection::vec(-10_000_000i64..0, 0..4),
    ) {
        let (tb, mapping) = generated_ledger(&revenue, &expenses, &assets, &liabilities);
        prop_assert!(tb.is_zero_sum());

        let result = StatementService::build(&tb, &mapping).unwrap();
        let summary = result.summary().unwrap();
        let sheet = result.get(BALANCE_SHEET_NAME).unwrap();

        prop_assert!(summary.is_balanced);
        prop_assert_eq!(
            sheet.amount_of("Total Assets"),
            sheet.amount_of("Total Liabilities and Equity")
        );
        prop_assert!(result.diagnostics().is_empty());
    }

    /// Net income equals total revenue minus total expenses, with revenue
    /// presented as the negated ledger sum.
    #[test]
    fn test_net_income_identity(
        revenue in prop::collection::vec(-10_000_000i64..10_000_000, 0..6),
        expenses in prop::collection::vec(-10_000_000i64..10_000_000, 0..6),
    ) {
        let (tb, mapping) = generated_ledger(&revenue, &expenses, &[0], &[]);

        let revenue_sum: Decimal = revenue.iter().map(|v| Decimal::new(*v, 2)).sum();
        let expense_sum: Decimal = expenses.iter().map(|v| Decimal::new(*v, 2)).sum();

        let result = StatementService::build(&tb, &mapping).unwrap();
        let income = result.get(INCOME_STATEMENT_NAME).unwrap();

        prop_assert_eq!(income.amount_of("Total Revenue"), Some(-revenue_sum));
        prop_assert_eq!(income.amount_of("Total Expenses"), Some(expense_sum));
        prop_assert_eq!(income.amount_of("Net Income"), Some(-revenue_sum - expense_sum));
    }

    /// Closing moves the retained earnings balance by exactly net income and
    /// the presented retained earnings line reflects it.
    #[test]
    fn test_closing_entry_moves_retained_earnings(
        revenue in prop::collection::vec(-10_000_000i64..0, 1..4),
        expenses in prop::collection::vec(0i64..10_000_000, 1..4),
        assets in prop::collection::vec(0i64..10_000_000, 1..4),
    ) {
        let (tb, mapping) = generated_ledger(&revenue, &expenses, &assets, &[]);

        let result = StatementService::build(&tb, &mapping).unwrap();
        let summary = result.summary().unwrap();
        let sheet = result.get(BALANCE_SHEET_NAME).unwrap();

        prop_assert_eq!(
            summary.retained_earnings_after,
            summary.retained_earnings_before - summary.net_income
        );
        prop_assert_eq!(
            sheet.amount_of(RETAINED_EARNINGS),
            Some(-summary.retained_earnings_after)
        );
    }

    /// Building twice gives identical output and never mutates the input.
    #[test]
    fn test_build_is_pure(
        revenue in prop::collection::vec(-1_000_000i64..0, 1..4),
        assets in prop::collection::vec(0i64..1_000_000, 1..4),
    ) {
        let (tb, mapping) = generated_ledger(&revenue, &[100], &assets, &[-50]);
        let pristine = tb.clone();

        let first = StatementService::build(&tb, &mapping).unwrap();
        let second = StatementService::build(&tb, &mapping).unwrap();

        prop_assert_eq!(&tb, &pristine);
        prop_assert_eq!(first, second);
    }
}
