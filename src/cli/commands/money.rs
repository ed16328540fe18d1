//! `money` subcommands: add, list, summary, rm.

use crate::cli::commands::{resolve_id, short_id};
use crate::cli::output;
use crate::core::session::Session;
use crate::domain::transaction::TransactionKind;

pub fn run(session: &mut Session, args: &[&str]) {
    match args.split_first() {
        Some((&"add", rest)) => add(session, rest),
        Some((&"list", _)) => list(session),
        Some((&"summary", _)) => summary(session),
        Some((&"rm", rest)) => remove(session, rest),
        _ => output::warning("Usage: money add|list|summary|rm ..."),
    }
}

fn add(session: &mut Session, args: &[&str]) {
    let (Some(kind_raw), Some(amount_raw), Some(category)) =
        (args.first(), args.get(1), args.get(2))
    else {
        return output::warning("Usage: money add <income|expense> <amount> <category> [description]");
    };

    let kind = match kind_raw.parse::<TransactionKind>() {
        Ok(kind) => kind,
        Err(err) => return output::warning(err),
    };
    let Ok(amount) = amount_raw.parse::<f64>() else {
        return output::warning(format!("`{amount_raw}` is not a number"));
    };
    let description = if args.len() > 3 {
        Some(args[3..].join(" "))
    } else {
        None
    };

    match session.transactions.add(kind, amount, category, description) {
        Ok(id) => output::success(format!(
            "{kind} of {amount:.2} ({category}) recorded ({})",
            short_id(&id)
        )),
        Err(err) => output::warning(err),
    }
}

fn list(session: &Session) {
    let transactions = session.transactions.sorted_by_date_descending();
    if transactions.is_empty() {
        return output::info("No transactions yet.");
    }
    output::section("Transactions (most recent first)");
    for txn in transactions {
        let note = txn
            .description
            .as_deref()
            .map(|text| format!("  - {text}"))
            .unwrap_or_default();
        output::item(
            short_id(&txn.id),
            format!(
                "{}  {:>10.2}  {}  {}{note}",
                txn.date.format("%Y-%m-%d"),
                txn.amount,
                txn.kind,
                txn.category
            ),
        );
    }
}

fn summary(session: &Session) {
    let store = &session.transactions;
    output::section("Finance summary");
    output::info(format!("Income:   {:>10.2}", store.total_income()));
    output::info(format!("Expenses: {:>10.2}", store.total_expenses()));
    output::info(format!("Balance:  {:>10.2}", store.balance()));
}

fn remove(session: &mut Session, args: &[&str]) {
    let Some(raw) = args.first() else {
        return output::warning("Usage: money rm <id>");
    };
    let Some(id) = resolve_id(session.transactions.snapshot(), raw) else {
        return output::warning(format!("No transaction matches `{raw}`"));
    };
    match session.transactions.delete(&id) {
        Ok(()) => output::success(format!("Transaction {} removed.", short_id(&id))),
        Err(err) => output::warning(err),
    }
}
