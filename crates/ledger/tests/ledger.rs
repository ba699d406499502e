use chrono::NaiveDate;
use sea_orm::Database;

use ledger::{AmountInput, Ledger, LedgerError, MoneyCents, RecordKind, RecordPayload};
use migration::MigratorTrait;

async fn ledger_in_memory() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::new(db)
}

fn payload(description: &str, amount: f64, category: &str, date: &str, kind: &str) -> RecordPayload {
    RecordPayload {
        description: Some(description.to_string()),
        amount: Some(AmountInput::Number(amount)),
        category: Some(category.to_string()),
        date: Some(date.to_string()),
        kind: Some(kind.to_string()),
    }
}

#[tokio::test]
async fn created_record_appears_exactly_once() {
    let ledger = ledger_in_memory().await;

    let created = ledger
        .add(&payload("Groceries", 45.5, "Food", "2024-01-05", "expense"))
        .await
        .unwrap();

    let records = ledger.transactions().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created);
    assert_eq!(created.amount, MoneyCents::new(4550));
    assert_eq!(created.kind, RecordKind::Expense);
}

#[tokio::test]
async fn slash_date_is_stored_in_iso_form() {
    let ledger = ledger_in_memory().await;

    ledger
        .add(&payload("Bus pass", 20.0, "Transport", "05/03/2024", "expense"))
        .await
        .unwrap();

    let records = ledger.transactions().await.unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(records[0].date, expected);
    assert_eq!(records[0].date.to_string(), "2024-03-05");
}

#[tokio::test]
async fn listing_orders_by_date_then_id() {
    let ledger = ledger_in_memory().await;

    // Inserted newest-date first, and two records share a date.
    ledger
        .add(&payload("c", 3.0, "Other", "2024-02-01", "expense"))
        .await
        .unwrap();
    let first_of_jan = ledger
        .add(&payload("a", 1.0, "Other", "2024-01-01", "expense"))
        .await
        .unwrap();
    let second_of_jan = ledger
        .add(&payload("b", 2.0, "Other", "2024-01-01", "expense"))
        .await
        .unwrap();

    let records = ledger.transactions().await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first_of_jan.id, second_of_jan.id, 1]);
    assert!(first_of_jan.id < second_of_jan.id);
}

#[tokio::test]
async fn ids_grow_monotonically_and_are_not_reused() {
    let ledger = ledger_in_memory().await;

    let a = ledger
        .add(&payload("a", 1.0, "Other", "2024-01-01", "expense"))
        .await
        .unwrap();
    let b = ledger
        .add(&payload("b", 2.0, "Other", "2024-01-02", "expense"))
        .await
        .unwrap();
    assert!(b.id > a.id);

    ledger.remove(b.id).await.unwrap();
    let c = ledger
        .add(&payload("c", 3.0, "Other", "2024-01-03", "expense"))
        .await
        .unwrap();
    assert!(c.id > b.id, "id {} reused after deletion", b.id);
}

#[tokio::test]
async fn remove_deletes_once_then_reports_not_found() {
    let ledger = ledger_in_memory().await;

    let created = ledger
        .add(&payload("Groceries", 45.5, "Food", "2024-01-05", "expense"))
        .await
        .unwrap();

    ledger.remove(created.id).await.unwrap();
    assert!(ledger.transactions().await.unwrap().is_empty());

    let err = ledger.remove(created.id).await.unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[tokio::test]
async fn remove_all_reports_count_and_empties_store() {
    let ledger = ledger_in_memory().await;

    for i in 0..3 {
        ledger
            .add(&payload(&format!("r{i}"), 1.0, "Other", "2024-01-01", "expense"))
            .await
            .unwrap();
    }

    assert_eq!(ledger.remove_all().await.unwrap(), 3);
    assert!(ledger.transactions().await.unwrap().is_empty());
    assert_eq!(ledger.remove_all().await.unwrap(), 0);
}

#[tokio::test]
async fn invalid_payload_writes_nothing() {
    let ledger = ledger_in_memory().await;

    let mut bad = payload("Groceries", 45.5, "Food", "2024-01-05", "expense");
    bad.amount = Some(AmountInput::Number(-5.0));
    let err = ledger.add(&bad).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    assert!(ledger.transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn statistics_match_the_worked_example() {
    let ledger = ledger_in_memory().await;

    ledger
        .add(&payload("Salary", 1500.0, "Income", "2024-01-01", "income"))
        .await
        .unwrap();
    ledger
        .add(&payload("Groceries", 150.0, "Food", "2024-01-05", "expense"))
        .await
        .unwrap();
    ledger
        .add(&payload("Bus pass", 50.0, "Transport", "2024-01-07", "expense"))
        .await
        .unwrap();

    let stats = ledger.statistics().await.unwrap();
    assert_eq!(stats.income, MoneyCents::new(150_000));
    assert_eq!(stats.expenses, MoneyCents::new(20_000));
    assert_eq!(stats.balance, MoneyCents::new(130_000));

    assert_eq!(stats.by_category.len(), 2);
    let food = stats
        .by_category
        .iter()
        .find(|c| c.category == "Food")
        .unwrap();
    let transport = stats
        .by_category
        .iter()
        .find(|c| c.category == "Transport")
        .unwrap();
    assert_eq!(food.total, MoneyCents::new(15_000));
    assert_eq!(transport.total, MoneyCents::new(5_000));

    // Identities that must hold for any record set.
    assert_eq!(stats.balance, stats.income - stats.expenses);
    let breakdown: i64 = stats.by_category.iter().map(|c| c.total.cents()).sum();
    assert_eq!(breakdown, stats.expenses.cents());
}

#[tokio::test]
async fn statistics_reflect_deletions_immediately() {
    let ledger = ledger_in_memory().await;

    ledger
        .add(&payload("Salary", 100.0, "Income", "2024-01-01", "income"))
        .await
        .unwrap();
    let expense = ledger
        .add(&payload("Rent", 40.0, "Housing", "2024-01-02", "expense"))
        .await
        .unwrap();

    ledger.remove(expense.id).await.unwrap();

    let stats = ledger.statistics().await.unwrap();
    assert_eq!(stats.expenses, MoneyCents::ZERO);
    assert_eq!(stats.balance, MoneyCents::new(10_000));
    assert!(stats.by_category.is_empty());
}

#[tokio::test]
async fn seed_fills_empty_store_only_once() {
    let ledger = ledger_in_memory().await;

    assert!(ledger.seed_sample_data().await.unwrap());
    let seeded = ledger.transactions().await.unwrap().len();
    assert_eq!(seeded, 5);

    assert!(!ledger.seed_sample_data().await.unwrap());
    assert_eq!(ledger.transactions().await.unwrap().len(), seeded);
}
