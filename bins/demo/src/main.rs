//! Kompfond demo
//!
//! Walks the compensation fund through a realistic life cycle against the
//! in-memory store: lazy bootstrap, a series of ledger operations, then the
//! history and statistics views.
//!
//! Usage: cargo run --bin demo

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kompfond_core::fund::{HistoryFilter, NewHistoryEntry, OperationKind};
use kompfond_shared::types::UserId;
use kompfond_shared::AppConfig;
use kompfond_store::{FundService, InMemoryFundRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = FundService::new(InMemoryFundRepository::new(), config.fund);
    let admin = UserId::new();

    let fund = service.get_fund_info().await?;
    info!(
        balance = %fund.balance,
        currency = %fund.currency,
        "Fund record created on first access"
    );

    seed_history(&service, admin).await?;

    let stats = service.get_statistics().await?;
    info!(
        current_amount = %stats.current_amount,
        total_increase = %stats.total_increase,
        total_decrease = %stats.total_decrease,
        total_transfers = %stats.total_transfers,
        total_operations = stats.total_operations,
        last_month_operations = stats.last_month_operations,
        "Fund statistics"
    );

    let recent = service.get_recent_history(None).await?;
    info!(count = recent.len(), "Recent operations");
    for entry in &recent {
        info!(
            date = %entry.date.date_naive(),
            operation = %entry.operation,
            amount = %entry.amount,
            description = %entry.description,
            "  entry"
        );
    }

    let payouts = service
        .get_history(HistoryFilter {
            operation: Some(OperationKind::Decrease),
            ..HistoryFilter::default()
        })
        .await?;
    info!(
        total = payouts.pagination.total,
        pages = payouts.pagination.total_pages,
        "Payout history"
    );

    Ok(())
}

/// Records a few months of fund activity.
async fn seed_history(
    service: &FundService<InMemoryFundRepository>,
    actor: UserId,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let operations = [
        (
            120,
            OperationKind::Increase,
            3_000_000,
            "Ежегодный взнос членов организации",
        ),
        (
            75,
            OperationKind::Decrease,
            250_000,
            "Компенсационная выплата по договору 14-КФ",
        ),
        (
            40,
            OperationKind::Increase,
            500_000,
            "Взнос нового члена организации",
        ),
        (
            20,
            OperationKind::Transfer,
            1_000_000,
            "Перевод между субсчетами фонда",
        ),
        (
            3,
            OperationKind::Decrease,
            120_000,
            "Компенсационная выплата по договору 02-КФ",
        ),
    ];

    for (days_ago, operation, amount, description) in operations {
        let fund = service
            .add_history_entry(
                NewHistoryEntry {
                    date: now - Duration::days(days_ago),
                    operation,
                    amount: Decimal::from(amount),
                    description: description.to_string(),
                    document_url: None,
                },
                actor,
            )
            .await?;
        info!(
            operation = %operation,
            amount = %Decimal::from(amount),
            balance = %fund.balance,
            "Recorded"
        );
    }

    Ok(())
}
