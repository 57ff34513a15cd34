use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{data::booking::BookingRepository, error::AppError};

/// Starts the maintenance scheduler.
///
/// The job runs every five minutes and performs two sweeps:
/// - Pending bookings whose scheduled time has passed are cancelled, so stale
///   requests stop counting against the student's active booking cap
/// - Expired session records are deleted from the session store
///
/// # Arguments
/// - `db` - Database connection
/// - `session_store` - Session store whose expired records are purged
pub async fn start_scheduler(
    db: DatabaseConnection,
    session_store: SqliteStore,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_store = session_store.clone();

    // Schedule job to run every five minutes
    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let store = job_store.clone();

        Box::pin(async move {
            if let Err(e) = run_maintenance(&db, &store).await {
                tracing::error!("Error running maintenance sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}

/// Runs one maintenance sweep.
async fn run_maintenance(
    db: &DatabaseConnection,
    session_store: &SqliteStore,
) -> Result<(), AppError> {
    let cancelled = BookingRepository::new(db)
        .cancel_stale_pending(Utc::now())
        .await?;
    if cancelled > 0 {
        tracing::info!("Cancelled {} stale pending bookings", cancelled);
    }

    session_store
        .delete_expired()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to delete expired sessions: {e}")))?;

    Ok(())
}
