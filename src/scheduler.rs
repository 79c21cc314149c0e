//! Cron scheduler for the reminder dispatch sweep

use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{config::ReminderConfig, services::ReminderService};

/// Scheduler that delivers due reminders on a cron schedule
pub struct ReminderScheduler {
    config: ReminderConfig,
    db_pool: PgPool,
    scheduler: JobScheduler,
}

impl ReminderScheduler {
    /// Create a new reminder scheduler
    pub async fn new(config: ReminderConfig, db_pool: PgPool) -> Result<Self> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            config,
            db_pool,
            scheduler,
        })
    }

    /// Add the dispatch sweep job to the scheduler
    pub async fn setup_jobs(&mut self) -> Result<()> {
        self.add_dispatch_job().await?;
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<()> {
        self.scheduler.start().await?;
        Ok(())
    }

    /// Shutdown the scheduler gracefully
    pub async fn shutdown(&mut self) -> Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Add the due-reminder dispatch job
    async fn add_dispatch_job(&self) -> Result<()> {
        let db_pool = self.db_pool.clone();
        let cron_expr = self.config.sweep_cron.clone();

        tracing::info!("Adding reminder dispatch job: {}", cron_expr);

        let job = Job::new_async(cron_expr.as_str(), move |_uuid, _lock| {
            let db_pool = db_pool.clone();

            Box::pin(async move {
                match ReminderService::dispatch_due(&db_pool, Utc::now()).await {
                    Ok(0) => {}
                    Ok(delivered) => {
                        tracing::info!("Reminder sweep: delivered={}", delivered);
                    }
                    Err(e) => {
                        tracing::error!("Reminder sweep failed: {}", e);
                    }
                }
            })
        })?;

        self.scheduler.add(job).await?;
        Ok(())
    }
}
