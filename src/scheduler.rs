use crate::blog::BlogStore;
use anyhow::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

/// Start the periodic blog reload.
///
/// `schedule` is a six-field cron expression (seconds first).
pub async fn start_scheduler(schedule: &str, blog: Arc<BlogStore>) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    info!("Scheduling blog reload (cron: {})", schedule);

    let job = Job::new_async(schedule, move |_uuid, _l| {
        let blog = Arc::clone(&blog);

        Box::pin(async move {
            info!("⏰ Scheduled blog reload triggered");
            if let Err(e) = run_reload_job(&blog).await {
                error!("Scheduled blog reload failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("✓ Scheduler started");

    Ok(scheduler)
}

/// Reload posts off the async runtime; file IO is blocking.
pub async fn run_reload_job(blog: &Arc<BlogStore>) -> Result<usize> {
    let blog = Arc::clone(blog);
    let count = tokio::task::spawn_blocking(move || blog.reload()).await??;
    Ok(count)
}
