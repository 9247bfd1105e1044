//! Background scheduled tasks for the application.
//!
//! The only recurring job closes lottery rounds whose end date has passed;
//! the next /lottery-status request then lazily opens a fresh round. No
//! draw is executed here. Call `spawn_all` once during startup.

use crate::services::LotteryService;

const ROUND_SWEEP_INTERVAL_SECS: u64 = 60;

/// Spawn all background tasks. Detaches via `tokio::spawn`; does not block.
pub fn spawn_all(lottery_service: LotteryService) {
    {
        let svc = lottery_service.clone();
        tokio::spawn(async move {
            loop {
                match svc.complete_expired().await {
                    Ok(n) if n > 0 => log::info!("Closed expired lottery rounds: {n}"),
                    Ok(_) => {}
                    Err(e) => log::error!("Failed to close expired lottery rounds: {e:?}"),
                }
                tokio::time::sleep(std::time::Duration::from_secs(ROUND_SWEEP_INTERVAL_SECS))
                    .await;
            }
        });
    }
}
