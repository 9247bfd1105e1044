use crate::entities::{LotteryStatus, lottery_entity as lotteries};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LotteryResponse {
    pub id: i64,
    pub status: LotteryStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub ticket_price: i64,
    pub total_pool: i64,
    #[schema(value_type = Object)]
    pub winning_numbers: serde_json::Value,
    #[schema(value_type = Object)]
    pub winners: serde_json::Value,
}

impl From<lotteries::Model> for LotteryResponse {
    fn from(model: lotteries::Model) -> Self {
        Self {
            id: model.id,
            status: model.status,
            start_date: model.start_date,
            end_date: model.end_date,
            ticket_price: model.ticket_price,
            total_pool: model.total_pool,
            winning_numbers: model.winning_numbers,
            winners: model.winners,
        }
    }
}

/// Time left until the draw closes, by plain date subtraction.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

impl Countdown {
    pub fn between(now: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let remaining = (end - now).num_seconds();
        if remaining <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                expired: true,
            };
        }
        Self {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
            minutes: (remaining % 3_600) / 60,
            seconds: remaining % 60,
            expired: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LotteryStatusResponse {
    pub lottery: LotteryResponse,
    pub countdown: Countdown,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LotteryHistoryQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_countdown_breakdown() {
        let now = Utc::now();
        let end = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
            + Duration::seconds(5);
        let countdown = Countdown::between(now, end);
        assert_eq!(countdown.days, 2);
        assert_eq!(countdown.hours, 3);
        assert_eq!(countdown.minutes, 4);
        assert_eq!(countdown.seconds, 5);
        assert!(!countdown.expired);
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let now = Utc::now();
        let countdown = Countdown::between(now, now - Duration::hours(1));
        assert!(countdown.expired);
        assert_eq!(countdown.days, 0);
        assert_eq!(countdown.seconds, 0);
    }
}
