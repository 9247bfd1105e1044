use rand::Rng;

pub const MIN_SCRATCH_PRIZE: i64 = 10;
pub const MAX_SCRATCH_PRIZE: i64 = 500;

/// Random KOKI prize assigned when a scratch card is revealed.
pub fn random_scratch_prize() -> i64 {
    let mut rng = rand::thread_rng();
    rng.gen_range(MIN_SCRATCH_PRIZE..=MAX_SCRATCH_PRIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_scratch_prize_in_range() {
        for _ in 0..100 {
            let prize = random_scratch_prize();
            assert!(prize >= MIN_SCRATCH_PRIZE && prize <= MAX_SCRATCH_PRIZE);
        }
    }
}
