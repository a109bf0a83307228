//! Throughput for a past calendar day (UTC)
//!
//! A day's block range is found by estimating the height at each midnight
//! from the launch date and the target block time, then walking one block at
//! a time until the block timestamps straddle the boundary.

use crate::error::{Error, Result};
use crate::throughput::{calculate_tps, BlockSource, HeightRange, TpsReport};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Mainnet genesis, 2014-04-18T00:00:00Z
pub const MONERO_LAUNCH: i64 = 1_397_779_200;

/// Target block time in seconds
pub const AVERAGE_BLOCK_TIME_SECS: i64 = 120;

const SECONDS_PER_DAY: i64 = 86_400;

/// Throughput over one UTC day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTps {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub report: TpsReport,
}

/// Height a block stamped at `timestamp` would have if every block took
/// exactly the target time
pub fn estimate_height(timestamp: i64) -> u64 {
    ((timestamp - MONERO_LAUNCH) / AVERAGE_BLOCK_TIME_SECS).max(0) as u64
}

/// Midnight at the start of `date`, as a unix timestamp
pub fn start_of_day(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Locate the block at `timestamp`, never looking past `tip`.
///
/// Starting from the estimate, walks down while blocks are newer than
/// `timestamp`, or up while they are older. After walking up, the result is
/// the last block before `timestamp`.
pub async fn height_at<S>(source: &S, timestamp: i64, tip: u64) -> Result<u64>
where
    S: BlockSource + Sync + ?Sized,
{
    let mut height = estimate_height(timestamp).min(tip);
    let mut block_time = source.block_at(height).await?.timestamp() as i64;

    if block_time > timestamp {
        while block_time > timestamp && height > 0 {
            height -= 1;
            block_time = source.block_at(height).await?.timestamp() as i64;
        }
    } else if block_time < timestamp {
        while block_time < timestamp && height < tip {
            height += 1;
            block_time = source.block_at(height).await?.timestamp() as i64;
        }
        // Stepped onto or past the boundary
        if block_time >= timestamp {
            height -= 1;
        }
    }

    tracing::debug!("Height at {} is {}", timestamp, height);
    Ok(height)
}

/// Average TPS across the blocks of `date`.
///
/// The day must have ended on chain: the block at `tip` has to be stamped at
/// or after the following midnight.
pub async fn daily_tps<S>(source: &S, date: NaiveDate, tip: u64) -> Result<DailyTps>
where
    S: BlockSource + Sync + ?Sized,
{
    let invalid = |reason: &str| Error::InvalidDate {
        date: date.to_string(),
        reason: reason.to_string(),
    };

    let day_start = start_of_day(date);
    let day_end = day_start + SECONDS_PER_DAY;

    if day_end <= MONERO_LAUNCH {
        return Err(invalid("before the first block"));
    }

    let tip_time = source.block_at(tip).await?.timestamp() as i64;
    if tip_time < day_end {
        return Err(invalid("the day has not ended on chain yet"));
    }

    let start = height_at(source, day_start, tip).await?;
    let end = height_at(source, day_end, tip).await?;
    if start == end {
        return Err(invalid("no blocks were mined that day"));
    }

    tracing::info!("Blocks {}..={} cover {}", start, end, date);

    let report = calculate_tps(source, HeightRange::new(start, end)).await?;
    Ok(DailyTps { date, report })
}
