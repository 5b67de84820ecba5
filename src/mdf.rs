//! Minimum-defense-frequency aggregation.
//!
//! Takes a range, a flop, and a bet size as a pot fraction; filters
//! blocked combos, classifies the rest into strength buckets (in
//! parallel — classification of one combo is independent of all others),
//! then walks the buckets strongest-first to find where the cumulative
//! count meets the required defend count.

use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{blocks_board, Board, Combo};
use crate::error::{TrainerError, TrainerResult};
use crate::hand_strength::{evaluate_hand, Bucket, BUCKET_ORDER};

/// One row of the strength-ordered bucket table.
#[derive(Debug, Clone, Serialize)]
pub struct BucketRow {
    pub name: &'static str,
    pub count: usize,
    /// Share of the valid range, percent, 1 decimal.
    pub pct: f64,
    pub cum_count: usize,
    pub cum_pct: f64,
    /// Member combos ("AsKs" notation); omitted for empty buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hands: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MdfResult {
    /// 1 / (1 + bet size), 3 decimals.
    pub mdf: f64,
    pub total_combos: usize,
    /// ceil(total × mdf).
    pub need_defend_combos: usize,
    /// Weakest bucket that must (at least partly) defend; "N/A" when the
    /// board blocks the entire range.
    pub cutoff_bucket: String,
    pub mix_required: bool,
    /// Percentage of the cutoff bucket to defend when the requirement
    /// falls strictly inside it, 1 decimal.
    pub mix_ratio: Option<f64>,
    pub buckets: Vec<BucketRow>,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Compute the full MDF breakdown for a range against a board and bet
/// size. A range fully blocked by the board yields a well-formed
/// degenerate result, not an error.
pub fn analyze_mdf(combos: &[Combo], board: &Board, bet_size: f64) -> TrainerResult<MdfResult> {
    if !bet_size.is_finite() || bet_size < 0.0 {
        return Err(TrainerError::InvalidBetSize(bet_size));
    }

    let valid: Vec<Combo> = combos
        .iter()
        .copied()
        .filter(|c| !blocks_board(*c, board))
        .collect();
    let total = valid.len();

    if total == 0 {
        return Ok(MdfResult {
            mdf: 0.0,
            total_combos: 0,
            need_defend_combos: 0,
            cutoff_bucket: "N/A".to_string(),
            mix_required: false,
            mix_ratio: None,
            buckets: Vec::new(),
        });
    }

    let mdf = 1.0 / (1.0 + bet_size);
    let need_defend = (total as f64 * mdf).ceil() as usize;

    // Fan the classification out; aggregation below stays in fixed
    // strength order regardless of completion order.
    let classified: Vec<(Combo, Bucket)> = valid
        .par_iter()
        .map(|&combo| (combo, evaluate_hand(combo, board)))
        .collect();

    let mut by_bucket: [Vec<Combo>; 6] = Default::default();
    for (combo, bucket) in classified {
        by_bucket[bucket.strength_index()].push(combo);
    }

    let mut rows = Vec::with_capacity(BUCKET_ORDER.len());
    let mut cum_count = 0usize;
    let mut prev_cum = 0usize;
    let mut cutoff: Option<&'static str> = None;
    let mut mix_required = false;
    let mut mix_ratio = None;

    for bucket in BUCKET_ORDER {
        let members = &by_bucket[bucket.strength_index()];
        let count = members.len();
        cum_count += count;

        let hands = if count > 0 {
            Some(members.iter().map(|c| c.to_string()).collect())
        } else {
            None
        };
        rows.push(BucketRow {
            name: bucket.name(),
            count,
            pct: round1(count as f64 / total as f64 * 100.0),
            cum_count,
            cum_pct: round1(cum_count as f64 / total as f64 * 100.0),
            hands,
        });

        if cutoff.is_none() && cum_count >= need_defend {
            cutoff = Some(bucket.name());
            if prev_cum < need_defend && need_defend < cum_count {
                mix_required = true;
                let need_in_bucket = need_defend - prev_cum;
                mix_ratio = Some(round1(need_in_bucket as f64 / count as f64 * 100.0));
            }
        }
        prev_cum = cum_count;
    }

    Ok(MdfResult {
        mdf: round3(mdf),
        total_combos: total,
        need_defend_combos: need_defend,
        // Totals always reach the requirement; Air is the defensive
        // fallback.
        cutoff_bucket: cutoff.unwrap_or(Bucket::Air.name()).to_string(),
        mix_required,
        mix_ratio,
        buckets: rows,
    })
}
