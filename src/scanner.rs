use crate::cli;

/// Best single buy/sell trade found in a price series.
///
/// Holds the positions of both legs and the resulting profit:
/// - `buy_index`: position of the buy observation.
/// - `sell_index`: position of the sell observation, always after the buy.
/// - `profit`: `prices[sell_index] - prices[buy_index]`, always positive.
///
/// "No profitable trade" is represented by `None` at the call sites,
/// never by a zeroed-out pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestTrade {
    pub buy_index: usize,
    pub sell_index: usize,
    pub profit: f64,
}

/// Scans a price series for the most profitable single buy/sell pair.
///
/// Dispatches to the algorithm selected on the command line. Both variants
/// return the same result for every input: the pair maximizing
/// `prices[sell] - prices[buy]` with `buy < sell`, and on equal maximum
/// profit the first pair in buy-then-sell scan order.
///
/// # Arguments
/// * `prices` - Ordered price observations, one per time step.
/// * `algorithm` - Which scan implementation to run.
///
/// # Returns
/// * `Option<BestTrade>` - The best trade, or `None` if the series has
///   fewer than 2 observations or no pair yields a positive profit.
pub fn scan(prices: &[f64], algorithm: cli::Algorithm) -> Option<BestTrade> {
    match algorithm {
        cli::Algorithm::Exhaustive => scan_exhaustive(prices),
        cli::Algorithm::SinglePass => scan_single_pass(prices),
    }
}

/// Exhaustive O(n²) scan over every valid buy/sell index pair.
///
/// For each candidate buy index, every later sell index is compared against
/// the running best. The update comparison is strict `>`, so the first pair
/// reaching the maximum profit is kept and later equal candidates never
/// overwrite it.
///
/// # Arguments
/// * `prices` - Ordered price observations, one per time step.
///
/// # Returns
/// * `Option<BestTrade>` - The best trade, or `None` when no positive
///   profit exists.
pub fn scan_exhaustive(prices: &[f64]) -> Option<BestTrade> {
    let mut best: Option<BestTrade> = None;

    for buy_index in 0..prices.len().saturating_sub(1) {
        for sell_index in buy_index + 1..prices.len() {
            let profit = prices[sell_index] - prices[buy_index];
            let improved = match best {
                Some(ref b) => profit > b.profit,
                None => profit > 0.0,
            };
            if improved {
                best = Some(BestTrade {
                    buy_index,
                    sell_index,
                    profit,
                });
            }
        }
    }

    best
}

/// Single-pass O(n) scan tracking the minimum price seen so far.
///
/// Walks the series once, treating every observation as a sell candidate
/// against the earliest minimum before it. The minimum index moves only on
/// a strictly lower price and the best trade only on a strictly higher
/// profit, which makes the tie-break identical to the exhaustive scan:
/// equal-profit maxima share their buy and sell prices, so both scans
/// settle on the earliest minimal buy paired with the earliest maximal
/// sell.
///
/// # Arguments
/// * `prices` - Ordered price observations, one per time step.
///
/// # Returns
/// * `Option<BestTrade>` - The best trade, or `None` when no positive
///   profit exists.
pub fn scan_single_pass(prices: &[f64]) -> Option<BestTrade> {
    let mut best: Option<BestTrade> = None;
    let mut min_index = 0usize;

    for sell_index in 1..prices.len() {
        let profit = prices[sell_index] - prices[min_index];
        let improved = match best {
            Some(ref b) => profit > b.profit,
            None => profit > 0.0,
        };
        if improved {
            best = Some(BestTrade {
                buy_index: min_index,
                sell_index,
                profit,
            });
        }
        if prices[sell_index] < prices[min_index] {
            min_index = sell_index;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::{BestTrade, scan_exhaustive, scan_single_pass};

    const BOTH: [fn(&[f64]) -> Option<BestTrade>; 2] = [scan_exhaustive, scan_single_pass];

    #[test]
    fn empty_and_single_element_series_yield_no_trade() {
        for scan in BOTH {
            assert_eq!(scan(&[]), None);
            assert_eq!(scan(&[42.0]), None);
        }
    }

    #[test]
    fn monotonically_decreasing_series_yields_no_trade() {
        for scan in BOTH {
            assert_eq!(scan(&[5.0, 4.0, 3.0, 2.0, 1.0]), None);
        }
    }

    #[test]
    fn flat_series_yields_no_trade() {
        // A zero-profit pair exists but is never reported.
        for scan in BOTH {
            assert_eq!(scan(&[3.0, 3.0, 3.0]), None);
        }
    }

    #[test]
    fn finds_early_dip_and_mid_series_peak() {
        let prices = [17.0, 3.0, 6.0, 9.0, 15.0, 8.0, 6.0, 1.0, 10.0];
        for scan in BOTH {
            assert_eq!(
                scan(&prices),
                Some(BestTrade {
                    buy_index: 1,
                    sell_index: 4,
                    profit: 12.0,
                })
            );
        }
    }

    #[test]
    fn monotonically_increasing_series_spans_full_range() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        for scan in BOTH {
            assert_eq!(
                scan(&prices),
                Some(BestTrade {
                    buy_index: 0,
                    sell_index: 4,
                    profit: 4.0,
                })
            );
        }
    }

    #[test]
    fn equal_profit_keeps_first_pair_in_scan_order() {
        // (0,1), (0,3) and (2,3) all yield 3.0; the first stays.
        let prices = [0.0, 3.0, 0.0, 3.0];
        for scan in BOTH {
            assert_eq!(
                scan(&prices),
                Some(BestTrade {
                    buy_index: 0,
                    sell_index: 1,
                    profit: 3.0,
                })
            );
        }
    }

    #[test]
    fn repeated_scans_of_same_input_agree() {
        let prices = [17.0, 3.0, 6.0, 9.0, 15.0, 8.0, 6.0, 1.0, 10.0];
        for scan in BOTH {
            let first = scan(&prices);
            assert_eq!(
                first,
                Some(BestTrade {
                    buy_index: 1,
                    sell_index: 4,
                    profit: 12.0,
                })
            );
            for _ in 0..10 {
                assert_eq!(scan(&prices), first);
            }
        }
    }

    /// Deterministic pseudo-random price series for cross-checking.
    fn lcg_series(mut state: u64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((state >> 33) % 2000) as f64 / 10.0
            })
            .collect()
    }

    #[test]
    fn single_pass_matches_exhaustive_on_generated_series() {
        for seed in 0..50u64 {
            for len in [0, 1, 2, 3, 7, 20, 100] {
                let prices = lcg_series(seed + 1, len);
                assert_eq!(
                    scan_single_pass(&prices),
                    scan_exhaustive(&prices),
                    "diverged on seed {} len {}",
                    seed,
                    len
                );
            }
        }
    }

    #[test]
    fn single_pass_matches_exhaustive_on_tie_heavy_series() {
        // Coarse quantization forces many equal-profit pairs.
        for seed in 0..50u64 {
            let prices: Vec<f64> = lcg_series(seed + 1, 30)
                .into_iter()
                .map(|p| (p / 50.0).floor())
                .collect();
            assert_eq!(
                scan_single_pass(&prices),
                scan_exhaustive(&prices),
                "diverged on seed {}",
                seed
            );
        }
    }
}
