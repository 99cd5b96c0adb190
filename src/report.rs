/// One leg of a trade: when it happens, where it sits in the series, and at what price.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TradePoint {
    pub timestamp: u64,
    pub index: u64,
    pub price: f64,
}

/// Best buy/sell pair found in one file, with the resulting profit.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BestTradeReport {
    pub buy: TradePoint,
    pub sell: TradePoint,
    pub profit: f64,
}

/// Full scan report saved as .trade.json file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScanReport {
    pub source_file: String,
    pub bars_scanned: u64,
    pub best_trade: Option<BestTradeReport>,    // None → no profitable pair in the series
}
