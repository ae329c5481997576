pub mod brush;
pub mod cashflow;
pub mod color;
pub mod profit_loss;
pub mod scale;
pub mod stacked;
pub mod timeseries;
