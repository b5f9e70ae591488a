use chrono::{Days, NaiveDate};
use sygnal::models::preset::{MeanReversionParams, StrategyParameters, TrendBreakoutParams};
use sygnal::models::price::{PriceBar, PriceSeries};
use sygnal::models::signal::{RiskContext, SignalReport};
use sygnal::signals::SignalEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let series = sample_series(220)?;
    let risk_ctx = RiskContext::new(10_000.0, 0.04)?;

    let trend = StrategyParameters::TrendBreakout(TrendBreakoutParams {
        symbol: "BTC-USD".to_string(),
        entry_lookback: 60,
        exit_lookback: 30,
        ema_period: 100,
        atr_period: 14,
        stop_multiplier: 5.0,
        trailing_multiplier: 4.0,
        contract_multiplier: 1.0,
        leverage: 2.0,
    });

    let report1 = SignalEngine::evaluate(&series, &trend, &risk_ctx)?;
    println!("Trend breakout:");
    print_report(&report1);
    println!();

    let mean_rev = StrategyParameters::MeanReversion(MeanReversionParams {
        symbol: "GC=F".to_string(),
        rsi_period: 14,
        atr_period: 14,
        stop_multiplier: 2.0,
        long_entry: 30.0,
        long_exit: 60.0,
        short_entry: 90.0,
        short_exit: 50.0,
        contract_multiplier: 100.0,
        leverage: 20.0,
    });

    let report2 = SignalEngine::evaluate(&series, &mean_rev, &risk_ctx)?;
    println!("RSI mean reversion:");
    print_report(&report2);

    Ok(())
}

/// A gently rising series with a sine wobble, long enough for every indicator.
fn sample_series(len: usize) -> Result<PriceSeries, Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let mut bars = Vec::with_capacity(len);
    for i in 0..len {
        let base = 100.0 + i as f64 * 0.2 + (i as f64 * 0.7).sin() * 3.0;
        bars.push(PriceBar {
            date: start + Days::new(i as u64),
            open: base,
            high: base + 1.5,
            low: base - 1.5,
            close: base + 0.4,
        });
    }
    Ok(PriceSeries::from_bars(bars)?)
}

fn print_report(report: &SignalReport) {
    println!("  Symbol: {}", report.symbol);
    println!("  Date: {}", report.evaluated_at);
    println!("  Close: {:.2}", report.close);
    println!("  Decision: {:?}", report.decision);
    println!("  Cash at risk: ${:.2}", report.cash_risk);
    println!("  Long exit suggested: {}", report.exit_advice.long_exit_suggested);
    println!("  Short exit suggested: {}", report.exit_advice.short_exit_suggested);
    if let Some(stop) = report.exit_advice.long_trailing_stop {
        println!("  Long trailing stop: {stop:.2}");
    }
    if let Some(stop) = report.exit_advice.short_trailing_stop {
        println!("  Short trailing stop: {stop:.2}");
    }
}
