//! Console front end for the pricing engine.
//!
//! Prompts for the five market parameters and an option type, then prints the
//! Black-Scholes-Merton price.
//!
//! Usage:
//!     cargo run --example price_cli

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use bsm_heatmap::{bsm_price, format_price, OptionKind};

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

fn prompt_f64<R: BufRead>(input: &mut R, message: &str) -> Result<f64> {
    let raw = prompt(input, message)?;
    raw.parse::<f64>()
        .with_context(|| format!("'{raw}' is not a number"))
}

fn main() -> Result<()> {
    env_logger::init();

    println!("Black-Scholes-Merton Option Pricing Model");
    println!("==========================================");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let spot = prompt_f64(&mut input, "Enter current stock price (S): ")?;
    let strike = prompt_f64(&mut input, "Enter strike price (K): ")?;
    let maturity = prompt_f64(&mut input, "Enter time to maturity in years (T): ")?;
    let rate = prompt_f64(
        &mut input,
        "Enter risk-free interest rate (r) in decimal (e.g., 0.05 for 5%): ",
    )?;
    let volatility = prompt_f64(
        &mut input,
        "Enter volatility (sigma) in decimal (e.g., 0.2 for 20%): ",
    )?;
    let kind_raw = prompt(&mut input, "Enter option type ('call' or 'put'): ")?;

    let result = kind_raw
        .parse::<OptionKind>()
        .and_then(|kind| bsm_price(spot, strike, maturity, rate, volatility, kind).map(|p| (kind, p)));

    match result {
        Ok((kind, price)) => println!("\nThe {kind} option price is: {}", format_price(price)),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
