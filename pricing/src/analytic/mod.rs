pub mod black_scholes;

pub use black_scholes::{price, price_call, price_put, BlackScholesMerton, OptionPrice, OptionPrices};
