pub mod american_express;
pub mod capital_one;
