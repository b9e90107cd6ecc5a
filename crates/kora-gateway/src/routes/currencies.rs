use actix_web::{web, HttpResponse};
use kora::{Stablecoin, ARBITRUM_ONE_CHAIN_ID, ARBITRUM_ONE_NETWORK};
use serde::Serialize;

/// Public view of one registry entry
#[derive(Serialize)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub address: String,
    pub decimals: u8,
}

/// GET /api/currencies - Stablecoins accepted for payment sessions
pub async fn list_currencies() -> HttpResponse {
    let currencies: Vec<CurrencyInfo> = Stablecoin::ALL
        .into_iter()
        .map(|coin| CurrencyInfo {
            symbol: coin.symbol(),
            address: coin.address().to_string(),
            decimals: coin.decimals(),
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "chain_id": ARBITRUM_ONE_CHAIN_ID,
        "network": ARBITRUM_ONE_NETWORK,
        "currencies": currencies,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/currencies", web::get().to(list_currencies));
}
