mod dashboard;
mod price;

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{HttpResponse, Responder, ResponseError, web};

use crate::port::TelemetryStore;
use crate::recovery::{CostBreakdown, QueryError, RecoveryApi};

pub fn routes<S: TelemetryStore + 'static>(api: Arc<RecoveryApi<S>>) -> actix_web::Scope {
    web::scope("/api")
        .route("/price/hour/{device_id}", web::get().to(price::hourly_total::<S>))
        .route("/price/day/{device_id}", web::get().to(price::daily_total::<S>))
        .route("/price/{device_id}", web::get().to(price::instant::<S>))
        .route("/realtime", web::get().to(dashboard::realtime::<S>))
        .route("/daily", web::get().to(dashboard::daily::<S>))
        .app_data(web::Data::from(api))
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Backend is running!" }))
}

impl ResponseError for QueryError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            QueryError::InvalidDevice(_) => StatusCode::BAD_REQUEST,
            QueryError::NoData(_) => StatusCode::NOT_FOUND,
            QueryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!("Request failed: {:?}", self);

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

//money and energy figures cross the wire as strings fixed to two decimals
fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

fn fixed2_breakdown(breakdown: &CostBreakdown) -> BTreeMap<String, String> {
    breakdown
        .iter()
        .map(|(carrier, amount)| (carrier.to_owned(), fixed2(amount)))
        .collect()
}
