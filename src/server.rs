//! HTTP facade

use crate::config::ServerConfig;
use crate::fetcher::TpsFetcher;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

const INDEX_HTML: &str = include_str!("../static/index.html");
const MONERO_TPS_HTML: &str = include_str!("../static/monero_tps.html");

#[derive(Debug, Serialize)]
struct TpsBody {
    tps: f64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// All routes: the two pages and `/get-monero-tps`
pub fn routes(
    fetcher: Arc<TpsFetcher>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let page = warp::path!("monero-tps")
        .and(warp::get())
        .map(|| warp::reply::html(MONERO_TPS_HTML));

    let data = warp::path!("get-monero-tps")
        .and(warp::get())
        .and(with_fetcher(fetcher))
        .and_then(get_monero_tps);

    index.or(page).or(data).with(warp::trace::request())
}

fn with_fetcher(
    fetcher: Arc<TpsFetcher>,
) -> impl Filter<Extract = (Arc<TpsFetcher>,), Error = Infallible> + Clone {
    warp::any().map(move || fetcher.clone())
}

async fn get_monero_tps(fetcher: Arc<TpsFetcher>) -> Result<impl Reply, Infallible> {
    match fetcher.fetch_current().await {
        Ok(report) => Ok(warp::reply::with_status(
            warp::reply::json(&TpsBody { tps: report.tps }),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!("Error calculating TPS: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody {
                    error: e.to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// Serve until the process is stopped
pub async fn serve(config: &ServerConfig, fetcher: TpsFetcher) {
    tracing::info!("Server running at http://{}", config.bind);
    warp::serve(routes(Arc::new(fetcher))).run(config.bind).await;
}
