//! HTTP surface for the generator.
//!
//! Three routes: the option lists for populating the pickers, the generate
//! endpoint, and a liveness probe. The generate endpoint answers any
//! generation failure with `502` and the one generic error message; malformed
//! bodies and out-of-set labels are rejected with `400` before the adapter is
//! ever invoked.

use std::convert::Infallible;

use serde::Serialize;
use tracing::{info, warn, Instrument};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::{json, with_status, Json, WithStatus};
use warp::{Filter, Rejection, Reply};

use crate::adapter::IdentityAdapter;
use crate::options::{Country, Gender, GenerationOptions, NameSet};

/// Generous for a three-field JSON body.
const MAX_BODY_LENGTH: u64 = 16 * 1024;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionLists {
    genders: Vec<&'static str>,
    name_sets: Vec<&'static str>,
    countries: Vec<&'static str>,
}

#[derive(Serialize)]
struct ErrorReply {
    error: String,
}

/// Assemble the full route tree.
pub fn routes(
    adapter: IdentityAdapter,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    options_route()
        .or(generate_route(adapter))
        .or(healthz_route())
        .recover(handle_rejection)
}

fn options_route() -> impl Filter<Extract = (Json,), Error = Rejection> + Clone {
    warp::path!("api" / "options")
        .and(warp::get())
        .map(|| {
            json(&OptionLists {
                genders: Gender::ALL.iter().map(Gender::label).collect(),
                name_sets: NameSet::ALL.iter().map(NameSet::label).collect(),
                countries: Country::ALL.iter().map(Country::label).collect(),
            })
        })
}

fn generate_route(
    adapter: IdentityAdapter,
) -> impl Filter<Extract = (WithStatus<Json>,), Error = Rejection> + Clone {
    warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::any().map(move || adapter.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_LENGTH))
        .and(warp::body::json::<GenerationOptions>())
        .and_then(generate)
}

fn healthz_route() -> impl Filter<Extract = (&'static str,), Error = Rejection> + Clone {
    warp::path!("healthz").and(warp::get()).map(|| "ok")
}

async fn generate(
    adapter: IdentityAdapter,
    options: GenerationOptions,
) -> Result<WithStatus<Json>, Infallible> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_request", %request_id);

    async move {
        match adapter.request_identity(&options).await {
            Ok(record) => {
                info!("generated identity record");
                Ok(with_status(json(&record), StatusCode::OK))
            }
            Err(error) => Ok(with_status(
                json(&ErrorReply {
                    error: error.to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            )),
        }
    }
    .instrument(span)
    .await
}

async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Rejection> {
    if let Some(deserialize_error) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        warn!(error = %deserialize_error, "rejecting malformed generate request");
        return Ok(with_status(
            json(&ErrorReply {
                error: deserialize_error.to_string(),
            }),
            StatusCode::BAD_REQUEST,
        ));
    }

    Err(rejection)
}
