//! Serverless JSON endpoint over the cost engine
//!
//! Accepts a scenario as the request body and returns the cost summary.
//! Malformed JSON is a 400; the engine itself is total and never fails
//! on financial inputs.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use property_costs::costs::calculate_costs;
use property_costs::profile::Scenario;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let scenario: Scenario = match serde_json::from_slice(event.body().as_ref()) {
        Ok(scenario) => scenario,
        Err(err) => {
            let message = serde_json::json!({ "error": format!("invalid scenario: {err}") });
            return Ok(Response::builder()
                .status(400)
                .header("content-type", "application/json")
                .body(Body::from(message.to_string()))?);
        }
    };

    let summary = calculate_costs(&scenario);
    let body = serde_json::to_string(&summary)?;

    Ok(Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
