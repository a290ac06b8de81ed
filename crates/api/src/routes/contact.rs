//! Contact form endpoints.
//!
//! Both transports run the same pipeline. Neither ever returns a server
//! error to the visitor: failures become a flash notice or a JSON message.

use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use domain::models::contact_submission::{
    ContactError, ContactForm, ContactResponse, MSG_SUBMIT_FAILED, MSG_SUBMIT_SUCCESS,
};

use crate::app::AppState;
use crate::extractors::RequestClient;
use crate::middleware::metrics::record_contact_submission;
use crate::middleware::rate_limit::rate_limited_response;
use crate::services::contact_pipeline::{self, record_rejection};
use crate::services::cookies::append_set_cookie;
use crate::services::{CookieHelper, Flash};

/// Checks the per-IP limiter. `Err` carries the Retry-After seconds.
fn check_rate_limit(state: &AppState, client: &RequestClient) -> Result<(), u64> {
    let Some(limiter) = &state.contact_limiter else {
        return Ok(());
    };
    limiter.check(client.0.ip_address).map_err(|retry_after| {
        record_contact_submission("rate_limited");
        tracing::warn!(
            target: "security",
            client_ip = ?client.0.ip_address,
            retry_after,
            "Contact submission rate limited"
        );
        retry_after
    })
}

/// `POST /contact/submit/`: classic form post, answered with a redirect home.
pub async fn submit_form(
    State(state): State<AppState>,
    client: RequestClient,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Response {
    if check_rate_limit(&state, &client).is_err() {
        return redirect_home(&state, Flash::error(MSG_SUBMIT_FAILED));
    }

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unparseable contact form body");
            let err = ContactError::MalformedRequest;
            record_rejection(&err);
            return redirect_home(&state, Flash::error(MSG_SUBMIT_FAILED));
        }
    };

    let flash = match contact_pipeline::submit(&state.pool, form, &client.0).await {
        Ok(_) => Flash::success(MSG_SUBMIT_SUCCESS),
        Err(err @ ContactError::Validation { .. }) => Flash::error(err.user_message()),
        Err(_) => Flash::error(MSG_SUBMIT_FAILED),
    };
    redirect_home(&state, flash)
}

/// `POST /contact/ajax/`: JSON body, JSON reply.
///
/// The body is parsed regardless of `Content-Type`.
pub async fn submit_json(
    State(state): State<AppState>,
    client: RequestClient,
    body: Bytes,
) -> Response {
    if let Err(retry_after) = check_rate_limit(&state, &client) {
        return rate_limited_response(retry_after);
    }

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable contact JSON body");
            let err = ContactError::MalformedRequest;
            record_rejection(&err);
            return Json(ContactResponse::from(&err)).into_response();
        }
    };

    let reply = match contact_pipeline::submit(&state.pool, form, &client.0).await {
        Ok(_) => ContactResponse::ok(),
        Err(err) => ContactResponse::from(&err),
    };
    Json(reply).into_response()
}

fn redirect_home(state: &AppState, flash: Flash) -> Response {
    let cookies = CookieHelper::new(&state.config.admin);
    let mut response = (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    append_set_cookie(response.headers_mut(), &cookies.flash_cookie(&flash.encode()));
    response
}
