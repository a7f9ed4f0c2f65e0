//! Session cookie middleware
//!
//! Every page and API request carries a session id. A browser without a
//! valid `agrosphere_session` cookie gets a fresh session and the cookie is
//! set on the response.

use axum::{
    extract::{Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "agrosphere_session";

/// Session id resolved for the current request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Resolve or create the session, then expose it to handlers
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
        .filter(|id| state.sessions.contains(id));

    let (id, jar) = match existing {
        Some(id) => (id, jar),
        None => {
            let id = state.sessions.create();
            let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (id, jar.add(cookie))
        }
    };

    request.extensions_mut().insert(SessionId(id));
    let response = next.run(request).await;

    (jar, response).into_response()
}

/// Extractor for the current session
/// Use this in handlers behind [`session_middleware`]
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession(pub Uuid);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .map(|id| CurrentSession(id.0))
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail {
                        code: "NO_SESSION".to_string(),
                        message: "Session middleware is not installed on this route".to_string(),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
            })
    }
}
