use axum::{
    body::Body, extract::Request, http::HeaderMap, http::StatusCode, middleware::Next,
    response::Response,
};
use contracts::shared::access::Role;

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = claims_from_request(req.headers()).await?;

    // Add claims to request extensions for use in handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = claims_from_request(req.headers()).await?;

    if claims.role != Role::Admin {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

async fn claims_from_request(
    headers: &HeaderMap,
) -> Result<contracts::system::auth::TokenClaims, StatusCode> {
    // Extract Authorization header and Bearer token into an owned String so
    // the borrow ends before the await below (keeps the future Send).
    let token = {
        let auth_header = headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // Check Bearer prefix
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_owned()
    };

    super::jwt::validate_token(&token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)
}
