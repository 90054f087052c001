use crate::{
    dto::{NetblockIpRangesQuery, NetblockIpRangesResponse},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use netblocks_domain::DomainError;
use tracing::{error, instrument, warn};

#[instrument(skip(state), name = "api_get_netblock_ip_ranges")]
pub async fn get_netblock_ip_ranges(
    State(state): State<AppState>,
    Query(query): Query<NetblockIpRangesQuery>,
) -> Result<Json<NetblockIpRangesResponse>, (StatusCode, String)> {
    // `?range_type=` with no value means the default, as if omitted.
    let range_type = query.range_type.as_deref().filter(|rt| !rt.is_empty());

    match state.get_ip_ranges.execute(range_type).await {
        Ok(ranges) => Ok(Json(ranges.into())),
        Err(e @ DomainError::UnknownRangeType(_)) => {
            warn!(error = %e, "Rejected netblock lookup");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Netblock lookup failed");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
