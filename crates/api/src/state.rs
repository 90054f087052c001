use netblocks_application::use_cases::GetNetblockIpRangesUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_ip_ranges: Arc<GetNetblockIpRangesUseCase>,
}
