mod get_ip_ranges;

pub use get_ip_ranges::GetNetblockIpRangesUseCase;
