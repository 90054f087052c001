pub mod netblocks;

pub use netblocks::GetNetblockIpRangesUseCase;
