pub mod health;
pub mod netblocks;

pub use health::health_check;
pub use netblocks::get_netblock_ip_ranges;
