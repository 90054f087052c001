mod netblock_resolver;

pub use netblock_resolver::NetblockResolver;
