#![allow(dead_code)]

mod mock_fetcher;

pub use mock_fetcher::MockTxtRecordFetcher;
