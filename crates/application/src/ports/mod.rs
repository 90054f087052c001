mod txt_record_fetcher;

pub use txt_record_fetcher::TxtRecordFetcher;
