mod common;

pub use common::RequestOptions;
