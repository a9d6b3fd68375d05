mod error;
pub(crate) mod output;
