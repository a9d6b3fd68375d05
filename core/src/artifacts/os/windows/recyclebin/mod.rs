pub(crate) mod error;
mod info2;
pub(crate) mod parser;
mod recycle;
