pub(crate) mod artifacts;
pub(crate) mod error;
pub(crate) mod recyclebin;
