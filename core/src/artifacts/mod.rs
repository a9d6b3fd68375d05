pub(crate) mod collection;
pub(crate) mod os;
