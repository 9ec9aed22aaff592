pub(crate) mod c;
pub(crate) mod writer;
