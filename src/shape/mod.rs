pub(crate) mod expr;
pub(crate) mod model;
pub(crate) mod resolve;
