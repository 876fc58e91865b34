pub(crate) mod cache;
pub(crate) mod model;
pub(crate) mod validate;
