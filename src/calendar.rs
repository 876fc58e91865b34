pub(crate) mod civil;
pub(crate) mod zones;
