pub(crate) mod star;
