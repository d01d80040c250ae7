pub(crate) mod config;
