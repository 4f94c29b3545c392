pub mod config;

#[cfg(feature = "test_tools")]
pub mod test_tools;
