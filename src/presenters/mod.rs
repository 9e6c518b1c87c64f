pub mod checksum;
#[cfg(feature = "gui")]
pub mod pixels;
