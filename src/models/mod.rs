pub mod payload;
pub mod record;

pub use payload::Payload;
pub use record::Record;
