mod notification_record;

pub use notification_record::*;
