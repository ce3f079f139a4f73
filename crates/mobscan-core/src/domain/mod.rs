pub mod phone;
pub mod record;

pub use phone::{
    check_number, is_valid_mobile, normalize_digits, NumberCheck, MOBILE_NUMBER_LEN,
    MOBILE_PREFIXES,
};
pub use record::{Record, DEFAULT_DISPLAY_NAME, DEFAULT_RECORD_ID};
