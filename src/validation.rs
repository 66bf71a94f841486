//! Field rules for user-entered Persian text
//!
//! Short fields (province, city, region, district) and long fields (street
//! address) share one alphabet: Persian letters, Persian or Latin digits,
//! spaces, ZWNJ and common punctuation. Both must start with a letter.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::LatLng;
use crate::{AddressError, Result};

pub const PROVINCE_REQUIRED: &str = "استان الزامی است";
pub const PROVINCE_INVALID: &str = "استان باید حاوی حروف، اعداد فارسی و علائم نگارشی بوده و با حرف شروع شود و طول آن حداکثر ۵۰ کاراکتر باشد";
pub const CITY_REQUIRED: &str = "شهر الزامی است";
pub const CITY_INVALID: &str = "شهر باید حاوی حروف، اعداد فارسی و علائم نگارشی بوده و با حرف شروع شود و طول آن حداکثر ۵۰ کاراکتر باشد";
pub const REGION_INVALID: &str = "منطقه باید حاوی حروف، اعداد فارسی و علائم نگارشی بوده و با حرف شروع شود و طول آن حداکثر ۵۰ کاراکتر باشد";
pub const DISTRICT_INVALID: &str = "محله باید حاوی حروف، اعداد فارسی و علائم نگارشی بوده و با حرف شروع شود و طول آن حداکثر ۵۰ کاراکتر باشد";
pub const ADDRESS_REQUIRED: &str = "آدرس الزامی است";
pub const ADDRESS_INVALID: &str = "آدرس باید حاوی حروف و اعداد فارسی و علائم نگارشی بوده و با حرف شروع شود و طول آن حداکثر ۲۰۰ کاراکتر باشد";
pub const LOCATION_REQUIRED: &str = "موقعیت جغرافیایی الزامی است";
pub const LOCATION_INVALID: &str = "موقعیت جغرافیایی نامعتبر است";

pub const TEXT_FA_SMALL_MAX: usize = 50;
pub const TEXT_FA_LARGE_MAX: usize = 200;

const PERSIAN_LETTERS: &str =
    r"\x{0621}-\x{063A}\x{0641}-\x{064A}\x{067E}\x{0686}\x{0698}\x{06A9}\x{06AF}\x{06CC}";
// diacritics, digits (Persian, Arabic-Indic, Latin), space, ZWNJ, punctuation
const PERSIAN_EXTRA: &str = r"\x{064B}-\x{0652}\x{06F0}-\x{06F9}\x{0660}-\x{0669}0-9 \x{200C}.,،؛:/()«»\-";

fn text_pattern(max_len: usize) -> Regex {
    let pattern = format!(
        "^[{PERSIAN_LETTERS}][{PERSIAN_LETTERS}{PERSIAN_EXTRA}]{{0,{}}}$",
        max_len - 1
    );
    Regex::new(&pattern).expect("persian text pattern is valid")
}

static TEXT_FA_SMALL: LazyLock<Regex> = LazyLock::new(|| text_pattern(TEXT_FA_SMALL_MAX));
static TEXT_FA_LARGE: LazyLock<Regex> = LazyLock::new(|| text_pattern(TEXT_FA_LARGE_MAX));

#[must_use]
pub fn is_text_fa_small(value: &str) -> bool {
    TEXT_FA_SMALL.is_match(value)
}

#[must_use]
pub fn is_text_fa_large(value: &str) -> bool {
    TEXT_FA_LARGE.is_match(value)
}

/// Required short field: present and matching TEXT_FA_SMALL
pub fn required_small_text<'a>(
    value: Option<&'a str>,
    missing: &str,
    invalid: &str,
) -> Result<&'a str> {
    let value = value.ok_or_else(|| AddressError::validation(missing))?;
    if is_text_fa_small(value) {
        Ok(value)
    } else {
        Err(AddressError::validation(invalid))
    }
}

/// Optional short field: absent is fine, present must match TEXT_FA_SMALL
pub fn optional_small_text<'a>(value: Option<&'a str>, invalid: &str) -> Result<Option<&'a str>> {
    match value {
        Some(v) if !is_text_fa_small(v) => Err(AddressError::validation(invalid)),
        other => Ok(other),
    }
}

/// Required long field: present and matching TEXT_FA_LARGE
pub fn required_large_text<'a>(
    value: Option<&'a str>,
    missing: &str,
    invalid: &str,
) -> Result<&'a str> {
    let value = value.ok_or_else(|| AddressError::validation(missing))?;
    if is_text_fa_large(value) {
        Ok(value)
    } else {
        Err(AddressError::validation(invalid))
    }
}

pub fn required_location(location: Option<LatLng>) -> Result<LatLng> {
    let location = location.ok_or_else(|| AddressError::validation(LOCATION_REQUIRED))?;
    if location.is_valid() {
        Ok(location)
    } else {
        Err(AddressError::validation(LOCATION_INVALID))
    }
}
