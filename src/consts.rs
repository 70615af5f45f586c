use jiff::civil::Date;

/// First tabulated Bikram Sambat year (inclusive)
pub const MIN_YEAR: u16 = 1970;
/// Last tabulated Bikram Sambat year (inclusive)
pub const MAX_YEAR: u16 = 2090;

/// Months in every BS year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Month number for Baisakh, the first month of the year
pub const BAISAKH: u8 = 1;
/// Month number for Chaitra, the last month of the year
pub const CHAITRA: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Gregorian year of the epoch (BS `MIN_YEAR`-01-01)
pub const EPOCH_AD_YEAR: i16 = 1913;
/// Gregorian month of the epoch
pub const EPOCH_AD_MONTH: i8 = 4;
/// Gregorian day of the epoch
pub const EPOCH_AD_DAY: i8 = 13;

/// The Gregorian date that is exactly BS 1970-01-01.
///
/// Every conversion is a day count relative to this anchor.
pub const EPOCH_AD: Date = jiff::civil::date(EPOCH_AD_YEAR, EPOCH_AD_MONTH, EPOCH_AD_DAY);

/// Month names in romanized form (index 0 is Baisakh)
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR as usize] = [
    "Baisakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Month names in Devanagari (index 0 is Baisakh)
pub const MONTH_NAMES_NEPALI: [&str; MONTHS_PER_YEAR as usize] = [
    "बैशाख",
    "जेठ",
    "असार",
    "श्रावण",
    "भाद्र",
    "आश्विन",
    "कार्तिक",
    "मंसिर",
    "पौष",
    "माघ",
    "फाल्गुन",
    "चैत्र",
];

/// Date component separator (ISO 8601 layout)
pub const DATE_SEPARATOR: char = '-';
