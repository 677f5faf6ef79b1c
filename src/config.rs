#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/contact"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    ""  // Production webhook URL, set at deploy time
}

/// Cadence for section titles and the closing summary line.
pub const TITLE_CADENCE_MS: u32 = 30;

/// Cadence for detail labels and bodies.
pub const DETAIL_CADENCE_MS: u32 = 15;

/// Extra arming delay per detail row under one section title.
pub const DETAIL_STAGGER_MS: u32 = 300;

/// The summary starts on a fixed clock rather than when the last section
/// finishes, so a slow section can still be typing when it begins. Kept as
/// shipped; bump this if sections grow.
pub const SUMMARY_START_DELAY_MS: u32 = 5500;
