//! Character counter rendering for the title and content fields.

/// Maximum assumed for the title field when it declares no usable `maxlength`.
pub const DEFAULT_TITLE_MAX: usize = 100;

pub const WARN_COLOR: &str = "#dc3545";
pub const NEUTRAL_COLOR: &str = "#666";

/// Field length as the browser counts it for `maxlength`: UTF-16 code units,
/// not bytes and not scalar values.
pub fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Parse the `maxlength` attribute, falling back to [`DEFAULT_TITLE_MAX`]
/// when the attribute is missing or not a usable number.
pub fn parse_max_length(attr: Option<&str>) -> usize {
    attr.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_TITLE_MAX)
}

pub fn title_counter_text(len: usize, max: usize) -> String {
    format!("{} / {} 文字", len, max)
}

pub fn content_counter_text(len: usize) -> String {
    format!("{} 文字", len)
}

/// The title counter turns to the warning color once the field is more than
/// 90% full. Integer form of `len > max * 0.9`.
pub fn over_warn_threshold(len: usize, max: usize) -> bool {
    len * 10 > max * 9
}

pub fn counter_color(len: usize, max: usize) -> &'static str {
    if over_warn_threshold(len, max) {
        WARN_COLOR
    } else {
        NEUTRAL_COLOR
    }
}
