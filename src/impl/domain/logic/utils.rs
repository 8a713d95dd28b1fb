use chrono::NaiveDate;

/// Parses a manifest display date for statement ordering. `DD/MM/YYYY` is
/// the primary format, with ISO and dash-separated fallbacks. Returns `None`
/// for anything else; the statement builder sorts unparseable dates last.
pub(crate) fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%d-%m-%Y"))
        .ok()
}

/// Parses heavy-parcel detail text like `"15+20+30"` into individual
/// weights. Tokens that do not parse as a number are discarded; empty text
/// parses to an empty list. Never fails: callers surface partial parses as a
/// warning by comparing input to output, not via an error from here.
pub(crate) fn parse_heavy_detail(detail: &str) -> Vec<f64> {
    detail
        .split('+')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .collect()
}
