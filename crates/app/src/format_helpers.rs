//! Display formatting for amounts, bill dates and backend status words.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Placeholder for values the backend left out.
pub const MISSING: &str = "-";

/// Format an amount in rupees with thousands separators: `Rs. 1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}Rs. {grouped}.{:02}", cents % 100)
}

/// Format an ISO timestamp (`2025-01-20T21:35:00`) as `Jan 20, 2025 9:35 PM`.
///
/// Date-only input gives the date alone; unparseable input is returned as is.
pub fn format_bill_date(date: Option<&str>) -> String {
    let Some(date) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return MISSING.to_string();
    };
    if date.len() < 10 || !date.is_char_boundary(10) {
        return date.to_string();
    }
    let month = match date[5..7].parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return date.to_string(),
    };
    let day: u32 = date[8..10].parse().unwrap_or(0);
    let day_part = format!("{} {}, {}", MONTH_NAMES[month - 1], day, &date[..4]);

    if date.len() < 16 || !date.is_char_boundary(16) {
        return day_part;
    }
    let Ok(hour) = date[11..13].parse::<u32>() else {
        return day_part;
    };
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{} {}:{} {}", day_part, display_hour, &date[14..16], ampm)
}

/// Turn a backend status word into a label: `CASH_ON_DELIVERY` → `Cash On Delivery`.
pub fn format_status(status: Option<&str>) -> String {
    let Some(status) = status.filter(|s| !s.trim().is_empty()) else {
        return MISSING.to_string();
    };
    status
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
