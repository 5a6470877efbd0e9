/// Korean listings (`.KS` KOSPI, `.KQ` KOSDAQ) are quoted in won.
pub fn is_krw_listing(ticker: &str) -> bool {
    ticker.ends_with(".KS") || ticker.ends_with(".KQ")
}

/// `₩71,000` for Korean listings, `$1,234.50` for everything else.
pub fn format_price(price: f64, ticker: &str) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    if is_krw_listing(ticker) {
        let whole = format!("{:.0}", price.abs().round());
        return format!("₩{sign}{}", group_thousands(&whole));
    }

    let fixed = format!("{:.2}", round_cents(price.abs()));
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("${sign}{}.{frac}", group_thousands(whole))
}

/// Halves round away from zero; `{:.2}` alone would round them to even.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Up,
    Down,
    Flat,
}

impl PriceDirection {
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            PriceDirection::Up
        } else if change_percent < 0.0 {
            PriceDirection::Down
        } else {
            PriceDirection::Flat
        }
    }
}

/// `+1.50%`, `-2.30%`, `0.00%`.
pub fn format_change_percent(change_percent: f64) -> String {
    // Avoid printing `-0.00%` for a negative zero.
    let p = round_cents(change_percent);
    let p = if p == 0.0 { 0.0 } else { p };
    let sign = if p > 0.0 { "+" } else { "" };
    format!("{sign}{p:.2}%")
}

/// Plain-text card preview: drops every `#`, `*` and `-`, keeps everything else.
pub fn preview_text(markdown: &str) -> String {
    markdown
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_won_without_decimals() {
        assert_eq!(format_price(71000.0, "005930.KS"), "₩71,000");
        assert_eq!(format_price(1234567.6, "035720.KQ"), "₩1,234,568");
        assert_eq!(format_price(950.0, "005930.KS"), "₩950");
    }

    #[test]
    fn formats_dollars_with_two_decimals() {
        assert_eq!(format_price(123.4, "NVDA"), "$123.40");
        assert_eq!(format_price(1234.5, "BRK.B"), "$1,234.50");
        assert_eq!(format_price(0.0, "AAPL"), "$0.00");
        assert_eq!(format_price(1_000_000.0, "GOOG"), "$1,000,000.00");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(format_price(71000.5, "005930.KS"), "₩71,001");
        assert_eq!(format_price(0.125, "NVDA"), "$0.13");
        assert_eq!(format_change_percent(0.125), "+0.13%");
        assert_eq!(format_change_percent(-0.125), "-0.13%");
        assert_eq!(format_change_percent(-0.001), "0.00%");
    }

    #[test]
    fn change_direction_and_text() {
        assert_eq!(PriceDirection::from_change_percent(1.5), PriceDirection::Up);
        assert_eq!(format_change_percent(1.5), "+1.50%");

        assert_eq!(PriceDirection::from_change_percent(-2.3), PriceDirection::Down);
        assert_eq!(format_change_percent(-2.3), "-2.30%");

        assert_eq!(PriceDirection::from_change_percent(0.0), PriceDirection::Flat);
        assert_eq!(format_change_percent(0.0), "0.00%");
        assert_eq!(format_change_percent(-0.0), "0.00%");
    }

    #[test]
    fn preview_removes_markdown_markers_only() {
        assert_eq!(preview_text("**Buy** NVDA - strong"), "Buy NVDA  strong");
        assert_eq!(preview_text("## 요약\n* 매수"), " 요약\n 매수");
        assert_eq!(preview_text("plain, text!"), "plain, text!");
    }
}
