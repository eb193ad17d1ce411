use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Formats an ISO date as shown in the bills table, e.g. `2004-04-04` -> `4 Avr. 04`.
pub fn format_date(raw: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?;
    let month = MONTHS[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_and_short_year() {
        assert_eq!(format_date("2004-04-04").expect("date"), "4 Avr. 04");
        assert_eq!(format_date("2023-06-15").expect("date"), "15 Jui. 23");
        assert_eq!(format_date("2022-12-01").expect("date"), "1 Déc. 22");
        assert_eq!(format_date("2001-02-28").expect("date"), "28 Fév. 01");
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(format_date("04/04/2004").is_err());
        assert!(format_date("2004-13-01").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
