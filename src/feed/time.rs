// Date presentation in Brazilian Portuguese
//
// Two forms are shown for every timestamp:
// - an absolute title: "18 de janeiro às 16:47h"
// - a relative phrase: "há cerca de 1 hora", "em 5 minutos"
//
// Relative buckets follow the usual "distance to now" rounding rules
// (minutes rounded, 45 min flips to hours, 1.75 days flips to days, ...).
// Past two months the year cutoffs use whole calendar months between the
// two dates, read in the timestamp's own offset.

use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Absolute title, e.g. "18 de janeiro às 16:47h"
pub fn published_title<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{:02} de {} às {:02}:{:02}h",
        at.day(),
        MONTHS[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

/// Relative phrase with direction suffix, e.g. "há 3 dias"
pub fn relative_to_now<Tz1: TimeZone, Tz2: TimeZone>(
    at: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> String {
    let at_local = at.naive_local();
    let now_local = now.with_timezone(&at.timezone()).naive_local();

    if at_local > now_local {
        format!("em {}", distance_in_words(now_local, at_local))
    } else {
        format!("há {}", distance_in_words(at_local, now_local))
    }
}

/// Distance phrase without direction. `earlier` must not be after `later`.
pub fn distance_in_words(earlier: NaiveDateTime, later: NaiveDateTime) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "menos de um minuto".to_string()
        } else {
            plural(minutes, "minuto", "minutos")
        };
    }

    if minutes < 45 {
        return plural(minutes, "minuto", "minutos");
    }

    if minutes < 90 {
        return "cerca de 1 hora".to_string();
    }

    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return format!("cerca de {}", plural(hours, "hora", "horas"));
    }

    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 dia".to_string();
    }

    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "dia", "dias");
    }

    let nearest_month = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("cerca de {}", plural(nearest_month, "mês", "meses"));
    }

    let months = whole_months_between(earlier, later);
    if months < 12 {
        return plural(nearest_month, "mês", "meses");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        format!("cerca de {}", plural(years, "ano", "anos"))
    } else if remainder < 9 {
        format!("mais de {}", plural(years, "ano", "anos"))
    } else {
        format!("quase {}", plural(years + 1, "ano", "anos"))
    }
}

/// Full calendar months from `earlier` to `later`. A month counts once the
/// same day and time is reached; short months clamp to their last day.
fn whole_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months <= 0 {
        return 0;
    }

    let reached = u32::try_from(months)
        .ok()
        .and_then(|n| earlier.checked_add_months(Months::new(n)))
        .is_some_and(|anniversary| anniversary <= later);

    if reached {
        months
    } else {
        months - 1
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    #[test]
    fn title_uses_portuguese_month() {
        let at = DateTime::parse_from_rfc3339("2023-01-18T16:47:01-03:00").unwrap();
        assert_eq!(published_title(&at), "18 de janeiro às 16:47h");

        let at = DateTime::parse_from_rfc3339("2023-03-05T09:05:00-03:00").unwrap();
        assert_eq!(published_title(&at), "05 de março às 09:05h");
    }

    fn at(rfc3339: &str) -> NaiveDateTime {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().naive_local()
    }

    fn words_after(seconds: i64) -> String {
        let start = at("2023-01-18T16:47:01-03:00");
        distance_in_words(start, start + Duration::seconds(seconds))
    }

    #[test]
    fn distance_buckets() {
        assert_eq!(words_after(10), "menos de um minuto");
        assert_eq!(words_after(60), "1 minuto");
        assert_eq!(words_after(5 * 60), "5 minutos");
        assert_eq!(words_after(50 * 60), "cerca de 1 hora");
        assert_eq!(words_after(5 * 3600), "cerca de 5 horas");
        assert_eq!(words_after(30 * 3600), "1 dia");
        assert_eq!(words_after(3 * 86_400), "3 dias");
        assert_eq!(words_after(40 * 86_400), "cerca de 1 mês");
        assert_eq!(words_after(100 * 86_400), "3 meses");
        assert_eq!(words_after(365 * 86_400), "cerca de 1 ano");
        assert_eq!(words_after(880 * 86_400), "mais de 2 anos");
    }

    #[test]
    fn year_cutoffs_count_calendar_months() {
        // 360 days is twelve 30-day months but only 11 calendar months
        assert_eq!(
            distance_in_words(at("2023-01-18T12:00:00Z"), at("2024-01-13T12:00:00Z")),
            "12 meses"
        );
        // 457 days: 14 calendar months, not 15
        assert_eq!(
            distance_in_words(at("2023-03-01T12:00:00Z"), at("2024-05-31T12:00:00Z")),
            "cerca de 1 ano"
        );
    }

    #[test]
    fn whole_months_clamp_short_months() {
        assert_eq!(
            whole_months_between(at("2023-01-31T10:00:00Z"), at("2023-02-28T10:00:00Z")),
            1
        );
        assert_eq!(
            whole_months_between(at("2023-01-31T10:00:00Z"), at("2023-02-28T09:59:00Z")),
            0
        );
        assert_eq!(
            whole_months_between(at("2023-01-18T12:00:00Z"), at("2024-01-18T12:00:00Z")),
            12
        );
    }

    #[test]
    fn relative_direction() {
        let now = Utc::now();
        let past = now - Duration::hours(2);
        let future = (now + Duration::minutes(10)).with_timezone(&FixedOffset::west_opt(3 * 3600).unwrap());

        assert_eq!(relative_to_now(&past, &now), "há cerca de 2 horas");
        assert_eq!(relative_to_now(&future, &now), "em 10 minutos");
    }
}
