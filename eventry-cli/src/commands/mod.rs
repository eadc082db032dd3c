pub mod admin;
pub mod delete;
pub mod edit;
pub mod events;
pub mod new;
pub mod poll;
pub mod polls;
pub mod save;
pub mod vote;

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use eventry_core::AppContext;

/// Parse a user-supplied instant: date-only, date+time, or full RFC 3339.
/// Date-only means midnight UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }

    bail!("Could not parse '{s}' as a date (expected YYYY-MM-DD, YYYY-MM-DDTHH:MM, or RFC 3339)")
}

/// Verify admin rights once for this session and bail when denied.
pub async fn require_admin(ctx: &mut AppContext) -> Result<()> {
    if !ctx.ensure_admin().await? {
        bail!(
            "This command needs admin rights.\n\n\
            The server rejected the configured identity. Set init_data and\n\
            user in the config file if you have admin access."
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_all_accepted_date_shapes() {
        assert_eq!(
            parse_instant("2025-03-20").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_instant("2025-03-20T15:30").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap()
        );
        assert_eq!(
            parse_instant("2025-03-20T15:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 13, 30, 0).unwrap()
        );
        assert!(parse_instant("next tuesday").is_err());
    }
}
