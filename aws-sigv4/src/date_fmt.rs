/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

pub(crate) fn format_date(date_time: &DateTime<Utc>) -> String {
    format!("{}", date_time.format(DATE_FORMAT))
}

pub(crate) fn format_date_time(date_time: &DateTime<Utc>) -> String {
    format!("{}", date_time.format(DATE_TIME_FORMAT))
}

#[cfg(test)]
pub(crate) fn parse_date_time(date_time_str: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    use chrono::NaiveDateTime;
    let date_time = NaiveDateTime::parse_from_str(date_time_str, DATE_TIME_FORMAT)?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(date_time, Utc))
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_date_time, parse_date_time};

    #[test]
    fn date_time_round_trip() {
        let date_time = parse_date_time("20150830T123600Z").unwrap();
        assert_eq!("20150830T123600Z", format_date_time(&date_time));
        assert_eq!("20150830", format_date(&date_time));
    }

    #[test]
    fn invalid_date_time() {
        assert!(parse_date_time("2015-08-30T12:36:00Z").is_err());
    }
}
