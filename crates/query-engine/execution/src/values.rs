//! Convert database values into neutral JSON.
//!
//! Timestamps are rendered with exactly six fractional digits and intervals
//! in the `[D day[s], ]H:MM:SS[.ffffff]` form, independent of locale. Arrays
//! of the mapped scalar types become JSON arrays. Values of any other type are
//! passed through from their wire bytes.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::types::{Oid, PgInterval, PgMoney, PgTimeTz};
use sqlx::postgres::{PgColumn, PgRow};
use sqlx::types::ipnetwork::IpNetwork;
use sqlx::types::mac_address::MacAddress;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.6f";

const MICROSECONDS_PER_SECOND: i128 = 1_000_000;
const MICROSECONDS_PER_DAY: i128 = 86_400 * MICROSECONDS_PER_SECOND;
const DAYS_PER_MONTH: i128 = 30;

/// Fractional digits of `money` in the default locales.
const MONEY_SCALE: u32 = 2;

/// Convert a row into an ordered map of column name to value.
pub fn row_to_json(row: &PgRow) -> Result<crate::Row, Error> {
    row.columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), column_to_json(row, column)?)))
        .collect()
}

fn column_to_json(row: &PgRow, column: &PgColumn) -> Result<Value, Error> {
    let index = column.ordinal();
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match column.type_info().name() {
        "BOOL" => Value::Bool(row.try_get(index)?),
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "OID" => Value::from(row.try_get::<Oid, _>(index)?.0),
        "FLOAT4" => Value::from(row.try_get::<f32, _>(index)?),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "NUMERIC" => numeric_to_json(row.try_get::<Decimal, _>(index)?),
        "MONEY" => numeric_to_json(row.try_get::<PgMoney, _>(index)?.to_decimal(MONEY_SCALE)),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "UNKNOWN" => {
            Value::String(row.try_get(index)?)
        }
        "TIMESTAMP" => Value::String(format_timestamp(&row.try_get::<NaiveDateTime, _>(index)?)),
        "TIMESTAMPTZ" => Value::String(format_timestamp(
            &row.try_get::<DateTime<Utc>, _>(index)?.naive_utc(),
        )),
        "DATE" => Value::String(format_date(&row.try_get::<NaiveDate, _>(index)?)),
        "TIME" => Value::String(format_time(&row.try_get::<NaiveTime, _>(index)?)),
        "TIMETZ" => Value::String(format_time_tz(
            &row.try_get::<PgTimeTz<NaiveTime, FixedOffset>, _>(index)?,
        )),
        "INTERVAL" => Value::String(format_interval(&row.try_get::<PgInterval, _>(index)?)),
        "UUID" => Value::String(row.try_get::<uuid::Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "BYTEA" => Value::String(format_bytea(&row.try_get::<Vec<u8>, _>(index)?)),
        "INET" => Value::String(format_inet(&row.try_get::<IpNetwork, _>(index)?)),
        "CIDR" => Value::String(row.try_get::<IpNetwork, _>(index)?.to_string()),
        "MACADDR" => Value::String(format_mac_address(&row.try_get::<MacAddress, _>(index)?)),

        "BOOL[]" => array_to_json(row.try_get::<Vec<Option<bool>>, _>(index)?, Value::Bool),
        "INT2[]" => array_to_json(row.try_get::<Vec<Option<i16>>, _>(index)?, Value::from),
        "INT4[]" => array_to_json(row.try_get::<Vec<Option<i32>>, _>(index)?, Value::from),
        "INT8[]" => array_to_json(row.try_get::<Vec<Option<i64>>, _>(index)?, Value::from),
        "FLOAT4[]" => array_to_json(row.try_get::<Vec<Option<f32>>, _>(index)?, Value::from),
        "FLOAT8[]" => array_to_json(row.try_get::<Vec<Option<f64>>, _>(index)?, Value::from),
        "NUMERIC[]" => {
            array_to_json(row.try_get::<Vec<Option<Decimal>>, _>(index)?, numeric_to_json)
        }
        "TEXT[]" | "VARCHAR[]" | "BPCHAR[]" | "NAME[]" => {
            array_to_json(row.try_get::<Vec<Option<String>>, _>(index)?, Value::String)
        }
        "TIMESTAMP[]" => array_to_json(
            row.try_get::<Vec<Option<NaiveDateTime>>, _>(index)?,
            |timestamp| Value::String(format_timestamp(&timestamp)),
        ),
        "TIMESTAMPTZ[]" => array_to_json(
            row.try_get::<Vec<Option<DateTime<Utc>>>, _>(index)?,
            |timestamp| Value::String(format_timestamp(&timestamp.naive_utc())),
        ),
        "DATE[]" => array_to_json(row.try_get::<Vec<Option<NaiveDate>>, _>(index)?, |date| {
            Value::String(format_date(&date))
        }),
        "TIME[]" => array_to_json(row.try_get::<Vec<Option<NaiveTime>>, _>(index)?, |time| {
            Value::String(format_time(&time))
        }),
        "UUID[]" => array_to_json(row.try_get::<Vec<Option<uuid::Uuid>>, _>(index)?, |uuid| {
            Value::String(uuid.to_string())
        }),
        "JSONB[]" => array_to_json(row.try_get::<Vec<Option<Value>>, _>(index)?, |document| document),

        type_name => {
            tracing::debug!(
                column = column.name(),
                type_name,
                "passing through a value without a mapping"
            );
            wire_to_json(row.try_get_unchecked::<Vec<u8>, _>(index)?)
        }
    };
    Ok(value)
}

/// One-dimensional arrays keep their order; null elements stay null.
fn array_to_json<T>(elements: Vec<Option<T>>, convert: impl Fn(T) -> Value) -> Value {
    Value::Array(
        elements
            .into_iter()
            .map(|element| element.map_or(Value::Null, &convert))
            .collect(),
    )
}

/// Printable UTF-8 is returned as a string; anything else as `\x` hex.
fn wire_to_json(bytes: Vec<u8>) -> Value {
    match String::from_utf8(bytes) {
        Ok(text) if !text.chars().any(|c| c.is_control() && !c.is_whitespace()) => {
            Value::String(text)
        }
        Ok(text) => Value::String(format_bytea(text.as_bytes())),
        Err(err) => Value::String(format_bytea(err.as_bytes())),
    }
}

/// Numeric values become floats; values a float cannot hold become null.
fn numeric_to_json(value: Decimal) -> Value {
    value.to_f64().map_or(Value::Null, Value::from)
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Render an interval as `[D day[s], ]H:MM:SS[.ffffff]`. Months count as 30
/// days; a negative interval has negative days and a positive time of day.
pub fn format_interval(interval: &PgInterval) -> String {
    let total = (i128::from(interval.months) * DAYS_PER_MONTH + i128::from(interval.days))
        * MICROSECONDS_PER_DAY
        + i128::from(interval.microseconds);
    format_microseconds(total)
}

/// Render a number of microseconds as `[D day[s], ]H:MM:SS[.ffffff]`.
pub fn format_microseconds(total: i128) -> String {
    let days = total.div_euclid(MICROSECONDS_PER_DAY);
    let remainder = total.rem_euclid(MICROSECONDS_PER_DAY);

    let seconds = remainder / MICROSECONDS_PER_SECOND;
    let microseconds = remainder % MICROSECONDS_PER_SECOND;
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);

    let mut formatted = String::new();
    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        formatted.push_str(&format!("{days} {unit}, "));
    }
    formatted.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if microseconds != 0 {
        formatted.push_str(&format!(".{microseconds:06}"));
    }
    formatted
}

fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn format_time_tz(time: &PgTimeTz<NaiveTime, FixedOffset>) -> String {
    format!("{}{}", format_time(&time.time), time.offset)
}

/// Host addresses are shown without their prefix length, as PostgreSQL does.
fn format_inet(network: &IpNetwork) -> String {
    let host_prefix = match network {
        IpNetwork::V4(_) => 32,
        IpNetwork::V6(_) => 128,
    };
    if network.prefix() == host_prefix {
        network.ip().to_string()
    } else {
        network.to_string()
    }
}

fn format_mac_address(address: &MacAddress) -> String {
    address.to_string().to_lowercase()
}

/// Render binary data the way PostgreSQL's hex output does.
fn format_bytea(bytes: &[u8]) -> String {
    let mut formatted = String::with_capacity(2 + bytes.len() * 2);
    formatted.push_str("\\x");
    for byte in bytes {
        formatted.push_str(&format!("{byte:02x}"));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(months: i32, days: i32, microseconds: i64) -> PgInterval {
        PgInterval {
            months,
            days,
            microseconds,
        }
    }

    #[test]
    fn timestamps_always_have_six_fractional_digits() {
        let whole = NaiveDate::from_ymd_opt(2019, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(&whole), "2019-03-07T09:05:00.000000");

        let fractional = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 59, 120)
            .unwrap();
        assert_eq!(format_timestamp(&fractional), "1999-12-31T23:59:59.000120");
    }

    #[test]
    fn short_intervals_have_no_day_part() {
        assert_eq!(format_interval(&interval(0, 0, 0)), "0:00:00");
        assert_eq!(
            format_interval(&interval(0, 0, 3_723_000_000)),
            "1:02:03"
        );
        assert_eq!(format_interval(&interval(0, 0, 1_500_000)), "0:00:01.500000");
    }

    #[test]
    fn days_and_months_are_counted_in_days() {
        assert_eq!(format_interval(&interval(0, 1, 0)), "1 day, 0:00:00");
        assert_eq!(
            format_interval(&interval(1, 2, 60_000_000)),
            "32 days, 0:01:00"
        );
    }

    #[test]
    fn negative_intervals_borrow_from_the_day_part() {
        assert_eq!(
            format_interval(&interval(0, 0, -3_600_000_000)),
            "-1 day, 23:00:00"
        );
        assert_eq!(format_interval(&interval(0, -3, 0)), "-3 days, 0:00:00");
    }

    #[test]
    fn bytea_is_rendered_as_hex() {
        assert_eq!(format_bytea(&[0xde, 0xad, 0x01]), "\\xdead01");
        assert_eq!(format_bytea(&[]), "\\x");
    }

    #[test]
    fn arrays_keep_order_and_null_elements() {
        assert_eq!(
            array_to_json(vec![Some("a".to_string()), None, Some("b".to_string())], Value::String),
            serde_json::json!(["a", null, "b"])
        );
        assert_eq!(
            array_to_json(Vec::<Option<i32>>::new(), Value::from),
            serde_json::json!([])
        );
    }

    #[test]
    fn timestamp_arrays_use_the_timestamp_format() {
        let timestamp = NaiveDate::from_ymd_opt(2019, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(
            array_to_json(vec![Some(timestamp)], |t: NaiveDateTime| {
                Value::String(format_timestamp(&t))
            }),
            serde_json::json!(["2019-03-07T09:05:00.000000"])
        );
    }

    #[test]
    fn host_addresses_drop_their_prefix() {
        let host: IpNetwork = "192.168.0.1".parse().unwrap();
        assert_eq!(format_inet(&host), "192.168.0.1");

        let network: IpNetwork = "10.1.0.0/16".parse().unwrap();
        assert_eq!(format_inet(&network), "10.1.0.0/16");

        let host: IpNetwork = "::1".parse().unwrap();
        assert_eq!(format_inet(&host), "::1");
    }

    #[test]
    fn mac_addresses_are_lowercase() {
        let address = MacAddress::new([0x08, 0x00, 0x2b, 0x01, 0x02, 0xAB]);
        assert_eq!(format_mac_address(&address), "08:00:2b:01:02:ab");
    }

    #[test]
    fn times_with_a_zone_carry_their_offset() {
        let time = PgTimeTz {
            time: NaiveTime::from_hms_micro_opt(4, 5, 6, 789).unwrap(),
            offset: FixedOffset::east_opt(2 * 3600).unwrap(),
        };
        assert_eq!(format_time_tz(&time), "04:05:06.000789+02:00");
    }

    #[test]
    fn unmapped_values_pass_through_as_text_or_hex() {
        assert_eq!(wire_to_json(b"happy".to_vec()), Value::from("happy"));
        assert_eq!(wire_to_json(vec![0x01, 0x41]), Value::from("\\x0141"));
        assert_eq!(wire_to_json(vec![0xff, 0xfe]), Value::from("\\xfffe"));
    }

    #[test]
    fn numerics_become_floats() {
        assert_eq!(numeric_to_json(Decimal::new(25, 1)), Value::from(2.5));
    }
}
