use std::fmt;
use std::str::FromStr;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::errors::SmokeError;

pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
	#[default]
	EnUs,
	EnGb,
	FrFr,
	DeDe,
	Iso,
}

impl DateLocale {
	pub fn tag(&self) -> &'static str {
		match self {
			DateLocale::EnUs => "en-US",
			DateLocale::EnGb => "en-GB",
			DateLocale::FrFr => "fr-FR",
			DateLocale::DeDe => "de-DE",
			DateLocale::Iso => "iso",
		}
	}

	pub fn format(&self, date: Date) -> String {
		let (y, m, d) = (date.year(), u8::from(date.month()), date.day());
		match self {
			DateLocale::EnUs => format!("{}/{}/{}", m, d, y),
			DateLocale::EnGb | DateLocale::FrFr => format!("{:02}/{:02}/{}", d, m, y),
			DateLocale::DeDe => format!("{}.{}.{}", d, m, y),
			DateLocale::Iso => format!("{}-{:02}-{:02}", y, m, d),
		}
	}
}

impl fmt::Display for DateLocale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl FromStr for DateLocale {
	type Err = SmokeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
			"en-us" | "en" => Ok(DateLocale::EnUs),
			"en-gb" => Ok(DateLocale::EnGb),
			"fr-fr" | "fr" => Ok(DateLocale::FrFr),
			"de-de" | "de" => Ok(DateLocale::DeDe),
			"iso" => Ok(DateLocale::Iso),
			other => Err(SmokeError::Config(format!("unsupported locale '{}'", other))),
		}
	}
}

/// Calendar date of an ISO-8601 timestamp, taken in UTC. Offset-less inputs are read as UTC.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
	let raw = raw.trim();
	if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(ts.to_offset(UtcOffset::UTC).date());
	}
	let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
	if let Ok(ts) = PrimitiveDateTime::parse(raw, naive) {
		return Some(ts.date());
	}
	Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

pub fn render_date(raw: Option<&str>, locale: DateLocale) -> String {
	raw.and_then(parse_calendar_date)
		.map(|d| locale.format(d))
		.unwrap_or_else(|| INVALID_DATE.into())
}
