use std::io::{self, Write};

use crate::dates::{render_date, DateLocale};
use crate::models::{display_value, Event, Pagination};

pub const UNDEFINED: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
	Stdout,
	Stderr,
}

/// Ordered console output of one run, kept in memory until emitted.
#[derive(Debug, Clone, Default)]
pub struct Report {
	lines: Vec<(Stream, String)>,
}

impl Report {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn out(&mut self, line: impl Into<String>) {
		self.lines.push((Stream::Stdout, line.into()));
	}

	pub fn err(&mut self, line: impl Into<String>) {
		self.lines.push((Stream::Stderr, line.into()));
	}

	pub fn lines(&self) -> &[(Stream, String)] {
		&self.lines
	}

	pub fn stdout(&self) -> String {
		self.join(Some(Stream::Stdout))
	}

	pub fn stderr(&self) -> String {
		self.join(Some(Stream::Stderr))
	}

	/// Both streams interleaved in emission order.
	pub fn text(&self) -> String {
		self.join(None)
	}

	fn join(&self, only: Option<Stream>) -> String {
		let mut buf = String::new();
		for (stream, line) in &self.lines {
			if only.map_or(true, |s| s == *stream) {
				buf.push_str(line);
				buf.push('\n');
			}
		}
		buf
	}

	pub fn emit_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
		for (stream, line) in &self.lines {
			match stream {
				Stream::Stdout => writeln!(out, "{}", line)?,
				Stream::Stderr => writeln!(err, "{}", line)?,
			}
		}
		out.flush()?;
		err.flush()
	}

	pub fn emit(&self) -> io::Result<()> {
		self.emit_to(&mut io::stdout().lock(), &mut io::stderr().lock())
	}
}

fn or_undefined(v: Option<&serde_json::Value>) -> String {
	v.map(display_value).unwrap_or_else(|| UNDEFINED.into())
}

pub fn yes_no(v: bool) -> &'static str {
	if v { "Yes" } else { "No" }
}

/// One line per field, in a fixed order, whether or not the block came back.
pub fn pagination_lines(p: Option<&Pagination>) -> Vec<String> {
	let p = p.cloned().unwrap_or_default();
	vec![
		format!("  page: {}", or_undefined(p.page.as_ref())),
		format!("  limit: {}", or_undefined(p.limit.as_ref())),
		format!("  total: {}", or_undefined(p.total.as_ref())),
		format!("  totalPages: {}", or_undefined(p.total_pages.as_ref())),
		format!("  hasNextPage: {}", or_undefined(p.has_next_page.as_ref())),
	]
}

/// `index` is 1-based.
pub fn event_line(index: usize, event: &Event, locale: DateLocale) -> String {
	format!(
		"  {}. {} | {} | can check in: {}",
		index,
		event.title().unwrap_or_else(|| UNDEFINED.into()),
		render_date(event.date(), locale),
		yes_no(event.can_check_in()),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn missing_pagination_prints_placeholders() {
		let lines = pagination_lines(None);
		assert_eq!(lines.len(), 5);
		assert!(lines.iter().all(|l| l.ends_with(": undefined")));
		assert_eq!(lines[3], "  totalPages: undefined");
	}

	#[test]
	fn partial_pagination_mixes_values_and_placeholders() {
		let p = Pagination::from_value(&json!({"page": 2, "total": "23", "totalPages": null, "hasNextPage": false}));
		let lines = pagination_lines(Some(&p));
		assert_eq!(lines[0], "  page: 2");
		assert_eq!(lines[1], "  limit: undefined");
		assert_eq!(lines[2], "  total: 23");
		assert_eq!(lines[3], "  totalPages: null");
		assert_eq!(lines[4], "  hasNextPage: false");
	}

	#[test]
	fn event_line_renders_all_columns() {
		let ev = Event::from_value(&json!({"title": "Launch", "date": "2024-01-01T00:00:00Z", "canCheckIn": true}));
		assert_eq!(event_line(1, &ev, DateLocale::EnUs), "  1. Launch | 1/1/2024 | can check in: Yes");
		let bare = Event::default();
		assert_eq!(event_line(7, &bare, DateLocale::EnUs), "  7. undefined | Invalid Date | can check in: No");
		let odd = Event::from_value(&json!({"title": 42, "date": 17, "canCheckIn": 1}));
		assert_eq!(event_line(2, &odd, DateLocale::EnUs), "  2. 42 | Invalid Date | can check in: Yes");
	}

	#[test]
	fn streams_are_split_but_order_is_kept() {
		let mut r = Report::new();
		r.out("a");
		r.err("b");
		r.out("c");
		assert_eq!(r.stdout(), "a\nc\n");
		assert_eq!(r.stderr(), "b\n");
		assert_eq!(r.text(), "a\nb\nc\n");
		let (mut out, mut err) = (Vec::new(), Vec::new());
		r.emit_to(&mut out, &mut err).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "a\nc\n");
		assert_eq!(String::from_utf8(err).unwrap(), "b\n");
	}
}
