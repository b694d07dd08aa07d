use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{SmokeError, SmokeResult};

/// Top-level body returned by the events endpoint.
///
/// Only `success` and the container types are part of the contract; everything inside
/// `data`, `error` and `pagination` is kept raw and read field by field when rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
	#[serde(default)]
	pub success: bool,
	#[serde(default)]
	pub data: Option<Vec<Value>>,
	#[serde(default)]
	pub error: Option<Value>,
	#[serde(default)]
	pub pagination: Option<Value>,
}

impl Envelope {
	pub fn from_body(body: &Value) -> SmokeResult<Self> {
		if !body.is_object() {
			return Err(SmokeError::Shape(format!("expected a JSON object, got {}", json_kind(body))));
		}
		Envelope::deserialize(body).map_err(|e| SmokeError::Shape(e.to_string()))
	}

	/// `success` is set and `data` came back non-null.
	pub fn is_ok(&self) -> bool {
		self.success && self.data.is_some()
	}

	pub fn event_count(&self) -> usize {
		self.data.as_ref().map_or(0, Vec::len)
	}

	pub fn events(&self) -> Vec<Event> {
		self.data.iter().flatten().map(Event::from_value).collect()
	}

	pub fn pagination(&self) -> Option<Pagination> {
		self.pagination.as_ref().filter(|p| !p.is_null()).map(Pagination::from_value)
	}

	pub fn error_message(&self) -> Option<String> {
		self.error.as_ref().filter(|e| !e.is_null()).map(display_value)
	}
}

/// One item of `data`. A non-object item reads as an event with every field missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
	pub title: Option<Value>,
	pub date: Option<Value>,
	pub can_check_in: Option<Value>,
}

impl Event {
	pub fn from_value(v: &Value) -> Self {
		Self {
			title: v.get("title").cloned(),
			date: v.get("date").cloned(),
			can_check_in: v.get("canCheckIn").cloned(),
		}
	}

	pub fn title(&self) -> Option<String> {
		self.title.as_ref().map(display_value)
	}

	pub fn date(&self) -> Option<&str> {
		self.date.as_ref().and_then(Value::as_str)
	}

	pub fn can_check_in(&self) -> bool {
		self.can_check_in.as_ref().map_or(false, is_truthy)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pagination {
	pub page: Option<Value>,
	pub limit: Option<Value>,
	pub total: Option<Value>,
	pub total_pages: Option<Value>,
	pub has_next_page: Option<Value>,
}

impl Pagination {
	pub fn from_value(v: &Value) -> Self {
		Self {
			page: v.get("page").cloned(),
			limit: v.get("limit").cloned(),
			total: v.get("total").cloned(),
			total_pages: v.get("totalPages").cloned(),
			has_next_page: v.get("hasNextPage").cloned(),
		}
	}
}

/// Raw response as seen on the wire, before the envelope contract is checked.
#[derive(Debug, Clone)]
pub struct FetchedBody {
	pub url: String,
	pub status: u16,
	pub body: Value,
}

impl FetchedBody {
	pub fn pretty_body(&self) -> String {
		serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
	}
}

/// Strings print bare, everything else as compact JSON.
pub fn display_value(v: &Value) -> String {
	match v {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

pub fn is_truthy(v: &Value) -> bool {
	match v {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn json_kind(v: &Value) -> &'static str {
	match v {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
