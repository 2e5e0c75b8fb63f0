//! Unix timestamp to calendar date conversion.
//!
//! Two tools share this implementation, one per output format. Dates are
//! rendered in UTC so the same timestamp always yields the same day.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_core::tools::{typed_args, Tool, ToolError, ToolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnixDateFormat {
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl UnixDateFormat {
    fn pattern(self) -> &'static str {
        match self {
            UnixDateFormat::MonthDayYear => "%m/%d/%Y",
            UnixDateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }

    fn tool_name(self) -> &'static str {
        match self {
            UnixDateFormat::MonthDayYear => "convert_unix_to_mmddyyyy",
            UnixDateFormat::YearMonthDay => "convert_unix_to_yyyymmdd",
        }
    }

    fn tool_description(self) -> &'static str {
        match self {
            UnixDateFormat::MonthDayYear => {
                "Convert a Unix timestamp (seconds since epoch) to a MM/DD/YYYY date string (UTC)."
            }
            UnixDateFormat::YearMonthDay => {
                "Convert a Unix timestamp (seconds since epoch) to a YYYY-MM-DD date string (UTC)."
            }
        }
    }
}

/// Tool for turning a Unix timestamp into a date string
pub struct ConvertUnixDateTool {
    format: UnixDateFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnixDateArgs {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl ConvertUnixDateTool {
    pub fn new(format: UnixDateFormat) -> Self {
        Self { format }
    }

    pub fn mmddyyyy() -> Self {
        Self::new(UnixDateFormat::MonthDayYear)
    }

    pub fn yyyymmdd() -> Self {
        Self::new(UnixDateFormat::YearMonthDay)
    }

    pub fn convert(timestamp: i64, format: UnixDateFormat) -> Result<String, String> {
        DateTime::<Utc>::from_timestamp(timestamp, 0)
            .map(|date| date.format(format.pattern()).to_string())
            .ok_or_else(|| format!("Timestamp {} is out of range", timestamp))
    }
}

#[async_trait]
impl Tool for ConvertUnixDateTool {
    fn name(&self) -> &str {
        self.format.tool_name()
    }

    fn description(&self) -> &str {
        self.format.tool_description()
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "timestamp": {
                    "type": "integer",
                    "description": "The Unix timestamp to convert, in seconds"
                }
            },
            "required": ["timestamp"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let date_args: ConvertUnixDateArgs = typed_args(args)?;

        match Self::convert(date_args.timestamp, self.format) {
            Ok(date) => Ok(ToolResult::ok(date)),
            Err(e) => Ok(ToolResult::failed(e)),
        }
    }
}
