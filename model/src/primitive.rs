//! The JSON-Schema primitive type vocabulary.
//!
//! JSON Schema defines seven primitive type names. Four of them (`boolean`,
//! `number`, `string`, `integer`) denote scalar values and have XSD
//! simple-type equivalents; `object`, `array`, and `null` denote structure
//! and do not.

/// A JSON-Schema primitive type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JsonPrimitive {
    /// `boolean` — a true/false value.
    Boolean,
    /// `number` — an arbitrary-precision decimal number.
    Number,
    /// `string` — a Unicode string.
    String,
    /// `integer` — a whole number. JSON Schema treats this as distinct from
    /// `number` even though JSON itself has a single numeric type.
    Integer,
    /// `object` — an unordered set of name/value members.
    Object,
    /// `array` — an ordered list of values.
    Array,
    /// `null` — the absence of a value.
    Null,
}

impl JsonPrimitive {
    /// All seven primitives, in the order the JSON Schema core spec lists them.
    pub const ALL: [JsonPrimitive; 7] = [
        JsonPrimitive::Boolean,
        JsonPrimitive::Number,
        JsonPrimitive::String,
        JsonPrimitive::Integer,
        JsonPrimitive::Object,
        JsonPrimitive::Array,
        JsonPrimitive::Null,
    ];

    /// Returns the type name as it appears in a schema document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonPrimitive::Boolean => "boolean",
            JsonPrimitive::Number => "number",
            JsonPrimitive::String => "string",
            JsonPrimitive::Integer => "integer",
            JsonPrimitive::Object => "object",
            JsonPrimitive::Array => "array",
            JsonPrimitive::Null => "null",
        }
    }

    /// Parses a primitive type name. Returns `None` for anything outside the
    /// seven names defined by JSON Schema. Matching is exact: type names are
    /// case-sensitive in schema documents.
    #[must_use]
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "boolean" => Some(JsonPrimitive::Boolean),
            "number" => Some(JsonPrimitive::Number),
            "string" => Some(JsonPrimitive::String),
            "integer" => Some(JsonPrimitive::Integer),
            "object" => Some(JsonPrimitive::Object),
            "array" => Some(JsonPrimitive::Array),
            "null" => Some(JsonPrimitive::Null),
            _ => None,
        }
    }

    /// Returns true for the four primitives that denote scalar values and
    /// therefore have an XSD simple-type equivalent.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            JsonPrimitive::Boolean
                | JsonPrimitive::Number
                | JsonPrimitive::String
                | JsonPrimitive::Integer
        )
    }
}

impl std::fmt::Display for JsonPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
