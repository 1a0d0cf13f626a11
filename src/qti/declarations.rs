//! Response, outcome and template declarations, and response processing

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Cardinality of a declared variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// One value
    #[default]
    Single,
    /// Unordered set of values
    Multiple,
    /// Ordered list of values
    Ordered,
    /// Record of named fields
    Record,
}

impl Cardinality {
    /// Parse from the attribute value
    pub fn from_attribute(value: &str) -> Result<Self> {
        match value {
            "single" => Ok(Cardinality::Single),
            "multiple" => Ok(Cardinality::Multiple),
            "ordered" => Ok(Cardinality::Ordered),
            "record" => Ok(Cardinality::Record),
            _ => Err(Error::Document(format!("Invalid cardinality '{}'", value))),
        }
    }

    /// Get as attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Multiple => "multiple",
            Cardinality::Ordered => "ordered",
            Cardinality::Record => "record",
        }
    }
}

/// Base type of a declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    /// `identifier`
    Identifier,
    /// `string`
    String,
    /// `directedPair`
    DirectedPair,
    /// `pair`
    Pair,
    /// `integer`
    Integer,
    /// `float`
    Float,
    /// `boolean`
    Boolean,
    /// Any other base type, kept by name
    Other(String),
}

impl BaseType {
    /// Parse from the attribute value
    pub fn from_attribute(value: &str) -> Self {
        match value {
            "identifier" => BaseType::Identifier,
            "string" => BaseType::String,
            "directedPair" => BaseType::DirectedPair,
            "pair" => BaseType::Pair,
            "integer" => BaseType::Integer,
            "float" => BaseType::Float,
            "boolean" => BaseType::Boolean,
            other => BaseType::Other(other.to_string()),
        }
    }

    /// Get as attribute value
    pub fn as_str(&self) -> &str {
        match self {
            BaseType::Identifier => "identifier",
            BaseType::String => "string",
            BaseType::DirectedPair => "directedPair",
            BaseType::Pair => "pair",
            BaseType::Integer => "integer",
            BaseType::Float => "float",
            BaseType::Boolean => "boolean",
            BaseType::Other(name) => name,
        }
    }
}

/// A typed `<value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseValue {
    /// Identifier value
    Identifier(String),
    /// String value
    String(String),
    /// Directed pair `source target`
    DirectedPair {
        /// Source identifier (the choice)
        first: String,
        /// Target identifier (the gap or slot)
        second: String,
    },
    /// Undirected pair
    Pair(String, String),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(Decimal),
    /// Boolean value
    Boolean(bool),
    /// Value of a base type the mapper does not interpret
    Other(String),
}

impl ResponseValue {
    /// Parse a value according to its base type
    pub fn parse(base_type: Option<&BaseType>, text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = |kind: &str| Error::Document(format!("Invalid {} value '{}'", kind, text));

        Ok(match base_type {
            Some(BaseType::Identifier) => ResponseValue::Identifier(text.to_string()),
            Some(BaseType::String) => ResponseValue::String(text.to_string()),
            Some(BaseType::DirectedPair) => {
                let (first, second) = split_pair(text).ok_or_else(|| invalid("directedPair"))?;
                ResponseValue::DirectedPair { first, second }
            }
            Some(BaseType::Pair) => {
                let (a, b) = split_pair(text).ok_or_else(|| invalid("pair"))?;
                ResponseValue::Pair(a, b)
            }
            Some(BaseType::Integer) => {
                ResponseValue::Integer(text.parse().map_err(|_| invalid("integer"))?)
            }
            Some(BaseType::Float) => ResponseValue::Float(parse_decimal(text)?),
            Some(BaseType::Boolean) => match text {
                "true" | "1" => ResponseValue::Boolean(true),
                "false" | "0" => ResponseValue::Boolean(false),
                _ => return Err(invalid("boolean")),
            },
            Some(BaseType::Other(_)) | None => ResponseValue::Other(text.to_string()),
        })
    }

    /// Text form of the value, as an author would have written it
    pub fn as_text(&self) -> String {
        match self {
            ResponseValue::Identifier(s) | ResponseValue::String(s) | ResponseValue::Other(s) => {
                s.clone()
            }
            ResponseValue::DirectedPair { first, second } => format!("{} {}", first, second),
            ResponseValue::Pair(a, b) => format!("{} {}", a, b),
            ResponseValue::Integer(i) => i.to_string(),
            ResponseValue::Float(d) => d.to_string(),
            ResponseValue::Boolean(b) => b.to_string(),
        }
    }
}

fn split_pair(text: &str) -> Option<(String, String)> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

/// Parse a QTI float into a decimal
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let text = text.trim();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::Document(format!("Invalid float value '{}'", text)))
}

/// `<mapEntry>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Key the response is compared against
    pub map_key: String,
    /// Score for the key
    pub mapped_value: Decimal,
    /// Whether string keys compare case sensitively
    pub case_sensitive: bool,
}

/// `<mapping>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mapping {
    /// Score of values without an entry
    pub default_value: Decimal,
    /// Lower bound of the total
    pub lower_bound: Option<Decimal>,
    /// Upper bound of the total
    pub upper_bound: Option<Decimal>,
    /// Entries in document order
    pub entries: Vec<MapEntry>,
}

/// `<responseDeclaration>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDeclaration {
    /// Identifier, matched against an interaction's response identifier
    pub identifier: String,
    /// Cardinality
    pub cardinality: Cardinality,
    /// Base type
    pub base_type: Option<BaseType>,
    /// Values of `<correctResponse>` in declaration order
    pub correct_response: Vec<ResponseValue>,
    /// Point mapping, if declared
    pub mapping: Option<Mapping>,
}

impl ResponseDeclaration {
    /// Create a declaration without correct values
    pub fn new(identifier: impl Into<String>, cardinality: Cardinality, base_type: BaseType) -> Self {
        Self {
            identifier: identifier.into(),
            cardinality,
            base_type: Some(base_type),
            correct_response: Vec::new(),
            mapping: None,
        }
    }

    /// Add a correct value
    pub fn with_correct_value(mut self, value: ResponseValue) -> Self {
        self.correct_response.push(value);
        self
    }

    /// Check if any correct value is declared
    pub fn has_correct_response(&self) -> bool {
        !self.correct_response.is_empty()
    }
}

/// `<outcomeDeclaration>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeDeclaration {
    /// Identifier
    pub identifier: String,
    /// Cardinality
    pub cardinality: Cardinality,
    /// Base type
    pub base_type: Option<BaseType>,
    /// Raw `<defaultValue>` values
    pub default_values: Vec<String>,
}

/// `<templateDeclaration>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDeclaration {
    /// Identifier
    pub identifier: String,
    /// Cardinality
    pub cardinality: Cardinality,
    /// Base type
    pub base_type: Option<BaseType>,
}

/// `<templateProcessing>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateProcessing {
    /// Element names of the template rules
    pub rules: Vec<String>,
}

/// `<responseProcessing>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseProcessing {
    /// `template` attribute
    pub template: Option<String>,
    /// `templateLocation` attribute
    pub template_location: Option<String>,
    /// Element names of inline response rules
    pub response_rules: Vec<String>,
}

impl ResponseProcessing {
    /// Response processing that only references a template
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }
}
