use crate::error::SerpsRequestError;

use log::debug;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

const DEFAULT_SEARCH_ENGINES: [&str; 4] = ["bing", "google", "yahoo", "yandex"];

/// Search Engine Results Page request.
///
/// Collects and validates the parameters of a SERPS lookup before the
/// payload is handed to an HTTP client. Fields left unset are omitted
/// from the serialized payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SerpsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    search_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    universal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Map<String, Value>>,

    // internal, never part of the request body
    #[serde(skip)]
    supported_search_engines: Vec<String>,
}

impl Default for SerpsRequest {
    fn default() -> Self {
        SerpsRequest {
            search_engine: None,
            region: None,
            town: None,
            search_type: None,
            language: None,
            max_results: None,
            phrase: None,
            universal: None,
            strategy: None,
            parameters: None,
            supported_search_engines: DEFAULT_SEARCH_ENGINES
                .iter()
                .map(|engine| engine.to_string())
                .collect(),
        }
    }
}

impl SerpsRequest {
    pub fn new() -> Self {
        SerpsRequest::default()
    }

    pub fn from_map(data: Map<String, Value>) -> Result<Self, SerpsRequestError> {
        let mut request = SerpsRequest::new();
        request.populate(data)?;
        Ok(request)
    }

    /// Applies every entry of the map through [`SerpsRequest::populate_field`],
    /// in the map's iteration order. Fails fast on the first bad entry;
    /// entries applied before the failure stay applied.
    pub fn populate(&mut self, data: Map<String, Value>) -> Result<&mut Self, SerpsRequestError> {
        debug!("populating {} fields", data.len());

        for (field, value) in data {
            self.populate_field(&field, value)?;
        }

        Ok(self)
    }

    /// Routes a single named field to its setter. Unrecognized names fail
    /// with [`SerpsRequestError::UnknownField`]; values whose JSON shape
    /// does not match the field fail with [`SerpsRequestError::InvalidArgument`].
    pub fn populate_field(
        &mut self,
        field: &str,
        value: Value,
    ) -> Result<&mut Self, SerpsRequestError> {
        match field {
            "search_engine" => self.set_search_engine(expect_string(field, value)?),
            "region" => Ok(self.set_region(expect_string(field, value)?)),
            "town" => Ok(self.set_town(expect_string(field, value)?)),
            "search_type" => Ok(self.set_search_type(expect_string(field, value)?)),
            "language" => Ok(self.set_language(expect_string(field, value)?)),
            "max_results" => Ok(self.set_max_results(expect_integer(field, value)?)),
            "phrase" => Ok(self.set_phrase(expect_string(field, value)?)),
            "universal" => Ok(self.set_universal(expect_bool(field, value)?)),
            "strategy" => Ok(self.set_strategy(expect_string(field, value)?)),
            "parameters" => self.set_parameters(value),
            _ => Err(SerpsRequestError::UnknownField {
                field: field.to_string(),
            }),
        }
    }

    /// Fails unless the engine is in the current allow-list.
    pub fn set_search_engine(
        &mut self,
        search_engine: impl Into<String>,
    ) -> Result<&mut Self, SerpsRequestError> {
        let search_engine = search_engine.into();

        if !self.supported_search_engines.contains(&search_engine) {
            return Err(SerpsRequestError::InvalidValue {
                field: "search_engine".to_string(),
                value: search_engine,
            });
        }

        self.search_engine = Some(search_engine);
        Ok(self)
    }

    pub fn set_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.region = Some(region.into());
        self
    }

    pub fn set_town(&mut self, town: impl Into<String>) -> &mut Self {
        self.town = Some(town.into());
        self
    }

    pub fn set_search_type(&mut self, search_type: impl Into<String>) -> &mut Self {
        self.search_type = Some(search_type.into());
        self
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = Some(language.into());
        self
    }

    pub fn set_max_results(&mut self, max_results: u64) -> &mut Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn set_phrase(&mut self, phrase: impl Into<String>) -> &mut Self {
        self.phrase = Some(phrase.into());
        self
    }

    pub fn set_universal(&mut self, universal: bool) -> &mut Self {
        self.universal = Some(universal);
        self
    }

    pub fn set_strategy(&mut self, strategy: impl Into<String>) -> &mut Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Strategy-specific configuration. Must be a key/value mapping; its
    /// contents are opaque and passed through unchanged.
    pub fn set_parameters(&mut self, parameters: Value) -> Result<&mut Self, SerpsRequestError> {
        match parameters {
            Value::Object(parameters) => {
                self.parameters = Some(parameters);
                Ok(self)
            }
            _ => Err(SerpsRequestError::InvalidArgument {
                field: "parameters".to_string(),
                expected: "a key/value mapping",
            }),
        }
    }

    /// Replaces the allow-list consulted by [`SerpsRequest::set_search_engine`].
    /// An already accepted engine is not re-validated.
    pub fn set_supported_search_engines(
        &mut self,
        supported_search_engines: Vec<String>,
    ) -> &mut Self {
        self.supported_search_engines = supported_search_engines;
        self
    }

    pub fn supported_search_engines(&self) -> &[String] {
        &self.supported_search_engines
    }

    /// The request body: exactly the fields that have been set, keyed by
    /// their declared names. Pure read of current state, safe to call
    /// repeatedly.
    pub fn to_payload(&self) -> Value {
        json!(self)
    }
}

impl fmt::Display for SerpsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_payload())
    }
}

fn expect_string(field: &str, value: Value) -> Result<String, SerpsRequestError> {
    match value {
        Value::String(value) => Ok(value),
        _ => Err(SerpsRequestError::InvalidArgument {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

fn expect_integer(field: &str, value: Value) -> Result<u64, SerpsRequestError> {
    match value.as_u64() {
        Some(value) => Ok(value),
        None => Err(SerpsRequestError::InvalidArgument {
            field: field.to_string(),
            expected: "a non-negative integer",
        }),
    }
}

fn expect_bool(field: &str, value: Value) -> Result<bool, SerpsRequestError> {
    match value {
        Value::Bool(value) => Ok(value),
        _ => Err(SerpsRequestError::InvalidArgument {
            field: field.to_string(),
            expected: "a boolean",
        }),
    }
}
