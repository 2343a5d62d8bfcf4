//! Validation boundary between the service's JSON text and typed results

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::error::SchemaError;

use super::result::{GlobalLink, TranslationPayload, MAX_INTENSITY, MIN_INTENSITY};

/// Validate a raw JSON payload returned by the service.
///
/// Required string fields must be present, strings, and non-blank. Optional
/// string fields that are missing, `null` or blank are treated as absent.
/// A global link with any missing sub-field is dropped as a whole.
/// Out-of-range intensity is clamped into `[1, 10]`.
pub fn validate_payload(raw: &str) -> Result<TranslationPayload, SchemaError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
    let obj = value.as_object().ok_or(SchemaError::NotAnObject)?;

    Ok(TranslationPayload {
        meaning: required_str(obj, "meaning")?,
        source_native_script: required_str(obj, "sourceNativeScript")?,
        source_phonetic_script: required_str(obj, "sourcePhoneticScript")?,
        target_script: required_str(obj, "targetScript")?,
        target_phonetic: required_str(obj, "targetPhonetic")?,
        cultural_nuance: required_str(obj, "culturalNuance")?,
        cultural_insight_target: required_str(obj, "culturalInsightTarget")?,
        input_language_summary: required_str(obj, "inputLanguageSummary")?,
        intensity: intensity(obj)?,
        equivalent: required_str(obj, "equivalent")?,
        detected_context: optional_str(obj, "detectedContext")?,
        transcription: optional_str(obj, "transcription")?,
        sagor_global_link: global_link(obj),
        sus_insight: optional_str(obj, "susInsight")?,
    })
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, SchemaError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(SchemaError::MissingField(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(SchemaError::EmptyField(field)),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err(SchemaError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, SchemaError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(SchemaError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn intensity(obj: &Map<String, Value>) -> Result<u8, SchemaError> {
    const FIELD: &str = "intensity";

    let number = match obj.get(FIELD) {
        None | Some(Value::Null) => return Err(SchemaError::MissingField(FIELD)),
        Some(Value::Number(n)) => n,
        Some(_) => {
            return Err(SchemaError::WrongType {
                field: FIELD,
                expected: "an integer",
            })
        }
    };

    // Models occasionally emit integral floats such as 7.0
    let raw = match (number.as_i64(), number.as_f64()) {
        (Some(i), _) => i,
        (None, Some(f)) if f.fract() == 0.0 && f.is_finite() => f as i64,
        _ => {
            return Err(SchemaError::WrongType {
                field: FIELD,
                expected: "an integer",
            })
        }
    };

    let clamped = raw.clamp(i64::from(MIN_INTENSITY), i64::from(MAX_INTENSITY));
    if clamped != raw {
        warn!(intensity = raw, clamped, "intensity out of range, clamping");
    }
    Ok(clamped as u8)
}

fn global_link(obj: &Map<String, Value>) -> Option<GlobalLink> {
    let link = obj.get("sagorGlobalLink")?.as_object()?;
    let field = |name: &str| {
        link.get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(GlobalLink {
        language: field("language")?,
        phrase: field("phrase")?,
        context: field("context")?,
    })
}
