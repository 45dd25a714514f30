use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Sentinel string used by the persisted report format for inapplicable
/// check results.
pub const NOT_APPLICABLE_SENTINEL: &str = "None";

/// Outcome of a check that may be structurally inapplicable to a dataset.
///
/// Evaluators emit `NotApplicable` when a check's precondition does not
/// hold (no region column, no numeric columns, ...). The scoring engine
/// reads this same value to collapse the check's weight to zero, so the
/// evaluator and the scorer can never disagree about applicability.
///
/// The persisted report format represents inapplicability as the literal
/// JSON string `"None"`; that projection happens only here, at the serde
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding<T> {
    Applicable(T),
    NotApplicable,
}

impl<T> Finding<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Finding::Applicable(_))
    }

    pub fn as_applicable(&self) -> Option<&T> {
        match self {
            Finding::Applicable(value) => Some(value),
            Finding::NotApplicable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Finding<U> {
        match self {
            Finding::Applicable(value) => Finding::Applicable(f(value)),
            Finding::NotApplicable => Finding::NotApplicable,
        }
    }
}

impl<T: Copy> Finding<T> {
    pub fn value_or(&self, fallback: T) -> T {
        match self {
            Finding::Applicable(value) => *value,
            Finding::NotApplicable => fallback,
        }
    }
}

impl<T> Default for Finding<T> {
    fn default() -> Self {
        Finding::NotApplicable
    }
}

impl<T> From<Option<T>> for Finding<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Finding::Applicable(value),
            None => Finding::NotApplicable,
        }
    }
}

impl<T: Serialize> Serialize for Finding<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Finding::Applicable(value) => value.serialize(serializer),
            Finding::NotApplicable => serializer.serialize_str(NOT_APPLICABLE_SENTINEL),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Finding<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Value(T),
            Sentinel(String),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Value(value) => Ok(Finding::Applicable(value)),
            Repr::Sentinel(text) if text == NOT_APPLICABLE_SENTINEL => Ok(Finding::NotApplicable),
            Repr::Sentinel(text) => Err(de::Error::custom(format!(
                "expected a value or the sentinel \"{NOT_APPLICABLE_SENTINEL}\", got \"{text}\""
            ))),
        }
    }
}
