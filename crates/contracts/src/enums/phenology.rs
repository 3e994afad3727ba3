use serde_json::Value;

use crate::shared::number_format::format_number;

/// Фенология PFT: сезонное поведение растительного типа
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phenology {
    Evergreen,
    Deciduous,
    Grass,
    /// Code outside the lookup table, kept in its raw textual form
    Other(String),
    /// The record has no `phenology` field; shown as `undefined`
    #[default]
    Missing,
}

impl Phenology {
    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Phenology::Evergreen),
            "2" => Some(Phenology::Deciduous),
            "3" => Some(Phenology::Grass),
            _ => None,
        }
    }

    /// Decode the raw `phenology` field of a record.
    ///
    /// Numbers and strings are matched by their textual spelling, so `2`
    /// and `"2"` both resolve to [`Phenology::Deciduous`].
    pub fn from_json(value: Option<&Value>) -> Self {
        let raw = match value {
            None => return Phenology::Missing,
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => format_number(n),
            Some(other) => other.to_string(),
        };
        Self::from_code(&raw).unwrap_or(Phenology::Other(raw))
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &str {
        match self {
            Phenology::Evergreen => "Evergreen",
            Phenology::Deciduous => "Deciduous",
            Phenology::Grass => "Grass",
            Phenology::Other(raw) => raw,
            Phenology::Missing => "undefined",
        }
    }
}

impl std::fmt::Display for Phenology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
