//! Draft: the raw text a user has typed into a form

use std::collections::BTreeMap;

use crate::display::format_number;
use crate::model::{Formation, formation_date};
use crate::schema::FieldName;

/// Text values of a form, keyed by field. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationDraft {
    values: BTreeMap<FieldName, String>,
}

impl FormationDraft {
    /// Creates an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with a record's current values.
    #[must_use]
    pub fn from_formation(formation: &Formation) -> Self {
        Self::new()
            .with(FieldName::Nom, formation.nom.clone())
            .with(
                FieldName::DateFormation,
                formation
                    .date_formation
                    .format(formation_date::FORMAT)
                    .to_string(),
            )
            .with(
                FieldName::NombreUtilisations,
                formation.nombre_utilisations.to_string(),
            )
            .with(FieldName::Thematique, formation.thematique.clone())
            .with(FieldName::Prix, format_number(formation.prix))
            .with(
                FieldName::ImageUrl,
                formation.image_url.clone().unwrap_or_default(),
            )
    }

    /// Builder pattern: set a field
    #[must_use]
    pub fn with(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Current value of a field, empty if never set.
    #[must_use]
    pub fn get(&self, name: FieldName) -> &str {
        self.values.get(&name).map_or("", String::as_str)
    }

    /// Value with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self, name: FieldName) -> &str {
        self.get(name).trim()
    }

    #[must_use]
    pub fn is_blank(&self, name: FieldName) -> bool {
        self.trimmed(name).is_empty()
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}
