//! Declarative form description shared by the create and edit forms
//!
//! A form is a list of [`FieldSpec`]s; the UI renders inputs from it and
//! [`crate::validation`] checks drafts against it. The two forms differ only
//! in their configuration, never in markup.

use std::fmt;

/// A formation field that can be edited through a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Nom,
    DateFormation,
    NombreUtilisations,
    Thematique,
    Prix,
    ImageUrl,
}

impl FieldName {
    /// Wire name of the field, also used as the input `name`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nom => "nom",
            Self::DateFormation => "dateFormation",
            Self::NombreUtilisations => "nombreUtilisations",
            Self::Thematique => "thematique",
            Self::Prix => "prix",
            Self::ImageUrl => "imageUrl",
        }
    }

    /// Human label of the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nom => "Nom de la formation",
            Self::DateFormation => "Date de la formation",
            Self::NombreUtilisations => "Nombre d'utilisations",
            Self::Thematique => "Thématique",
            Self::Prix => "Prix",
            Self::ImageUrl => "URL de l'image",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a field is entered and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Integer,
    Decimal,
    Url,
}

impl InputKind {
    /// HTML `type` attribute for the input.
    #[must_use]
    pub const fn html_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Integer | Self::Decimal => "number",
            Self::Url => "url",
        }
    }

    /// HTML `step` attribute, if any.
    #[must_use]
    pub const fn step(self) -> Option<&'static str> {
        match self {
            Self::Integer => Some("1"),
            Self::Decimal => Some("0.01"),
            Self::Text | Self::Date | Self::Url => None,
        }
    }
}

/// Pattern a field value must match, checked before completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// `^https?://.*\.(png|jpg|jpeg|gif|bmp|svg)$`
    ImageUrl,
}

/// One input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
    pub pattern: Option<FieldPattern>,
}

impl FieldSpec {
    const fn required(name: FieldName, kind: InputKind, placeholder: &'static str) -> Self {
        Self {
            name,
            kind,
            placeholder,
            required: true,
            pattern: None,
        }
    }

    const fn with_pattern(mut self, pattern: FieldPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.name.label()
    }
}

const FORMATION_FIELDS: [FieldSpec; 6] = [
    FieldSpec::required(FieldName::Nom, InputKind::Text, "Nom de la formation"),
    FieldSpec::required(FieldName::DateFormation, InputKind::Date, ""),
    FieldSpec::required(
        FieldName::NombreUtilisations,
        InputKind::Integer,
        "Nombre d'utilisations",
    ),
    FieldSpec::required(FieldName::Thematique, InputKind::Text, "Thématique"),
    FieldSpec::required(FieldName::Prix, InputKind::Decimal, "Prix"),
    FieldSpec::required(
        FieldName::ImageUrl,
        InputKind::Url,
        "https://exemple.com/image.png",
    )
    .with_pattern(FieldPattern::ImageUrl),
];

/// Which form a schema configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit,
}

/// A form configuration: its kind, labels, and the fields it collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    kind: FormKind,
    fields: &'static [FieldSpec],
}

impl FormSchema {
    /// Schema of the standalone "add a formation" form.
    #[must_use]
    pub const fn create() -> Self {
        Self {
            kind: FormKind::Create,
            fields: &FORMATION_FIELDS,
        }
    }

    /// Schema of the edit form opened from a formation card.
    #[must_use]
    pub const fn edit() -> Self {
        Self {
            kind: FormKind::Edit,
            fields: &FORMATION_FIELDS,
        }
    }

    /// Schema over an arbitrary field list.
    #[must_use]
    pub const fn new(kind: FormKind, fields: &'static [FieldSpec]) -> Self {
        Self { kind, fields }
    }

    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Spec of a field, if this form collects it.
    #[must_use]
    pub fn field(&self, name: FieldName) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.kind {
            FormKind::Create => "Ajouter une formation",
            FormKind::Edit => "Modifier la formation",
        }
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.kind {
            FormKind::Create => "Ajouter la formation",
            FormKind::Edit => "Modifier",
        }
    }

    /// Submit button label while the request is pending.
    #[must_use]
    pub const fn busy_label(&self) -> &'static str {
        match self.kind {
            FormKind::Create => "Ajout en cours...",
            FormKind::Edit => "Modification en cours...",
        }
    }
}
