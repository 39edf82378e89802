//! User-facing strings.
//!
//! Failure messages are static: they never include the underlying error
//! detail, which goes to the log instead.

use crate::schema::FieldName;

pub const APP_TITLE: &str = "Ma Plateforme";
pub const NAV_HOME: &str = "Accueil";
pub const NAV_ADD: &str = "Ajouter Formation";

pub const LIST_TITLE: &str = "Formations";
pub const LOADING: &str = "Chargement...";
pub const LOAD_FAILED: &str = "Erreur de chargement des formations";
pub const EMPTY_LIST: &str = "Aucune formation pour le moment";

pub const SHOW_DETAILS: &str = "Voir détails";
pub const HIDE_DETAILS: &str = "Masquer";
pub const EDIT: &str = "Modifier";
pub const DELETE: &str = "Supprimer";
pub const CANCEL: &str = "Annuler";

pub const CONFIRM_DELETE: &str = "Êtes-vous sûr de vouloir supprimer cette formation ?";
pub const DELETE_FAILED: &str = "Erreur lors de la suppression de la formation";
pub const UPDATE_FAILED: &str = "Erreur lors de la mise à jour de la formation";
pub const CREATE_FAILED: &str = "Erreur lors de l'ajout de la formation";
pub const CREATE_SUCCEEDED: &str = "Formation ajoutée avec succès!";

pub const ALL_FIELDS_REQUIRED: &str = "Tous les champs sont requis";
pub const INVALID_IMAGE_URL: &str =
    "Veuillez entrer une URL d'image valide (http(s), png, jpg, jpeg, gif, bmp ou svg)";
pub const INVALID_DATE: &str = "La date de la formation est invalide";

pub const LABEL_DATE: &str = "Date de la formation";
pub const LABEL_USES: &str = "Nombre d'utilisations";
pub const LABEL_THEME: &str = "Thématique";
pub const LABEL_PRICE: &str = "Prix";
pub const LABEL_CREATED: &str = "Date d'ajout";
pub const LABEL_UPDATED: &str = "Dernière modification";

pub const NOT_FOUND_TITLE: &str = "404 - Page introuvable";
pub const NOT_FOUND_BODY: &str = "La page demandée n'existe pas.";

/// Message for a numeric field whose value does not parse.
#[must_use]
pub fn invalid_number(field: FieldName) -> String {
    format!("Le champ « {} » doit être un nombre", field.label())
}
