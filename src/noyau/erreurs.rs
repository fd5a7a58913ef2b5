// src/noyau/erreurs.rs
//
// Erreurs du noyau : une variante par règle violée, un message par variante.
// Le noyau ne présente rien lui-même ; l'appelant affiche `to_string()`.

use std::fmt;

use super::jetons::Op;

/// Pourquoi un triplet (entier, numérateur, dénominateur) est refusé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefautRatio {
    DenominateurNul,
    DenominateurNegatif,
    /// Entier ET numérateur négatifs en même temps.
    DeuxPartiesNegatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErreurCalc {
    /// Opérande mal formé.
    RatioInvalide(DefautRatio),
    /// Aucun membre dans l'expression.
    ExpressionVide,
    /// Deux nombres consécutifs : un `+` ou `-` était attendu à `position`.
    OperateurAttendu { position: usize },
    /// Fin d'expression ou opérateur là où un nombre était attendu.
    NombreAttendu { position: usize },
    /// `*` ou `/` en position de signe de terme.
    OperateurInattendu { position: usize, op: Op },
    DivisionParZero,
    /// Résultat hors de la plage i32.
    Depassement,
    /// Lecture texte : caractère hors grammaire.
    CaractereInattendu { position: usize, caractere: char },
}

impl fmt::Display for ErreurCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCalc::RatioInvalide(DefautRatio::DenominateurNul) => {
                write!(f, "le dénominateur ne doit pas être nul")
            }
            ErreurCalc::RatioInvalide(DefautRatio::DenominateurNegatif) => {
                write!(f, "le dénominateur doit être positif")
            }
            ErreurCalc::RatioInvalide(DefautRatio::DeuxPartiesNegatives) => write!(
                f,
                "la partie entière et le numérateur ne peuvent pas être négatifs tous les deux"
            ),
            ErreurCalc::ExpressionVide => write!(f, "l'expression ne doit pas être vide"),
            ErreurCalc::OperateurAttendu { position } => {
                write!(f, "un plus ou un moins est attendu (membre {})", position + 1)
            }
            ErreurCalc::NombreAttendu { position } => write!(
                f,
                "l'expression se termine de façon inattendue : nombre attendu (membre {})",
                position + 1
            ),
            ErreurCalc::OperateurInattendu { position, op } => write!(
                f,
                "seuls l'addition et la soustraction sont admises ici, pas '{op}' (membre {})",
                position + 1
            ),
            ErreurCalc::DivisionParZero => write!(f, "division par zéro"),
            ErreurCalc::Depassement => {
                write!(f, "dépassement : le résultat sort de la plage représentable")
            }
            ErreurCalc::CaractereInattendu {
                position,
                caractere,
            } => write!(f, "caractère inattendu: '{caractere}' (position {position})"),
        }
    }
}

impl std::error::Error for ErreurCalc {}

impl From<DefautRatio> for ErreurCalc {
    fn from(d: DefautRatio) -> Self {
        ErreurCalc::RatioInvalide(d)
    }
}

/// Alias de résultat pour tout le noyau.
pub type Resultat<T> = Result<T, ErreurCalc>;
