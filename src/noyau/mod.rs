//! Noyau exact — nombres mixtes
//!
//! Organisation interne :
//! - erreurs.rs : une variante par règle violée (+ messages)
//! - ratio.rs   : ratio exact i32 (dénominateur > 0), arithmétique contrôlée
//! - mixte.rs   : forme mixte (signe + magnitudes), affichage
//! - jetons.rs  : membres (nombre | opérateur) + lecture texte
//! - eval.rs    : balayage somme-de-produits
//! - pont.rs    : contrat avec l'interface (instantané, erreur, résultat)

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod mixte;
pub mod pont;
pub mod ratio;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (ce dont l'interface a besoin)
pub use jetons::{format_jetons, lire_jetons, Jeton, Op};
pub use mixte::{NombreMixte, Signe};
pub use pont::{calculer, Collaborateur};
