//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l'expression en cours d'édition (liste de membres), le
//! dernier résultat, l'erreur, la saisie texte, et offrir les opérations
//! d'édition (ajout opérateur + opérande, suppression, AC).
//!
//! Contrats :
//! - L'évaluation est faite par le noyau via `Collaborateur` : ici on fournit
//!   seulement les membres et on reçoit erreur OU résultat.
//! - Sur erreur, on CONSERVE le dernier résultat affiché.
//! - Garde-fou : nombre de membres borné.

use crate::noyau::{lire_jetons, Collaborateur, Jeton, NombreMixte, Op, Signe};

/// Garde-fou : taille max de l'expression (membres).
pub const MEMBRES_MAX: usize = 256;

/// Opérande ajouté avec `+` / `-` : neutre additif.
const OPERANDE_ADDITIF: (u32, u32, u32) = (0, 0, 1);

/// Opérande ajouté avec `*` / `/` : neutre multiplicatif.
const OPERANDE_MULTIPLICATIF: (u32, u32, u32) = (1, 0, 1);

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- expression ---
    pub membres: Vec<Jeton>,

    // --- sorties ---
    pub resultat: NombreMixte, // toujours lecture seule
    pub erreur: String,

    // --- saisie texte (remplace la liste de membres) ---
    pub entree: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        // Expression de démonstration : 5 3/4 - 6 2/3 = -11/12
        Self {
            membres: vec![
                Jeton::Nombre(NombreMixte::positif(5, 3, 4)),
                Jeton::Operateur(Op::Moins),
                Jeton::Nombre(NombreMixte::positif(6, 2, 3)),
            ],
            resultat: NombreMixte::depuis_magnitudes(Signe::Negatif, 0, 11, 12)
                .en_lecture_seule(),
            erreur: String::new(),
            entree: String::new(),
            focus_entree: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Édition ------------------------ */

    /// Ajoute `op` suivi de son opérande neutre (0 pour + -, 1 pour * /).
    /// Refusé (false) si l'expression est pleine.
    pub fn ajouter_operation(&mut self, op: Op) -> bool {
        if self.membres.len() + 2 > MEMBRES_MAX {
            self.set_erreur(format!("expression trop longue ({MEMBRES_MAX} membres max)"));
            return false;
        }

        let (e, n, d) = if op.est_multiplicatif() {
            OPERANDE_MULTIPLICATIF
        } else {
            OPERANDE_ADDITIF
        };

        self.membres.push(Jeton::Operateur(op));
        self.membres.push(Jeton::Nombre(NombreMixte::positif(e, n, d)));
        true
    }

    /// Retire un membre (index hors bornes : rien).
    pub fn supprimer(&mut self, index: usize) {
        if index < self.membres.len() {
            self.membres.remove(index);
        }
    }

    /// AC : expression vide, résultat nul, plus d'erreur ni de saisie.
    pub fn reset_total(&mut self) {
        self.membres.clear();
        self.resultat = NombreMixte::zero().en_lecture_seule();
        self.erreur.clear();
        self.entree.clear();
        self.focus_entree = true;
    }

    /// C : efface seulement la saisie texte.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Remplace les membres par la lecture de la saisie texte.
    /// En cas d'erreur de lecture, les membres restent intacts.
    pub fn importer_entree(&mut self) -> bool {
        match lire_jetons(self.entree.trim()) {
            Ok(jetons) if jetons.len() > MEMBRES_MAX => {
                self.set_erreur(format!("expression trop longue ({MEMBRES_MAX} membres max)"));
                false
            }
            Ok(jetons) => {
                self.membres = jetons;
                self.erreur.clear();
                true
            }
            Err(e) => {
                self.set_erreur(e.to_string());
                false
            }
        }
    }

    /* ------------------------ Sorties ------------------------ */

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: NombreMixte) {
        self.erreur.clear();
        self.resultat = valeur.en_lecture_seule();
        self.focus_entree = true;
    }
}

impl Collaborateur for AppCalc {
    fn jetons(&self) -> Vec<Jeton> {
        self.membres.clone()
    }

    fn signaler_erreur(&mut self, message: &str) {
        self.set_erreur(message);
    }

    fn afficher_resultat(&mut self, valeur: NombreMixte) {
        self.set_resultat(valeur);
    }
}
