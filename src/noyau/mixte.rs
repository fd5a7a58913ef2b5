// src/noyau/mixte.rs
//
// Nombre mixte (forme d'affichage) : entier + fraction, un seul signe.
//
// Le signe est stocké à part et les trois parties sont des magnitudes :
// l'état “entier ET numérateur négatifs” n'est donc pas représentable.
// Les accesseurs `entier_signe` / `numerateur_signe` redonnent la forme
// signée classique (signe sur l'entier s'il est non nul, sinon sur le
// numérateur).

use std::fmt;

use super::erreurs::{DefautRatio, ErreurCalc, Resultat};
use super::ratio::Ratio;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Signe {
    #[default]
    Positif,
    Negatif,
}

#[derive(Clone, Debug)]
pub struct NombreMixte {
    pub signe: Signe,
    pub entier: u32,
    pub numerateur: u32,
    pub denominateur: u32,

    // Marqueur UI : “ne pas éditer via l'interface”. N'empêche rien côté code.
    lecture_seule: bool,
}

impl Default for NombreMixte {
    fn default() -> Self {
        Self::depuis_magnitudes(Signe::Positif, 0, 0, 1)
    }
}

impl NombreMixte {
    /// Valeur nulle `0 0/1`, éditable.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Saisie utilisateur (toujours positive).
    pub fn positif(entier: u32, numerateur: u32, denominateur: u32) -> Self {
        Self::depuis_magnitudes(Signe::Positif, entier, numerateur, denominateur)
    }

    /// Zéro n'a pas de signe : une magnitude nulle repasse en Positif.
    pub fn depuis_magnitudes(
        signe: Signe,
        entier: u32,
        numerateur: u32,
        denominateur: u32,
    ) -> Self {
        let signe = if entier == 0 && numerateur == 0 {
            Signe::Positif
        } else {
            signe
        };

        Self {
            signe,
            entier,
            numerateur,
            denominateur,
            lecture_seule: false,
        }
    }

    /// Copie marquée lecture seule (présentation d'un résultat calculé).
    pub fn en_lecture_seule(&self) -> Self {
        Self {
            lecture_seule: true,
            ..self.clone()
        }
    }

    pub fn est_lecture_seule(&self) -> bool {
        self.lecture_seule
    }

    pub fn est_negatif(&self) -> bool {
        self.signe == Signe::Negatif
    }

    pub fn est_zero(&self) -> bool {
        self.entier == 0 && self.numerateur == 0
    }

    /// Partie entière signée : porte le signe dès qu'elle est non nulle.
    pub fn entier_signe(&self) -> i64 {
        let e = i64::from(self.entier);
        if self.est_negatif() && self.entier != 0 {
            -e
        } else {
            e
        }
    }

    /// Numérateur signé : ne porte le signe que si la partie entière est nulle.
    pub fn numerateur_signe(&self) -> i64 {
        let n = i64::from(self.numerateur);
        if self.est_negatif() && self.entier == 0 {
            -n
        } else {
            n
        }
    }

    /// entier*dénominateur + numérateur, signe appliqué, dénominateur inchangé.
    pub fn en_ratio(&self) -> Resultat<Ratio> {
        if self.denominateur == 0 {
            return Err(DefautRatio::DenominateurNul.into());
        }

        // (2^32-1)^2 + 2^32-1 < 2^64 : pas de débordement en u64
        let magnitude =
            u64::from(self.entier) * u64::from(self.denominateur) + u64::from(self.numerateur);
        let magnitude = i64::try_from(magnitude).map_err(|_| ErreurCalc::Depassement)?;

        let num = if self.est_negatif() {
            -magnitude
        } else {
            magnitude
        };

        Ratio::normaliser(num, i64::from(self.denominateur))
    }
}

/// Égalité de forme (signe + trois parties) ; le marqueur UI est ignoré.
impl PartialEq for NombreMixte {
    fn eq(&self, other: &Self) -> bool {
        self.signe == other.signe
            && self.entier == other.entier
            && self.numerateur == other.numerateur
            && self.denominateur == other.denominateur
    }
}

impl Eq for NombreMixte {}

/// `0`, `7`, `3/4`, `5 3/4`, `-11/12`, `-1 1/12`.
///
/// Un dénominateur nul reste toujours écrit (`3 0/0`, `0/0`) : le texte
/// relu par `lire_jetons` doit être refusé de la même façon.
impl fmt::Display for NombreMixte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.denominateur;

        if self.est_zero() && d != 0 {
            return write!(f, "0");
        }
        if self.est_negatif() {
            write!(f, "-")?;
        }

        match (self.entier, self.numerateur) {
            (e, 0) if d != 0 => write!(f, "{e}"),
            (0, n) => write!(f, "{n}/{d}"),
            (e, n) => write!(f, "{e} {n}/{d}"),
        }
    }
}
