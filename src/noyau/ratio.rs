// src/noyau/ratio.rs
//
// Ratio exact : numérateur signé / dénominateur strictement positif.
//
// Contrats :
// - dénominateur > 0 toujours (le signe vit dans le numérateur) ;
// - PAS de réduction imposée entre deux opérations (réduction à la demande) ;
// - produits croisés calculés en i64, jamais de débordement silencieux :
//   si le résultat ne tient pas en i32 même après réduction => Depassement.

use std::fmt;

use num_rational::Ratio as RatioReduit;
use num_traits::ToPrimitive;

use super::erreurs::{DefautRatio, ErreurCalc, Resultat};
use super::mixte::{NombreMixte, Signe};

#[derive(Clone, Copy, Debug)]
pub struct Ratio {
    numerateur: i32,
    denominateur: i32,
}

impl Ratio {
    pub const ZERO: Ratio = Ratio::entier(0);

    /// Ratio entier n/1.
    pub const fn entier(n: i32) -> Ratio {
        Ratio {
            numerateur: n,
            denominateur: 1,
        }
    }

    /// Construit depuis (entier, numérateur, dénominateur).
    ///
    /// Au plus une des deux parties peut être négative ; celle qui l'est
    /// donne son signe à toute la valeur : (-1, 1, 2) vaut -3/2 et
    /// (0, -1, 2) vaut -1/2.
    #[allow(dead_code)] // l'interface passe par `NombreMixte::en_ratio`
    pub fn depuis_parties(entier: i32, numerateur: i32, denominateur: i32) -> Resultat<Ratio> {
        if denominateur == 0 {
            return Err(DefautRatio::DenominateurNul.into());
        }
        if denominateur < 0 {
            return Err(DefautRatio::DenominateurNegatif.into());
        }
        if entier < 0 && numerateur < 0 {
            return Err(DefautRatio::DeuxPartiesNegatives.into());
        }

        let e = i64::from(entier);
        let n = i64::from(numerateur);
        let d = i64::from(denominateur);

        let num = if entier < 0 {
            e * d - n
        } else if numerateur < 0 {
            -e * d + n
        } else {
            e * d + n
        };

        Self::normaliser(num, d)
    }

    /// numérateur / dénominateur, sans partie entière.
    #[allow(dead_code)]
    pub fn nouveau(numerateur: i32, denominateur: i32) -> Resultat<Ratio> {
        Self::depuis_parties(0, numerateur, denominateur)
    }

    #[allow(dead_code)]
    pub fn numerateur(&self) -> i32 {
        self.numerateur
    }

    #[allow(dead_code)]
    pub fn denominateur(&self) -> i32 {
        self.denominateur
    }

    pub fn est_zero(&self) -> bool {
        self.numerateur == 0
    }

    pub fn est_negatif(&self) -> bool {
        self.numerateur < 0
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn ajouter(self, autre: Ratio) -> Resultat<Ratio> {
        let (a, b) = (self.larges(), autre.larges());
        Self::normaliser(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    pub fn soustraire(self, autre: Ratio) -> Resultat<Ratio> {
        let (a, b) = (self.larges(), autre.larges());
        Self::normaliser(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    pub fn multiplier(self, autre: Ratio) -> Resultat<Ratio> {
        let (a, b) = (self.larges(), autre.larges());
        Self::normaliser(a.0 * b.0, a.1 * b.1)
    }

    pub fn diviser(self, autre: Ratio) -> Resultat<Ratio> {
        if autre.est_zero() {
            return Err(ErreurCalc::DivisionParZero);
        }

        let (a, b) = (self.larges(), autre.larges());
        let mut num = a.0 * b.1;
        let mut den = a.1 * b.0;

        // diviseur négatif : le signe repasse au numérateur
        if den < 0 {
            num = -num;
            den = -den;
        }

        Self::normaliser(num, den)
    }

    /* ------------------------ Forme mixte ------------------------ */

    /// Forme mixte réduite.
    ///
    /// Placement du signe : sur le numérateur si la partie entière est nulle,
    /// sinon sur la partie entière (voir `NombreMixte::entier_signe`).
    pub fn en_mixte(&self) -> NombreMixte {
        // Ratio::new réduit par le pgcd ; dénominateur déjà > 0
        let r = RatioReduit::new(self.numerateur, self.denominateur);
        let magnitude = r.numer().unsigned_abs();
        let den = r.denom().unsigned_abs();

        let signe = if self.est_negatif() {
            Signe::Negatif
        } else {
            Signe::Positif
        };

        NombreMixte::depuis_magnitudes(signe, magnitude / den, magnitude % den, den)
    }

    /* ------------------------ Interne ------------------------ */

    fn larges(&self) -> (i64, i64) {
        (i64::from(self.numerateur), i64::from(self.denominateur))
    }

    /// Ramène un couple i64 (den > 0) en i32.
    /// Réduit seulement si la forme brute ne tient pas.
    pub(crate) fn normaliser(num: i64, den: i64) -> Resultat<Ratio> {
        debug_assert!(den > 0, "dénominateur non positif: {den}");

        if let (Some(n), Some(d)) = (num.to_i32(), den.to_i32()) {
            return Ok(Ratio {
                numerateur: n,
                denominateur: d,
            });
        }

        let r = RatioReduit::new(num, den);
        match (r.numer().to_i32(), r.denom().to_i32()) {
            (Some(n), Some(d)) => Ok(Ratio {
                numerateur: n,
                denominateur: d,
            }),
            _ => Err(ErreurCalc::Depassement),
        }
    }
}

/// Égalité de VALEUR (produits croisés), pas de champs : 2/4 == 1/2.
impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.larges(), other.larges());
        a.0 * b.1 == b.0 * a.1
    }
}

impl Eq for Ratio {}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ZERO
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominateur == 1 {
            write!(f, "{}", self.numerateur)
        } else {
            write!(f, "{}/{}", self.numerateur, self.denominateur)
        }
    }
}
