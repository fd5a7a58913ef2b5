//! Propriétés algébriques du noyau (proptest).
//!
//! Oracle : BigRational (num-bigint), sans limite de taille.
//! Les égalités se font par VALEUR (produits croisés), jamais par champs.
//! Plages bornées : les produits croisés restent loin de la limite i32.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};
use proptest::prelude::*;

use super::mixte::{NombreMixte, Signe};
use super::ratio::Ratio;

fn ratio() -> impl Strategy<Value = Ratio> {
    (-2000i32..2000, 1i32..200).prop_map(|(n, d)| Ratio::nouveau(n, d).unwrap())
}

fn ratio_non_nul() -> impl Strategy<Value = Ratio> {
    ratio().prop_filter("diviseur non nul", |r| !r.est_zero())
}

fn oracle(r: &Ratio) -> BigRational {
    BigRational::new(BigInt::from(r.numerateur()), BigInt::from(r.denominateur()))
}

fn oracle_mixte(m: &NombreMixte) -> BigRational {
    let e = BigRational::from_integer(BigInt::from(m.entier));
    let f = BigRational::new(BigInt::from(m.numerateur), BigInt::from(m.denominateur));
    let v = e + f;
    if m.est_negatif() {
        -v
    } else {
        v
    }
}

proptest! {
    #[test]
    fn aller_retour_mixte(e in 0u32..200, n in 0u32..200, d in 1u32..200) {
        let m = NombreMixte::positif(e, n, d);
        let r = m.en_ratio().unwrap();
        let m1 = r.en_mixte();

        // même valeur
        prop_assert_eq!(m1.en_ratio().unwrap(), r);
        // forme normale : fraction propre et réduite
        prop_assert!(m1.numerateur < m1.denominateur);
        if m1.numerateur > 0 {
            let f = BigRational::new(BigInt::from(m1.numerateur), BigInt::from(m1.denominateur));
            prop_assert_eq!(f.denom(), &BigInt::from(m1.denominateur));
        } else {
            prop_assert_eq!(m1.denominateur, 1);
        }
        // idempotence
        prop_assert_eq!(m1.en_ratio().unwrap().en_mixte(), m1);
    }

    #[test]
    fn mixte_fidele_a_l_oracle(a in ratio()) {
        let m = a.en_mixte();
        prop_assert_eq!(oracle_mixte(&m), oracle(&a));

        // placement du signe : jamais deux parties signées négatives
        prop_assert!(!(m.entier_signe() < 0 && m.numerateur_signe() < 0));
        if a.est_negatif() {
            prop_assert_eq!(m.signe, Signe::Negatif);
        }
    }

    #[test]
    fn addition_commutative_associative(a in ratio(), b in ratio(), c in ratio()) {
        prop_assert_eq!(a.ajouter(b).unwrap(), b.ajouter(a).unwrap());

        let g = a.ajouter(b).and_then(|ab| ab.ajouter(c));
        let d = b.ajouter(c).and_then(|bc| a.ajouter(bc));
        prop_assume!(g.is_ok() && d.is_ok());
        prop_assert_eq!(g.unwrap(), d.unwrap());
    }

    #[test]
    fn multiplication_commutative_associative(a in ratio(), b in ratio(), c in ratio()) {
        prop_assert_eq!(a.multiplier(b).unwrap(), b.multiplier(a).unwrap());

        let g = a.multiplier(b).and_then(|ab| ab.multiplier(c));
        let d = b.multiplier(c).and_then(|bc| a.multiplier(bc));
        prop_assume!(g.is_ok() && d.is_ok());
        prop_assert_eq!(g.unwrap(), d.unwrap());
    }

    #[test]
    fn division_inverse_de_multiplication(a in ratio(), b in ratio_non_nul()) {
        let q = a.diviser(b).unwrap();
        prop_assert!(q.denominateur() > 0);
        prop_assert_eq!(q.multiplier(b).unwrap(), a);
    }

    #[test]
    fn operations_fideles_a_l_oracle(a in ratio(), b in ratio_non_nul()) {
        let (oa, ob) = (oracle(&a), oracle(&b));

        prop_assert_eq!(oracle(&a.ajouter(b).unwrap()), &oa + &ob);
        prop_assert_eq!(oracle(&a.soustraire(b).unwrap()), &oa - &ob);
        prop_assert_eq!(oracle(&a.multiplier(b).unwrap()), &oa * &ob);
        prop_assert_eq!(oracle(&a.diviser(b).unwrap()), &oa / &ob);
    }

    #[test]
    fn denominateur_toujours_positif(a in ratio(), b in ratio_non_nul()) {
        for r in [
            a.ajouter(b).unwrap(),
            a.soustraire(b).unwrap(),
            a.multiplier(b).unwrap(),
            a.diviser(b).unwrap(),
        ] {
            prop_assert!(r.denominateur() > 0);
            prop_assert_eq!(oracle(&r).is_negative(), r.est_negatif());
        }
    }

    #[test]
    fn division_par_soi_meme(a in ratio_non_nul()) {
        prop_assert_eq!(oracle(&a.diviser(a).unwrap()), BigRational::one());
    }
}
