//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - suites bien formées : comparaison avec un oracle BigRational
//! - suites quelconques : Ok ou erreur de la liste blanche, jamais de panique

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreurs::ErreurCalc;
use super::eval::{evaluer, evaluer_en_mixte};
use super::jetons::{format_jetons, lire_jetons, Jeton, Op};
use super::mixte::NombreMixte;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_nombre(rng: &mut Rng) -> NombreMixte {
    // petits nombres ; zéro assez fréquent pour provoquer des divisions par zéro
    if rng.pick(10) == 0 {
        return NombreMixte::zero();
    }
    let e = rng.pick(8);
    let d = 1 + rng.pick(9);
    let n = rng.pick(d + 2); // fraction parfois impropre : doit marcher aussi
    NombreMixte::positif(e, n, d)
}

fn gen_op(rng: &mut Rng) -> Op {
    Op::TOUS[rng.pick(4) as usize]
}

/// Suite bien formée : [signe?] n (op n)*
fn gen_bien_forme(rng: &mut Rng, termes: usize) -> Vec<Jeton> {
    let mut out = Vec::new();
    match rng.pick(3) {
        0 => out.push(Jeton::Operateur(Op::Plus)),
        1 => out.push(Jeton::Operateur(Op::Moins)),
        _ => {}
    }
    out.push(Jeton::Nombre(gen_nombre(rng)));
    for _ in 1..termes {
        out.push(Jeton::Operateur(gen_op(rng)));
        out.push(Jeton::Nombre(gen_nombre(rng)));
    }
    out
}

/// Suite quelconque (souvent mal formée).
fn gen_quelconque(rng: &mut Rng, longueur: usize) -> Vec<Jeton> {
    (0..longueur)
        .map(|_| {
            if rng.pick(2) == 0 {
                Jeton::Nombre(gen_nombre(rng))
            } else {
                Jeton::Operateur(gen_op(rng))
            }
        })
        .collect()
}

/* ------------------------ Oracle BigRational ------------------------ */

fn big(m: &NombreMixte) -> BigRational {
    let e = BigRational::from_integer(BigInt::from(m.entier));
    e + BigRational::new(BigInt::from(m.numerateur), BigInt::from(m.denominateur))
}

/// Somme de produits sur une suite BIEN FORMÉE. None si division par zéro.
fn oracle(jetons: &[Jeton]) -> Option<BigRational> {
    let mut somme = BigRational::zero();
    let mut signe_negatif = false;
    let mut produit: Option<BigRational> = None;
    let mut op_en_attente: Option<Op> = None;

    for j in jetons {
        match j {
            Jeton::Nombre(m) => {
                let v = big(m);
                produit = Some(match (produit.take(), op_en_attente.take()) {
                    (Some(p), Some(Op::Fois)) => p * v,
                    (Some(p), Some(Op::Divise)) => {
                        if v.is_zero() {
                            return None;
                        }
                        p / v
                    }
                    _ => v,
                });
            }
            Jeton::Operateur(op) if op.est_multiplicatif() => op_en_attente = Some(*op),
            Jeton::Operateur(op) => {
                if let Some(p) = produit.take() {
                    somme = if signe_negatif { somme - p } else { somme + p };
                }
                signe_negatif = *op == Op::Moins;
            }
        }
    }
    if let Some(p) = produit {
        somme = if signe_negatif { somme - p } else { somme + p };
    }
    Some(somme)
}

fn is_erreur_attendue(e: &ErreurCalc) -> bool {
    matches!(
        e,
        ErreurCalc::ExpressionVide
            | ErreurCalc::OperateurAttendu { .. }
            | ErreurCalc::NombreAttendu { .. }
            | ErreurCalc::OperateurInattendu { .. }
            | ErreurCalc::DivisionParZero
            | ErreurCalc::Depassement
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_contre_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let termes = 1 + rng.pick(5) as usize;
        let jetons = gen_bien_forme(&mut rng, termes);

        match (evaluer(&jetons), oracle(&jetons)) {
            (Ok(r), Some(attendu)) => {
                let obtenu =
                    BigRational::new(BigInt::from(r.numerateur()), BigInt::from(r.denominateur()));
                assert_eq!(obtenu, attendu, "jetons={}", format_jetons(&jetons));

                let m = r.en_mixte();
                assert_eq!(m.en_ratio().unwrap(), r);
                seen_ok += 1;
            }
            (Err(ErreurCalc::DivisionParZero), None) => seen_div0 += 1,
            (Err(ErreurCalc::Depassement), _) => {}
            (obtenu, attendu) => panic!(
                "désaccord: jetons={} obtenu={obtenu:?} oracle={attendu:?}",
                format_jetons(&jetons)
            ),
        }
    }

    // on veut voir un mix des deux, sinon le fuzz ne “balaye” rien
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_quelconque_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = rng.pick(8) as usize;
        let jetons = gen_quelconque(&mut rng, longueur);

        match evaluer_en_mixte(&jetons) {
            Ok(m) => assert!(m.denominateur > 0),
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: jetons={} err={e}",
                    format_jetons(&jetons)
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_err > 50, "fuzz trop “sage”: {seen_err} erreurs");
}

#[test]
fn fuzz_safe_texte_relu() {
    // format_jetons -> lire_jetons -> même évaluation
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let jetons = gen_bien_forme(&mut rng, 4);
        let relus = lire_jetons(&format_jetons(&jetons)).unwrap();
        assert_eq!(evaluer(&relus), evaluer(&jetons));
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1/2 + 1/2 + ... (800 fois) = 400, dénominateurs qui grossissent sans réduction
    let mut jetons = vec![Jeton::Nombre(NombreMixte::positif(0, 1, 2))];
    for _ in 1..800 {
        jetons.push(Jeton::Operateur(Op::Plus));
        jetons.push(Jeton::Nombre(NombreMixte::positif(0, 1, 2)));
    }

    let m = evaluer_en_mixte(&jetons).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(m.to_string(), "400");
}
