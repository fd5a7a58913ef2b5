// src/noyau/jetons.rs
//
// Membres d'une expression : nombre mixte OU opérateur (somme fermée).
// + lecture texte “5 3/4 - 6 2/3” -> jetons, et retour en texte.

use std::fmt;

use super::erreurs::{ErreurCalc, Resultat};
use super::mixte::NombreMixte;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    /// Ordre d'affichage dans l'éditeur.
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
        }
    }

    /// Accepte aussi les symboles typographiques (×, ÷, −).
    pub fn depuis_symbole(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' | '−' => Some(Op::Moins),
            '*' | '×' => Some(Op::Fois),
            '/' | '÷' => Some(Op::Divise),
            _ => None,
        }
    }

    /// `*` et `/` : lient plus fort que `+` et `-`.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Op::Fois | Op::Divise)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(NombreMixte),
    Operateur(Op),
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(m) => write!(f, "{m}"),
            Jeton::Operateur(op) => write!(f, "{op}"),
        }
    }
}

/* ------------------------ Lecture texte ------------------------ */

/// Lit une expression texte.
///
/// Nombres :
/// - `7`      (entier)
/// - `3/4`    (fraction collée, sans espaces autour de '/')
/// - `5 3/4`  (mixte : entier, espace(s), fraction collée)
///
/// `3 / 4` (avec espaces) reste une division. `2 3` donne deux nombres :
/// c'est l'évaluation qui refusera la suite.
pub fn lire_jetons(s: &str) -> Resultat<Vec<Jeton>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_symbole(c) {
            out.push(Jeton::Operateur(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let (a, j) = lire_entier(&chars, i)?;

            // fraction collée a/b
            if fraction_collee(&chars, j) {
                let (b, k) = lire_entier(&chars, j + 1)?;
                out.push(Jeton::Nombre(NombreMixte::positif(0, a, b)));
                i = k;
                continue;
            }

            // forme mixte : a␣n/d
            let mut k = j;
            while k < chars.len() && chars[k].is_whitespace() {
                k += 1;
            }
            if k > j && k < chars.len() && chars[k].is_ascii_digit() {
                let (n, l) = lire_entier(&chars, k)?;
                if fraction_collee(&chars, l) {
                    let (d, m) = lire_entier(&chars, l + 1)?;
                    out.push(Jeton::Nombre(NombreMixte::positif(a, n, d)));
                    i = m;
                    continue;
                }
            }

            out.push(Jeton::Nombre(NombreMixte::positif(a, 0, 1)));
            i = j;
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu {
            position: i,
            caractere: c,
        });
    }

    Ok(out)
}

/// '/' immédiatement suivi d'un chiffre.
fn fraction_collee(chars: &[char], i: usize) -> bool {
    i + 1 < chars.len() && chars[i] == '/' && chars[i + 1].is_ascii_digit()
}

/// Suite de chiffres à partir de `debut` -> (valeur, position suivante).
fn lire_entier(chars: &[char], debut: usize) -> Resultat<(u32, usize)> {
    let mut fin = debut;
    while fin < chars.len() && chars[fin].is_ascii_digit() {
        fin += 1;
    }
    let txt: String = chars[debut..fin].iter().collect();
    // que des chiffres : seul un dépassement peut échouer
    let v = txt.parse::<u32>().map_err(|_| ErreurCalc::Depassement)?;
    Ok((v, fin))
}

/// Texte d'une suite de jetons (relisible par `lire_jetons`).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
