//! Noyau — évaluation d'une suite de membres.
//!
//! Somme de termes, chaque terme étant une chaîne de `*` / `/` :
//!
//!   [signe] nombre { (*|/) nombre } { (+|-) nombre { (*|/) nombre } }
//!
//! Un seul balayage gauche -> droite : boucle additive externe, boucle
//! multiplicative interne. Pas de pile d'opérateurs : deux niveaux de
//! précédence, pas de parenthèses, la structure des boucles suffit.
//!
//! Échec immédiat : la première règle violée arrête tout, aucun résultat
//! partiel n'est rendu.

use tracing::{debug, trace};

use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::{Jeton, Op};
use super::mixte::NombreMixte;
use super::ratio::Ratio;

/// Évalue une suite de membres (instantané immuable) en un ratio exact.
pub fn evaluer(jetons: &[Jeton]) -> Resultat<Ratio> {
    if jetons.is_empty() {
        return Err(ErreurCalc::ExpressionVide);
    }

    let mut somme = Ratio::ZERO;

    // vrai seulement pour le tout premier terme : il peut commencer sans signe
    let mut nombre_sans_signe_admis = true;
    let mut i: usize = 0;

    while i < jetons.len() {
        // 1) début de terme : nombre nu, ou signe + nombre
        let (negatif, mut produit) = match &jetons[i] {
            Jeton::Nombre(m) => {
                if !nombre_sans_signe_admis {
                    return Err(ErreurCalc::OperateurAttendu { position: i });
                }
                (false, m.en_ratio()?)
            }
            Jeton::Operateur(op) => {
                let negatif = match op {
                    Op::Plus => false,
                    Op::Moins => true,
                    Op::Fois | Op::Divise => {
                        return Err(ErreurCalc::OperateurInattendu {
                            position: i,
                            op: *op,
                        })
                    }
                };
                i += 1;
                (negatif, nombre_a(jetons, i)?.en_ratio()?)
            }
        };
        i += 1;

        // 2) chaîne multiplicative ; `+`, `-`, un nombre ou la fin l'arrêtent
        while let Some(Jeton::Operateur(op)) = jetons.get(i) {
            if !op.est_multiplicatif() {
                break;
            }
            let op = *op;

            i += 1;
            let operande = nombre_a(jetons, i)?.en_ratio()?;

            produit = if op == Op::Fois {
                produit.multiplier(operande)?
            } else {
                produit.diviser(operande)?
            };
            trace!(%op, %operande, %produit, "pas multiplicatif");

            i += 1;
        }

        // 3) accumulation du terme signé
        somme = if negatif {
            somme.soustraire(produit)?
        } else {
            somme.ajouter(produit)?
        };
        debug!(negatif, %produit, %somme, "terme accumulé");

        nombre_sans_signe_admis = false;
    }

    debug!(%somme, membres = jetons.len(), "expression évaluée");
    Ok(somme)
}

/// Évalue puis rend la forme mixte réduite.
pub fn evaluer_en_mixte(jetons: &[Jeton]) -> Resultat<NombreMixte> {
    evaluer(jetons).map(|r| r.en_mixte())
}

/// Le membre `i` doit exister et être un nombre.
fn nombre_a(jetons: &[Jeton], i: usize) -> Resultat<&NombreMixte> {
    match jetons.get(i) {
        Some(Jeton::Nombre(m)) => Ok(m),
        _ => Err(ErreurCalc::NombreAttendu { position: i }),
    }
}
