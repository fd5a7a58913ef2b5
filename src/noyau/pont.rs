// src/noyau/pont.rs
//
// Pont noyau <-> interface.
//
// Le noyau ne connaît de l'extérieur que trois choses :
// - d'où viennent les membres de l'expression ;
// - où signaler une erreur (message lisible) ;
// - où déposer un résultat.
//
// Contrats :
// - instantané : les membres sont copiés AVANT l'évaluation ;
// - erreur : `signaler_erreur` appelé une seule fois, rien d'autre ;
// - succès : `afficher_resultat` appelé une seule fois (forme réduite, lecture seule).

use tracing::warn;

use super::erreurs::Resultat;
use super::eval::evaluer_en_mixte;
use super::jetons::Jeton;
use super::mixte::NombreMixte;

pub trait Collaborateur {
    /// État courant de l'expression (possédé et modifié par l'éditeur).
    fn jetons(&self) -> Vec<Jeton>;

    fn signaler_erreur(&mut self, message: &str);

    fn afficher_resultat(&mut self, valeur: NombreMixte);
}

/// Une évaluation complète pilotée par le collaborateur.
/// Le résultat est aussi rendu à l'appelant.
pub fn calculer<C: Collaborateur + ?Sized>(collab: &mut C) -> Resultat<NombreMixte> {
    let instantane = collab.jetons();

    match evaluer_en_mixte(&instantane) {
        Ok(mixte) => {
            let valeur = mixte.en_lecture_seule();
            collab.afficher_resultat(valeur.clone());
            Ok(valeur)
        }
        Err(e) => {
            warn!(erreur = %e, membres = instantane.len(), "évaluation refusée");
            collab.signaler_erreur(&e.to_string());
            Err(e)
        }
    }
}
