//! Noyau : évaluation (pipeline complet)
//!
//! canon -> jetons -> analyse (registre + état) -> contrôle de finitude
//!
//! Deux portes d’entrée :
//! - eval_valeur     : évaluation PURE (l’état est lu, jamais écrit).
//!   C’est elle que M+ / M- utilisent pour chiffrer l’entrée.
//! - eval_expression : le chemin "=", soit eval_valeur puis dépôt de la
//!   dernière réponse (ANS). Seule cette porte écrit dans l’état.

use super::analyse;
use super::canon::canon_texte;
use super::erreur::ErreurEval;
use super::etat::EtatEval;
use super::jetons::tokenize;

/// Évalue sans toucher à l’état. Erreur classée sinon.
pub fn eval_valeur(texte: &str, etat: &EtatEval) -> Result<f64, ErreurEval> {
    let canonique = canon_texte(texte);
    if canonique.is_empty() {
        return Err(ErreurEval::Syntaxe("entrée vide".into()));
    }

    let jetons = tokenize(&canonique)?;
    let valeur = analyse::evaluer(&jetons, etat)?;

    // inf / NaN ne sortent jamais du moteur (ex. 10^1000, pow(-2, 0.5))
    if !valeur.is_finite() {
        return Err(ErreurEval::Arithmetique("résultat non fini".into()));
    }
    Ok(valeur)
}

/// Chemin "=" : évalue, puis dépose la valeur comme dernière réponse.
/// En erreur, l’état reste strictement inchangé.
pub fn eval_expression(texte: &str, etat: &mut EtatEval) -> Result<f64, ErreurEval> {
    let valeur = eval_valeur(texte, etat)?;
    etat.deposer_reponse(valeur);
    Ok(valeur)
}
