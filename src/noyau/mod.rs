//! Noyau de calcul (moteur d’évaluation f64)
//!
//! Organisation interne :
//! - canon.rs    : réécriture du texte saisi (** ×  ÷, espaces)
//! - jetons.rs   : tokenisation
//! - analyse.rs  : descente récursive + évaluation immédiate
//! - registre.rs : table fermée des constantes et fonctions
//! - trig.rs     : trig sensible au mode d’angle (DEG/RAD)
//! - etat.rs     : état de session (mode, mémoire, ANS)
//! - erreur.rs   : erreurs classées (syntaxe / identifiant / arithmétique)
//! - eval.rs     : façade texte -> valeur, dépôt de ANS sur "="
//! - format.rs   : rendu décimal compact, 12 chiffres significatifs
//! - edition.rs  : opérations d’édition du tampon (DEL, C, ±)

pub mod analyse;
pub mod canon;
pub mod edition;
pub mod erreur;
pub mod etat;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod registre;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use etat::{EtatEval, ModeAngle};
pub use eval::{eval_expression, eval_valeur};
pub use format::formater;
