// src/noyau/erreur.rs
//
// Erreurs du moteur, classées en trois familles :
// - Syntaxe            : tokenisation / grammaire (entrée vide, parenthèses, caractère inconnu…)
// - IdentifiantInconnu : nom hors registre, ou nom du registre employé avec la mauvaise arité
// - Arithmetique       : calcul impossible (division par zéro, domaine, résultat non fini…)
//
// Le message porté par la variante est le texte affiché tel quel dans l’UI.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    Syntaxe(String),
    IdentifiantInconnu(String),
    Arithmetique(String),
}

impl ErreurEval {
    /// Texte du message, sans la classe.
    pub fn message(&self) -> &str {
        match self {
            ErreurEval::Syntaxe(m)
            | ErreurEval::IdentifiantInconnu(m)
            | ErreurEval::Arithmetique(m) => m,
        }
    }
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
