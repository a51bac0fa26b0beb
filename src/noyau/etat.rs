// src/noyau/etat.rs
//
// État de session du moteur : mode d’angle + mémoire + dernière réponse.
//
// Contrats :
// - Aucune variable globale : tout passe par un EtatEval possédé par l’appelant.
// - Une évaluation en erreur ne modifie JAMAIS cet état (vérifié par les tests).
// - Seul le chemin “=” (eval_expression) dépose la dernière réponse ;
//   M+ / M- évaluent sans la toucher.

use super::format::formater;

/// Unité des arguments trig directs et des résultats trig inverses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Étiquette courte pour l’UI ("DEG" / "RAD").
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatEval {
    pub mode_angle: ModeAngle,
    pub memoire: f64,
    pub derniere_reponse: Option<f64>,
}

impl Default for EtatEval {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Degres,
            memoire: 0.0,
            derniere_reponse: None,
        }
    }
}

impl EtatEval {
    /* ------------------------ Mode d’angle ------------------------ */

    pub fn basculer_mode(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
    }

    /* ------------------------ Mémoire (MC / MR / M+ / M-) ------------------------ */

    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// Valeur du registre, rendue comme un résultat (ré-injectable dans l’entrée).
    pub fn memoire_rappel(&self) -> String {
        formater(self.memoire)
    }

    /// M+ : l’opérande absent vaut 0 (entrée vide => registre inchangé).
    pub fn memoire_ajouter(&mut self, valeur: Option<f64>) {
        self.memoire += valeur.unwrap_or(0.0);
    }

    /// M- : même convention que M+.
    pub fn memoire_soustraire(&mut self, valeur: Option<f64>) {
        self.memoire -= valeur.unwrap_or(0.0);
    }

    /* ------------------------ Dernière réponse (ANS) ------------------------ */

    pub fn deposer_reponse(&mut self, valeur: f64) {
        self.derniere_reponse = Some(valeur);
    }

    /// ANS formatée, ou None tant qu’aucun “=” n’a abouti.
    pub fn reponse_formatee(&self) -> Option<String> {
        self.derniere_reponse.map(formater)
    }
}
