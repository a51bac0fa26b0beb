//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le tampon de saisie, l’état du moteur (mode d’angle,
//! mémoire, ANS) et la bannière d’erreur, et offrir les actions des
//! boutons sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : toute évaluation passe par le noyau.
//! - "=" est le seul chemin qui dépose ANS ; M+ / M- évaluent sans y toucher.
//! - Une erreur reste affichée DELAI_ERREUR secondes puis l’écran se vide ;
//!   toute frappe avant l’échéance la dissipe sans perdre le tampon.

use crate::noyau::{edition, eval_expression, eval_valeur, formater, EtatEval};

/// Durée d’affichage d’une erreur avant remise à zéro de l’écran (secondes).
const DELAI_ERREUR: f64 = 0.9;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- moteur (mode d’angle, mémoire, ANS) ---
    pub etat: EtatEval,

    // --- bannière d’erreur ---
    pub erreur: String,
    pub erreur_depuis: Option<f64>, // horloge egui (secondes) à l’instant de l’erreur

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            etat: EtatEval::default(),
            erreur: String::new(),
            erreur_depuis: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Horloge ------------------------ */

    /// À appeler à chaque trame. Une erreur affichée depuis plus de
    /// DELAI_ERREUR secondes vide l’écran (entrée comprise).
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(depuis) = self.erreur_depuis {
            if maintenant - depuis >= DELAI_ERREUR {
                self.entree.clear();
                self.dissiper_erreur();
            }
        }
    }

    fn signaler_erreur(&mut self, msg: impl Into<String>, maintenant: f64) {
        self.erreur = msg.into();
        self.erreur_depuis = Some(maintenant);
        self.focus_entree = true;
    }

    /// Retire la bannière et annule le délai. La vue l’appelle aussi quand
    /// la frappe passe directement par le TextEdit.
    pub fn dissiper_erreur(&mut self) {
        self.erreur.clear();
        self.erreur_depuis = None;
    }

    /* ------------------------ Saisie ------------------------ */

    /// Insertion brute ("7", "+", "sin(", …).
    pub fn inserer(&mut self, txt: &str) {
        self.dissiper_erreur();
        self.entree.push_str(txt);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.dissiper_erreur();
        self.entree = edition::retour_arriere(&self.entree);
        self.focus_entree = true;
    }

    /// C : efface l’opérande en cours (l’opérateur devant reste).
    pub fn effacer_operande(&mut self) {
        self.dissiper_erreur();
        self.entree = edition::effacer_operande(&self.entree);
        self.focus_entree = true;
    }

    /// ± : négation du dernier opérande.
    pub fn changer_signe(&mut self) {
        self.dissiper_erreur();
        self.entree = edition::changer_signe(&self.entree);
        self.focus_entree = true;
    }

    /// AC : écran vidé ; mémoire, ANS et mode d’angle survivent.
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.dissiper_erreur();
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue le tampon, dépose ANS, réaffiche le résultat formaté.
    /// Le résultat reste éditable ("12" puis "+3" prolonge le calcul).
    pub fn appui_egal(&mut self, maintenant: f64) {
        self.focus_entree = true;
        if self.entree.trim().is_empty() {
            return;
        }
        match eval_expression(&self.entree, &mut self.etat) {
            Ok(v) => {
                self.entree = formater(v);
                self.dissiper_erreur();
            }
            Err(e) => self.signaler_erreur(e.to_string(), maintenant),
        }
    }

    /// Valeur du tampon pour M+ / M- : évaluation PURE (ANS intact).
    /// Tampon vide => None (le registre restera inchangé).
    fn valeur_courante(&mut self, maintenant: f64) -> Result<Option<f64>, ()> {
        if self.entree.trim().is_empty() {
            return Ok(None);
        }
        match eval_valeur(&self.entree, &self.etat) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                self.signaler_erreur(e.to_string(), maintenant);
                Err(())
            }
        }
    }

    /* ------------------------ Mode d’angle ------------------------ */

    pub fn basculer_mode(&mut self) {
        self.etat.basculer_mode();
        self.focus_entree = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_effacer(&mut self) {
        self.etat.memoire_effacer();
        self.focus_entree = true;
    }

    /// MR : insère le registre formaté dans l’entrée.
    pub fn memoire_rappel(&mut self) {
        let txt = self.etat.memoire_rappel();
        self.inserer(&txt);
    }

    /// M+ : ajoute la valeur du tampon au registre. ANS n’est pas touché.
    pub fn memoire_ajouter(&mut self, maintenant: f64) {
        if let Ok(v) = self.valeur_courante(maintenant) {
            self.etat.memoire_ajouter(v);
        }
        self.focus_entree = true;
    }

    /// M- : retranche la valeur du tampon du registre. ANS n’est pas touché.
    pub fn memoire_soustraire(&mut self, maintenant: f64) {
        if let Ok(v) = self.valeur_courante(maintenant) {
            self.etat.memoire_soustraire(v);
        }
        self.focus_entree = true;
    }

    /* ------------------------ Dernière réponse ------------------------ */

    /// ANS : insère la dernière réponse formatée (rien tant qu’aucun "=").
    pub fn inserer_reponse(&mut self) {
        if let Some(txt) = self.etat.reponse_formatee() {
            self.inserer(&txt);
        }
        self.focus_entree = true;
    }
}

/* ------------------------ Tests ------------------------ */
