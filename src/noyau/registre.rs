// src/noyau/registre.rs
//
// Registre FERMÉ des noms résolvables : constantes + fonctions.
// -------------------------------------------------------------
// Tout identifiant absent de cette table est rejeté (IdentifiantInconnu),
// y compris import / os / sys / __builtins__ et n’importe quelle “variable” :
// il n’existe AUCUN mécanisme de repli vers autre chose que cette table.
//
// Signatures uniformes :
// - unaire  : fn(&EtatEval, f64) -> Result<f64, ErreurEval>
//   (l’état ne sert qu’aux six fonctions trig ; les autres l’ignorent)
// - binaire : fn(f64, f64) -> Result<f64, ErreurEval>

use std::f64::consts;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurEval;
use super::etat::EtatEval;
use super::trig;

pub type FnUnaire = fn(&EtatEval, f64) -> Result<f64, ErreurEval>;
pub type FnBinaire = fn(f64, f64) -> Result<f64, ErreurEval>;

#[derive(Clone, Copy, Debug)]
pub enum Def {
    Constante(f64),
    Unaire(FnUnaire),
    Binaire(FnBinaire),
}

impl Def {
    /// Nombre d’arguments exigé à l’appel (0 = constante, jamais appelée).
    pub fn arite(&self) -> usize {
        match self {
            Def::Constante(_) => 0,
            Def::Unaire(_) => 1,
            Def::Binaire(_) => 2,
        }
    }
}

/// Résolution d’un nom (déjà passé en minuscules par la tokenisation).
pub fn chercher(nom: &str) -> Option<Def> {
    let def = match nom {
        // --- constantes ---
        "pi" => Def::Constante(consts::PI),
        "e" => Def::Constante(consts::E),

        // --- trig (sensible au mode d’angle) ---
        "sin" => Def::Unaire(trig::sin_mode),
        "cos" => Def::Unaire(trig::cos_mode),
        "tan" => Def::Unaire(trig::tan_mode),
        "asin" => Def::Unaire(trig::asin_mode),
        "acos" => Def::Unaire(trig::acos_mode),
        "atan" => Def::Unaire(trig::atan_mode),

        // --- hyperboliques (mode ignoré) ---
        "sinh" => Def::Unaire(f_sinh),
        "cosh" => Def::Unaire(f_cosh),
        "tanh" => Def::Unaire(f_tanh),

        // --- logarithmes ("log" est l’alias historique de log10) ---
        "ln" => Def::Unaire(f_ln),
        "log" | "log10" => Def::Unaire(f_log10),
        "log2" => Def::Unaire(f_log2),

        // --- puissances / racines / divers ---
        "sqrt" => Def::Unaire(f_sqrt),
        "exp" => Def::Unaire(f_exp),
        "fact" | "factorial" => Def::Unaire(f_fact),
        "inv" => Def::Unaire(f_inv),
        "pow10" => Def::Unaire(f_pow10),
        "sqr" => Def::Unaire(f_sqr),
        "abs" => Def::Unaire(f_abs),

        "pow" => Def::Binaire(f_pow),

        _ => return None,
    };
    Some(def)
}

/* ------------------------ Fonctions sans condition de domaine ------------------------ */

fn f_sinh(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x.sinh())
}

fn f_cosh(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x.cosh())
}

fn f_tanh(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x.tanh())
}

fn f_exp(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x.exp())
}

fn f_pow10(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(10f64.powf(x))
}

fn f_sqr(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x * x)
}

fn f_abs(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(x.abs())
}

fn f_pow(x: f64, y: f64) -> Result<f64, ErreurEval> {
    Ok(x.powf(y))
}

/* ------------------------ Fonctions à domaine contrôlé ------------------------ */

// Les contrôles sont explicites : powf/ln renverraient NaN ou ±inf,
// et on veut un message précis plutôt que “résultat non fini”.

fn f_ln(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x <= 0.0 {
        return Err(ErreurEval::Arithmetique(
            "ln : argument strictement positif requis".into(),
        ));
    }
    Ok(x.ln())
}

fn f_log10(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x <= 0.0 {
        return Err(ErreurEval::Arithmetique(
            "log : argument strictement positif requis".into(),
        ));
    }
    Ok(x.log10())
}

fn f_log2(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x <= 0.0 {
        return Err(ErreurEval::Arithmetique(
            "log2 : argument strictement positif requis".into(),
        ));
    }
    Ok(x.log2())
}

fn f_sqrt(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x < 0.0 {
        return Err(ErreurEval::Arithmetique("sqrt : argument négatif".into()));
    }
    Ok(x.sqrt())
}

fn f_inv(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x == 0.0 {
        return Err(ErreurEval::Arithmetique("division par zéro".into()));
    }
    Ok(1.0 / x)
}

/// 171! déborde déjà f64 (≈ 1.8e308) : au-delà de 170 on refuse net.
const FACT_MAX: u32 = 170;

/// Factorielle exacte : produit en BigInt, converti en f64 à la toute fin.
/// Domaine : entier, positif ou nul, ≤ 170.
fn f_fact(_etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurEval::Arithmetique(
            "fact : entier positif ou nul requis".into(),
        ));
    }
    if x > FACT_MAX as f64 {
        return Err(ErreurEval::Arithmetique(format!(
            "fact : argument > {FACT_MAX} (déborde f64)"
        )));
    }

    let n = x as u32;
    let mut produit = BigInt::one();
    for k in 2..=n {
        produit *= BigInt::from(k);
    }

    produit
        .to_f64()
        .ok_or_else(|| ErreurEval::Arithmetique("fact : conversion f64 impossible".into()))
}
