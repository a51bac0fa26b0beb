// src/noyau/trig.rs
//
// Trigonométrie sensible au mode d’angle.
//
// Règle (et rien d’autre) :
// - sin / cos / tan   : l’ARGUMENT est converti vers les radians si le mode est Degrés.
// - asin / acos / atan : le calcul se fait en radians, le RÉSULTAT est reconverti
//   vers les degrés si le mode est Degrés.
// - sinh / cosh / tanh et tout le reste du registre IGNORENT le mode.

use super::erreur::ErreurEval;
use super::etat::{EtatEval, ModeAngle};

fn vers_radians(etat: &EtatEval, x: f64) -> f64 {
    match etat.mode_angle {
        ModeAngle::Degres => x.to_radians(),
        ModeAngle::Radians => x,
    }
}

fn depuis_radians(etat: &EtatEval, x: f64) -> f64 {
    match etat.mode_angle {
        ModeAngle::Degres => x.to_degrees(),
        ModeAngle::Radians => x,
    }
}

/* ------------------------ Trig directe ------------------------ */

pub fn sin_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(vers_radians(etat, x).sin())
}

pub fn cos_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(vers_radians(etat, x).cos())
}

pub fn tan_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(vers_radians(etat, x).tan())
}

/* ------------------------ Trig inverse ------------------------ */

pub fn asin_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurEval::Arithmetique(
            "asin : argument hors de [-1, 1]".into(),
        ));
    }
    Ok(depuis_radians(etat, x.asin()))
}

pub fn acos_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurEval::Arithmetique(
            "acos : argument hors de [-1, 1]".into(),
        ));
    }
    Ok(depuis_radians(etat, x.acos()))
}

pub fn atan_mode(etat: &EtatEval, x: f64) -> Result<f64, ErreurEval> {
    Ok(depuis_radians(etat, x.atan()))
}
