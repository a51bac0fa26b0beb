// src/noyau/analyse.rs
//
// Descente récursive sur les jetons + évaluation f64 immédiate.
// -------------------------------------------------------------
// Grammaire :
//
//   expression := terme   (('+'|'-') terme)*
//   terme      := unaire  (('*'|'/') unaire)*
//   unaire     := ('-'|'+') unaire | puissance
//   puissance  := atome ['^' unaire]                      (droite-associatif)
//   atome      := nombre | nom | nom '(' expression (',' expression)* ')'
//               | '(' expression ')'
//
// Conséquences (figées par les tests) : -2^2 = -4 ; 2^-3 = 0.125 ;
// 2^3^2 = 512 ; 2*-3 = -6.
//
// Pas d’AST intermédiaire : chaque règle rend directement un f64.
// La profondeur de récursion est bornée (entrée profonde => erreur de
// syntaxe, jamais un débordement de pile).

use super::erreur::ErreurEval;
use super::etat::EtatEval;
use super::jetons::Tok;
use super::registre::{self, Def};

const PROFONDEUR_MAX: usize = 256;

/// Évalue une suite complète de jetons (erreur si un jeton reste après coup).
pub fn evaluer(jetons: &[Tok], etat: &EtatEval) -> Result<f64, ErreurEval> {
    let mut a = Analyseur {
        jetons,
        pos: 0,
        etat,
        profondeur: 0,
    };

    let v = a.expression()?;
    if let Some(t) = a.courant() {
        return Err(ErreurEval::Syntaxe(format!("jeton inattendu: '{t}'")));
    }
    Ok(v)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    etat: &'a EtatEval,
    profondeur: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    // Garde-fou commun aux deux règles récursives (expression / unaire) :
    // toute chaîne profonde (parenthèses, moins en cascade, tour de '^')
    // passe par l’une des deux.
    fn plonger(&mut self) -> Result<(), ErreurEval> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurEval::Syntaxe("expression trop imbriquée".into()));
        }
        Ok(())
    }

    fn remonter(&mut self) {
        self.profondeur -= 1;
    }

    fn expression(&mut self) -> Result<f64, ErreurEval> {
        self.plonger()?;
        let mut v = self.terme()?;
        loop {
            match self.courant() {
                Some(Tok::Plus) => {
                    self.pos += 1;
                    v += self.terme()?;
                }
                Some(Tok::Minus) => {
                    self.pos += 1;
                    v -= self.terme()?;
                }
                _ => break,
            }
        }
        self.remonter();
        Ok(v)
    }

    fn terme(&mut self) -> Result<f64, ErreurEval> {
        let mut v = self.unaire()?;
        loop {
            match self.courant() {
                Some(Tok::Star) => {
                    self.pos += 1;
                    v *= self.unaire()?;
                }
                Some(Tok::Slash) => {
                    self.pos += 1;
                    let d = self.unaire()?;
                    if d == 0.0 {
                        return Err(ErreurEval::Arithmetique("division par zéro".into()));
                    }
                    v /= d;
                }
                _ => break,
            }
        }
        Ok(v)
    }

    fn unaire(&mut self) -> Result<f64, ErreurEval> {
        self.plonger()?;
        let v = match self.courant() {
            Some(Tok::Minus) => {
                self.pos += 1;
                -self.unaire()?
            }
            Some(Tok::Plus) => {
                self.pos += 1;
                self.unaire()?
            }
            _ => self.puissance()?,
        };
        self.remonter();
        Ok(v)
    }

    fn puissance(&mut self) -> Result<f64, ErreurEval> {
        let base = self.atome()?;
        if let Some(Tok::Caret) = self.courant() {
            self.pos += 1;
            // l’exposant repasse par l’unaire : "2^-3" légal, "2^3^2" droite-associatif
            let exposant = self.unaire()?;
            return Ok(base.powf(exposant));
        }
        Ok(base)
    }

    fn atome(&mut self) -> Result<f64, ErreurEval> {
        match self.courant().cloned() {
            Some(Tok::Num(v)) => {
                self.pos += 1;
                Ok(v)
            }
            Some(Tok::LPar) => {
                self.pos += 1;
                let v = self.expression()?;
                self.attendre_rpar()?;
                Ok(v)
            }
            Some(Tok::Ident(nom)) => {
                self.pos += 1;
                self.reference(&nom)
            }
            Some(t) => Err(ErreurEval::Syntaxe(format!("jeton inattendu: '{t}'"))),
            None => Err(ErreurEval::Syntaxe("fin d’expression inattendue".into())),
        }
    }

    /// Résout un nom via le registre, puis applique la forme exigée :
    /// constante nue, ou appel `nom(args)` à l’arité exacte.
    fn reference(&mut self, nom: &str) -> Result<f64, ErreurEval> {
        let def = registre::chercher(nom).ok_or_else(|| {
            ErreurEval::IdentifiantInconnu(format!("identifiant inconnu: '{nom}'"))
        })?;

        match def {
            Def::Constante(v) => {
                // "pi(3)" : une constante ne s’appelle pas
                if let Some(Tok::LPar) = self.courant() {
                    return Err(ErreurEval::IdentifiantInconnu(format!(
                        "'{nom}' n’est pas une fonction"
                    )));
                }
                Ok(v)
            }
            Def::Unaire(f) => {
                let args = self.arguments(nom)?;
                match args.as_slice() {
                    [x] => f(self.etat, *x),
                    _ => Err(erreur_arite(nom, def.arite(), args.len())),
                }
            }
            Def::Binaire(f) => {
                let args = self.arguments(nom)?;
                match args.as_slice() {
                    [x, y] => f(*x, *y),
                    _ => Err(erreur_arite(nom, def.arite(), args.len())),
                }
            }
        }
    }

    /// Liste d’arguments obligatoirement parenthésée :
    /// '(' ')' vide, ou '(' expression (',' expression)* ')'.
    fn arguments(&mut self, nom: &str) -> Result<Vec<f64>, ErreurEval> {
        match self.courant() {
            Some(Tok::LPar) => self.pos += 1,
            _ => return Err(ErreurEval::Syntaxe(format!("'(' attendu après '{nom}'"))),
        }

        if let Some(Tok::RPar) = self.courant() {
            self.pos += 1;
            return Ok(Vec::new());
        }

        let mut args = vec![self.expression()?];
        while let Some(Tok::Virgule) = self.courant() {
            self.pos += 1;
            args.push(self.expression()?);
        }
        self.attendre_rpar()?;
        Ok(args)
    }

    fn attendre_rpar(&mut self) -> Result<(), ErreurEval> {
        match self.courant() {
            Some(Tok::RPar) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(ErreurEval::Syntaxe("parenthèse fermante manquante".into())),
        }
    }
}

fn erreur_arite(nom: &str, attendu: usize, recu: usize) -> ErreurEval {
    ErreurEval::IdentifiantInconnu(format!(
        "'{nom}' attend {attendu} argument(s), {recu} reçu(s)"
    ))
}
