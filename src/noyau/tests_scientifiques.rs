//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les contrats du moteur sans faire chauffer la machine.
//! - budget temps sur les stress
//! - tailles bornées (profondeur, longueur)
//! - classes d’erreur vérifiées variante par variante (pas seulement is_err)
//!
//! Invariants tenus ici :
//! - le registre est fermé : aucun nom hors table ne s’évalue, quelle que soit la forme
//! - le mode d’angle n’affecte QUE les six fonctions trig
//! - une évaluation (réussie ou non) via eval_valeur laisse l’état strictement intact
//! - le formatage à 12 chiffres re-tokenise et redonne la valeur à 1e-9 relatif

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::etat::{EtatEval, ModeAngle};
use super::eval::{eval_expression, eval_valeur};
use super::format::formater;

fn deg() -> EtatEval {
    EtatEval::default()
}

fn rad() -> EtatEval {
    EtatEval {
        mode_angle: ModeAngle::Radians,
        ..EtatEval::default()
    }
}

fn eval_ok(expr: &str, etat: &EtatEval) -> f64 {
    eval_valeur(expr, etat).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, etat: &EtatEval, attendu: f64) {
    let v = eval_ok(expr, etat);
    let tol = 1e-9 * attendu.abs().max(1.0);
    assert!(
        (v - attendu).abs() <= tol,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

/// Budget global anti-gel (campagne scientifique).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Trig : modes et identités ------------------------ */

#[test]
fn sci_identites_trigonometriques() {
    for etat in [deg(), rad()] {
        for angle in ["10", "45", "0.5", "-3", "77.7"] {
            let expr = format!("sin({angle})^2+cos({angle})^2");
            assert_proche(&expr, &etat, 1.0);
        }
    }

    // tan = sin/cos loin des pôles
    assert_proche("tan(37)-sin(37)/cos(37)", &deg(), 0.0);
    assert_proche("tan(1.2)-sin(1.2)/cos(1.2)", &rad(), 0.0);
}

#[test]
fn sci_inverses_trig() {
    assert_proche("asin(sin(30))", &deg(), 30.0);
    assert_proche("acos(cos(120))", &deg(), 120.0);
    assert_proche("atan(tan(0.5))", &rad(), 0.5);

    // en degrés, la trig inverse rend des degrés
    assert_proche("asin(0.5)", &deg(), 30.0);
    assert_proche("acos(0)", &deg(), 90.0);
}

#[test]
fn sci_bascule_de_mode() {
    let mut etat = deg();
    assert_proche("sin(90)", &etat, 1.0);

    etat.basculer_mode();
    assert_eq!(etat.mode_angle, ModeAngle::Radians);
    assert_proche("sin(90)", &etat, 0.8939966636005579);

    etat.basculer_mode();
    assert_eq!(etat.mode_angle, ModeAngle::Degres);
    assert_proche("sin(90)", &etat, 1.0);
}

/* ------------------------ Registre fermé ------------------------ */

#[test]
fn sci_registre_ferme_balayage() {
    let interdits = [
        "import(1)",
        "os(1)",
        "sys(1)",
        "eval(1)",
        "exec(1)",
        "open(1)",
        "__import__(1)",
        "globals()",
        "locals()",
        "builtins",
        "x",
        "y",
        "foo(2)",
    ];
    for expr in interdits {
        match eval_valeur(expr, &deg()) {
            Err(ErreurEval::IdentifiantInconnu(_)) => {}
            autre => panic!("expr={expr:?} : attendu IdentifiantInconnu, obtenu {autre:?}"),
        }
    }
}

/* ------------------------ Domaines arithmétiques ------------------------ */

#[test]
fn sci_domaines_arithmetiques() {
    let hors_domaine = [
        "1/0",
        "0/0",
        "inv(0)",
        "sqrt(-4)",
        "ln(0)",
        "ln(-5)",
        "log(0)",
        "log2(-1)",
        "asin(2)",
        "asin(-1.001)",
        "acos(-2)",
        "fact(-1)",
        "fact(0.5)",
        "fact(171)",
        "10^1000",
        "fact(170)*10^160",
    ];
    for expr in hors_domaine {
        match eval_valeur(expr, &deg()) {
            Err(ErreurEval::Arithmetique(_)) => {}
            autre => panic!("expr={expr:?} : attendu Arithmetique, obtenu {autre:?}"),
        }
    }

    // bords du domaine acceptés
    assert_proche("fact(0)", &deg(), 1.0);
    assert_proche("asin(1)", &deg(), 90.0);
    assert_proche("asin(-1)", &deg(), -90.0);
    assert!(eval_ok("fact(170)", &deg()).is_finite());
}

#[test]
fn sci_factorielle_exacte() {
    assert_proche("fact(5)", &deg(), 120.0);
    assert_proche("fact(10)", &deg(), 3628800.0);

    // 20! tient exactement en f64 (44 bits significatifs)
    let v = eval_ok("fact(20)", &deg());
    assert_eq!(v, 2432902008176640000.0);
}

/* ------------------------ Valeurs connues ------------------------ */

#[test]
fn sci_valeurs_connues() {
    assert_proche("ln(e)", &deg(), 1.0);
    assert_proche("log10(1000)", &deg(), 3.0);
    assert_proche("log(1000)", &deg(), 3.0);
    assert_proche("exp(ln(7))", &deg(), 7.0);
    assert_proche("sqrt(2)^2", &deg(), 2.0);
    assert_proche("sin(30)", &deg(), 0.5);
    assert_proche("cos(pi)", &rad(), -1.0);
    assert_proche("pow10(log(5))", &deg(), 5.0);
    assert_proche("inv(8)", &deg(), 0.125);
    assert_proche("sqr(1.5)", &deg(), 2.25);
    assert_proche("abs(-2.5)-abs(2.5)", &deg(), 0.0);
    assert_proche("sinh(1)-(e-inv(e))/2", &deg(), 0.0);
    assert_proche("cosh(1)-(e+inv(e))/2", &deg(), 0.0);
    assert_proche("tanh(100)", &deg(), 1.0);
}

/* ------------------------ Isolation de l’état ------------------------ */

#[test]
fn sci_evaluation_pure_etat_intact() {
    let mut etat = rad();
    etat.memoire = 12.5;
    etat.deposer_reponse(-3.0);
    let avant = etat.clone();

    let echantillon = [
        "1+1",
        "sin(pi/2)",
        "1/0",
        "zz(3)",
        "(((",
        "fact(171)",
        "pow(2,10)",
    ];
    for expr in echantillon {
        let _ = eval_valeur(expr, &etat);
        assert_eq!(etat, avant, "expr={expr:?}");
    }
}

#[test]
fn sci_ans_formatee() {
    let mut etat = deg();
    assert!(etat.reponse_formatee().is_none());

    eval_expression("1/3", &mut etat).unwrap();
    assert_eq!(etat.reponse_formatee().as_deref(), Some("0.333333333333"));
}

/* ------------------------ Formatage : balayage ------------------------ */

#[test]
fn sci_format_aller_retour_balayage() {
    let etat = deg();

    let mut v = 1.2345678901234e-20;
    while v < 1e21 {
        for signe in [1.0, -1.0] {
            let x = signe * v;
            let texte = formater(x);
            let relu =
                eval_valeur(&texte, &etat).unwrap_or_else(|e| panic!("texte={texte:?} err={e}"));
            let ecart = ((relu - x) / x).abs();
            assert!(ecart <= 1e-9, "x={x:e} texte={texte} relu={relu:e}");
        }
        v *= 10.0;
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_profondeur_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 100 niveaux de parenthèses : accepté
    let imbrique = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_proche(&imbrique, &deg(), 1.0);
    budget(t0, max);

    // 200 niveaux : refus net (Syntaxe), jamais un débordement de pile
    let trop = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert!(matches!(
        eval_valeur(&trop, &deg()),
        Err(ErreurEval::Syntaxe(_))
    ));
    budget(t0, max);

    // cascade de moins unaires : même garde-fou
    let cascade = format!("{}5", "-".repeat(100));
    assert_proche(&cascade, &deg(), 5.0); // nombre pair de moins
    let trop_de_moins = format!("{}5", "-".repeat(300));
    assert!(matches!(
        eval_valeur(&trop_de_moins, &deg()),
        Err(ErreurEval::Syntaxe(_))
    ));
    budget(t0, max);
}

#[test]
fn sci_stress_longueur_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 4000 termes à plat : la boucle additive ne récure pas, la pile reste courte
    let mut expr = String::from("1");
    for _ in 0..3999 {
        expr.push_str("+1");
    }
    budget(t0, max);

    assert_proche(&expr, &deg(), 4000.0);
    budget(t0, max);
}
