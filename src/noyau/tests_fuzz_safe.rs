//! Tests fuzz safe : robustesse + déterminisme + compatibilité édition/grammaire.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe), budget temps global
//! - le générateur ne produit QUE des textes grammaticalement valides :
//!   une erreur Syntaxe ou IdentifiantInconnu sur expression générée est un bug
//! - les erreurs Arithmetique (division par zéro, non fini, domaine) sont normales
//! - invariant clé : eval_valeur ne modifie jamais l’état, succès ou échec
//! - invariant clé : la négation (±) d’un texte évaluable reste acceptée par la grammaire

use std::time::{Duration, Instant};

use super::edition::{changer_signe, effacer_operande, retour_arriere};
use super::erreur::ErreurEval;
use super::etat::{EtatEval, ModeAngle};
use super::eval::eval_valeur;
use super::format::formater;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions valides ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}", 1 + rng.pick(99)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => "0".to_string(),
        4 => "pi".to_string(),
        _ => "e".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(10) {
        0 | 1 => gen_nombre(rng),
        2 => format!("({})", gen_expr(rng, profondeur - 1)),
        3 => format!("-{}", gen_expr(rng, profondeur - 1)),
        4 => format!(
            "{}+{}",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!(
            "{}-{}",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        6 => format!(
            "{}*{}",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        7 => format!(
            "{}/{}",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        8 => format!("({})^{}", gen_expr(rng, profondeur - 1), rng.pick(4)),
        _ => {
            let fs = ["sin", "cos", "tan", "sqrt", "abs", "exp", "atan"];
            let f = fs[rng.pick(fs.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, profondeur - 1))
        }
    }
}

/// Soupe de caractères arbitraire (y compris glyphes π √ × ÷) pour l’édition.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const CHARSET: &[char] = &[
        '0', '1', '7', '9', '.', '+', '-', '*', '/', '^', '(', ')', ',', 'a', 's', 'i', 'n', 'e',
        'x', '_', 'π', '√', '×', '÷', ' ',
    ];
    (0..longueur)
        .map(|_| CHARSET[rng.pick(CHARSET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_sans_panique_etat_stable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut etat = EtatEval {
        memoire: 7.0,
        ..EtatEval::default()
    };
    etat.deposer_reponse(1.5);
    let reference = etat.clone();

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for tour in 0..300 {
        budget(t0, max);

        // on alterne les modes pour balayer les deux chemins trig
        etat.mode_angle = if tour % 2 == 0 {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        };
        let attendu = EtatEval {
            mode_angle: etat.mode_angle,
            ..reference.clone()
        };

        let expr = gen_expr(&mut rng, 5);
        match eval_valeur(&expr, &etat) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} => {v}");
                vus_ok += 1;
            }
            Err(ErreurEval::Arithmetique(_)) => vus_err += 1,
            Err(autre) => panic!("expression générée rejetée: {expr:?} => {autre:?}"),
        }
        assert_eq!(etat, attendu, "expr={expr:?}");
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme() {
    let etat = EtatEval::default();
    let mut traces = Vec::new();

    for _ in 0..2 {
        let mut rng = Rng::new(0xBADC0DE_u64);
        let mut trace = String::new();
        for _ in 0..100 {
            let expr = gen_expr(&mut rng, 4);
            let sortie = match eval_valeur(&expr, &etat) {
                Ok(v) => formater(v),
                Err(e) => format!("erreur: {e}"),
            };
            trace.push_str(&expr);
            trace.push_str(" => ");
            trace.push_str(&sortie);
            trace.push('\n');
        }
        traces.push(trace);
    }

    assert_eq!(traces[0], traces[1]);
}

#[test]
fn fuzz_safe_negation_compatible_grammaire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFACADE_u64);
    let etat = EtatEval::default();

    let mut negations_vues = 0usize;
    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        if eval_valeur(&expr, &etat).is_err() {
            continue;
        }

        // texte évaluable => sa négation doit rester dans la grammaire
        // (une erreur arithmétique reste possible : 0^-(2) etc.)
        let negue = changer_signe(&expr);
        match eval_valeur(&negue, &etat) {
            Ok(_) | Err(ErreurEval::Arithmetique(_)) => negations_vues += 1,
            Err(autre) => panic!("négation rejetée: {expr:?} -> {negue:?} => {autre:?}"),
        }
    }

    assert!(negations_vues > 50, "échantillon trop maigre: {negations_vues}");
}

#[test]
fn fuzz_safe_edition_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xFEED_u64);
    let etat = EtatEval::default();

    for _ in 0..400 {
        budget(t0, max);

        let longueur = rng.pick(24) as usize;
        let tampon = gen_soupe(&mut rng, longueur);

        // retour arrière : préfixe, un caractère de moins au plus
        let arriere = retour_arriere(&tampon);
        assert!(tampon.starts_with(&arriere));
        assert!(arriere.chars().count() + 1 >= tampon.chars().count());

        // effacement contextuel : préfixe, et s’arrête sur une frontière
        let efface = effacer_operande(&tampon);
        assert!(tampon.starts_with(&efface), "tampon={tampon:?}");
        if let Some(c) = efface.chars().next_back() {
            assert!("+-*/^(),".contains(c), "efface={efface:?}");
        }

        // négation : ne raccourcit jamais
        let negue = changer_signe(&tampon);
        assert!(negue.chars().count() > tampon.chars().count());

        // les sorties repassent par le pipeline sans panique (résultat libre)
        let _ = eval_valeur(&arriere, &etat);
        let _ = eval_valeur(&efface, &etat);
        let _ = eval_valeur(&negue, &etat);
    }
}
