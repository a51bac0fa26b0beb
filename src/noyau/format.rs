// src/noyau/format.rs
//
// Rendu décimal compact à 12 chiffres significatifs (style "%g") :
// - notation fixe si l’exposant décimal est dans [-4, 12)
// - notation scientifique sinon ("1e20", "2.5e-5")
// - zéros de queue (et point final) retirés, "-0" rendu "0"
//
// Propriété tenue par les tests : formater(x) ré-évalué redonne x
// à 1e-9 relatif près (le texte produit re-tokenise toujours).

pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

pub fn formater(x: f64) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let negatif = x < 0.0;
    let a = x.abs();

    // "{:.11e}" => mantisse de 12 chiffres + "e±n" (exposant déjà ajusté
    // si l’arrondi fait déborder la mantisse, ex. 9.99…e5 -> 1.00…e6)
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, a);
    let (mantisse, exp_txt) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exposant: i32 = match exp_txt.parse() {
        Ok(v) => v,
        Err(_) => return sci,
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();

    let corps = if (-4..CHIFFRES_SIGNIFICATIFS as i32).contains(&exposant) {
        fixe(&chiffres, exposant)
    } else {
        scientifique(&chiffres, exposant)
    };

    if negatif {
        format!("-{corps}")
    } else {
        corps
    }
}

/// Pose la virgule dans la suite des 12 chiffres significatifs.
/// `exposant` est la position décimale du premier chiffre (0 => unités).
fn fixe(chiffres: &str, exposant: i32) -> String {
    if exposant < 0 {
        let zeros = "0".repeat((-exposant - 1) as usize);
        let frac = format!("{zeros}{chiffres}");
        let frac = frac.trim_end_matches('0');
        // frac ne peut pas être vide : le premier chiffre significatif est non nul
        return format!("0.{frac}");
    }

    let coupe = exposant as usize + 1;
    if coupe >= chiffres.len() {
        let mut s = chiffres.to_string();
        s.push_str(&"0".repeat(coupe - chiffres.len()));
        return s;
    }

    let (entier, frac) = chiffres.split_at(coupe);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        entier.to_string()
    } else {
        format!("{entier}.{frac}")
    }
}

fn scientifique(chiffres: &str, exposant: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let reste = reste.trim_end_matches('0');
    if reste.is_empty() {
        format!("{tete}e{exposant}")
    } else {
        format!("{tete}.{reste}e{exposant}")
    }
}
