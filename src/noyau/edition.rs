// src/noyau/edition.rs
//
// Opérations d’édition du tampon de saisie. Pures : &str -> String,
// aucun état, jamais d’échec (au pire le texte rendu sera refusé à
// l’évaluation, comme l’était l’entrée).
//
// Les trois opérations partagent le vocabulaire de la grammaire :
// mêmes opérateurs-frontières, mêmes constituants d’opérande
// (alphanumérique, '.', '_'), mêmes littéraux scientifiques. Ainsi
// une négation produit toujours un texte que la tokenisation accepte.

/// Après ces caractères, un '-' se lit comme moins unaire.
const POSITIONS_UNAIRES: &str = "+-*/^(,";

/// Frontières utilisées par l’effacement contextuel.
const FRONTIERES_OPERANDE: &str = "+-*/^(),";

/// Retire le dernier caractère ("" reste "").
pub fn retour_arriere(s: &str) -> String {
    let mut t = s.to_string();
    t.pop();
    t
}

/// Effacement contextuel : tronque APRÈS la dernière frontière
/// (l’opérande en cours de frappe disparaît, l’opérateur reste).
/// Sans frontière, le tampon est vidé.
pub fn effacer_operande(s: &str) -> String {
    match s
        .char_indices()
        .rev()
        .find(|(_, c)| FRONTIERES_OPERANDE.contains(*c))
    {
        Some((i, c)) => s[..i + c.len_utf8()].to_string(),
        None => String::new(),
    }
}

/// Négation du dernier opérande (touche ±) :
/// - tampon vide                  => "-"
/// - fin sur opérateur / '(' / ',' => on ouvre un moins unaire ("5+" -> "5+-")
/// - fin sur ')'                  => le groupe parenthésé équilibré est englobé,
///   nom de fonction collé compris ("sqrt(2)" -> "-(sqrt(2))")
/// - sinon                        => l’opérande terminal est englobé
///   ("5+3" -> "5+-(3)")
pub fn changer_signe(s: &str) -> String {
    let Some(dernier) = s.chars().next_back() else {
        return "-".to_string();
    };

    if POSITIONS_UNAIRES.contains(dernier) {
        return format!("{s}-");
    }

    let debut = debut_operande(s);
    format!("{}-({})", &s[..debut], &s[debut..])
}

/// Indice (octets) du début de l’opérande terminal.
fn debut_operande(s: &str) -> usize {
    // fin sur ')' : remonter à la '(' appariée, puis absorber un
    // éventuel nom de fonction collé juste devant
    if s.ends_with(')') {
        let mut solde = 0i32;
        for (i, c) in s.char_indices().rev() {
            match c {
                ')' => solde += 1,
                '(' => {
                    solde -= 1;
                    if solde == 0 {
                        return debut_identifiant(s, i);
                    }
                }
                _ => {}
            }
        }
        // parenthèses déséquilibrées : on englobe tout
        return 0;
    }

    debut_identifiant(s, s.len())
}

fn est_char_operande(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_'
}

/// Remonte depuis `fin` (octets) tant que le caractère est un constituant
/// d’opérande ; renvoie l’indice du premier caractère du span.
fn debut_identifiant(s: &str, fin: usize) -> usize {
    let mut debut = fin;
    for (i, c) in s[..fin].char_indices().rev() {
        if est_char_operande(c) {
            debut = i;
        } else {
            break;
        }
    }

    // Littéral scientifique à exposant signé ("1.5e-7") : la remontée butte
    // sur le signe ; on recolle mantisse + marqueur + signe + chiffres.
    if debut >= 2 && debut < fin {
        let octets = s.as_bytes();
        let signe = octets[debut - 1];
        let marqueur = octets[debut - 2];
        if (signe == b'+' || signe == b'-')
            && (marqueur == b'e' || marqueur == b'E')
            && s[debut..fin].bytes().all(|b| b.is_ascii_digit())
        {
            let m = debut_identifiant(s, debut - 2);
            if m < debut - 2 {
                return m;
            }
        }
    }

    debut
}
