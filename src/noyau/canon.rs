// src/noyau/canon.rs
//
// Canonicalisation du texte saisi, AVANT tokenisation :
// - "×"  -> "*"   et  "÷" -> "/"  (glyphes des pavés tactiles)
// - "**" -> "^"   (puissance héritée des habitudes clavier)
// - espaces de tête/queue retirés
//
// Les glyphes passent en premier : "××" doit devenir une puissance,
// pas survivre en "**".
//
// La fonction est idempotente : la repasser sur sa propre sortie ne change rien.
// C’est ce qui permet de ré-évaluer un tampon déjà normalisé (résultat ré-édité).

pub fn canon_texte(s: &str) -> String {
    s.replace('×', "*")
        .replace('÷', "/")
        .replace("**", "^")
        .trim()
        .to_string()
}
