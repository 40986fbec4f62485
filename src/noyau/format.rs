// src/noyau/format.rs
//
// Canonicalisation d'un f64 en texte.
// Contrainte porteuse : la forme affichée doit re-passer par le tokenizer
// et redonner la même valeur (aller-retour exact sur les entiers et les
// fractions à ≤ 6 décimales). Le forçage en dépend : son expression
// réécrite est re-lue telle quelle par le pipeline.

/// Seuil sous lequel une valeur est lue comme un zéro d'arrondi
/// (poussière flottante issue d'une soustraction ou d'une division).
const EPSILON_AFFICHAGE: f64 = 1e-6;

/// Forme canonique d'un f64 :
/// - non fini -> "NaN"
/// - |v| < 1e-6 -> "0" (absorbe aussi -0)
/// - entier -> sans partie fractionnaire
/// - sinon -> arrondi à 6 décimales, re-parse pour faire tomber les zéros
///   finaux, puis affichage
pub fn format_nombre(v: f64) -> String {
    if !v.is_finite() {
        return "NaN".to_string();
    }
    if v.abs() < EPSILON_AFFICHAGE {
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{v}");
    }

    let arrondi: f64 = format!("{v:.6}").parse().unwrap_or(v);
    format!("{arrondi}")
}
