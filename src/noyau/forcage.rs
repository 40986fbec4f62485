// src/noyau/forcage.rs
//
// Le cœur du tour : réécrire le résultat affiché en une soustraction (ou
// une addition) dont la seconde opérande a été résolue à rebours depuis la
// valeur cible. Le spectateur lit "grand nombre moins petit nombre" ; il
// ne voit jamais que la différence a été choisie pour retomber sur la cible.

use super::format::format_nombre;

/// Construit l'expression truquée à partir du résultat courant (`source`)
/// et de la valeur à forcer (`cible`).
///
/// - `source` non finie : l'échec se propage tel quel ("NaN" ne
///   re-tokenise pas, le ré-affichage retombe donc sur NaN)
/// - delta = source - cible ; delta >= 0 donne "source-delta",
///   sinon "source+|delta|"
///
/// Garantie : pour une source finie positive, ré-évaluer le texte émis
/// canonicalise vers format_nombre(cible). La seconde opérande est toujours
/// affichée via format_nombre, donc jamais de '%' ni de parenthèses dans la
/// sortie.
pub fn expression_forcee(source: f64, cible: f64) -> String {
    if !source.is_finite() {
        return "NaN".to_string();
    }

    let delta = source - cible;
    if delta >= 0.0 {
        format!("{}-{}", format_nombre(source), format_nombre(delta))
    } else {
        format!("{}+{}", format_nombre(source), format_nombre(delta.abs()))
    }
}
