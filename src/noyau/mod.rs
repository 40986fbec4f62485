//! Noyau de calcul (IEEE-754 f64, quatre opérations)
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (normalisation ×/x, désucrage du %)
//! - rpn.rs     : shunting-yard + évaluation postfixe
//! - format.rs  : canonicalisation f64 -> texte ré-analysable
//! - eval.rs    : pipeline complet (texte -> valeur, NaN si malformé)
//! - forcage.rs : réécriture de l'expression vers la valeur cible
//!
//! Le noyau est pur : aucun état entre deux appels, aucune E/S. Le tampon
//! de saisie vit dans l'UI et repasse en paramètre à chaque appel.

pub mod eval;
pub mod forcage;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::evaluer_expression;
pub use forcage::expression_forcee;
pub use format::format_nombre;
