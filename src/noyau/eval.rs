//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur
//!
//! Contrat unique : toute entrée retourne un f64, jamais une erreur, jamais
//! une panique. Les échecs (caractère interdit, saisie incomplète, division
//! par zéro, pile vide) se confondent volontairement en NaN : l'affichage
//! n'a pas besoin de les distinguer.

use super::jetons::tokenize;
use super::rpn::{eval_rpn, vers_rpn};

/// API publique : évalue une expression infixe et retourne sa valeur,
/// ou NaN si l'entrée est malformée.
pub fn evaluer_expression(expr: &str) -> f64 {
    let jetons = match tokenize(expr) {
        Ok(j) => j,
        Err(_) => return f64::NAN,
    };

    eval_rpn(&vers_rpn(&jetons))
}
