// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - * et / lient plus fort (précédence 2) que + et - (précédence 1)
// - les quatre opérateurs sont gauche-associatifs : à précédence égale,
//   l'opérateur déjà sur la pile sort AVANT d'empiler le nouveau (>=)
//
// NOTE (tolérance voulue, pas un bug):
// - ')' orpheline : on dépile jusqu'au vide, sans erreur
// - '(' jamais fermée : abandonnée en fin de parcours
// - opérande manquante à l'évaluation : vaut 0
// Une saisie en cours de frappe est presque toujours "malformée" ; la
// calculatrice doit l'encaisser au lieu de la rejeter.

use super::jetons::Jeton;

fn precedence(t: &Jeton) -> i32 {
    match t {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Division => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(2), Plus, Nombre(3), Fois, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Fois, Plus]
pub fn vers_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in jetons.iter().copied() {
        match tok {
            Jeton::Nombre(_) => out.push(tok),

            Jeton::ParG => ops.push(tok),

            Jeton::ParD => {
                // dépile jusqu'à '(' ; s'arrête sans bruit si la pile se vide
                while let Some(top) = ops.pop() {
                    if matches!(top, Jeton::ParG) {
                        break;
                    }
                    out.push(top);
                }
            }

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Division => {
                // dépile tant que le sommet est un opérateur de précédence >=
                // ('(' bloque la descente)
                while let Some(top) = ops.last() {
                    if !top.est_operateur() || precedence(top) < precedence(&tok) {
                        break;
                    }
                    out.push(ops.pop().unwrap());
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops ; une '(' restante est simplement ignorée
    while let Some(op) = ops.pop() {
        if !matches!(op, Jeton::ParG) {
            out.push(op);
        }
    }

    out
}

/// Évalue une RPN sur une pile de f64.
///
/// - opérateur binaire : dépile b (sommet) puis a ; l'ordre compte pour
///   a - b et a / b
/// - opérande manquante : vaut 0 (saisie partielle tolérée)
/// - division par exactement zéro : NaN, qui contamine la suite du calcul
/// - résultat final : fond de pile, ou NaN si la pile est vide
pub fn eval_rpn(rpn: &[Jeton]) -> f64 {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Jeton::Nombre(n) => pile.push(n),

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Division => {
                let b = pile.pop().unwrap_or(0.0);
                let a = pile.pop().unwrap_or(0.0);

                let r = match tok {
                    Jeton::Plus => a + b,
                    Jeton::Moins => a - b,
                    Jeton::Fois => a * b,
                    Jeton::Division => {
                        if b == 0.0 {
                            f64::NAN
                        } else {
                            a / b
                        }
                    }
                    _ => unreachable!(),
                };

                pile.push(r);
            }

            // vers_rpn n'émet jamais de parenthèses ; on les ignore si une
            // RPN artisanale en contient
            Jeton::ParG | Jeton::ParD => {}
        }
    }

    pile.first().copied().unwrap_or(f64::NAN)
}
