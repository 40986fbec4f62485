//! Tests de propriétés (campagne) : les invariants qui portent le tour.
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - L'aller-retour format -> evaluer ne vaut que pour les valeurs
//!   positives : un littéral négatif s'affiche "-x", et la grammaire refuse
//!   une expression qui COMMENCE par un opérateur. C'est voulu (même règle
//!   que pour "+5") ; on le teste, on ne le "répare" pas.
//! - Les tolérances du convertisseur RPN (parenthèses orphelines, opérande
//!   manquante valant 0) sont un contrat de saisie au vol, testé dans
//!   eval.rs ; ici on ne couvre que les entrées bien formées.

use super::{evaluer_expression, expression_forcee, format_nombre};

fn assert_proche(v: f64, attendu: f64, contexte: &str) {
    assert!(
        (v - attendu).abs() < 1e-6,
        "{contexte}: obtenu {v}, attendu {attendu}"
    );
}

/* ------------------------ Canonicalisation ------------------------ */

#[test]
fn prop_aller_retour_canonique() {
    // valeurs positives représentables en ≤ 6 décimales
    for v in [
        0.5,
        1.0,
        42.0,
        100.0,
        0.000001,
        3.141592,
        589375.0,
        200.5,
        123456.789012,
        7000000.0,
    ] {
        let relu = evaluer_expression(&format_nombre(v));
        assert_proche(relu, v, &format!("aller-retour v={v}"));
    }
}

#[test]
fn prop_petite_magnitude_ecrasee_en_zero() {
    assert_eq!(format_nombre(0.0000001), "0");
    assert_eq!(format_nombre(1e-9), "0");
    assert_eq!(format_nombre(-1e-7), "0");
    assert_eq!(format_nombre(0.0), "0");
    assert_eq!(format_nombre(-0.0), "0");
}

#[test]
fn prop_format_idempotent() {
    for v in [
        0.1 + 0.2, // 0.30000000000000004 -> "0.3"
        1.0 / 3.0,
        2.0f64.sqrt(),
        -17.25,
        1e-7,
        999999.999999,
        4.0,
    ] {
        let une_fois = format_nombre(v);
        let refait: f64 = une_fois.parse().unwrap_or(f64::NAN);
        assert_eq!(
            format_nombre(refait),
            une_fois,
            "idempotence cassée pour v={v}"
        );
    }
}

#[test]
fn prop_format_entiers_sans_fraction() {
    assert_eq!(format_nombre(100.0), "100");
    assert_eq!(format_nombre(-42.0), "-42");
    assert_eq!(format_nombre(589375.0), "589375");
}

#[test]
fn prop_format_non_fini() {
    assert_eq!(format_nombre(f64::NAN), "NaN");
    assert_eq!(format_nombre(f64::INFINITY), "NaN");
    assert_eq!(format_nombre(f64::NEG_INFINITY), "NaN");
}

#[test]
fn prop_poussiere_flottante_absorbee() {
    // 0.1+0.2 vaut 0.30000000000000004 en binaire ; l'affichage canonique
    // retombe sur "0.3" et l'aller-retour reste stable
    let v = evaluer_expression("0.1+0.2");
    assert_eq!(format_nombre(v), "0.3");
}

/* ------------------------ Grammaire ------------------------ */

#[test]
fn prop_litteral_negatif_refuse_en_tete() {
    // conséquence assumée : une valeur négative formatée ne re-passe pas
    // par la grammaire (opérateur en tête, comme "+5")
    assert!(evaluer_expression("-5").is_nan());
    assert!(evaluer_expression(&format_nombre(-5.0)).is_nan());
}

#[test]
fn prop_pourcent_jamais_seul() {
    // un % isolé est ignoré ; il ne rend pas l'entrée invalide pour autant
    assert_proche(evaluer_expression("5%%"), 0.05, "5%%");
}

/* ------------------------ Forçage ------------------------ */

#[test]
fn prop_forcage_canonicalise_vers_la_cible() {
    for (source, cible) in [
        (100.0, 40.0),
        (40.0, 100.0),
        (1.0, 589375.0),
        (589375.0, 589375.0),
        (0.5, 0.25),
        (123456.0, -17.0),
        (2.0 / 7.0, 3.5),
    ] {
        let expr = expression_forcee(source, cible);
        let relu = evaluer_expression(&expr);
        assert_eq!(
            format_nombre(relu),
            format_nombre(cible),
            "source={source} cible={cible} expr={expr:?}"
        );
    }
}

#[test]
fn prop_forcage_premier_operande_est_la_source() {
    // le spectateur doit reconnaître "son" résultat à gauche
    let expr = expression_forcee(200.5, 33.0);
    assert!(expr.starts_with("200.5"), "expr={expr:?}");

    let expr = expression_forcee(100.0, 40.0);
    assert!(expr.starts_with("100"), "expr={expr:?}");
}

#[test]
fn prop_forcage_un_seul_operateur_visible() {
    // forme "<A><op><B>" stricte : un seul '+' ou '-', rien d'autre
    for (source, cible) in [(100.0, 40.0), (40.0, 100.0), (7.5, 2.25)] {
        let expr = expression_forcee(source, cible);
        let nb_ops = expr.matches(['+', '-']).count();
        assert_eq!(nb_ops, 1, "expr={expr:?}");
    }
}
