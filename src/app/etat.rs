//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le tampon de saisie, la ligne d'affichage et la valeur
//! forcée, et traduire chaque touche du pavé en transition d'état.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le noyau, le tampon repart
//!   en paramètre à chaque appel (le noyau reste sans état).
//! - La touche "-" ne soustrait jamais : c'est le déclencheur du tour.
//!   Elle réécrit le tampon via le forçage, et l'affichage est rafraîchi
//!   en re-passant le texte émis dans le pipeline normal.

use crate::noyau::{evaluer_expression, expression_forcee, format_nombre};

/// Valeur forcée au lancement (modifiable via le popup ⋮).
const FORCE_DEFAUT: f64 = 589375.0;

/// Touches du pavé (et leurs équivalents clavier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    Chiffre(char), // '0'..='9' et '.'
    Plus,
    Moins, // déclencheur caché du forçage
    Fois,
    Division,
    ParG,
    ParD,
    Egal,
    Effacer,   // C
    Supprimer, // DEL
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie ---
    pub entree: String,

    // --- sortie ---
    pub affichage: String,

    // --- le secret ---
    pub force: f64,

    // --- popup de configuration (bouton ⋮) ---
    pub popup_force: bool,
    pub saisie_force: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: "0".to_string(),
            force: FORCE_DEFAUT,
            popup_force: false,
            saisie_force: String::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches du pavé ------------------------ */

    pub fn touche(&mut self, t: Touche) {
        match t {
            Touche::Effacer => {
                self.entree.clear();
                self.affichage = "0".to_string();
                return;
            }

            Touche::Egal => {
                let r = evaluer_expression(&self.entree);
                if r.is_finite() {
                    // le résultat canonique remplace la saisie, prêt à enchaîner
                    let texte = format_nombre(r);
                    self.affichage = texte.clone();
                    self.entree = texte;
                } else {
                    self.affichage = "Error".to_string();
                    self.entree.clear();
                }
                return;
            }

            Touche::Moins => {
                // Le tour : X = résultat - force, puis le tampon devient
                // "résultat - X" (ou "+ |X|"). Saisie non évaluable : on ne
                // fait rien, le spectateur retape.
                let resultat = evaluer_expression(&self.entree);
                if !resultat.is_finite() {
                    return;
                }
                self.entree = expression_forcee(resultat, self.force);
                self.affichage = format_nombre(evaluer_expression(&self.entree));
                return;
            }

            Touche::Supprimer => {
                self.entree.pop();
            }
            Touche::Chiffre(c) => self.entree.push(c),
            Touche::Plus => self.entree.push('+'),
            Touche::Fois => self.entree.push('×'),
            Touche::Division => self.entree.push('/'),
            Touche::ParG => self.entree.push('('),
            Touche::ParD => self.entree.push(')'),
        }

        self.apercu();
    }

    /// Aperçu en direct après chaque frappe : résultat canonique si la
    /// saisie s'évalue, sinon écho du tampon brut ("0" à vide).
    fn apercu(&mut self) {
        let r = evaluer_expression(&self.entree);
        self.affichage = if r.is_finite() {
            format_nombre(r)
        } else if self.entree.is_empty() {
            "0".to_string()
        } else {
            self.entree.clone()
        };
    }

    /* ------------------------ Popup valeur forcée ------------------------ */

    pub fn ouvrir_popup_force(&mut self) {
        self.saisie_force = format_nombre(self.force);
        self.popup_force = true;
    }

    /// Valide la saisie du popup. Entrée non numérique (ou non finie) :
    /// ignorée, l'ancienne valeur reste en place.
    pub fn valider_force(&mut self) {
        if let Ok(v) = self.saisie_force.trim().parse::<f64>() {
            if v.is_finite() {
                self.force = v;
            }
        }
        self.popup_force = false;
    }

    pub fn fermer_popup_force(&mut self) {
        self.popup_force = false;
    }
}
