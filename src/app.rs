// src/app.rs
//
// Calculatrice forcée — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La frappe clavier (chiffres, Enter, Backspace) est gérée dans vue.rs.
// - Ici, seul le raccourci global ESC, équivalent du bouton "C".

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = tout effacer (comme la touche "C"), sauf popup ouvert
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.popup_force {
                self.fermer_popup_force();
            } else {
                self.touche(Touche::Effacer);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
