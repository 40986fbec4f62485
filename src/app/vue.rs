// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile 4 colonnes, disposition classique d'une calculatrice
// - Clavier physique : chiffres/opérateurs tapent, Enter évalue,
//   Backspace efface le dernier caractère
// - Bouton ⋮ discret en haut à droite : popup de la valeur forcée
//   (à ne montrer à personne pendant le tour)
//
// Note :
// - La touche "-" du pavé passe par touche(Touche::Moins) comme les autres ;
//   c'est etat.rs qui sait qu'elle déclenche le forçage. La vue n'a aucun
//   chemin spécial, rien à voir ici.

use eframe::egui;

use super::etat::{AppCalc, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.clavier(ui);

        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_barre(ui);

        ui.add_space(4.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        self.ui_popup_force(ui.ctx().clone());
    }

    /* ------------------------ Clavier physique ------------------------ */

    fn clavier(&mut self, ui: &egui::Ui) {
        let evts = ui.input(|i| i.events.clone());
        for e in evts {
            match e {
                egui::Event::Text(texte) => {
                    // pas de frappe dans le tampon pendant la saisie du popup
                    if self.popup_force {
                        continue;
                    }
                    for c in texte.chars() {
                        if let Some(t) = touche_depuis_char(c) {
                            self.touche(t);
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => {
                    if !self.popup_force {
                        self.touche(Touche::Egal);
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => {
                    if !self.popup_force {
                        self.touche(Touche::Supprimer);
                    }
                }
                _ => {}
            }
        }
    }

    /* ------------------------ Barre du haut ------------------------ */

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let resp = ui.add_sized([28.0, 28.0], egui::Button::new("⋮"));
            if resp.clicked() {
                self.ouvrir_popup_force();
            }
        });
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(30.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let brut = if self.entree.is_empty() {
                        " "
                    } else {
                        self.entree.as_str()
                    };
                    ui.label(
                        egui::RichText::new(brut)
                            .monospace()
                            .size(13.0)
                            .weak(),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // disposition identique au pavé d'origine
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", Touche::Chiffre('7'));
                self.bouton_touche(ui, "8", Touche::Chiffre('8'));
                self.bouton_touche(ui, "9", Touche::Chiffre('9'));
                self.bouton_touche(ui, "/", Touche::Division);
                ui.end_row();

                self.bouton_touche(ui, "4", Touche::Chiffre('4'));
                self.bouton_touche(ui, "5", Touche::Chiffre('5'));
                self.bouton_touche(ui, "6", Touche::Chiffre('6'));
                self.bouton_touche(ui, "×", Touche::Fois);
                ui.end_row();

                self.bouton_touche(ui, "1", Touche::Chiffre('1'));
                self.bouton_touche(ui, "2", Touche::Chiffre('2'));
                self.bouton_touche(ui, "3", Touche::Chiffre('3'));
                self.bouton_touche(ui, "-", Touche::Moins);
                ui.end_row();

                self.bouton_touche(ui, "0", Touche::Chiffre('0'));
                self.bouton_touche(ui, ".", Touche::Chiffre('.'));
                self.bouton_touche(ui, "=", Touche::Egal);
                self.bouton_touche(ui, "+", Touche::Plus);
                ui.end_row();

                self.bouton_touche(ui, "C", Touche::Effacer);
                self.bouton_touche(ui, "DEL", Touche::Supprimer);
                self.bouton_touche(ui, "(", Touche::ParG);
                self.bouton_touche(ui, ")", Touche::ParD);
                ui.end_row();
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, t: Touche) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
        if resp.clicked() {
            self.touche(t);
        }
    }

    /* ------------------------ Popup valeur forcée ------------------------ */

    fn ui_popup_force(&mut self, ctx: egui::Context) {
        if !self.popup_force {
            return;
        }

        egui::Window::new("Valeur forcée")
            .collapsible(false)
            .resizable(false)
            .show(&ctx, |ui| {
                ui.label("Résultat à forcer :");
                ui.text_edit_singleline(&mut self.saisie_force);
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.valider_force();
                    }
                    if ui.button("Annuler").clicked() {
                        self.fermer_popup_force();
                    }
                });
            });
    }
}

/// Correspondance clavier -> touche du pavé. Le '-' physique passe lui
/// aussi par Touche::Moins : même comportement que le bouton.
fn touche_depuis_char(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        '+' => Some(Touche::Plus),
        '-' => Some(Touche::Moins),
        '*' | 'x' | '×' => Some(Touche::Fois),
        '/' => Some(Touche::Division),
        '(' => Some(Touche::ParG),
        ')' => Some(Touche::ParD),
        '=' => Some(Touche::Egal),
        _ => None,
    }
}
