// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Liste des membres éditable : nombre = 3 champs, opérateur = 4 choix
// - Boutons + - * / : ajoutent l'opérateur ET son opérande neutre
// - Saisie texte optionnelle : Enter lit la ligne puis évalue
//
// Note :
// - Les champs sont des magnitudes (u32) : le signe d'un terme passe par
//   l'opérateur qui le précède, jamais par le nombre lui-même.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{calculer, format_jetons, Jeton, NombreMixte, Op};

/// Borne haute des champs : une magnitude au-delà ne tient pas dans un i32.
const SAISIE_MAX: u32 = i32::MAX as u32;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice mixte");
                ui.add_space(6.0);

                self.ui_membres(ui);

                ui.add_space(8.0);
                self.ui_boutons(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);
            });
    }

    fn ui_membres(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        if self.membres.is_empty() {
            ui.monospace("(vide)");
            return;
        }

        // suppression différée : on ne retire pas pendant l'itération
        let mut a_supprimer: Option<usize> = None;

        egui::Grid::new("membres_expression")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, membre) in self.membres.iter_mut().enumerate() {
                    ui.push_id(i, |ui| match membre {
                        Jeton::Nombre(m) => Self::champ_nombre(ui, m),
                        Jeton::Operateur(op) => Self::choix_operateur(ui, op),
                    });

                    let suppr = ui
                        .add_sized([56.0, 24.0], egui::Button::new("Suppr"))
                        .on_hover_text("Retire ce membre");
                    if suppr.clicked() {
                        a_supprimer = Some(i);
                    }
                    ui.end_row();
                }
            });

        if let Some(i) = a_supprimer {
            self.supprimer(i);
        }
    }

    fn champ_nombre(ui: &mut egui::Ui, m: &mut NombreMixte) {
        let editable = !m.est_lecture_seule();

        ui.horizontal(|ui| {
            ui.add_enabled(
                editable,
                egui::DragValue::new(&mut m.entier)
                    .speed(1)
                    .range(0..=SAISIE_MAX),
            );
            ui.add_enabled(
                editable,
                egui::DragValue::new(&mut m.numerateur)
                    .speed(1)
                    .range(0..=SAISIE_MAX),
            );
            ui.label("/");
            // 0 reste saisissable : l'évaluation le refusera avec un message clair
            ui.add_enabled(
                editable,
                egui::DragValue::new(&mut m.denominateur)
                    .speed(1)
                    .range(0..=SAISIE_MAX),
            );
        });
    }

    fn choix_operateur(ui: &mut egui::Ui, op: &mut Op) {
        ui.horizontal(|ui| {
            for candidat in Op::TOUS {
                ui.selectable_value(op, candidat, candidat.symbole().to_string());
            }
        });
    }

    fn ui_boutons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for op in Op::TOUS {
                let tip = if op.est_multiplicatif() {
                    "Ajoute l'opération et un opérande égal à 1"
                } else {
                    "Ajoute l'opération et un opérande égal à 0"
                };
                let resp = ui
                    .add_sized([46.0, 28.0], egui::Button::new(op.symbole().to_string()))
                    .on_hover_text(tip);
                if resp.clicked() {
                    self.ajouter_operation(op);
                }
            }

            ui.separator();

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }

            let ac = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale");
            if ac.clicked() {
                self.reset_total();
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Saisie :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 5 3/4 - 6 2/3, 2 * 3 + 1, 7/2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter lit la saisie puis évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter && self.importer_entree() {
            self.eval_via_noyau();
        }

        ui.horizontal(|ui| {
            let lire = ui
                .add_sized([56.0, 30.0], egui::Button::new("Lire"))
                .on_hover_text("Remplace l'expression par la saisie");
            if lire.clicked() {
                self.importer_entree();
            }

            let c = ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement la saisie");
            if c.clicked() {
                self.clear_entree();
            }
        });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Texte :");
        Self::champ_monospace(ui, "texte_out", &format_jetons(&self.membres), 1);

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat.to_string(), 1);

        // entier | numérateur / dénominateur, signe sur une seule des deux parties
        let r = &self.resultat;
        ui.monospace(format!(
            "{} | {} / {}",
            r.entier_signe(),
            r.numerateur_signe(),
            r.denominateur
        ));

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Évalue via le noyau : erreur OU résultat est déposé dans l'état
    /// par `Collaborateur` (voir etat.rs).
    fn eval_via_noyau(&mut self) {
        // l'erreur éventuelle est déjà dans self.erreur
        let _ = calculer(self);
        self.focus_entree = true;
    }
}
