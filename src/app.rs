// src/app.rs
//
// Calculatrice scientifique : module App (racine)
// -----------------------------------------------
//
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion de Enter est faite dans vue.rs (au bon endroit: quand le champ a le focus).
// - L’horloge egui (ctx.input(|i| i.time)) pilote le délai d’erreur, en secondes,
//   disponible à l’identique en natif et en wasm.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Bannière d’erreur : remise à zéro automatique à l’échéance.
        // Tant qu’elle est affichée, on redemande une trame pour que le
        // délai expire même sans événement souris/clavier.
        self.tic(maintenant);
        if self.erreur_depuis.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = vider l’écran (comme bouton "AC").
        //
        // On NE gère PAS Enter ici:
        // - sur web/mobile, clavier incertain
        // - risque de double déclenchement
        // - la vue le fait déjà avec resp.has_focus()
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer_tout(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant); // méthode publique (dans vue.rs)
        });
    }
}
