// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : frappe libre dans le champ, Enter évalue
// - Tactile : pavé 8 colonnes, focus redonné après clic (focus_entree)
//
// Notes :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Backspace n’est PAS intercepté : le TextEdit le gère déjà, et les
//   touches DEL / ← / C passent par noyau::edition (sinon double effacement)
// - Les boutons insèrent du texte brut : la tokenisation tolère tout
//   collage ("2" puis "pi" donne "2pi", que l’évaluation refusera,
//   comme si l’utilisateur l’avait tapé)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    /// `maintenant` est l’horloge egui en secondes (sert au délai d’erreur).
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui, maintenant);

                ui.add_space(8.0);

                self.ui_pave(ui, maintenant);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Barre de statut : mode d’angle (cliquable) + registre mémoire
        ui.horizontal(|ui| {
            let mode = ui
                .add_sized(
                    [56.0, 24.0],
                    egui::Button::new(self.etat.mode_angle.etiquette()),
                )
                .on_hover_text("Unité des angles : sin, cos, tan et leurs inverses");
            if mode.clicked() {
                self.basculer_mode();
            }

            ui.separator();
            ui.label(format!("M : {}", self.etat.memoire_rappel()));
        });

        ui.add_space(6.0);

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1+2)^10, sin(90), pow(2,10)")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / mémoire / DEL / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Une frappe clavier dissipe la bannière (sinon le délai viderait
        // un tampon que l’utilisateur vient de corriger)
        if resp.changed() {
            self.dissiper_erreur();
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l’utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.appui_egal(maintenant);
        }

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_scientifique")
            .num_columns(8)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "MC", "Efface le registre mémoire", Action::MemoireEffacer, maintenant);
                self.bouton_action(ui, "MR", "Insère le registre mémoire", Action::MemoireRappel, maintenant);
                self.bouton_action(ui, "M+", "Ajoute l’entrée au registre (Ans intact)", Action::MemoireAjouter, maintenant);
                self.bouton_action(ui, "M-", "Retranche l’entrée du registre (Ans intact)", Action::MemoireSoustraire, maintenant);
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::RetourArriere, maintenant);
                self.bouton_action(ui, "AC", "Vide l’écran (mémoire, Ans et mode conservés)", Action::EffacerTout, maintenant);
                ui.end_row();

                self.bouton_insert(ui, "sin", "sin(");
                self.bouton_insert(ui, "cos", "cos(");
                self.bouton_insert(ui, "tan", "tan(");
                self.bouton_insert(ui, "ln", "ln(");
                self.bouton_insert(ui, "log", "log(");
                self.bouton_insert(ui, "log2", "log2(");
                self.bouton_insert(ui, "sqr", "sqr(");
                self.bouton_insert(ui, "sqrt", "sqrt(");
                ui.end_row();

                self.bouton_insert(ui, "asin", "asin(");
                self.bouton_insert(ui, "acos", "acos(");
                self.bouton_insert(ui, "atan", "atan(");
                self.bouton_insert(ui, "exp", "exp(");
                self.bouton_insert(ui, "10^x", "pow10(");
                self.bouton_insert(ui, "x^y", "pow(");
                self.bouton_insert(ui, "1/x", "inv(");
                self.bouton_insert(ui, "n!", "fact(");
                ui.end_row();

                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "/", "/");
                self.bouton_insert(ui, "pi", "pi");
                self.bouton_insert(ui, "e", "e");
                self.bouton_insert(ui, "%", "/100");
                self.bouton_action(ui, "+/-", "Négation du dernier opérande", Action::ChangerSigne, maintenant);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "*", "*");
                self.bouton_insert(ui, "sinh", "sinh(");
                self.bouton_insert(ui, "cosh", "cosh(");
                self.bouton_insert(ui, "tanh", "tanh(");
                self.bouton_insert(ui, "^", "^");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "-", "-");
                self.bouton_action(ui, "←", "Retour arrière", Action::RetourArriere, maintenant);
                self.bouton_action(ui, "C", "Efface l’opérande en cours", Action::EffacerOperande, maintenant);
                self.bouton_action(ui, "Ans", "Insère la dernière réponse", Action::InsererReponse, maintenant);
                self.bouton_action(ui, "=", "Évalue et dépose Ans", Action::Egal, maintenant);
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, "00", "00");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "+", "+");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action, maintenant: f64) {
        let resp = ui
            .add_sized([44.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);
        if !resp.clicked() {
            return;
        }

        match action {
            Action::Egal => self.appui_egal(maintenant),
            Action::RetourArriere => self.retour_arriere(),
            Action::EffacerOperande => self.effacer_operande(),
            Action::EffacerTout => self.effacer_tout(),
            Action::ChangerSigne => self.changer_signe(),
            Action::MemoireEffacer => self.memoire_effacer(),
            Action::MemoireRappel => self.memoire_rappel(),
            Action::MemoireAjouter => self.memoire_ajouter(maintenant),
            Action::MemoireSoustraire => self.memoire_soustraire(maintenant),
            Action::InsererReponse => self.inserer_reponse(),
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str) {
        let resp = ui.add_sized([44.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(texte);
        }
    }
}

/// Actions du pavé qui ne sont pas une simple insertion de texte.
#[derive(Clone, Copy, Debug)]
enum Action {
    Egal,
    RetourArriere,
    EffacerOperande,
    EffacerTout,
    ChangerSigne,
    MemoireEffacer,
    MemoireRappel,
    MemoireAjouter,
    MemoireSoustraire,
    InsererReponse,
}
