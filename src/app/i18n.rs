use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

/// 顯示文字表
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub first_draw: &'static str,
    pub gives_to: &'static str,
    pub draw_next: &'static str,
    pub see_results: &'static str,
    pub results_title: &'static str,
    pub too_few_participants: &'static str,
    pub no_valid_draw: &'static str,
    pub confirm_new_draw: &'static str,
    pub confirm_restart: &'static str,
    pub draw_discarded: &'static str,
    pub saved_to: &'static str,
}

const FR: Messages = Messages {
    first_draw: "Premier tirage",
    gives_to: "Offre un cadeau à",
    draw_next: "Tirer le suivant",
    see_results: "Voir les résultats",
    results_title: "Résumé des attributions :",
    too_few_participants: "Il faut au moins 2 participants !",
    no_valid_draw: "Impossible de faire un tirage valide avec ces contraintes. Veuillez vérifier les couples.",
    confirm_new_draw: "Voulez-vous faire un nouveau tirage avec les mêmes participants ?",
    confirm_restart: "Voulez-vous recommencer le tirage ?",
    draw_discarded: "Tirage annulé.",
    saved_to: "Résultats enregistrés dans",
};

const EN: Messages = Messages {
    first_draw: "First draw",
    gives_to: "Gives a gift to",
    draw_next: "Draw next",
    see_results: "See results",
    results_title: "Assignment summary:",
    too_few_participants: "At least 2 participants are needed!",
    no_valid_draw: "No valid draw is possible with these constraints. Please check the couples.",
    confirm_new_draw: "Do you want a new draw with the same participants?",
    confirm_restart: "Do you want to restart the draw?",
    draw_discarded: "Draw discarded.",
    saved_to: "Results saved to",
};

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}
