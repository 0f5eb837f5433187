// src/main.rs
//
// Calculatrice RPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// But:
// - NATIF : ligne de commande (clap) ; sans expression => interface eframe
// - WEB  (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Logs (natif) : RUST_LOG=debug affiche la forme postfixe de chaque évaluation.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod calcul;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::BufRead;
    use std::process::ExitCode;

    use clap::Parser;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::{calcul, noyau};

    #[derive(Parser)]
    #[command(
        name = "calculatrice-rpn",
        about = "Évalue des expressions arithmétiques (0-9 . + - * / % ^ ( ))"
    )]
    pub struct Cli {
        #[arg(help = "Expression à évaluer sans interface, ex: \"1+2*3\"")]
        pub expression: Option<String>,

        #[arg(long, help = "Lire une expression par ligne sur l’entrée standard")]
        pub stdin: bool,

        #[arg(long, help = "Afficher aussi la forme postfixe")]
        pub demarche: bool,
    }

    pub fn run(cli: Cli) -> ExitCode {
        if let Some(expression) = cli.expression.as_deref() {
            return if repondre(expression, cli.demarche) {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            };
        }

        if cli.stdin {
            return run_stdin_mode(cli.demarche);
        }

        match run_gui() {
            Ok(()) => ExitCode::from(0),
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(2)
            }
        }
    }

    /// Affiche la réponse d’une expression ; `false` si refusée.
    fn repondre(expression: &str, demarche: bool) -> bool {
        if demarche {
            return match calcul::calculer(expression) {
                Ok((valeur, d)) => {
                    println!("postfixe : {} (pile max {})", d.postfixe, d.profondeur_max);
                    println!("{}", noyau::format_resultat(valeur));
                    true
                }
                Err(refus) => {
                    println!("{refus}");
                    false
                }
            };
        }

        match calcul::repondre(expression) {
            Ok(corps) => {
                println!("{corps}");
                true
            }
            Err(corps) => {
                println!("{corps}");
                false
            }
        }
    }

    fn run_stdin_mode(demarche: bool) -> ExitCode {
        let mut tout_ok = true;

        for ligne in std::io::stdin().lock().lines() {
            let ligne = match ligne {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            };
            tout_ok &= repondre(&ligne, demarche);
        }

        if tout_ok {
            ExitCode::from(0)
        } else {
            ExitCode::from(1)
        }
    }

    fn run_gui() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([420.0, 620.0])
                .with_min_inner_size([360.0, 520.0]),
            ..Default::default()
        };

        log::info!("démarrage de l’interface");
        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();
    natif::run(natif::Cli::parse())
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
