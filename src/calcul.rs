// src/calcul.rs
//
// Couche “appelant” : filtre l’entrée, appelle le noyau, rend le résultat.
// Partagée par l’interface (app/vue.rs) et la ligne de commande (main.rs).
//
// Contrats :
// - entrée vide / blanche            => SyntaxError
// - caractère hors 0-9 . + - * / ^ % ( ) => SyntaxError (espaces compris)
// - erreurs du noyau                 => SyntaxError / RuntimeError
// - faute inattendue du noyau        => UnknownError (jamais de crash)

use std::fmt;
use std::panic;

use crate::noyau::{
    eval_avec_demarche, eval_expression, format_resultat, DemarcheNoyau, ErreurEvaluation,
    GenreErreur,
};

const MSG_ENTREE_VIDE: &str = "Cannot evaluate empty expression.";
const MSG_CARACTERE_INVALIDE: &str = "Expression contains invalid character.";

/// Refus rendu à l’utilisateur, préfixé selon sa catégorie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refus {
    Syntaxe(String),
    Execution(String),
    Inconnue(String),
}

impl fmt::Display for Refus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refus::Syntaxe(m) => write!(f, "SyntaxError: {m}"),
            Refus::Execution(m) => write!(f, "RuntimeError: {m}"),
            Refus::Inconnue(m) => write!(f, "UnknownError: {m}"),
        }
    }
}

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '%' | '(' | ')')
}

/// Filtre puis évalue une expression, avec la démarche.
pub fn calculer(expression: &str) -> Result<(f64, DemarcheNoyau), Refus> {
    filtrer(expression)?;
    proteger(expression, eval_avec_demarche)
}

/// Filtre puis évalue une expression (valeur seule).
pub fn evaluer(expression: &str) -> Result<f64, Refus> {
    filtrer(expression)?;
    proteger(expression, eval_expression)
}

/// Corps de réponse : `Ok(nombre formaté)` ou `Err(refus préfixé)`.
pub fn repondre(expression: &str) -> Result<String, String> {
    evaluer(expression)
        .map(format_resultat)
        .map_err(|refus| refus.to_string())
}

fn filtrer(expression: &str) -> Result<(), Refus> {
    if expression.trim().is_empty() {
        return Err(Refus::Syntaxe(MSG_ENTREE_VIDE.into()));
    }
    if !expression.chars().all(caractere_autorise) {
        log::debug!("caractère refusé dans {expression:?}");
        return Err(Refus::Syntaxe(MSG_CARACTERE_INVALIDE.into()));
    }
    Ok(())
}

/// Appelle le noyau ; une panique (qui ne devrait pas arriver) devient UnknownError.
fn proteger<T>(
    expression: &str,
    noyau: impl FnOnce(&str) -> Result<T, ErreurEvaluation> + panic::UnwindSafe,
) -> Result<T, Refus> {
    let issue = panic::catch_unwind(|| noyau(expression)).map_err(|charge| {
        let msg = message_de_panique(charge.as_ref());
        log::error!("faute du noyau sur {expression:?} : {msg}");
        Refus::Inconnue(msg)
    })?;

    issue.map_err(|e| {
        log::debug!("refus pour {expression:?} : {e}");
        if let ErreurEvaluation::NombreMalForme { texte } = &e {
            log::debug!("nombre mal formé : {texte:?}");
        }
        match e.genre() {
            GenreErreur::Syntaxe => Refus::Syntaxe(e.to_string()),
            GenreErreur::Arithmetique => Refus::Execution(e.to_string()),
        }
    })
}

fn message_de_panique(charge: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = charge.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = charge.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected failure".to_string()
    }
}
